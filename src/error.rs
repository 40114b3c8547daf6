use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::utils::api_response::ResponseBuilder;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        // Row vanished between the lookup and the write
        if matches!(err, DbErr::RecordNotUpdated) {
            return AppError::NotFound;
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::Conflict(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::NotFound,
            _ => AppError::Database(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Conflict(_) => ResponseBuilder::error::<()>(
                StatusCode::CONFLICT,
                "RESOURCE_CONFLICT",
                &self.to_string(),
            )
            .into_response(),
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
                ResponseBuilder::error::<()>(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Internal server error",
                )
                .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
