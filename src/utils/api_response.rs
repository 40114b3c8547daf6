use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Envelope used for error bodies. Successful responses carry the bare resource.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub title: String,   // validator code, e.g. "is_required"
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn new(code: &str, message: &str, data: Option<T>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            data,
        }
    }
}

pub struct ApiResponseResult<T>(pub StatusCode, pub ApiResponse<T>);

impl<T> IntoResponse for ApiResponseResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
        (StatusCode::OK, Json(data))
    }

    pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
        (StatusCode::CREATED, Json(data))
    }

    // Deleted graphs are never serialized back
    pub fn no_content() -> StatusCode {
        StatusCode::NO_CONTENT
    }

    pub fn error<T: Serialize>(
        status_code: StatusCode,
        code: &str,
        message: &str,
    ) -> ApiResponseResult<T> {
        ApiResponseResult(status_code, ApiResponse::new(code, message, None))
    }

    pub fn fail_with_data<T: Serialize>(
        status_code: StatusCode,
        code: &str,
        message: &str,
        data: T,
    ) -> ApiResponseResult<T> {
        ApiResponseResult(status_code, ApiResponse::new(code, message, Some(data)))
    }
}
