use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::{Validate, ValidationErrors};

use crate::utils::api_response::{ResponseBuilder, ValidationErrorDetail};

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| {
                let message = format!("Invalid JSON body: {}", err.body_text());
                ResponseBuilder::error::<()>(err.status(), "INVALID_JSON", &message)
                    .into_response()
            })?;

        if let Err(e) = payload.validate() {
            return Err(ResponseBuilder::fail_with_data(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed",
                map_validation_errors(&e),
            )
            .into_response());
        }

        Ok(ValidatedJson(payload))
    }
}

fn map_validation_errors(errors: &ValidationErrors) -> Vec<ValidationErrorDetail> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, kinds)| {
            kinds.iter().map(move |err| ValidationErrorDetail {
                field: field.to_string(),
                title: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect()
}
