use std::borrow::Cow;

use validator::ValidationError;

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("is_required");
        error.message = Some(Cow::from("This field is required"));
        Err(error)
    } else {
        Ok(())
    }
}
