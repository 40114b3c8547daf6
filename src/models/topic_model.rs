use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::topic;
use crate::utils::validator_utils::validate_required;

#[derive(Deserialize, Validate)]
pub struct TopicRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub name: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct TopicResponse {
    pub id: i64,
    pub name: String,
}

impl From<topic::Model> for TopicResponse {
    fn from(model: topic::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
