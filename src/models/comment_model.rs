use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::comment;

/// Body of comment writes. Any `articleId` sent by the client is ignored:
/// the article comes from the path on create and is immutable afterwards.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author_name: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub body: String,
    pub author_name: String,
    pub article_id: i64,
}

impl From<comment::Model> for CommentResponse {
    fn from(model: comment::Model) -> Self {
        Self {
            id: model.id,
            body: model.body,
            author_name: model.author_name,
            article_id: model.article_id,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFilterParams {
    pub author_name: Option<String>,
}
