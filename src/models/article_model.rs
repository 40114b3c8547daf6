use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{article, topic};
use crate::models::topic_model::TopicResponse;

/// Body of `POST /articles` and `PUT /articles/{id}`. A client-supplied `id` is ignored.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author_name: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_name: String,
    pub topics: Vec<TopicResponse>,
}

impl ArticleResponse {
    pub fn from_parts(model: article::Model, topics: Vec<topic::Model>) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            author_name: model.author_name,
            topics: topics.into_iter().map(TopicResponse::from).collect(),
        }
    }
}
