use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::config::AppState;
use crate::error::Result;
use crate::models::topic_model::TopicRequest;
use crate::services::topic_service::TopicService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_topics_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let topics = TopicService::list_topics(&state.db).await?;
    Ok(ResponseBuilder::success(topics))
}

pub async fn create_topic_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TopicRequest>,
) -> Result<impl IntoResponse> {
    let topic = TopicService::create_topic(&state.db, payload).await?;
    Ok(ResponseBuilder::created(topic))
}

pub async fn update_topic_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<TopicRequest>,
) -> Result<impl IntoResponse> {
    let topic = TopicService::update_topic(&state.db, id, payload).await?;
    Ok(ResponseBuilder::success(topic))
}

pub async fn delete_topic_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    TopicService::delete_topic(&state.db, id).await?;
    Ok(ResponseBuilder::no_content())
}

pub async fn list_topic_articles_handler(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let articles = TopicService::list_articles(&state.db, topic_id).await?;
    Ok(ResponseBuilder::success(articles))
}
