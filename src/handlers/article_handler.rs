use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::config::AppState;
use crate::error::Result;
use crate::models::{article_model::ArticleRequest, topic_model::TopicRequest};
use crate::services::article_service::ArticleService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_articles_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let articles = ArticleService::list_articles(&state.db).await?;
    Ok(ResponseBuilder::success(articles))
}

pub async fn get_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let article = ArticleService::get_article(&state.db, id).await?;
    Ok(ResponseBuilder::success(article))
}

pub async fn create_article_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ArticleRequest>,
) -> Result<impl IntoResponse> {
    let article = ArticleService::create_article(&state.db, payload).await?;
    Ok(ResponseBuilder::created(article))
}

pub async fn update_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ArticleRequest>,
) -> Result<impl IntoResponse> {
    let article = ArticleService::update_article(&state.db, id, payload).await?;
    Ok(ResponseBuilder::success(article))
}

pub async fn delete_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    ArticleService::delete_article(&state.db, id).await?;
    Ok(ResponseBuilder::no_content())
}

pub async fn list_article_topics_handler(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let topics = ArticleService::list_topics(&state.db, article_id).await?;
    Ok(ResponseBuilder::success(topics))
}

pub async fn add_article_topic_handler(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<TopicRequest>,
) -> Result<impl IntoResponse> {
    let article = ArticleService::add_topic(&state.db, article_id, payload).await?;
    Ok(ResponseBuilder::created(article))
}

pub async fn remove_article_topic_handler(
    State(state): State<AppState>,
    Path((article_id, topic_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse> {
    ArticleService::remove_topic(&state.db, article_id, topic_id).await?;
    Ok(ResponseBuilder::no_content())
}
