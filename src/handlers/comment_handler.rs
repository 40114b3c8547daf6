use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::config::AppState;
use crate::error::Result;
use crate::models::comment_model::*;
use crate::services::comment_service::CommentService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

// `?authorName=` narrows the listing to one author
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Query(params): Query<CommentFilterParams>,
) -> Result<impl IntoResponse> {
    let comments = CommentService::list_comments(&state.db, params).await?;
    Ok(ResponseBuilder::success(comments))
}

pub async fn get_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let comment = CommentService::get_comment(&state.db, id).await?;
    Ok(ResponseBuilder::success(comment))
}

pub async fn list_article_comments_handler(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let comments = CommentService::list_for_article(&state.db, article_id).await?;
    Ok(ResponseBuilder::success(comments))
}

pub async fn create_comment_handler(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CommentRequest>,
) -> Result<impl IntoResponse> {
    let comment = CommentService::create_comment(&state.db, article_id, payload).await?;
    Ok(ResponseBuilder::created(comment))
}

pub async fn update_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CommentRequest>,
) -> Result<impl IntoResponse> {
    let comment = CommentService::update_comment(&state.db, id, payload).await?;
    Ok(ResponseBuilder::success(comment))
}

pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    CommentService::delete_comment(&state.db, id).await?;
    Ok(ResponseBuilder::no_content())
}
