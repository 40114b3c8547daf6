use sea_orm::DatabaseConnection;

use crate::error::{AppError, Result};
use crate::models::comment_model::*;
use crate::repositories::article_repository::ArticleRepository;
use crate::repositories::comment_repository::CommentRepository;

pub struct CommentService;

impl CommentService {
    pub async fn list_comments(
        db: &DatabaseConnection,
        params: CommentFilterParams,
    ) -> Result<Vec<CommentResponse>> {
        let comments = match params.author_name {
            Some(author_name) => CommentRepository::find_by_author_name(db, &author_name).await?,
            None => CommentRepository::find_all(db).await?,
        };

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    pub async fn get_comment(db: &DatabaseConnection, id: i64) -> Result<CommentResponse> {
        let comment = CommentRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(comment.into())
    }

    pub async fn list_for_article(
        db: &DatabaseConnection,
        article_id: i64,
    ) -> Result<Vec<CommentResponse>> {
        ArticleRepository::find_by_id(db, article_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let comments = CommentRepository::find_by_article_id(db, article_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    pub async fn create_comment(
        db: &DatabaseConnection,
        article_id: i64,
        payload: CommentRequest,
    ) -> Result<CommentResponse> {
        let article = ArticleRepository::find_by_id(db, article_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let saved =
            CommentRepository::create(db, article.id, payload.body, payload.author_name).await?;
        tracing::info!("Created comment {} on article {}", saved.id, article.id);

        Ok(saved.into())
    }

    pub async fn update_comment(
        db: &DatabaseConnection,
        id: i64,
        payload: CommentRequest,
    ) -> Result<CommentResponse> {
        CommentRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let updated = CommentRepository::update(db, id, payload.body, payload.author_name).await?;
        tracing::info!("Updated comment {}", id);

        Ok(updated.into())
    }

    pub async fn delete_comment(db: &DatabaseConnection, id: i64) -> Result<()> {
        CommentRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        CommentRepository::delete(db, id).await?;
        tracing::info!("Deleted comment {}", id);

        Ok(())
    }
}
