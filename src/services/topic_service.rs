use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::error::{AppError, Result};
use crate::models::article_model::ArticleResponse;
use crate::models::topic_model::*;
use crate::repositories::article_repository::ArticleRepository;
use crate::repositories::topic_repository::TopicRepository;

pub struct TopicService;

impl TopicService {
    pub async fn list_topics(db: &DatabaseConnection) -> Result<Vec<TopicResponse>> {
        let topics = TopicRepository::find_all(db).await?;
        Ok(topics.into_iter().map(TopicResponse::from).collect())
    }

    /// Creating a name that already exists hands back the existing topic.
    pub async fn create_topic(db: &DatabaseConnection, payload: TopicRequest) -> Result<TopicResponse> {
        let topic = TopicRepository::find_or_create_by_name(db, &payload.name).await?;
        Ok(topic.into())
    }

    pub async fn update_topic(
        db: &DatabaseConnection,
        id: i64,
        payload: TopicRequest,
    ) -> Result<TopicResponse> {
        TopicRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let updated = TopicRepository::rename(db, id, payload.name).await?;
        tracing::info!("Renamed topic {} to {}", id, updated.name);

        Ok(updated.into())
    }

    pub async fn delete_topic(db: &DatabaseConnection, id: i64) -> Result<()> {
        TopicRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let txn = db.begin().await?;
        TopicRepository::delete(&txn, id).await?;
        txn.commit().await?;

        tracing::info!("Deleted topic {}", id);
        Ok(())
    }

    pub async fn list_articles(db: &DatabaseConnection, topic_id: i64) -> Result<Vec<ArticleResponse>> {
        let topic = TopicRepository::find_by_id(db, topic_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let articles = TopicRepository::find_articles(db, &topic).await?;
        let rows = ArticleRepository::attach_topics(db, articles).await?;

        Ok(rows
            .into_iter()
            .map(|(article, topics)| ArticleResponse::from_parts(article, topics))
            .collect())
    }
}
