use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::error::{AppError, Result};
use crate::models::article_model::*;
use crate::models::topic_model::{TopicRequest, TopicResponse};
use crate::repositories::article_repository::ArticleRepository;
use crate::repositories::topic_repository::TopicRepository;

pub struct ArticleService;

impl ArticleService {
    pub async fn list_articles(db: &DatabaseConnection) -> Result<Vec<ArticleResponse>> {
        let rows = ArticleRepository::find_all_with_topics(db).await?;

        Ok(rows
            .into_iter()
            .map(|(article, topics)| ArticleResponse::from_parts(article, topics))
            .collect())
    }

    pub async fn get_article(db: &DatabaseConnection, id: i64) -> Result<ArticleResponse> {
        let article = ArticleRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;
        let topics = ArticleRepository::find_topics(db, &article).await?;

        Ok(ArticleResponse::from_parts(article, topics))
    }

    pub async fn create_article(
        db: &DatabaseConnection,
        payload: ArticleRequest,
    ) -> Result<ArticleResponse> {
        let saved =
            ArticleRepository::create(db, payload.title, payload.body, payload.author_name).await?;
        tracing::info!("Created article {}", saved.id);

        Ok(ArticleResponse::from_parts(saved, Vec::new()))
    }

    pub async fn update_article(
        db: &DatabaseConnection,
        id: i64,
        payload: ArticleRequest,
    ) -> Result<ArticleResponse> {
        ArticleRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let updated =
            ArticleRepository::update(db, id, payload.title, payload.body, payload.author_name)
                .await?;
        tracing::info!("Updated article {}", id);

        // Topic links are owned by the association endpoints and survive a PUT
        let topics = ArticleRepository::find_topics(db, &updated).await?;
        Ok(ArticleResponse::from_parts(updated, topics))
    }

    pub async fn delete_article(db: &DatabaseConnection, id: i64) -> Result<()> {
        ArticleRepository::find_by_id(db, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let txn = db.begin().await?;
        ArticleRepository::delete(&txn, id).await?;
        txn.commit().await?;

        tracing::info!("Deleted article {} with its comments", id);
        Ok(())
    }

    pub async fn list_topics(db: &DatabaseConnection, article_id: i64) -> Result<Vec<TopicResponse>> {
        let article = ArticleRepository::find_by_id(db, article_id)
            .await?
            .ok_or(AppError::NotFound)?;
        let topics = ArticleRepository::find_topics(db, &article).await?;

        Ok(topics.into_iter().map(TopicResponse::from).collect())
    }

    /// Links the topic named in `payload` to the article, creating the topic first when no
    /// topic carries that exact name. Linking twice leaves a single association.
    pub async fn add_topic(
        db: &DatabaseConnection,
        article_id: i64,
        payload: TopicRequest,
    ) -> Result<ArticleResponse> {
        let txn = db.begin().await?;

        let article = ArticleRepository::find_by_id(&txn, article_id)
            .await?
            .ok_or(AppError::NotFound)?;
        let topic = TopicRepository::find_or_create_by_name(&txn, &payload.name).await?;
        ArticleRepository::link_topic(&txn, article.id, topic.id).await?;

        let topics = ArticleRepository::find_topics(&txn, &article).await?;
        txn.commit().await?;

        tracing::info!("Linked topic {} to article {}", topic.id, article.id);
        Ok(ArticleResponse::from_parts(article, topics))
    }

    /// Removes only the join row. Unknown article, unknown topic and a missing link
    /// all report NotFound.
    pub async fn remove_topic(db: &DatabaseConnection, article_id: i64, topic_id: i64) -> Result<()> {
        ArticleRepository::find_by_id(db, article_id)
            .await?
            .ok_or(AppError::NotFound)?;
        TopicRepository::find_by_id(db, topic_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if !ArticleRepository::unlink_topic(db, article_id, topic_id).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!("Unlinked topic {} from article {}", topic_id, article_id);
        Ok(())
    }
}
