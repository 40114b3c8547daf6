use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::entities::{article, article::Entity as Article, article_topic, comment, topic};

pub struct ArticleRepository;

impl ArticleRepository {
    pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<article::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Article::find_by_id(id).one(db).await
    }

    // Articles paired with their topics, in id order
    pub async fn find_all_with_topics<C>(
        db: &C,
    ) -> Result<Vec<(article::Model, Vec<topic::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let articles = Article::find()
            .order_by_asc(article::Column::Id)
            .all(db)
            .await?;
        Self::attach_topics(db, articles).await
    }

    pub async fn attach_topics<C>(
        db: &C,
        articles: Vec<article::Model>,
    ) -> Result<Vec<(article::Model, Vec<topic::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let topics = articles
            .load_many_to_many(topic::Entity, article_topic::Entity, db)
            .await?;
        Ok(articles.into_iter().zip(topics).collect())
    }

    pub async fn find_topics<C>(db: &C, article: &article::Model) -> Result<Vec<topic::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        article
            .find_related(topic::Entity)
            .order_by_asc(topic::Column::Id)
            .all(db)
            .await
    }

    pub async fn create<C>(
        db: &C,
        title: String,
        body: String,
        author_name: String,
    ) -> Result<article::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let new_article = article::ActiveModel {
            id: NotSet,
            title: Set(title),
            body: Set(body),
            author_name: Set(author_name),
        };

        new_article.insert(db).await
    }

    pub async fn update<C>(
        db: &C,
        id: i64,
        title: String,
        body: String,
        author_name: String,
    ) -> Result<article::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let active = article::ActiveModel {
            id: Unchanged(id),
            title: Set(title),
            body: Set(body),
            author_name: Set(author_name),
        };

        active.update(db).await
    }

    /// Removes the article together with its comments and topic links.
    /// Callers should pass a transaction.
    pub async fn delete<C>(db: &C, id: i64) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        comment::Entity::delete_many()
            .filter(comment::Column::ArticleId.eq(id))
            .exec(db)
            .await?;

        article_topic::Entity::delete_many()
            .filter(article_topic::Column::ArticleId.eq(id))
            .exec(db)
            .await?;

        Article::delete_by_id(id).exec(db).await?;

        Ok(())
    }

    /// Inserts the join row unless it already exists.
    pub async fn link_topic<C>(db: &C, article_id: i64, topic_id: i64) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let link = article_topic::ActiveModel {
            article_id: Set(article_id),
            topic_id: Set(topic_id),
        };

        let res = article_topic::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    article_topic::Column::ArticleId,
                    article_topic::Column::TopicId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(db)
            .await;

        match res {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Returns whether a join row was actually removed.
    pub async fn unlink_topic<C>(db: &C, article_id: i64, topic_id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = article_topic::Entity::delete_many()
            .filter(article_topic::Column::ArticleId.eq(article_id))
            .filter(article_topic::Column::TopicId.eq(topic_id))
            .exec(db)
            .await?;

        Ok(res.rows_affected > 0)
    }
}
