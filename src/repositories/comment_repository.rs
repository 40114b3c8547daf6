use sea_orm::*;

use crate::entities::{comment, comment::Entity as Comment};

pub struct CommentRepository;

impl CommentRepository {
    pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<comment::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Comment::find_by_id(id).one(db).await
    }

    pub async fn find_all<C>(db: &C) -> Result<Vec<comment::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Comment::find()
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
    }

    // Exact, case-sensitive match
    pub async fn find_by_author_name<C>(
        db: &C,
        author_name: &str,
    ) -> Result<Vec<comment::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Comment::find()
            .filter(comment::Column::AuthorName.eq(author_name))
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_article_id<C>(db: &C, article_id: i64) -> Result<Vec<comment::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Comment::find()
            .filter(comment::Column::ArticleId.eq(article_id))
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
    }

    pub async fn create<C>(
        db: &C,
        article_id: i64,
        body: String,
        author_name: String,
    ) -> Result<comment::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let new_comment = comment::ActiveModel {
            id: NotSet,
            body: Set(body),
            author_name: Set(author_name),
            article_id: Set(article_id),
        };

        new_comment.insert(db).await
    }

    /// Rewrites body and author. The article link is never touched.
    pub async fn update<C>(
        db: &C,
        id: i64,
        body: String,
        author_name: String,
    ) -> Result<comment::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let active = comment::ActiveModel {
            id: Unchanged(id),
            body: Set(body),
            author_name: Set(author_name),
            article_id: NotSet,
        };

        active.update(db).await
    }

    pub async fn delete<C>(db: &C, id: i64) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        Comment::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
