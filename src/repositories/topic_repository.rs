use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::entities::{article, article_topic, topic, topic::Entity as Topic};

pub struct TopicRepository;

impl TopicRepository {
    pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<topic::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Topic::find_by_id(id).one(db).await
    }

    pub async fn find_all<C>(db: &C) -> Result<Vec<topic::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Topic::find().order_by_asc(topic::Column::Id).all(db).await
    }

    pub async fn find_by_name<C>(db: &C, name: &str) -> Result<Option<topic::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Topic::find()
            .filter(topic::Column::Name.eq(name))
            .one(db)
            .await
    }

    /// Upsert keyed on the unique `name` column: concurrent callers all end up
    /// with the same row.
    pub async fn find_or_create_by_name<C>(db: &C, name: &str) -> Result<topic::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let candidate = topic::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
        };

        let res = Topic::insert(candidate)
            .on_conflict(OnConflict::column(topic::Column::Name).do_nothing().to_owned())
            .exec(db)
            .await;

        match res {
            Ok(_) => tracing::info!("Created topic: {}", name),
            Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }

        Self::find_by_name(db, name)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("topic {name:?}")))
    }

    // Only the name is writable; id and article links stay as they are
    pub async fn rename<C>(db: &C, id: i64, name: String) -> Result<topic::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let active = topic::ActiveModel {
            id: Unchanged(id),
            name: Set(name),
        };

        active.update(db).await
    }

    /// Clears the topic's article links, then the topic. Articles survive.
    /// Callers should pass a transaction.
    pub async fn delete<C>(db: &C, id: i64) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        article_topic::Entity::delete_many()
            .filter(article_topic::Column::TopicId.eq(id))
            .exec(db)
            .await?;

        Topic::delete_by_id(id).exec(db).await?;

        Ok(())
    }

    pub async fn find_articles<C>(db: &C, topic: &topic::Model) -> Result<Vec<article::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        topic
            .find_related(article::Entity)
            .order_by_asc(article::Column::Id)
            .all(db)
            .await
    }
}
