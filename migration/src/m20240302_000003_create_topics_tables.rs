use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_articles_table::Articles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Topics, unique by name so find-or-create can upsert atomically
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Topics::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Topics::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // 2. Join table (Many-to-Many), written through the article side only
        manager
            .create_table(
                Table::create()
                    .table(ArticleTopics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArticleTopics::ArticleId).big_integer().not_null())
                    .col(ColumnDef::new(ArticleTopics::TopicId).big_integer().not_null())
                    .primary_key(Index::create().col(ArticleTopics::ArticleId).col(ArticleTopics::TopicId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_topics_article_id")
                            .from(ArticleTopics::Table, ArticleTopics::ArticleId)
                            .to(Articles::Table, Articles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_topics_topic_id")
                            .from(ArticleTopics::Table, ArticleTopics::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ArticleTopics::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Topics::Table).to_owned()).await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Topics {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum ArticleTopics {
    Table,
    ArticleId,
    TopicId,
}
