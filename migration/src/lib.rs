pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_articles_table;
mod m20240301_000002_create_comments_table;
mod m20240302_000003_create_topics_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_articles_table::Migration),
            Box::new(m20240301_000002_create_comments_table::Migration),
            Box::new(m20240302_000003_create_topics_tables::Migration),
        ]
    }
}
