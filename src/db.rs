//! Database connection and schema bootstrap.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Connect to `database_url` and apply any pending migrations.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    // Every pooled connection to an in-memory SQLite database would see its own empty schema
    if database_url.contains(":memory:") {
        opt.max_connections(1).min_connections(1);
    }

    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Migrations applied");

    Ok(db)
}
