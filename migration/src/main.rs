//! Migration CLI for the blog schema: `cargo run -p migration -- up`.

use migration::Migrator;
use sea_orm_migration::prelude::*;

#[async_std::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
