use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(escola_roster_migration::Migrator).await;
}
