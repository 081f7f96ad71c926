use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait as _;

use escola_roster_migration::Migrator;

/// Fresh in-memory sqlite database with all migrations applied.
///
/// The pool is pinned to a single connection: every pooled connection gets
/// its own `:memory:` database, so one shared connection is what keeps the
/// schema alive for the whole test.
pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}
