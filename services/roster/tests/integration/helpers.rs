use escola_roster::infra::uow::RosterManager;
use escola_testing::db::memory_db;

/// Manager over a fresh in-memory database.
pub async fn manager() -> RosterManager {
    RosterManager::new(memory_db().await)
}

/// Two managers sharing one store, for isolation tests.
pub async fn manager_pair() -> (RosterManager, RosterManager) {
    let db = memory_db().await;
    (RosterManager::new(db.clone()), RosterManager::new(db))
}
