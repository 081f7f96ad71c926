/// Roster service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
}

impl RosterConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
        }
    }
}
