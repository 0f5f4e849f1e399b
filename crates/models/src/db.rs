use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::time::Duration;

/// Resolution order: `.env`/environment, then `config.toml`, then the
/// file-backed default next to the process.
pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.trim().is_empty() {
            return url;
        }
    }
    if let Ok(cfg) = configs::load_default() {
        if !cfg.database.url.trim().is_empty() {
            return cfg.database.url;
        }
    }
    "sqlite://payroll.db?mode=rwc".to_string()
});

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    connect_to(DATABASE_URL.as_str()).await
}

pub async fn connect_to(url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.sqlx_logging(false);
    clamp_for_in_memory(url, &mut opts);
    let db = Database::connect(opts).await?;
    Ok(db)
}

pub async fn connect_with_config(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let url = if cfg.url.trim().is_empty() { DATABASE_URL.as_str() } else { cfg.url.as_str() };
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    clamp_for_in_memory(url, &mut opts);
    let db = Database::connect(opts).await?;
    Ok(db)
}

// Each pooled connection to an in-memory SQLite opens its own empty
// database; a single pinned connection keeps every query on the same one.
fn clamp_for_in_memory(url: &str, opts: &mut ConnectOptions) {
    if url.contains(":memory:") || url.contains("mode=memory") {
        opts.max_connections(1).min_connections(1);
    }
}
