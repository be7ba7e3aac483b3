#![cfg(test)]
use configs::DatabaseConfig;
use models::db::{connect_with_config, migrate};
use sea_orm::DatabaseConnection;

/// Fresh, fully migrated in-memory database. Each call is isolated.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
