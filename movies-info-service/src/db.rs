use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::AppResult;

const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url.to_string());
    if database_url.contains(":memory:") {
        // a second pooled connection would see its own empty in-memory database
        opts.max_connections(1);
    }
    let db = Database::connect(opts).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA journal_mode=WAL".to_string(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA synchronous=NORMAL".to_string(),
    ))
    .await?;

    run_sql(&db, MIGRATION_001).await?;
    Ok(db)
}

async fn run_sql(db: &DatabaseConnection, sql: &str) -> AppResult<()> {
    for stmt in sql.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        db.execute(Statement::from_string(db.get_database_backend(), stmt.to_string())).await?;
    }
    Ok(())
}
