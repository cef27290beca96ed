//! Database access layer
//!
//! One pool for the process, built at startup and passed through
//! `AppState`. Schema creation is an explicit migrate step run before
//! the server binds - request handlers never touch DDL.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;

pub mod incomes;

/// Connect to the database named by `database_url`
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the incomes table if it does not exist. Idempotent.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS incomes (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            job_name       TEXT NOT NULL,
            amount         REAL NOT NULL,
            federal_amount REAL NOT NULL DEFAULT 0,
            date           TEXT NOT NULL,
            income_type    TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Schema ready (incomes table)");
    Ok(())
}
