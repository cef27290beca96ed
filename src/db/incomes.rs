//! Income record queries
//!
//! Plain row-level operations over the incomes table. Every mutation is
//! a single autocommitted statement.

use sqlx::SqlitePool;

use crate::error::{Error, Result};
use crate::models::{IncomeRecord, NewIncome};

/// Store-wide aggregates feeding the tax summary
#[derive(Debug, Clone, Copy)]
pub struct IncomeTotals {
    pub total_income: f64,
    pub paid_tax: f64,
}

/// Fetch every record, in store default order
pub async fn list(pool: &SqlitePool) -> Result<Vec<IncomeRecord>> {
    let records = sqlx::query_as::<_, IncomeRecord>(
        "SELECT id, job_name, amount, federal_amount, date, income_type FROM incomes",
    )
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Insert a validated record, returning it with the assigned id
pub async fn insert(pool: &SqlitePool, new_income: &NewIncome) -> Result<IncomeRecord> {
    let result = sqlx::query(
        r#"
        INSERT INTO incomes (job_name, amount, federal_amount, date, income_type)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new_income.job_name)
    .bind(new_income.amount)
    .bind(new_income.federal_amount)
    .bind(new_income.date)
    .bind(&new_income.income_type)
    .execute(pool)
    .await?;

    Ok(IncomeRecord {
        id: result.last_insert_rowid(),
        job_name: new_income.job_name.clone(),
        amount: new_income.amount,
        federal_amount: new_income.federal_amount,
        date: new_income.date,
        income_type: new_income.income_type.clone(),
    })
}

/// Delete by id; not-found when no row matched
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM incomes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound("Income not found".to_string()));
    }
    Ok(())
}

/// Sum amounts and withholdings in one aggregate query
pub async fn totals(pool: &SqlitePool) -> Result<IncomeTotals> {
    let (total_income, paid_tax) = sqlx::query_as::<_, (f64, f64)>(
        "SELECT COALESCE(SUM(amount), 0.0), COALESCE(SUM(federal_amount), 0.0) FROM incomes",
    )
    .fetch_one(pool)
    .await?;

    Ok(IncomeTotals {
        total_income,
        paid_tax,
    })
}
