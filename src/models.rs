//! Data model for income records

use chrono::NaiveDate;
use serde::Serialize;

/// One reported income event
///
/// `date` serializes as ISO-8601 (`YYYY-MM-DD`) via chrono's serde impl.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct IncomeRecord {
    /// Store-assigned identifier, immutable for the record's lifetime
    pub id: i64,
    pub job_name: String,
    /// Gross income for this entry, always >= 0
    pub amount: f64,
    /// Federal tax already withheld against this entry, always >= 0
    pub federal_amount: f64,
    pub date: NaiveDate,
    /// Categorical label, e.g. "W2" or "1099"
    pub income_type: String,
}

/// Validated insert payload - everything except the store-assigned id
#[derive(Debug, Clone)]
pub struct NewIncome {
    pub job_name: String,
    pub amount: f64,
    pub federal_amount: f64,
    pub date: NaiveDate,
    pub income_type: String,
}
