//! Income record endpoints
//!
//! List, add, and delete operations over the incomes table. There is no
//! update: corrections are delete-and-recreate.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::db;
use crate::error::{Error, Result};
use crate::models::{IncomeRecord, NewIncome};
use crate::AppState;

/// POST /api/incomes request body
///
/// `date` arrives as a string and is validated against `YYYY-MM-DD`
/// before anything touches the store. `federal_amount` may be omitted
/// and defaults to 0.
#[derive(Debug, Deserialize)]
pub struct AddIncomeRequest {
    pub job_name: String,
    pub amount: f64,
    #[serde(default)]
    pub federal_amount: f64,
    pub date: String,
    pub income_type: String,
}

/// GET /api/incomes - list every stored record
pub async fn list_incomes(State(state): State<AppState>) -> Result<Json<Vec<IncomeRecord>>> {
    let records = db::incomes::list(&state.db).await?;
    Ok(Json(records))
}

/// POST /api/incomes - validate, persist, return the record with its id
///
/// Takes the Json extraction result directly so a malformed body becomes
/// a structured 400 instead of axum's default rejection.
pub async fn add_income(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddIncomeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IncomeRecord>)> {
    let Json(request) = payload.map_err(|e| Error::Validation(e.body_text()))?;
    let new_income = validate(request)?;

    let record = db::incomes::insert(&state.db, &new_income).await?;
    info!(
        "Added income record {} ({}, {:.2})",
        record.id, record.job_name, record.amount
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /api/incomes/:id - 204 on success, 404 when the id is absent
pub async fn delete_income(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    db::incomes::delete(&state.db, id).await?;
    info!("Deleted income record {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Check field invariants and parse the date. Nothing is persisted when
/// any check fails.
fn validate(request: AddIncomeRequest) -> Result<NewIncome> {
    if request.job_name.trim().is_empty() {
        return Err(Error::Validation("job_name must not be empty".to_string()));
    }
    if request.income_type.trim().is_empty() {
        return Err(Error::Validation(
            "income_type must not be empty".to_string(),
        ));
    }
    if request.amount < 0.0 {
        return Err(Error::Validation("amount must be non-negative".to_string()));
    }
    if request.federal_amount < 0.0 {
        return Err(Error::Validation(
            "federal_amount must be non-negative".to_string(),
        ));
    }

    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").map_err(|_| {
        Error::Validation(format!("date must be YYYY-MM-DD, got {:?}", request.date))
    })?;

    Ok(NewIncome {
        job_name: request.job_name,
        amount: request.amount,
        federal_amount: request.federal_amount,
        date,
        income_type: request.income_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: &str, amount: f64) -> AddIncomeRequest {
        AddIncomeRequest {
            job_name: "Acme".to_string(),
            amount,
            federal_amount: 0.0,
            date: date.to_string(),
            income_type: "W2".to_string(),
        }
    }

    #[test]
    fn valid_request_parses_date() {
        let new_income = validate(request("2024-03-15", 1000.0)).expect("should validate");
        assert_eq!(
            new_income.date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(validate(request("03/15/2024", 1000.0)).is_err());
        assert!(validate(request("2024-13-01", 1000.0)).is_err());
        assert!(validate(request("not a date", 1000.0)).is_err());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(validate(request("2024-03-15", -1.0)).is_err());
    }

    #[test]
    fn empty_job_name_is_rejected() {
        let mut req = request("2024-03-15", 1000.0);
        req.job_name = "  ".to_string();
        assert!(validate(req).is_err());
    }
}
