//! Tax summary endpoint

use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::Result;
use crate::tax::{self, TaxSummary};
use crate::AppState;

/// GET /api/tax-summary
///
/// Aggregates the store (sum of amounts, sum of withholdings) and feeds
/// the estimator. Nothing is persisted; the summary is recomputed on
/// every request.
pub async fn tax_summary(State(state): State<AppState>) -> Result<Json<TaxSummary>> {
    let totals = db::incomes::totals(&state.db).await?;
    Ok(Json(tax::summarize(totals.total_income, totals.paid_tax)))
}
