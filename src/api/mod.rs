//! HTTP API handlers for taxtracker

pub mod health;
pub mod incomes;
pub mod summary;

pub use health::health_routes;
pub use incomes::{add_income, delete_income, list_incomes};
pub use summary::tax_summary;
