//! Display formatting for terminal output
//!
//! Turns snapshots and reports into tables and text blocks. Every amount is
//! rendered with the configured currency symbol.

pub mod budget;
pub mod dashboard;
pub mod format;
pub mod transaction;

pub use budget::{format_budget_table, format_savings};
pub use dashboard::{format_activity, format_dashboard};
pub use transaction::{format_signed_amount, format_transaction_details, format_transaction_table};
