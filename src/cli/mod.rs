//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the forms, the store and the reports.

pub mod budget;
pub mod report;
pub mod savings;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_audit_command, handle_dashboard_command};
pub use savings::{handle_savings_command, SavingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
