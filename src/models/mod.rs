//! Core data models for vibe-finance
//!
//! This module contains the data structures of the finance domain:
//! transactions, budgets and the aggregate snapshot that holds them.

pub mod budget;
pub mod financial_data;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::Budget;
pub use financial_data::{FinancialData, DEFAULT_BUDGETS, DEFAULT_SAVINGS_GOAL};
pub use ids::{IdGenerator, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{NewTransaction, Transaction, TransactionType, TransactionValidationError};
