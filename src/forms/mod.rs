//! Input forms
//!
//! The store trusts its input. Forms sit in front of it: they hold raw text
//! buffers, reject incomplete or malformed values with
//! `FinanceError::Validation`, and produce typed values for the store's
//! mutation operations.

pub mod budget;
pub mod transaction;

pub use budget::{BudgetEdit, SavingsGoalEdit};
pub use transaction::{category_choices, TransactionForm};
