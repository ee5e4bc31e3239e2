//! Description of an applied mutation, passed to subscribers

use serde::Serialize;

use crate::models::{Budget, Money, Transaction};

/// One applied mutation of the financial state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    TransactionAdded(Transaction),
    TransactionDeleted(Transaction),
    BudgetUpdated { before: Budget, after: Budget },
    SavingsGoalUpdated { before: Money, after: Money },
}

impl Change {
    /// Short human-readable label
    pub fn summary(&self) -> String {
        match self {
            Change::TransactionAdded(txn) => format!("added {} {}", txn.kind, txn.id),
            Change::TransactionDeleted(txn) => format!("deleted {} {}", txn.kind, txn.id),
            Change::BudgetUpdated { before, after } => format!(
                "budget {} allocated {} -> {}",
                after.category, before.allocated, after.allocated
            ),
            Change::SavingsGoalUpdated { before, after } => {
                format!("savings goal {} -> {}", before, after)
            }
        }
    }
}
