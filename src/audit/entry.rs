//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::store::Change;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Transaction,
    Budget,
    SavingsGoal,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Budget => write!(f, "Budget"),
            EntityType::SavingsGoal => write!(f, "SavingsGoal"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Transaction id, budget category, or "savings_goal"
    pub entity_id: String,

    /// Human-readable description of the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the entity after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an update operation; the diff summary is
    /// derived from the two values
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Build the entry describing an applied store mutation
    pub fn from_change(change: &Change) -> Self {
        match change {
            Change::TransactionAdded(txn) => Self::create(
                EntityType::Transaction,
                txn.id.as_str(),
                Some(txn.description.clone()),
                txn,
            ),
            Change::TransactionDeleted(txn) => Self::delete(
                EntityType::Transaction,
                txn.id.as_str(),
                Some(txn.description.clone()),
                txn,
            ),
            Change::BudgetUpdated { before, after } => Self::update(
                EntityType::Budget,
                after.category.as_str(),
                None,
                before,
                after,
            ),
            Change::SavingsGoalUpdated { before, after } => Self::update(
                EntityType::SavingsGoal,
                "savings_goal",
                None,
                before,
                after,
            ),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money, NewTransaction, Transaction, TransactionId};
    use chrono::NaiveDate;

    fn lunch() -> Transaction {
        Transaction::from_new(
            TransactionId::new("1705312345678"),
            NewTransaction::expense(
                Money::from_cents(1250),
                "Food",
                "Lunch",
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            ),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_transaction_added_entry() {
        let entry = AuditEntry::from_change(&Change::TransactionAdded(lunch()));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Transaction);
        assert_eq!(entry.entity_id, "1705312345678");
        assert_eq!(entry.entity_name.as_deref(), Some("Lunch"));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 12.5);
    }

    #[test]
    fn test_transaction_deleted_entry() {
        let entry = AuditEntry::from_change(&Change::TransactionDeleted(lunch()));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_budget_update_has_diff() {
        let before = Budget::new("Food", Money::from_units(500));
        let after = Budget::new("Food", Money::from_units(650));
        let entry = AuditEntry::from_change(&Change::BudgetUpdated { before, after });

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.entity_id, "Food");
        assert_eq!(entry.diff_summary.as_deref(), Some("allocated: 500 -> 650"));
    }

    #[test]
    fn test_savings_goal_update_has_diff() {
        let entry = AuditEntry::from_change(&Change::SavingsGoalUpdated {
            before: Money::from_units(5000),
            after: Money::from_cents(750_050),
        });

        assert_eq!(entry.entity_type, EntityType::SavingsGoal);
        assert_eq!(entry.diff_summary.as_deref(), Some("5000 -> 7500.5"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::from_change(&Change::TransactionAdded(lunch()));

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_type, EntityType::Transaction);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::from_change(&Change::TransactionAdded(lunch()));

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Transaction"));
        assert!(formatted.contains("1705312345678"));
        assert!(formatted.contains("(Lunch)"));
    }
}
