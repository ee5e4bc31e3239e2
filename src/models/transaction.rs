//! Transaction model
//!
//! A transaction is a single income or expense event. Transactions are
//! immutable once recorded; they can only be removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownType(other.to_string())),
        }
    }
}

/// Fields of a transaction before the store assigns it an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    /// Create a new transaction input
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Shorthand for an income input
    pub fn income(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(TransactionType::Income, amount, category, description, date)
    }

    /// Shorthand for an expense input
    pub fn expense(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(TransactionType::Expense, amount, category, description, date)
    }

    /// Check the input is fit to be recorded. The store itself never calls
    /// this; input layers do before invoking it.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::MissingDescription);
        }
        Ok(())
    }
}

/// A recorded financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative amount; the direction comes from `kind`
    pub amount: Money,

    /// Free-form category; expenses usually match a budget category
    pub category: String,

    pub description: String,

    pub date: NaiveDate,
}

impl Transaction {
    /// Attach an id to a transaction input
    pub fn from_new(id: TransactionId, input: NewTransaction) -> Self {
        Self {
            id,
            kind: input.kind,
            amount: input.amount,
            category: input.category,
            description: input.description,
            date: input.date,
        }
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Effect on the net savings balance: `+amount` for income,
    /// `-amount` for expenses
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount(),
            self.category
        )
    }
}

/// Validation errors for transaction input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    MissingCategory,
    MissingDescription,
    UnknownType(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative: {}", amount)
            }
            Self::MissingCategory => write!(f, "Category is required"),
            Self::MissingDescription => write!(f, "Description is required"),
            Self::UnknownType(kind) => {
                write!(f, "Unknown transaction type '{}' (expected income or expense)", kind)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
