//! Budget and savings goal edit forms

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Edit buffer for one budget's allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEdit {
    pub category: String,
    pub amount_input: String,
}

impl BudgetEdit {
    /// Start editing `category` with an explicit buffer
    pub fn new(category: impl Into<String>, amount_input: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount_input: amount_input.into(),
        }
    }

    /// Parse the new allocation
    pub fn parse_amount(&self) -> FinanceResult<Money> {
        parse_non_negative(&self.amount_input, "Allocation")
    }
}

/// Edit buffer for the savings goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsGoalEdit {
    pub amount_input: String,
}

impl SavingsGoalEdit {
    pub fn new(amount_input: impl Into<String>) -> Self {
        Self {
            amount_input: amount_input.into(),
        }
    }

    /// Parse the new goal
    pub fn parse_amount(&self) -> FinanceResult<Money> {
        parse_non_negative(&self.amount_input, "Savings goal")
    }
}

/// Blank input counts as zero
fn parse_non_negative(raw: &str, field: &str) -> FinanceResult<Money> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Money::zero());
    }

    let amount = Money::parse(raw)
        .map_err(|_| FinanceError::Validation(format!("{}: invalid amount '{}'", field, raw)))?;

    if amount.is_negative() {
        return Err(FinanceError::Validation(format!(
            "{} cannot be negative",
            field
        )));
    }

    Ok(amount)
}
