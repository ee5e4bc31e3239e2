//! Budget model
//!
//! A budget is a spending ceiling for one category plus the running total of
//! expenses recorded against that category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A per-category budget; `category` is unique within a [`FinancialData`]
///
/// [`FinancialData`]: super::FinancialData
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,

    /// Ceiling for the period
    pub allocated: Money,

    /// Sum of all matching expense transactions, maintained incrementally
    pub spent: Money,
}

impl Budget {
    /// Create a budget with nothing spent yet
    pub fn new(category: impl Into<String>, allocated: Money) -> Self {
        Self {
            category: category.into(),
            allocated,
            spent: Money::zero(),
        }
    }

    /// Amount left before the ceiling (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent
    }

    /// Spent as a percentage of allocated; zero when nothing is allocated
    pub fn utilization(&self) -> f64 {
        self.spent.percent_of(self.allocated)
    }

    /// Check if spending exceeds the ceiling
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.allocated
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} spent",
            self.category, self.spent, self.allocated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("Food", Money::from_units(500));
        assert_eq!(budget.spent, Money::zero());
        assert_eq!(budget.remaining(), Money::from_units(500));
        assert!(!budget.is_over_budget());
    }

    #[test]
    fn test_over_budget() {
        let mut budget = Budget::new("Entertainment", Money::from_units(150));
        budget.spent = Money::from_units(180);

        assert!(budget.is_over_budget());
        assert_eq!(budget.remaining(), Money::from_units(-30));
        assert_eq!(budget.utilization(), 120.0);
    }

    #[test]
    fn test_zero_allocation_utilization() {
        let mut budget = Budget::new("Gifts", Money::zero());
        budget.spent = Money::from_units(10);
        assert_eq!(budget.utilization(), 0.0);
        assert!(budget.is_over_budget());
    }

    #[test]
    fn test_display() {
        let mut budget = Budget::new("Food", Money::from_units(500));
        budget.spent = Money::from_cents(4250);
        assert_eq!(budget.to_string(), "Food: $42.50 of $500.00 spent");
    }
}
