//! The financial aggregate
//!
//! `FinancialData` is the whole persisted state: transactions, budgets, the
//! savings goal and the running savings balance. Every state transition is a
//! pure function from one snapshot to the next; derived fields (`spent`,
//! `current_savings`) are adjusted incrementally by each transition rather
//! than recomputed, so a mutation costs O(1) in the aggregates.

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::ids::TransactionId;
use super::money::Money;
use super::transaction::Transaction;

/// Budgets created on first run: (category, allocated units)
pub const DEFAULT_BUDGETS: [(&str, i64); 4] = [
    ("Food", 500),
    ("Transportation", 200),
    ("Entertainment", 150),
    ("Utilities", 300),
];

/// Savings goal created on first run, in whole units
pub const DEFAULT_SAVINGS_GOAL: i64 = 5000;

/// Snapshot of the entire financial state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    /// Recorded transactions, in insertion order
    pub transactions: Vec<Transaction>,

    /// Budgets, unique by category
    pub budgets: Vec<Budget>,

    pub savings_goal: Money,

    /// Net of all income minus all expenses; may be negative
    pub current_savings: Money,
}

impl Default for FinancialData {
    fn default() -> Self {
        Self::seed()
    }
}

impl FinancialData {
    /// The first-run state: four preset budgets, no transactions
    pub fn seed() -> Self {
        Self {
            transactions: Vec::new(),
            budgets: DEFAULT_BUDGETS
                .iter()
                .map(|(category, units)| Budget::new(*category, Money::from_units(*units)))
                .collect(),
            savings_goal: Money::from_units(DEFAULT_SAVINGS_GOAL),
            current_savings: Money::zero(),
        }
    }

    /// Look up a budget by category
    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Categories of all budgets, in stored order
    pub fn budget_categories(&self) -> Vec<&str> {
        self.budgets.iter().map(|b| b.category.as_str()).collect()
    }

    /// Next snapshot with `txn` recorded
    pub fn with_transaction(&self, txn: Transaction) -> Self {
        let mut next = self.clone();
        next.apply_effect(&txn, Direction::Apply);
        next.transactions.push(txn);
        next
    }

    /// Next snapshot with the transaction `id` removed, together with the
    /// removed transaction. `None` when no such transaction exists.
    pub fn without_transaction(&self, id: &TransactionId) -> Option<(Self, Transaction)> {
        let index = self.transactions.iter().position(|t| &t.id == id)?;

        let mut next = self.clone();
        let removed = next.transactions.remove(index);
        next.apply_effect(&removed, Direction::Reverse);
        Some((next, removed))
    }

    /// Next snapshot with the allocation of `category` replaced. `None` when
    /// no budget has that category; budgets are never created here.
    pub fn with_budget_allocation(&self, category: &str, allocated: Money) -> Option<Self> {
        let index = self.budgets.iter().position(|b| b.category == category)?;

        let mut next = self.clone();
        next.budgets[index].allocated = allocated;
        Some(next)
    }

    /// Next snapshot with a new savings goal
    pub fn with_savings_goal(&self, goal: Money) -> Self {
        Self {
            savings_goal: goal,
            ..self.clone()
        }
    }

    /// Budget `spent` and `current_savings` as they would be if recomputed
    /// from the transactions alone
    pub fn recomputed_totals(&self) -> (Vec<(String, Money)>, Money) {
        let spent = self
            .budgets
            .iter()
            .map(|b| {
                let total = self
                    .transactions
                    .iter()
                    .filter(|t| t.is_expense() && t.category == b.category)
                    .map(|t| t.amount)
                    .sum();
                (b.category.clone(), total)
            })
            .collect();
        let savings = self.transactions.iter().map(Transaction::signed_amount).sum();
        (spent, savings)
    }

    /// Check whether the stored derived fields agree with the transactions
    pub fn is_consistent(&self) -> bool {
        let (spent, savings) = self.recomputed_totals();
        savings == self.current_savings
            && self
                .budgets
                .iter()
                .zip(spent)
                .all(|(budget, (_, total))| budget.spent == total)
    }

    fn apply_effect(&mut self, txn: &Transaction, direction: Direction) {
        let sign = |amount: Money| match direction {
            Direction::Apply => amount,
            Direction::Reverse => -amount,
        };

        if txn.is_expense() {
            if let Some(budget) = self.budgets.iter_mut().find(|b| b.category == txn.category) {
                budget.spent += sign(txn.amount);
            }
        }

        self.current_savings += sign(txn.signed_amount());
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Apply,
    Reverse,
}
