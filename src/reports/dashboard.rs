//! Dashboard report
//!
//! Headline totals, savings progress, expenses by category, a monthly income
//! vs expenses trend and the state of every budget, all computed from one
//! snapshot.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::{FinancialData, Money, TransactionType};

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of all expenses
    pub percentage: f64,
}

/// Calendar month key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => write!(f, "{}", first.format("%b %Y")),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

/// Income and expenses within one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: YearMonth,
    pub income: Money,
    pub expenses: Money,
}

/// Progress of a single budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
    /// Spent as a percentage of allocated
    pub utilization: f64,
    pub over_budget: bool,
}

/// Sums across all budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetTotals {
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
}

impl BudgetTotals {
    pub fn generate(data: &FinancialData) -> Self {
        data.budgets.iter().fold(Self::default(), |acc, b| Self {
            allocated: acc.allocated + b.allocated,
            spent: acc.spent + b.spent,
            remaining: acc.remaining + b.remaining(),
        })
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_balance: Money,
    pub current_savings: Money,
    pub savings_goal: Money,
    /// Current savings as a percentage of the goal; may exceed 100 or be
    /// negative
    pub savings_progress: f64,
    /// Largest first
    pub expenses_by_category: Vec<CategoryTotal>,
    /// Oldest first, at most `trend_months` entries
    pub monthly: Vec<MonthlyTotals>,
    pub budgets: Vec<BudgetStatus>,
    pub budget_totals: BudgetTotals,
}

impl DashboardSummary {
    /// Build the dashboard for `data`, keeping the `trend_months` most recent
    /// months that have transactions
    pub fn generate(data: &FinancialData, trend_months: usize) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        let mut by_month: BTreeMap<YearMonth, (Money, Money)> = BTreeMap::new();

        for txn in &data.transactions {
            let month = by_month.entry(YearMonth::of(txn.date)).or_default();
            match txn.kind {
                TransactionType::Income => {
                    total_income += txn.amount;
                    month.0 += txn.amount;
                }
                TransactionType::Expense => {
                    total_expenses += txn.amount;
                    month.1 += txn.amount;
                    let entry = by_category.entry(txn.category.as_str()).or_default();
                    entry.0 += txn.amount;
                    entry.1 += 1;
                }
            }
        }

        let mut expenses_by_category: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (total, transaction_count))| CategoryTotal {
                category: category.to_string(),
                total,
                transaction_count,
                percentage: total.percent_of(total_expenses),
            })
            .collect();
        expenses_by_category.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        let skip = by_month.len().saturating_sub(trend_months);
        let monthly = by_month
            .into_iter()
            .skip(skip)
            .map(|(month, (income, expenses))| MonthlyTotals {
                month,
                income,
                expenses,
            })
            .collect();

        let budgets = data
            .budgets
            .iter()
            .map(|b| BudgetStatus {
                category: b.category.clone(),
                allocated: b.allocated,
                spent: b.spent,
                remaining: b.remaining(),
                utilization: b.utilization(),
                over_budget: b.is_over_budget(),
            })
            .collect();

        Self {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            current_savings: data.current_savings,
            savings_goal: data.savings_goal,
            savings_progress: data.current_savings.percent_of(data.savings_goal),
            expenses_by_category,
            monthly,
            budgets,
            budget_totals: BudgetTotals::generate(data),
        }
    }
}
