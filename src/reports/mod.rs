//! Reports module for vibe-finance
//!
//! Read-only views computed from a `FinancialData` snapshot: the dashboard
//! totals and trends, and transaction activity counts.

pub mod activity;
pub mod dashboard;

pub use activity::{sorted_by_date_desc, ActivitySummary};
pub use dashboard::{
    BudgetStatus, BudgetTotals, CategoryTotal, DashboardSummary, MonthlyTotals, YearMonth,
};
