//! Activity report
//!
//! Transaction counts overall, in the current month and within a recent
//! window, plus the newest-first listing used by the history view.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{FinancialData, Transaction};

/// Transaction counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivitySummary {
    pub total: usize,
    /// Dated in the same calendar month as `today`
    pub this_month: usize,
    /// Dated within the last `recent_days` days, `today` included
    pub recent: usize,
    pub recent_days: u32,
}

impl ActivitySummary {
    pub fn generate(data: &FinancialData, today: NaiveDate, recent_days: u32) -> Self {
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(recent_days)))
            .unwrap_or(NaiveDate::MIN);

        let this_month = data
            .transactions
            .iter()
            .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
            .count();
        let recent = data
            .transactions
            .iter()
            .filter(|t| t.date >= cutoff)
            .count();

        Self {
            total: data.transactions.len(),
            this_month,
            recent,
            recent_days,
        }
    }
}

/// Transactions newest first; same-day entries keep their insertion order
pub fn sorted_by_date_desc(data: &FinancialData) -> Vec<&Transaction> {
    let mut transactions: Vec<&Transaction> = data.transactions.iter().collect();
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionId};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn data_with_dates(dates: &[NaiveDate]) -> FinancialData {
        dates
            .iter()
            .enumerate()
            .fold(FinancialData::seed(), |data, (i, d)| {
                data.with_transaction(Transaction::from_new(
                    TransactionId::new(format!("{}", i + 1)),
                    NewTransaction::expense(Money::from_units(10), "Food", "Lunch", *d),
                ))
            })
    }

    #[test]
    fn test_counts() {
        let today = date(2024, 3, 10);
        let data = data_with_dates(&[
            date(2024, 3, 10),
            date(2024, 3, 3),
            date(2024, 3, 2),
            date(2024, 2, 29),
            date(2023, 3, 10),
        ]);

        let summary = ActivitySummary::generate(&data, today, 7);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.this_month, 3);
        assert_eq!(summary.recent, 2);
    }

    #[test]
    fn test_huge_window_counts_everything() {
        let today = date(2024, 3, 10);
        let data = data_with_dates(&[date(2024, 3, 10), date(1900, 1, 1), NaiveDate::MIN]);

        let summary = ActivitySummary::generate(&data, today, u32::MAX);

        assert_eq!(summary.recent, 3);
        assert_eq!(summary.recent_days, u32::MAX);
    }

    #[test]
    fn test_empty() {
        let summary = ActivitySummary::generate(&FinancialData::seed(), date(2024, 1, 1), 7);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.this_month, 0);
        assert_eq!(summary.recent, 0);
    }

    #[test]
    fn test_sorted_newest_first() {
        let data = data_with_dates(&[
            date(2024, 1, 5),
            date(2024, 3, 1),
            date(2024, 1, 5),
            date(2024, 2, 1),
        ]);

        let ids: Vec<_> = sorted_by_date_desc(&data)
            .iter()
            .map(|t| t.id.to_string())
            .collect();

        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }
}
