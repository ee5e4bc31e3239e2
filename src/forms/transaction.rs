//! Transaction entry form
//!
//! Holds the raw field buffers of a new transaction and turns them into a
//! validated `NewTransaction` for the store.

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{FinancialData, Money, NewTransaction, TransactionType};

/// Raw input for a new transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub kind: TransactionType,
    pub amount: String,
    pub category: String,
    pub description: String,
    /// `YYYY-MM-DD`; blank means today
    pub date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionForm {
    /// Empty expense form dated today
    pub fn new() -> Self {
        Self {
            kind: TransactionType::Expense,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: today().format("%Y-%m-%d").to_string(),
        }
    }

    /// Switch between income and expense; clears the category since the two
    /// kinds offer different choices
    pub fn set_kind(&mut self, kind: TransactionType) {
        if self.kind != kind {
            self.kind = kind;
            self.category.clear();
        }
    }

    /// Validate the buffers and build the store input
    pub fn build(&self) -> FinanceResult<NewTransaction> {
        let amount_str = self.amount.trim();
        let category = self.category.trim();
        let description = self.description.trim();

        if amount_str.is_empty() || category.is_empty() || description.is_empty() {
            return Err(FinanceError::Validation(
                "Please fill in amount, category and description".into(),
            ));
        }

        let amount = Money::parse(amount_str)
            .map_err(|_| FinanceError::Validation(format!("Invalid amount: {}", amount_str)))?;

        let date = match self.date.trim() {
            "" => today(),
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                FinanceError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", raw))
            })?,
        };

        let input = NewTransaction::new(self.kind, amount, category, description, date);
        input
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        Ok(input)
    }
}

/// Categories offered for a transaction kind: configured income categories
/// for income, budget categories for expenses
pub fn category_choices(
    kind: TransactionType,
    data: &FinancialData,
    settings: &Settings,
) -> Vec<String> {
    match kind {
        TransactionType::Income => settings.income_categories.clone(),
        TransactionType::Expense => data.budgets.iter().map(|b| b.category.clone()).collect(),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TransactionForm {
        TransactionForm {
            kind: TransactionType::Expense,
            amount: "50".into(),
            category: "Food".into(),
            description: "Groceries".into(),
            date: "2024-01-15".into(),
        }
    }

    #[test]
    fn test_new_form_is_dated_today() {
        let form = TransactionForm::new();
        assert_eq!(form.kind, TransactionType::Expense);
        assert_eq!(form.date, today().format("%Y-%m-%d").to_string());
        assert!(form.amount.is_empty());
    }

    #[test]
    fn test_build() {
        let input = filled().build().unwrap();
        assert_eq!(input.kind, TransactionType::Expense);
        assert_eq!(input.amount, Money::from_units(50));
        assert_eq!(input.category, "Food");
        assert_eq!(input.description, "Groceries");
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_build_trims_fields() {
        let mut form = filled();
        form.description = "  Weekly shop  ".into();
        form.amount = " 12.5 ".into();

        let input = form.build().unwrap();
        assert_eq!(input.description, "Weekly shop");
        assert_eq!(input.amount, Money::from_cents(1250));
    }

    #[test]
    fn test_missing_fields_rejected() {
        for blank in ["amount", "category", "description"] {
            let mut form = filled();
            match blank {
                "amount" => form.amount = " ".into(),
                "category" => form.category.clear(),
                _ => form.description.clear(),
            }
            let err = form.build().unwrap_err();
            assert!(err.is_validation(), "{} should be required", blank);
        }
    }

    #[test]
    fn test_bad_amount_rejected() {
        let mut form = filled();
        form.amount = "fifty".into();
        assert!(form.build().unwrap_err().is_validation());

        form.amount = "-5".into();
        let err = form.build().unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let mut form = filled();
        for amount in ["999999999999999999", "92233720368547758.07", "1e20"] {
            form.amount = amount.into();
            let err = form.build().unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", amount);
        }
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut form = filled();
        form.date = "15/01/2024".into();
        assert!(form.build().unwrap_err().to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_blank_date_is_today() {
        let mut form = filled();
        form.date.clear();
        assert_eq!(form.build().unwrap().date, today());
    }

    #[test]
    fn test_switching_kind_clears_category() {
        let mut form = filled();
        form.set_kind(TransactionType::Expense);
        assert_eq!(form.category, "Food");

        form.set_kind(TransactionType::Income);
        assert!(form.category.is_empty());
    }

    #[test]
    fn test_category_choices() {
        let data = FinancialData::seed();
        let settings = Settings::default();

        assert_eq!(
            category_choices(TransactionType::Expense, &data, &settings),
            vec!["Food", "Transportation", "Entertainment", "Utilities"]
        );
        assert_eq!(
            category_choices(TransactionType::Income, &data, &settings),
            vec!["Salary", "Freelance", "Investment", "Gift", "Other"]
        );
    }
}
