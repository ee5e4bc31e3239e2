//! Dashboard display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::budget::{format_budget_table, format_savings};
use super::format::{format_bar, format_heading, format_percentage};
use crate::reports::{ActivitySummary, DashboardSummary};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Format the full dashboard
pub fn format_dashboard(
    summary: &DashboardSummary,
    activity: &ActivitySummary,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format_heading("Overview"));
    output.push_str(&format!(
        "Total income:    {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total expenses:  {}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net balance:     {}\n",
        summary.net_balance.format_with_symbol(symbol)
    ));
    output.push('\n');

    output.push_str(&format_heading("Savings"));
    output.push_str(&format_savings(
        summary.current_savings,
        summary.savings_goal,
        symbol,
    ));
    output.push('\n');

    output.push_str(&format_heading("Budgets"));
    output.push_str(&format_budget_table(
        &summary.budgets,
        &summary.budget_totals,
        symbol,
    ));
    output.push('\n');

    output.push_str(&format_heading("Expenses by category"));
    if summary.expenses_by_category.is_empty() {
        output.push_str("No expenses recorded.\n");
    } else {
        let rows = summary.expenses_by_category.iter().map(|c| CategoryRow {
            category: c.category.clone(),
            total: c.total.format_with_symbol(symbol),
            share: format!(
                "{} {}",
                format_bar(c.percentage, 100.0, 10),
                format_percentage(c.percentage)
            ),
        });
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .modify(Columns::single(1), Alignment::right());
        output.push_str(&format!("{}\n", table));
    }
    output.push('\n');

    output.push_str(&format_heading("Income vs expenses"));
    if summary.monthly.is_empty() {
        output.push_str("No transactions recorded.\n");
    } else {
        let rows = summary.monthly.iter().map(|m| MonthRow {
            month: m.month.to_string(),
            income: m.income.format_with_symbol(symbol),
            expenses: m.expenses.format_with_symbol(symbol),
            net: (m.income - m.expenses).format_with_symbol(symbol),
        });
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .modify(Columns::new(1..), Alignment::right());
        output.push_str(&format!("{}\n", table));
    }
    output.push('\n');

    output.push_str(&format_activity(activity));

    output
}

/// Format the activity counts
pub fn format_activity(activity: &ActivitySummary) -> String {
    let mut output = format_heading("Activity");
    output.push_str(&format!("Transactions:    {}\n", activity.total));
    output.push_str(&format!("This month:      {}\n", activity.this_month));
    let recent_label = format!("Last {} days:", activity.recent_days);
    output.push_str(&format!("{:<17}{}\n", recent_label, activity.recent));
    output
}
