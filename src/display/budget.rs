//! Budget and savings display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_bar, format_percentage};
use crate::models::Money;
use crate::reports::{BudgetStatus, BudgetTotals};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    status: &'static str,
}

/// Format every budget as a table with a totals row
pub fn format_budget_table(
    budgets: &[BudgetStatus],
    totals: &BudgetTotals,
    symbol: &str,
) -> String {
    if budgets.is_empty() {
        return "No budgets.\n".to_string();
    }

    let mut rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            category: b.category.clone(),
            allocated: b.allocated.format_with_symbol(symbol),
            spent: b.spent.format_with_symbol(symbol),
            remaining: b.remaining.format_with_symbol(symbol),
            used: format!(
                "{} {}",
                format_bar(b.utilization, 100.0, 10),
                format_percentage(b.utilization)
            ),
            status: if b.over_budget { "OVER" } else { "" },
        })
        .collect();

    rows.push(BudgetRow {
        category: "Total".to_string(),
        allocated: totals.allocated.format_with_symbol(symbol),
        spent: totals.spent.format_with_symbol(symbol),
        remaining: totals.remaining.format_with_symbol(symbol),
        used: format_percentage(totals.spent.percent_of(totals.allocated)),
        status: if totals.remaining.is_negative() { "OVER" } else { "" },
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..4), Alignment::right());

    format!("{}\n", table)
}

/// Format the savings goal and progress towards it
pub fn format_savings(current: Money, goal: Money, symbol: &str) -> String {
    let progress = current.percent_of(goal);
    let mut output = String::new();

    output.push_str(&format!(
        "Current savings: {}\n",
        current.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Savings goal:    {}\n",
        goal.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Progress:        {} {}\n",
        format_bar(progress, 100.0, 20),
        format_percentage(progress)
    ));

    if goal.is_positive() && current >= goal {
        output.push_str("Goal reached!\n");
    } else if goal.is_positive() {
        output.push_str(&format!(
            "To go:           {}\n",
            (goal - current).format_with_symbol(symbol)
        ));
    }

    output
}
