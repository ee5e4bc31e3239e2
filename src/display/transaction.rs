//! Transaction display formatting
//!
//! Renders the transaction history as a table and single transactions as
//! detail blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::truncate;
use crate::models::{Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Label for a transaction type in listings
pub fn type_label(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "Income",
        TransactionType::Expense => "Expense",
    }
}

/// Signed amount, `+` for income and `-` for expenses
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    format!("{}{}", sign, txn.amount.abs().format_with_symbol(symbol))
}

/// Format transactions as a table in the order given
pub fn format_transaction_table(
    transactions: &[&Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format(date_format).to_string(),
        kind: type_label(txn.kind),
        category: truncate(&txn.category, 20),
        description: truncate(&txn.description, 32),
        amount: format_signed_amount(txn, symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(5), Alignment::right());

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!("Type:        {}\n", type_label(txn.kind)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn, symbol)
    ));

    output
}
