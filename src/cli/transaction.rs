//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, inspecting and deleting
//! transactions.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::FinanceResult;
use crate::forms::{category_choices, TransactionForm};
use crate::models::{Transaction, TransactionId, TransactionType};
use crate::reports::sorted_by_date_desc;
use crate::storage::SnapshotStore;
use crate::store::FinancialStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// Transaction type: income or expense
        kind: TransactionType,
        /// Amount (e.g., "50" or "49.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (a budget category for expenses)
        category: String,
        /// What the transaction was for
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Only show this type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },

    /// List the categories offered for a transaction type
    Categories {
        /// Transaction type: income or expense
        kind: TransactionType,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: SnapshotStore>(
    store: &mut FinancialStore<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let mut form = TransactionForm::new();
            form.set_kind(kind);
            form.amount = amount;
            form.category = category;
            form.description = description;
            if let Some(date) = date {
                form.date = date;
            }
            let txn = store.add_transaction(form.build()?)?;

            println!("Added transaction: {}", txn.id);
            print!(
                "{}",
                format_transaction_details(&txn, symbol, &settings.date_format)
            );

            if txn.is_expense() && store.data().budget(&txn.category).is_none() {
                println!(
                    "Note: no budget for '{}'; this expense isn't tracked against a budget.",
                    txn.category
                );
            }
        }

        TransactionCommands::List { kind, limit } => {
            let data = store.snapshot();
            let transactions: Vec<&Transaction> = sorted_by_date_desc(&data)
                .into_iter()
                .filter(|t| kind.map_or(true, |k| t.kind == k))
                .take(limit.unwrap_or(usize::MAX))
                .collect();

            print!(
                "{}",
                format_transaction_table(&transactions, symbol, &settings.date_format)
            );
        }

        TransactionCommands::Show { id } => {
            let id = TransactionId::new(id);
            match store.data().transaction(&id) {
                Some(txn) => print!(
                    "{}",
                    format_transaction_details(txn, symbol, &settings.date_format)
                ),
                None => println!("No transaction with ID '{}'.", id),
            }
        }

        TransactionCommands::Delete { id } => {
            let id = TransactionId::new(id);
            match store.delete_transaction(&id)? {
                Some(removed) => {
                    println!("Deleted transaction: {}", removed.id);
                    print!(
                        "{}",
                        format_transaction_details(&removed, symbol, &settings.date_format)
                    );
                }
                None => println!("No transaction with ID '{}'. Nothing deleted.", id),
            }
        }

        TransactionCommands::Categories { kind } => {
            for category in category_choices(kind, store.data(), settings) {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
