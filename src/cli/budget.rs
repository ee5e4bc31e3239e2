//! Budget CLI commands
//!
//! Implements CLI commands for viewing budgets and changing allocations.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_table;
use crate::error::FinanceResult;
use crate::forms::BudgetEdit;
use crate::reports::DashboardSummary;
use crate::storage::SnapshotStore;
use crate::store::FinancialStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show every budget with its spending
    List,

    /// Set the allocation of an existing budget
    Set {
        /// Budget category
        category: String,
        /// New allocation (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: SnapshotStore>(
    store: &mut FinancialStore<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::List => {
            let summary = DashboardSummary::generate(store.data(), settings.trend_months);
            print!(
                "{}",
                format_budget_table(&summary.budgets, &summary.budget_totals, symbol)
            );
        }

        BudgetCommands::Set { category, amount } => {
            let edit = BudgetEdit::new(category, amount);
            let allocated = edit.parse_amount()?;
            let previous = store.data().budget(&edit.category).map(|b| b.allocated);

            match (previous, store.update_budget(&edit.category, allocated)?) {
                (Some(previous), Some(budget)) => {
                    println!(
                        "Updated budget '{}': {} -> {}",
                        budget.category,
                        previous.format_with_symbol(symbol),
                        budget.allocated.format_with_symbol(symbol)
                    );
                    println!(
                        "  Spent: {}  Remaining: {}",
                        budget.spent.format_with_symbol(symbol),
                        budget.remaining().format_with_symbol(symbol)
                    );
                }
                _ => {
                    println!("No budget named '{}'. Nothing changed.", edit.category);
                    println!(
                        "Budgets: {}",
                        store.data().budget_categories().join(", ")
                    );
                }
            }
        }
    }

    Ok(())
}
