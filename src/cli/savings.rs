//! Savings CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_savings;
use crate::error::FinanceResult;
use crate::forms::SavingsGoalEdit;
use crate::storage::SnapshotStore;
use crate::store::FinancialStore;

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Show current savings and progress towards the goal
    Show,

    /// Set the savings goal
    Set {
        /// New goal (e.g., "8000")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a savings command
pub fn handle_savings_command<S: SnapshotStore>(
    store: &mut FinancialStore<S>,
    settings: &Settings,
    cmd: SavingsCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SavingsCommands::Show => {
            let data = store.data();
            print!(
                "{}",
                format_savings(data.current_savings, data.savings_goal, symbol)
            );
        }

        SavingsCommands::Set { amount } => {
            let goal = SavingsGoalEdit::new(amount).parse_amount()?;
            let previous = store.data().savings_goal;
            store.update_savings_goal(goal)?;

            println!(
                "Savings goal: {} -> {}",
                previous.format_with_symbol(symbol),
                goal.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
