use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vibe_finance::audit::AuditLogger;
use vibe_finance::cli::{
    handle_audit_command, handle_budget_command, handle_dashboard_command,
    handle_savings_command, handle_transaction_command,
};
use vibe_finance::config::{paths::FinancePaths, settings::Settings};
use vibe_finance::store::FinancialStore;

#[derive(Parser)]
#[command(
    name = "vibe-finance",
    version,
    about = "Local-first personal finance tracker",
    long_about = "vibe-finance records income and expenses, tracks spending against \
                  per-category budgets and measures progress towards a savings goal. \
                  All data stays in a single JSON file on this machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, savings progress, budgets, trends and activity
    #[command(alias = "dash")]
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(vibe_finance::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(vibe_finance::cli::BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Savings(vibe_finance::cli::SavingsCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let audit = AuditLogger::new(paths.audit_log());
    let mut store = FinancialStore::open_file(paths.data_file());
    if settings.audit_enabled {
        store.subscribe(audit.clone());
    }

    match cli.command {
        Some(Commands::Dashboard) | None => {
            let today = chrono::Local::now().date_naive();
            handle_dashboard_command(store.data(), &settings, today);
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Savings(cmd)) => {
            handle_savings_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Audit { count }) => {
            handle_audit_command(&audit, count)?;
        }
        Some(Commands::Config) => {
            println!("vibe-finance Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!(
                "  Income categories:    {}",
                settings.income_categories.join(", ")
            );
            println!("  Audit enabled:        {}", settings.audit_enabled);
            println!(
                "  Recent activity days: {}",
                settings.recent_activity_days
            );
            println!("  Trend months:         {}", settings.trend_months);
        }
    }

    Ok(())
}
