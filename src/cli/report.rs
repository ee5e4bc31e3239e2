//! Read-only CLI commands: the dashboard and the audit trail

use chrono::NaiveDate;

use crate::audit::AuditLogger;
use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::FinanceResult;
use crate::models::FinancialData;
use crate::reports::{ActivitySummary, DashboardSummary};

/// Print the dashboard for `data` as of `today`
pub fn handle_dashboard_command(data: &FinancialData, settings: &Settings, today: NaiveDate) {
    let summary = DashboardSummary::generate(data, settings.trend_months);
    let activity = ActivitySummary::generate(data, today, settings.recent_activity_days);

    print!(
        "{}",
        format_dashboard(&summary, &activity, &settings.currency_symbol)
    );
}

/// Print the most recent `count` audit entries, oldest first
pub fn handle_audit_command(logger: &AuditLogger, count: usize) -> FinanceResult<()> {
    if !logger.exists() {
        println!("No audit entries yet.");
        return Ok(());
    }

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
    }
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
