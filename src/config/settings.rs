//! User settings for vibe-finance
//!
//! Manages display preferences, the income category presets offered by the
//! transaction form, report windows and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;

/// User settings for vibe-finance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Categories offered for income transactions
    #[serde(default = "default_income_categories")]
    pub income_categories: Vec<String>,

    /// Whether applied mutations are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Window, in days, counted as "recent activity"
    #[serde(default = "default_recent_activity_days")]
    pub recent_activity_days: u32,

    /// Number of months in the income vs expenses trend
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_income_categories() -> Vec<String> {
    ["Salary", "Freelance", "Investment", "Gift", "Other"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}

fn default_recent_activity_days() -> u32 {
    7
}

fn default_trend_months() -> usize {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            income_categories: default_income_categories(),
            audit_enabled: default_true(),
            recent_activity_days: default_recent_activity_days(),
            trend_months: default_trend_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
