//! Snapshot slots
//!
//! A slot holds exactly one serialized `FinancialData`. Saving overwrites the
//! previous value wholesale; there is no versioning or migration.

use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};
use crate::models::FinancialData;

use super::file_io::{read_json, write_json_atomic};

/// A durable slot for the financial snapshot
pub trait SnapshotStore {
    /// Read the stored snapshot; `Ok(None)` when nothing has been saved yet
    fn load(&self) -> FinanceResult<Option<FinancialData>>;

    /// Replace the stored snapshot
    fn save(&mut self, data: &FinancialData) -> FinanceResult<()>;
}

/// Snapshot kept in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> FinanceResult<Option<FinancialData>> {
        read_json(&self.path)
    }

    fn save(&mut self, data: &FinancialData) -> FinanceResult<()> {
        write_json_atomic(&self.path, data)
    }
}

/// Snapshot kept in memory as serialized JSON, for tests and throwaway
/// sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored document, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The currently stored document
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> FinanceResult<Option<FinancialData>> {
        self.raw
            .as_deref()
            .map(|raw| {
                serde_json::from_str(raw)
                    .map_err(|e| FinanceError::Storage(format!("Failed to parse snapshot: {}", e)))
            })
            .transpose()
    }

    fn save(&mut self, data: &FinancialData) -> FinanceResult<()> {
        self.raw = Some(serde_json::to_string(data)?);
        Ok(())
    }
}

/// Load the stored snapshot, falling back to the seed data
///
/// A missing slot is a normal first run. An unreadable or unparsable slot is
/// logged and otherwise treated the same way; it is never fatal.
pub fn hydrate<S: SnapshotStore + ?Sized>(store: &S) -> FinancialData {
    match store.load() {
        Ok(Some(data)) => {
            if !data.is_consistent() {
                tracing::warn!("stored budget or savings totals disagree with transactions");
            }
            tracing::debug!(
                transactions = data.transactions.len(),
                budgets = data.budgets.len(),
                "hydrated financial data"
            );
            data
        }
        Ok(None) => {
            tracing::debug!("no stored financial data, starting from defaults");
            FinancialData::seed()
        }
        Err(e) => {
            tracing::warn!(error = %e, "error loading financial data, starting from defaults");
            FinancialData::seed()
        }
    }
}
