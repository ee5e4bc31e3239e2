//! Audit logging system for vibe-finance
//!
//! Records every applied mutation of the financial store with before/after
//! values in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information, and optional before/after values.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL). It
//!   implements the store's `Subscriber` trait, so registering it with
//!   `FinancialStore::subscribe` is all that is needed.
//! - `generate_diff`: human-readable diff between two entity states.
//!
//! # Example
//!
//! ```rust,ignore
//! use vibe_finance::audit::AuditLogger;
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! store.subscribe(logger.clone());
//! store.update_savings_goal(Money::from_units(8000))?;
//! assert_eq!(logger.read_recent(1)?.len(), 1);
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
