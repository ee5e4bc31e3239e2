//! vibe-finance - Local-first personal finance tracker
//!
//! This library provides the core of the vibe-finance application: a
//! transaction ledger, per-category budgets with automatically tracked
//! spending, and a savings goal, persisted as a single JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budgets, the aggregate)
//! - `storage`: Snapshot persistence and hydration
//! - `store`: The financial store, its mutations and subscribers
//! - `forms`: Input validation in front of the store
//! - `reports`: Dashboard and activity summaries
//! - `display`: Terminal formatting
//! - `audit`: Audit logging system
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use vibe_finance::config::{paths::FinancePaths, settings::Settings};
//! use vibe_finance::store::FinancialStore;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = FinancialStore::open_file(paths.data_file());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;

pub use error::{FinanceError, FinanceResult};
pub use store::FinancialStore;
