//! Storage layer for vibe-finance
//!
//! Provides the snapshot slots the financial store persists to, JSON file
//! I/O with atomic writes, and hydration with fallback to the seed data.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::{hydrate, JsonFileStore, MemoryStore, SnapshotStore};
