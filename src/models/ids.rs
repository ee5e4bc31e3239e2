//! Transaction identifiers
//!
//! Ids are opaque strings on the wire. New ids are time-based tokens
//! (milliseconds since the Unix epoch) handed out by an [`IdGenerator`],
//! which never issues the same token twice within a session.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of a time-based token, if this id is one
    fn as_millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Hands out monotonic, time-based transaction ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that will never repeat any of `existing`
    pub fn seeded_from<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a TransactionId>,
    {
        let last = existing
            .into_iter()
            .filter_map(TransactionId::as_millis)
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Issue a new id based on the current wall clock, skipping any id for
    /// which `is_taken` holds
    pub fn next_id<F>(&mut self, is_taken: F) -> TransactionId
    where
        F: Fn(&TransactionId) -> bool,
    {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_unused_at(now, is_taken)
    }

    /// Issue a new id for the given clock reading; bumps past the last
    /// issued token when the clock has not advanced
    pub fn next_at(&mut self, millis: u64) -> TransactionId {
        let next = millis.max(self.last.saturating_add(1));
        self.last = next;
        TransactionId(next.to_string())
    }

    /// Like [`next_at`](Self::next_at), but never returns a taken id. Once the
    /// numeric range is exhausted the token gets a `-N` suffix instead.
    pub fn next_unused_at<F>(&mut self, millis: u64, is_taken: F) -> TransactionId
    where
        F: Fn(&TransactionId) -> bool,
    {
        let base = self.next_at(millis);
        if !is_taken(&base) {
            return base;
        }

        let mut suffix: u64 = 1;
        loop {
            let candidate = TransactionId(format!("{}-{}", base, suffix));
            if !is_taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
