//! Calculation tape.
//!
//! A bounded, immutable log of completed calculations, in the spirit of the
//! paper roll on a desk calculator. Recording returns a new tape and leaves
//! the receiver untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_TAPE_CAPACITY: usize = 100;

/// One completed calculation.
///
/// # Example
///
/// ```rust
/// use scicalc::core::TapeEntry;
/// use chrono::Utc;
///
/// let entry = TapeEntry {
///     expression: "5 + 3".to_string(),
///     value: 8.0,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.to_string(), "5 + 3 = 8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// What was computed, e.g. `"5 + 3"` or `"sin(30)"`
    pub expression: String,
    /// The result
    pub value: f64,
    /// When the result was produced
    pub timestamp: DateTime<Utc>,
}

impl std::fmt::Display for TapeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {}",
            self.expression,
            super::format::format_result(self.value)
        )
    }
}

/// Ordered, bounded history of calculations. Oldest entries fall off first.
///
/// # Example
///
/// ```rust
/// use scicalc::core::{Tape, TapeEntry};
/// use chrono::Utc;
///
/// let tape = Tape::with_capacity(2);
/// let tape = tape.record(TapeEntry { expression: "1 + 1".into(), value: 2.0, timestamp: Utc::now() });
/// let tape = tape.record(TapeEntry { expression: "2 + 2".into(), value: 4.0, timestamp: Utc::now() });
/// let tape = tape.record(TapeEntry { expression: "3 + 3".into(), value: 6.0, timestamp: Utc::now() });
///
/// assert_eq!(tape.len(), 2);
/// assert_eq!(tape.entries()[0].expression, "2 + 2");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    entries: Vec<TapeEntry>,
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Create an empty tape with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TAPE_CAPACITY)
    }

    /// Create an empty tape holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, returning a new tape.
    ///
    /// This is a pure function - the existing tape is not modified.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self::trimmed(entries, self.capacity)
    }

    /// Same entries under a new capacity, keeping the newest ones.
    pub fn resized(&self, capacity: usize) -> Self {
        Self::trimmed(self.entries.clone(), capacity.max(1))
    }

    fn trimmed(mut entries: Vec<TapeEntry>, capacity: usize) -> Self {
        if entries.len() > capacity {
            entries.drain(..entries.len() - capacity);
        }
        Self { entries, capacity }
    }

    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Time between the first and last recorded calculation.
    ///
    /// Returns `None` for an empty tape.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Whether every recorded value is finite.
    pub fn values_are_finite(&self) -> bool {
        self.entries.iter().all(|e| e.value.is_finite())
    }
}
