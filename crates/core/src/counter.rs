// crates/core/src/counter.rs
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Marker substring counted by default.
pub const DEFAULT_MARKER: &str = "@Deprecated";

/// Label of the synthetic counter summing every extension bucket.
pub const WILDCARD_LABEL: &str = ".*";

/// Per-extension accumulator of line classifications.
///
/// Two counters are the same bucket iff their labels match; equality and
/// hashing deliberately ignore the accumulated counts. All stored counts
/// only ever increase, either one line at a time or by [`merge`].
///
/// [`merge`]: Counter::merge
#[derive(Debug, Clone)]
pub struct Counter {
    label: String,
    marker: String,
    empty_lines: u64,
    not_empty_lines: u64,
    deprecations: u64,
}

impl Counter {
    /// Empty counter for `label` using [`DEFAULT_MARKER`].
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_marker(label, DEFAULT_MARKER)
    }

    /// Empty counter for `label` counting occurrences of `marker`.
    pub fn with_marker(label: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            marker: marker.into(),
            empty_lines: 0,
            not_empty_lines: 0,
            deprecations: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lines whose trimmed content is empty.
    pub fn empty_lines(&self) -> u64 {
        self.empty_lines
    }

    /// Lines containing at least one non-whitespace character.
    pub fn not_empty_lines(&self) -> u64 {
        self.not_empty_lines
    }

    /// Non-blank lines containing the marker substring.
    pub fn deprecations(&self) -> u64 {
        self.deprecations
    }

    /// Derived total; never stored.
    pub fn total_lines(&self) -> u64 {
        self.empty_lines + self.not_empty_lines
    }

    /// Classify one line.
    ///
    /// Trimming applies only to the blank test. The marker test runs on the
    /// untrimmed line and is a literal substring match, so commented-out or
    /// string-embedded occurrences still count.
    pub fn process_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.empty_lines += 1;
        } else {
            self.not_empty_lines += 1;

            if line.contains(&self.marker) {
                self.deprecations += 1;
            }
        }
    }

    /// Add `other`'s counts into `self`, leaving `other` unchanged.
    /// Commutative and associative on the counts.
    pub fn merge(&mut self, other: &Counter) {
        self.empty_lines += other.empty_lines;
        self.not_empty_lines += other.not_empty_lines;
        self.deprecations += other.deprecations;
    }

    /// Snapshot of the current totals, detached from the marker state.
    pub fn totals(&self) -> CounterTotals {
        CounterTotals {
            extension: self.label.clone(),
            empty_lines: self.empty_lines,
            not_empty_lines: self.not_empty_lines,
            total_lines: self.total_lines(),
            deprecations: self.deprecations,
        }
    }
}

/// Bucket identity: counters compare equal iff their labels are equal.
impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Counter {}

impl Hash for Counter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counts for files [*{}] :", self.label)?;
        writeln!(f, "{} empty lines", self.empty_lines)?;
        writeln!(f, "{} not empty lines", self.not_empty_lines)?;
        writeln!(f, "{} total lines", self.total_lines())?;
        writeln!(f, "{} deprecations", self.deprecations)
    }
}

/// Serializable totals of one counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterTotals {
    pub extension: String,
    pub empty_lines: u64,
    pub not_empty_lines: u64,
    pub total_lines: u64,
    pub deprecations: u64,
}
