// crates/core/src/registry.rs
use std::collections::HashMap;

use crate::counter::Counter;

/// Lazily-populated map from extension label to its [`Counter`].
///
/// The first file of a given extension creates the bucket; the empty label
/// (dotless file names) is a regular bucket of its own. New counters
/// inherit the registry's marker token.
#[derive(Debug)]
pub struct Registry {
    marker: String,
    buckets: HashMap<String, Counter>,
}

impl Registry {
    pub fn new(marker: impl Into<String>) -> Self {
        Self { marker: marker.into(), buckets: HashMap::new() }
    }

    /// Get-or-insert the counter for `label`.
    pub fn counter_for(&mut self, label: &str) -> &mut Counter {
        let marker = self.marker.as_str();
        self.buckets
            .entry(label.to_owned())
            .or_insert_with(|| Counter::with_marker(label, marker))
    }

    pub fn get(&self, label: &str) -> Option<&Counter> {
        self.buckets.get(label)
    }

    /// Number of distinct extension buckets seen so far.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Consume the registry, returning counters sorted by label so that
    /// report output stays stable across runs and platforms.
    pub fn into_sorted(self) -> Vec<Counter> {
        let mut counters: Vec<Counter> = self.buckets.into_values().collect();
        counters.sort_by(|a, b| a.label().cmp(b.label()));
        counters
    }
}
