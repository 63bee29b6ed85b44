use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Commit counts per author display name, scoped to a single repository.
pub type AuthorTally = HashMap<String, u64>;

/// Accumulated byte counts per language label.
///
/// `total` is maintained as the sum of all per-language counts, so a repo's
/// total never drifts from its breakdown.
#[derive(Debug, Clone, Default)]
pub struct LanguageTally {
    counts: HashMap<String, u64>,
    total: u64,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, language: &str, bytes: u64) {
        *self.counts.entry(language.to_string()).or_insert(0) += bytes;
        self.total += bytes;
    }

    /// Elementwise merge of another tally into this one.
    pub fn merge(&mut self, other: &LanguageTally) {
        for (language, bytes) in &other.counts {
            *self.counts.entry(language.clone()).or_insert(0) += bytes;
        }
        self.total += other.total;
    }

    pub fn total_bytes(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, language: &str) -> u64 {
        self.counts.get(language).copied().unwrap_or(0)
    }

    /// Entries sorted by descending byte count; ties broken by name so the
    /// order is stable across runs.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(language, bytes)| (language.as_str(), *bytes))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn shares(&self) -> Vec<LanguageShare> {
        self.sorted()
            .into_iter()
            .map(|(language, bytes)| LanguageShare {
                language: language.to_string(),
                bytes,
                percent: if self.total == 0 {
                    0.0
                } else {
                    bytes as f64 / self.total as f64 * 100.0
                },
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub version: u32,
    pub base_path: String,
    pub repositories: Vec<String>,
    pub total_bytes: u64,
    pub languages: Vec<LanguageShare>,
}
