//! Configuration for the cell parser.

use std::collections::BTreeSet;

/// Suffixes that describe the whole set rather than one segment.
pub const DEFAULT_GLOBAL_FEELINGS: &[&str] = &["LLP"];

/// Reps assumed for a cell that records a weight but no rep count.
pub const DEFAULT_REPS: f64 = 12.0;

/// Separator used when a cell carries several feeling fragments.
pub const DEFAULT_FEELING_SEPARATOR: &str = " | ";

/// Options controlling how cells are interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Segment suffixes promoted to the cell feeling (stored upper-case).
    pub global_feelings: BTreeSet<String>,
    /// Reps synthesized for a bare weight.
    pub default_reps: f64,
    pub feeling_separator: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            global_feelings: DEFAULT_GLOBAL_FEELINGS
                .iter()
                .map(|suffix| (*suffix).to_string())
                .collect(),
            default_reps: DEFAULT_REPS,
            feeling_separator: DEFAULT_FEELING_SEPARATOR.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the global feeling vocabulary.
    #[must_use]
    pub fn with_global_feelings<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.global_feelings = suffixes
            .into_iter()
            .map(|suffix| suffix.as_ref().trim().to_uppercase())
            .filter(|suffix| !suffix.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn with_default_reps(mut self, reps: f64) -> Self {
        self.default_reps = reps;
        self
    }

    #[must_use]
    pub fn with_feeling_separator(mut self, separator: impl Into<String>) -> Self {
        self.feeling_separator = separator.into();
        self
    }

    /// True when `suffix` (already upper-case) belongs to the cell feeling.
    pub fn is_global_feeling(&self, suffix: &str) -> bool {
        self.global_feelings.contains(suffix)
    }
}
