//! Per-example pipeline results

use super::category::ScrubCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of running one example through the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubbedExample {
    /// Position of the example in the dataset
    pub index: usize,
    /// Input text before normalization
    pub original: String,
    /// Final scrubbed text
    pub scrubbed: String,
    /// Placeholders emitted, by category
    pub replacements: BTreeMap<ScrubCategory, usize>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// When the example was processed
    pub timestamp: DateTime<Utc>,
}

impl ScrubbedExample {
    /// Create a new result
    pub fn new(
        index: usize,
        original: String,
        scrubbed: String,
        replacements: BTreeMap<ScrubCategory, usize>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            index,
            original,
            scrubbed,
            replacements,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }

    /// Total placeholders emitted across categories
    pub fn total_replacements(&self) -> usize {
        self.replacements.values().sum()
    }

    /// Whether any placeholder was emitted
    pub fn has_replacements(&self) -> bool {
        self.total_replacements() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let mut replacements = BTreeMap::new();
        replacements.insert(ScrubCategory::Location, 3);
        let example = ScrubbedExample::new(
            0,
            "I live in New York City .".to_string(),
            "I live in [LOCATION] [LOCATION] [LOCATION].".to_string(),
            replacements,
            4,
        );
        assert_eq!(example.total_replacements(), 3);
        assert!(example.has_replacements());
    }

    #[test]
    fn test_no_replacements() {
        let example = ScrubbedExample::new(1, "hi".into(), "hi".into(), BTreeMap::new(), 0);
        assert!(!example.has_replacements());
    }
}
