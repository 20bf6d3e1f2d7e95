//! Anonymization run reporting
//!
//! Summarizes a dataset run: how many examples changed, placeholders by category,
//! processing time and a handful of scrubbed samples. Samples only ever contain
//! scrubbed text.

use crate::anonymization::models::{ScrubCategory, ScrubbedExample};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_SAMPLES: usize = 20;
const MAX_SAMPLE_CHARS: usize = 80;

/// Report over an anonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationReport {
    /// Total examples processed
    pub total_examples: usize,

    /// Total placeholders emitted
    pub total_replacements: usize,

    /// Placeholders by category
    pub replacements_by_category: BTreeMap<ScrubCategory, usize>,

    /// Sample scrubbed examples
    pub samples: Vec<ReportSample>,

    /// Warnings raised during the run
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Sample scrubbed example
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSample {
    /// Position in the dataset
    pub index: usize,

    /// Scrubbed text (truncated)
    pub scrubbed: String,

    /// Placeholders emitted
    pub replacements: usize,
}

/// Processing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per example (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Examples with at least one placeholder
    pub examples_changed: usize,

    /// Examples without placeholders
    pub examples_unchanged: usize,
}

impl AnonymizationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total_examples: 0,
            total_replacements: 0,
            replacements_by_category: BTreeMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats::default(),
        }
    }

    /// Add a processed example
    pub fn add_example(&mut self, example: &ScrubbedExample) {
        self.total_examples += 1;
        self.stats.total_processing_time_ms += example.processing_time_ms;

        if example.has_replacements() {
            self.stats.examples_changed += 1;
            self.total_replacements += example.total_replacements();

            for (category, count) in &example.replacements {
                *self.replacements_by_category.entry(*category).or_insert(0) += count;
            }

            if self.samples.len() < MAX_SAMPLES {
                self.samples.push(ReportSample {
                    index: example.index,
                    scrubbed: truncate(&example.scrubbed),
                    replacements: example.total_replacements(),
                });
            }
        } else {
            self.stats.examples_unchanged += 1;
        }

        self.stats.avg_processing_time_ms =
            self.stats.total_processing_time_ms / self.total_examples as u64;
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    ANONYMIZATION REPORT                       \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Total Examples Processed:    {}\n",
            self.total_examples
        ));
        output.push_str(&format!(
            "  Examples Changed:            {}\n",
            self.stats.examples_changed
        ));
        output.push_str(&format!(
            "  Examples Unchanged:          {}\n",
            self.stats.examples_unchanged
        ));
        output.push_str(&format!(
            "  Total Placeholders Emitted:  {}\n",
            self.total_replacements
        ));
        output.push_str(&format!(
            "  Avg Processing Time:         {} ms\n",
            self.stats.avg_processing_time_ms
        ));
        output.push('\n');

        if !self.replacements_by_category.is_empty() {
            output.push_str("🔍 PLACEHOLDERS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.replacements_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1));

            for (category, count) in categories {
                output.push_str(&format!("  {:30} {:>5}\n", category.label(), count));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLES\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for sample in self.samples.iter().take(10) {
                output.push_str(&format!(
                    "  #{:<5} ({} placeholders) \"{}\"\n",
                    sample.index, sample.replacements, sample.scrubbed
                ));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &std::path::Path) -> crate::domain::Result<()> {
        let json = self.format_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for AnonymizationReport {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_SAMPLE_CHARS {
        let head: String = text.chars().take(MAX_SAMPLE_CHARS - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(index: usize, scrubbed: &str, count: usize, ms: u64) -> ScrubbedExample {
        let mut replacements = BTreeMap::new();
        if count > 0 {
            replacements.insert(ScrubCategory::Location, count);
        }
        ScrubbedExample::new(index, String::new(), scrubbed.to_string(), replacements, ms)
    }

    #[test]
    fn test_report_creation() {
        let report = AnonymizationReport::new();
        assert_eq!(report.total_examples, 0);
        assert!(report.samples.is_empty());
        assert!(report.replacements_by_category.is_empty());
    }

    #[test]
    fn test_add_examples() {
        let mut report = AnonymizationReport::new();
        report.add_example(&example(0, "I live in [LOCATION].", 1, 10));
        report.add_example(&example(1, "Hello there.", 0, 20));
        report.add_example(&example(2, "in [LOCATION] [LOCATION].", 2, 30));

        assert_eq!(report.total_examples, 3);
        assert_eq!(report.total_replacements, 3);
        assert_eq!(report.stats.examples_changed, 2);
        assert_eq!(report.stats.examples_unchanged, 1);
        assert_eq!(report.stats.avg_processing_time_ms, 20);
        assert_eq!(
            report.replacements_by_category.get(&ScrubCategory::Location),
            Some(&3)
        );
        assert_eq!(report.samples.len(), 2);
    }

    #[test]
    fn test_samples_are_capped_and_truncated() {
        let mut report = AnonymizationReport::new();
        let long = format!("in [LOCATION] {}", "x".repeat(200));
        for i in 0..30 {
            report.add_example(&example(i, &long, 1, 1));
        }
        assert_eq!(report.samples.len(), MAX_SAMPLES);
        assert_eq!(report.samples[0].scrubbed.chars().count(), MAX_SAMPLE_CHARS);
        assert!(report.samples[0].scrubbed.ends_with("..."));
    }

    #[test]
    fn test_format_console() {
        let mut report = AnonymizationReport::new();
        report.add_example(&example(0, "I live in [LOCATION].", 1, 5));
        report.add_warning("example 3 was empty".to_string());

        let output = report.format_console();
        assert!(output.contains("ANONYMIZATION REPORT"));
        assert!(output.contains("Total Examples Processed:    1"));
        assert!(output.contains("LOCATION"));
        assert!(output.contains("example 3 was empty"));
    }

    #[test]
    fn test_format_json() {
        let mut report = AnonymizationReport::new();
        report.add_example(&example(0, "I live in [LOCATION].", 1, 5));
        let json: serde_json::Value = serde_json::from_str(&report.format_json().unwrap()).unwrap();
        assert_eq!(json["total_examples"], 1);
        assert_eq!(json["replacements_by_category"]["location"], 1);
    }
}
