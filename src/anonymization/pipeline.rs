//! Anonymizer pipeline
//!
//! This module provides the [`AnonymizerPipeline`] that normalizes each example and
//! threads it through the configured scrubbers in order.
//!
//! # Architecture
//!
//! The pipeline coordinates:
//! - **Normalizer**: collapses spacing artifacts before scrubbing
//! - **Scrubbers**: one per configured category, output of one feeds the next
//! - **Audit Logger**: optional per-example record with hashed input
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use textscrub::anonymization::AnonymizerPipeline;
//! use textscrub::domain::Dataset;
//! use textscrub::nlp::NlpContext;
//!
//! # fn example() -> textscrub::domain::Result<()> {
//! let ctx = Arc::new(NlpContext::embedded());
//! let pipeline = AnonymizerPipeline::from_names(ctx, &["location"])?;
//!
//! let input = Dataset::new(vec!["I live in Paris .".to_string()]);
//! let output = pipeline.anonymize(&input)?;
//! assert_eq!(output.examples, vec!["I live in [LOCATION].".to_string()]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::{
    audit::AuditLogger,
    config::AnonymizationConfig,
    models::{ScrubCategory, ScrubbedExample},
    normalizer::TextNormalizer,
    report::AnonymizationReport,
    scrubber::{build_scrubber, Scrubber},
};
use crate::domain::{Dataset, Result};
use crate::nlp::NlpContext;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Ordered chain of scrubbers over a shared NLP context
pub struct AnonymizerPipeline {
    ctx: Arc<NlpContext>,
    normalizer: Arc<TextNormalizer>,
    scrubbers: Vec<Box<dyn Scrubber>>,
    audit_logger: Option<AuditLogger>,
}

impl AnonymizerPipeline {
    /// Create a pipeline from configured category names
    ///
    /// Every name is validated here, before any text is processed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ScrubError::Configuration`] if a name does not match a
    /// scrubber implementation.
    pub fn from_names<S: AsRef<str>>(ctx: Arc<NlpContext>, names: &[S]) -> Result<Self> {
        let categories = names
            .iter()
            .map(|name| name.as_ref().parse::<ScrubCategory>())
            .collect::<Result<Vec<_>>>()?;

        Self::from_categories(ctx, &categories)
    }

    /// Create a pipeline from categories
    pub fn from_categories(ctx: Arc<NlpContext>, categories: &[ScrubCategory]) -> Result<Self> {
        let normalizer = Arc::new(TextNormalizer::new()?);
        let scrubbers = categories
            .iter()
            .map(|category| build_scrubber(*category, Arc::clone(&ctx), Arc::clone(&normalizer)))
            .collect();

        Ok(Self::assemble(ctx, normalizer, scrubbers))
    }

    /// Create a pipeline from caller-built scrubbers
    pub fn with_scrubbers(ctx: Arc<NlpContext>, scrubbers: Vec<Box<dyn Scrubber>>) -> Result<Self> {
        let normalizer = Arc::new(TextNormalizer::new()?);
        Ok(Self::assemble(ctx, normalizer, scrubbers))
    }

    /// Create a pipeline, context and audit logger from configuration
    ///
    /// A dry run never attaches the audit logger, since its output is not written.
    pub fn from_config(config: &AnonymizationConfig) -> Result<Self> {
        config.validate()?;

        let ctx = Arc::new(NlpContext::new(config.tagger_source()));
        let pipeline = Self::from_categories(ctx, &config.categories()?)?;

        if config.dry_run {
            if config.audit.enabled {
                tracing::info!("Dry run: audit logging disabled");
            }
            Ok(pipeline)
        } else if config.audit.enabled {
            let logger = AuditLogger::new(config.audit.log_path.clone(), config.audit.json_format)?;
            Ok(pipeline.with_audit_logger(logger))
        } else {
            Ok(pipeline)
        }
    }

    fn assemble(
        ctx: Arc<NlpContext>,
        normalizer: Arc<TextNormalizer>,
        scrubbers: Vec<Box<dyn Scrubber>>,
    ) -> Self {
        tracing::debug!(
            scrubbers = ?scrubbers.iter().map(|s| s.category().name()).collect::<Vec<_>>(),
            "Anonymizer pipeline created"
        );

        Self {
            ctx,
            normalizer,
            scrubbers,
            audit_logger: None,
        }
    }

    /// Attach an audit logger
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    /// Whether an audit logger is attached
    pub fn is_audited(&self) -> bool {
        self.audit_logger.is_some()
    }

    /// Shared NLP context
    pub fn context(&self) -> &Arc<NlpContext> {
        &self.ctx
    }

    /// Configured categories in application order
    pub fn categories(&self) -> Vec<ScrubCategory> {
        self.scrubbers.iter().map(|s| s.category()).collect()
    }

    /// Normalize a text, then fold it through every scrubber in order
    pub fn process(&self, text: &str) -> Result<String> {
        let normalized = self.normalizer.normalize(text)?;
        self.scrubbers
            .iter()
            .try_fold(normalized, |acc, scrubber| scrubber.scrub(&acc))
    }

    /// Process a text and record per-category placeholder counts
    pub fn process_detailed(&self, index: usize, text: &str) -> Result<ScrubbedExample> {
        let start = Instant::now();

        let mut current = self.normalizer.normalize(text)?;
        let mut replacements = BTreeMap::new();

        for scrubber in &self.scrubbers {
            let category = scrubber.category();
            let placeholder = category.placeholder();
            let before = current.matches(placeholder.as_str()).count();

            current = scrubber.scrub(&current)?;

            let added = current
                .matches(placeholder.as_str())
                .count()
                .saturating_sub(before);
            if added > 0 {
                *replacements.entry(category).or_insert(0) += added;
            }
        }

        let example = ScrubbedExample::new(
            index,
            text.to_string(),
            current,
            replacements,
            start.elapsed().as_millis() as u64,
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_example(&example)?;
        }

        Ok(example)
    }

    /// Anonymize every example, preserving order and count
    pub fn anonymize(&self, dataset: &Dataset) -> Result<Dataset> {
        self.anonymize_with_report(dataset)
            .map(|(output, _report)| output)
    }

    /// Anonymize a raw JSON value of the `{"examples": [...]}` shape
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ScrubError::Dataset`] if the value has the wrong shape.
    pub fn anonymize_value(&self, value: &Value) -> Result<Value> {
        let dataset = Dataset::from_value(value)?;
        Ok(self.anonymize(&dataset)?.to_value())
    }

    /// Anonymize every example and build a run report
    pub fn anonymize_with_report(
        &self,
        dataset: &Dataset,
    ) -> Result<(Dataset, AnonymizationReport)> {
        let start = Instant::now();
        crate::log_scrub_start!(dataset.len(), self.scrubbers.len());

        let mut report = AnonymizationReport::new();
        let mut examples = Vec::with_capacity(dataset.len());

        for (index, text) in dataset.examples.iter().enumerate() {
            if text.trim().is_empty() {
                report.add_warning(format!("Example {index} is empty"));
            }

            let example = self.process_detailed(index, text).map_err(|e| {
                crate::log_error_with_context!(&e, format!("Failed to anonymize example {index}"));
                e
            })?;

            report.add_example(&example);
            examples.push(example.scrubbed);
        }

        if !self.ctx.has_observed(crate::domain::pos::PROPN) && !dataset.is_empty() {
            report.add_warning(
                "No proper noun was observed; proper-noun scrubbers returned their input unchanged"
                    .to_string(),
            );
        }

        crate::log_scrub_complete!(examples.len(), report.total_replacements, start.elapsed());

        Ok((Dataset::new(examples), report))
    }
}

impl std::fmt::Debug for AnonymizerPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnonymizerPipeline")
            .field("ctx", &self.ctx)
            .field("categories", &self.categories())
            .field("audit", &self.audit_logger.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScrubError;
    use serde_json::json;

    fn pipeline() -> AnonymizerPipeline {
        AnonymizerPipeline::from_names(Arc::new(NlpContext::embedded()), &["location"]).unwrap()
    }

    #[test]
    fn test_unknown_category_fails_at_construction() {
        let ctx = Arc::new(NlpContext::embedded());
        let err = AnonymizerPipeline::from_names(ctx.clone(), &["location", "person"]).unwrap_err();
        assert!(matches!(err, ScrubError::Configuration(_)));
        assert!(!ctx.is_loaded());
    }

    #[test]
    fn test_process() {
        assert_eq!(
            pipeline().process("I live in Paris .").unwrap(),
            "I live in [LOCATION]."
        );
    }

    #[test]
    fn test_process_normalizes_without_scrubbers() {
        let empty: [&str; 0] = [];
        let pipeline =
            AnonymizerPipeline::from_names(Arc::new(NlpContext::embedded()), &empty).unwrap();
        assert_eq!(pipeline.process("It doesn't matter .").unwrap(), "It does not matter.");
    }

    #[test]
    fn test_process_detailed_counts() {
        let example = pipeline()
            .process_detailed(4, "I live in New York City .")
            .unwrap();
        assert_eq!(example.index, 4);
        assert_eq!(example.original, "I live in New York City .");
        assert_eq!(example.scrubbed, "I live in [LOCATION] [LOCATION] [LOCATION].");
        assert_eq!(example.replacements.get(&ScrubCategory::Location), Some(&3));
    }

    #[test]
    fn test_anonymize_value_shape_error() {
        let err = pipeline().anonymize_value(&json!({ "texts": [] })).unwrap_err();
        assert!(matches!(err, ScrubError::Dataset(_)));
    }

    #[test]
    fn test_anonymize_value() {
        let output = pipeline()
            .anonymize_value(&json!({ "examples": ["We met at Heathrow .", "Hello"] }))
            .unwrap();
        assert_eq!(output, json!({ "examples": ["We met at [LOCATION].", "Hello"] }));
    }

    #[test]
    fn test_report_warns_on_empty_example() {
        let dataset = Dataset::new(vec!["I live in Paris .".to_string(), "  ".to_string()]);
        let (output, report) = pipeline().anonymize_with_report(&dataset).unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(report.total_examples, 2);
        assert!(report.warnings.iter().any(|w| w.contains("Example 1 is empty")));
    }

    #[test]
    fn test_dry_run_skips_audit_logger() {
        let dir = tempfile::TempDir::new().unwrap();
        let log_path = dir.path().join("audit").join("run.log");

        let mut config = AnonymizationConfig::default();
        config.audit.enabled = true;
        config.audit.log_path = log_path.clone();
        config.dry_run = true;

        let pipeline = AnonymizerPipeline::from_config(&config).unwrap();
        assert!(!pipeline.is_audited());

        let output = pipeline
            .anonymize(&Dataset::new(vec!["I live in Paris .".to_string()]))
            .unwrap();
        assert_eq!(output.examples[0], "I live in [LOCATION].");
        assert!(!log_path.exists());

        config.dry_run = false;
        assert!(AnonymizerPipeline::from_config(&config).unwrap().is_audited());
    }
}
