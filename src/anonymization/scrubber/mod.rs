//! Scrubber contract and registry
//!
//! A scrubber owns one anonymization category. It receives plain text (not tokens)
//! because each scrubber may re-tag and re-normalize independently.

pub mod location;

use crate::anonymization::models::ScrubCategory;
use crate::anonymization::normalizer::TextNormalizer;
use crate::domain::Result;
use crate::nlp::NlpContext;
use std::sync::Arc;

pub use location::LocationScrubber;

/// Trait for category-specific scrubbers
pub trait Scrubber: Send + Sync {
    /// Replace identifying spans of this scrubber's category with placeholders
    fn scrub(&self, text: &str) -> Result<String>;

    /// Category this scrubber replaces
    fn category(&self) -> ScrubCategory;
}

/// Build the scrubber registered for a category
pub fn build_scrubber(
    category: ScrubCategory,
    ctx: Arc<NlpContext>,
    normalizer: Arc<TextNormalizer>,
) -> Box<dyn Scrubber> {
    match category {
        ScrubCategory::Location => Box::new(LocationScrubber::new(ctx, normalizer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_categories() {
        let ctx = Arc::new(NlpContext::embedded());
        let normalizer = Arc::new(TextNormalizer::new().unwrap());
        for category in ScrubCategory::ALL {
            let scrubber = build_scrubber(*category, ctx.clone(), normalizer.clone());
            assert_eq!(scrubber.category(), *category);
        }
    }
}
