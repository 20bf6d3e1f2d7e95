//! Location scrubber
//!
//! Replaces proper nouns introduced by a location preposition (`in`, `at`) with
//! `[LOCATION]`. Detection walks the tagged tokens left to right with two states:
//!
//! - `Scanning`: a proper noun at index `i > 0` is replaced when the previous token is a
//!   location preposition carrying the `prep` dependency label
//! - `JustReplaced`: the previous token was replaced, so a directly following proper
//!   noun continues the span
//!
//! Each replaced token becomes its own placeholder; adjacent placeholders are not merged.
//!
//! # Limitation
//!
//! The scrubber skips tagging-based detection entirely while no proper noun has been
//! observed by the shared [`NlpContext`]. The check is cumulative over every text the
//! context has parsed, not a per-text guarantee.

use super::Scrubber;
use crate::anonymization::models::ScrubCategory;
use crate::anonymization::normalizer::TextNormalizer;
use crate::domain::{dep, pos, Result, TaggedToken};
use crate::nlp::NlpContext;
use std::sync::Arc;

/// Prepositions that introduce a location, compared case-insensitively
pub const LOCATION_PREPOSITIONS: &[&str] = &["in", "at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    JustReplaced,
}

/// Scrubber for the `location` category
pub struct LocationScrubber {
    ctx: Arc<NlpContext>,
    normalizer: Arc<TextNormalizer>,
}

impl LocationScrubber {
    /// Create a location scrubber sharing the given context and normalizer
    pub fn new(ctx: Arc<NlpContext>, normalizer: Arc<TextNormalizer>) -> Self {
        Self { ctx, normalizer }
    }

    /// Decide, per token, whether it is replaced
    pub fn replacement_mask(tokens: &[TaggedToken]) -> Vec<bool> {
        let mut mask = Vec::with_capacity(tokens.len());
        let mut state = ScanState::Scanning;

        for (i, token) in tokens.iter().enumerate() {
            let replace = i > 0 && token.is_proper_noun() && {
                let prev = &tokens[i - 1];
                let chained = state == ScanState::JustReplaced;
                (prev.has_dep(dep::PREP) || chained)
                    && (is_location_preposition(prev) || chained)
            };

            state = if replace {
                ScanState::JustReplaced
            } else {
                ScanState::Scanning
            };
            mask.push(replace);
        }

        mask
    }
}

impl Scrubber for LocationScrubber {
    fn scrub(&self, text: &str) -> Result<String> {
        let tokens = self.ctx.parse(text)?;

        if !self.ctx.has_observed(pos::PROPN) {
            tracing::debug!(tokens = tokens.len(), "No proper noun observed yet, skipping");
            return Ok(text.to_string());
        }

        let mask = Self::replacement_mask(&tokens);
        let placeholder = self.category().placeholder();

        let words: Vec<&str> = tokens
            .iter()
            .zip(&mask)
            .map(|(token, &replace)| {
                if replace {
                    placeholder.as_str()
                } else {
                    token.text.as_str()
                }
            })
            .collect();

        let replaced = mask.iter().filter(|&&r| r).count();
        tracing::debug!(
            tokens = tokens.len(),
            replaced,
            category = %self.category(),
            "Location scrub complete"
        );

        self.normalizer.normalize(&words.join(" "))
    }

    fn category(&self) -> ScrubCategory {
        ScrubCategory::Location
    }
}

fn is_location_preposition(token: &TaggedToken) -> bool {
    LOCATION_PREPOSITIONS
        .iter()
        .any(|p| token.text.eq_ignore_ascii_case(p))
}
