//! Tagger trait
//!
//! The tagger is an opaque collaborator: text in, ordered `(text, pos, dep)` triplets
//! out. Any model (rule-based, statistical, or a binding to an external service) can sit
//! behind this trait.

use crate::domain::TaggedToken;

/// Trait for part-of-speech and dependency taggers
pub trait Tagger: Send + Sync {
    /// Tag a text, returning tokens in linear sentence order
    fn tag(&self, text: &str) -> Vec<TaggedToken>;

    /// Name of the underlying model, used in logs
    fn name(&self) -> &str;
}
