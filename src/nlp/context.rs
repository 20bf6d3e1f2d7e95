//! Shared NLP context
//!
//! [`NlpContext`] owns the tagger handle and the Observed POS Set. It is created once
//! and shared (via `Arc`) by the pipeline and every scrubber, so the model is loaded at
//! most once and the set accumulates across all examples processed with the context.

use super::lexicon::LexiconTagger;
use super::tagger::Tagger;
use crate::domain::{Result, TaggedToken, TaggerError};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Where the tagging model comes from
#[derive(Clone)]
pub enum TaggerSource {
    /// Lexicon model embedded in the binary
    Embedded,
    /// Lexicon model loaded from a TOML file
    File(PathBuf),
    /// A caller-supplied tagger
    Custom(Arc<dyn Tagger>),
}

impl fmt::Debug for TaggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "Embedded"),
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Custom(tagger) => f.debug_tuple("Custom").field(&tagger.name()).finish(),
        }
    }
}

impl TaggerSource {
    fn load(&self) -> std::result::Result<Arc<dyn Tagger>, TaggerError> {
        let tagger: Arc<dyn Tagger> = match self {
            Self::Embedded => Arc::new(LexiconTagger::embedded()?),
            Self::File(path) => Arc::new(LexiconTagger::from_file(path)?),
            Self::Custom(tagger) => Arc::clone(tagger),
        };
        Ok(tagger)
    }
}

/// Tagger handle plus the cumulative record of observed part-of-speech tags
pub struct NlpContext {
    source: TaggerSource,
    /// Outcome of the single load attempt
    tagger: Mutex<Option<std::result::Result<Arc<dyn Tagger>, TaggerError>>>,
    observed_pos: Mutex<BTreeSet<String>>,
}

impl NlpContext {
    /// Create a context; the model is not loaded until first use
    pub fn new(source: TaggerSource) -> Self {
        Self {
            source,
            tagger: Mutex::new(None),
            observed_pos: Mutex::new(BTreeSet::new()),
        }
    }

    /// Context using the embedded lexicon model
    pub fn embedded() -> Self {
        Self::new(TaggerSource::Embedded)
    }

    /// Context using a caller-supplied tagger
    pub fn with_tagger(tagger: Arc<dyn Tagger>) -> Self {
        Self::new(TaggerSource::Custom(tagger))
    }

    /// Tagger source this context loads from
    pub fn source(&self) -> &TaggerSource {
        &self.source
    }

    /// Return the tagger, loading it on first call
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ScrubError::Initialization`] if the model cannot be
    /// loaded. The first failure is kept and returned on every later call; there is no
    /// retry and no fallback model.
    pub fn tagger(&self) -> Result<Arc<dyn Tagger>> {
        let mut handle = lock(&self.tagger);
        if let Some(outcome) = handle.as_ref() {
            return outcome.clone().map_err(Into::into);
        }

        let start = Instant::now();
        let outcome = self.source.load();
        match outcome {
            Ok(ref tagger) => tracing::info!(
                model = tagger.name(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Tagging model loaded"
            ),
            Err(ref e) => {
                tracing::error!(source = ?self.source, error = %e, "Failed to load tagging model")
            }
        }

        *handle = Some(outcome.clone());
        outcome.map_err(Into::into)
    }

    /// Load the model now so that a missing resource surfaces before any input is read
    pub fn warm_up(&self) -> Result<()> {
        self.tagger().map(|_| ())
    }

    /// Whether the model has been loaded
    pub fn is_loaded(&self) -> bool {
        matches!(*lock(&self.tagger), Some(Ok(_)))
    }

    /// Tag a text and record every part-of-speech tag seen
    pub fn parse(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let tokens = self.tagger()?.tag(text);

        let mut observed = lock(&self.observed_pos);
        for token in &tokens {
            if !observed.contains(&token.pos) {
                tracing::trace!(pos = %token.pos, "New part-of-speech tag observed");
                observed.insert(token.pos.clone());
            }
        }

        Ok(tokens)
    }

    /// Whether the tag has been seen in any parse so far
    pub fn has_observed(&self, pos: &str) -> bool {
        lock(&self.observed_pos).contains(pos)
    }

    /// Snapshot of observed tags in sorted order
    pub fn observed_pos(&self) -> Vec<String> {
        lock(&self.observed_pos).iter().cloned().collect()
    }
}

impl Default for NlpContext {
    fn default() -> Self {
        Self::embedded()
    }
}

impl fmt::Debug for NlpContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NlpContext")
            .field("source", &self.source)
            .field("loaded", &self.is_loaded())
            .field("observed_pos", &self.observed_pos())
            .finish()
    }
}

// Both guarded values stay consistent across a panic, so poisoning is ignored.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
