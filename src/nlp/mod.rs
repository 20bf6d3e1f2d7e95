//! Tokenizer/tagger adapter
//!
//! Turns raw text into ordered `(text, pos, dep)` triplets. The [`Tagger`] trait is the
//! seam for the tagging model; [`LexiconTagger`] is the built-in rule-based model and
//! [`NlpContext`] holds the lazily loaded handle together with the Observed POS Set.
//!
//! # Usage
//!
//! ```rust
//! use textscrub::nlp::NlpContext;
//!
//! # fn example() -> textscrub::domain::Result<()> {
//! let ctx = NlpContext::embedded();
//! let tokens = ctx.parse("I live in Paris .")?;
//! assert_eq!(tokens[3].pos, "PROPN");
//! assert!(ctx.has_observed("PROPN"));
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod lexicon;
pub mod tagger;
pub mod tokenizer;

pub use context::{NlpContext, TaggerSource};
pub use lexicon::LexiconTagger;
pub use tagger::Tagger;
