//! Domain models and types for Textscrub.
//!
//! The domain layer provides:
//! - **Tagged tokens** ([`TaggedToken`]) with opaque part-of-speech and dependency tags
//! - **Datasets** ([`Dataset`]) in the `{"examples": [...]}` shape
//! - **Error types** ([`ScrubError`], [`TaggerError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T>`](Result):
//!
//! ```rust
//! use textscrub::domain::{Dataset, Result};
//!
//! fn example() -> Result<usize> {
//!     let dataset = Dataset::from_json_str(r#"{"examples": ["I live in Paris ."]}"#)?;
//!     Ok(dataset.len())
//! }
//! ```

pub mod dataset;
pub mod errors;
pub mod result;
pub mod token;

// Re-export commonly used types for convenience
pub use dataset::Dataset;
pub use errors::{ScrubError, TaggerError};
pub use result::Result;
pub use token::{dep, pos, TaggedToken};
