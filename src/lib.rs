// Textscrub - Free-text anonymization pipeline
// Copyright (c) 2025 Textscrub Contributors
// Licensed under the MIT License

//! # Textscrub - Free-text anonymization
//!
//! Textscrub anonymizes free-text user input (chat messages, reviews, support tickets)
//! by replacing identifying spans with bracketed category placeholders such as
//! `[LOCATION]`, so the text can be shared or used for training.
//!
//! ## Overview
//!
//! This library provides:
//! - **Normalizing** tokenizer spacing artifacts (`"Paris ."` becomes `"Paris."`)
//! - **Tagging** text with part-of-speech and dependency labels through a lazily loaded model
//! - **Scrubbing** identifying spans category by category
//! - **Reading and writing** datasets of the shape `{"examples": [...]}`
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Normalizer, scrubbers, pipeline, audit and reporting
//! - [`nlp`] - Tokenizer, tagger trait, lexicon model and shared tagging context
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use textscrub::anonymization::AnonymizerPipeline;
//! use textscrub::nlp::NlpContext;
//!
//! # fn main() -> textscrub::domain::Result<()> {
//! let ctx = Arc::new(NlpContext::embedded());
//! let pipeline = AnonymizerPipeline::from_names(ctx, &["location"])?;
//!
//! let scrubbed = pipeline.process("We met at Heathrow .")?;
//! assert_eq!(scrubbed, "We met at [LOCATION].");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::ScrubError`]. Each error maps to a CLI exit code through
//! [`domain::ScrubError::exit_code`].
//!
//! ## Logging
//!
//! Textscrub uses structured logging with the `tracing` crate. Original example text is
//! never logged; the audit log stores SHA-256 hashes instead.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod nlp;
