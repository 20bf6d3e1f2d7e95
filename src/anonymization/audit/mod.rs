//! Audit logging for anonymization operations
//!
//! Records one entry per processed example with hashed input text.

pub mod logger;

pub use logger::AuditLogger;
