//! Anonymization data models

pub mod category;
pub mod example;

pub use category::ScrubCategory;
pub use example::ScrubbedExample;
