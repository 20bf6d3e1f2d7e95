//! Anonymization categories

use crate::domain::ScrubError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of identifying span a scrubber replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrubCategory {
    /// Place names introduced by a location preposition
    Location,
}

impl ScrubCategory {
    /// Every category with a scrubber implementation
    pub const ALL: &'static [ScrubCategory] = &[ScrubCategory::Location];

    /// Configuration name (`"location"`)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Location => "location",
        }
    }

    /// Upper-case label used inside placeholders
    pub fn label(&self) -> &'static str {
        match self {
            Self::Location => "LOCATION",
        }
    }

    /// Placeholder token emitted in place of a replaced token
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.label())
    }

    /// Comma-separated list of valid configuration names
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ScrubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrubCategory {
    type Err = ScrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ScrubError::Configuration(format!(
                    "Unknown scrubber category '{s}'. Must be one of: {}",
                    Self::valid_names()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("location".parse::<ScrubCategory>().unwrap(), ScrubCategory::Location);
        assert_eq!(" LOCATION ".parse::<ScrubCategory>().unwrap(), ScrubCategory::Location);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "person".parse::<ScrubCategory>().unwrap_err();
        assert!(matches!(err, ScrubError::Configuration(_)));
        assert!(err.to_string().contains("'person'"));
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(ScrubCategory::Location.placeholder(), "[LOCATION]");
        assert_eq!(ScrubCategory::Location.to_string(), "location");
    }
}
