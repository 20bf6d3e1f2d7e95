//! Input/output dataset shape
//!
//! Both the input and output of the pipeline are `{"examples": [string, ...]}`.

use super::errors::ScrubError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key holding the example list
pub const EXAMPLES_KEY: &str = "examples";

/// A dataset of free-text examples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Examples in input order
    pub examples: Vec<String>,
}

impl Dataset {
    /// Create a dataset from a list of examples
    pub fn new(examples: Vec<String>) -> Self {
        Self { examples }
    }

    /// Build a dataset from an arbitrary JSON value
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::Dataset`] if the value is not an object, has no
    /// `examples` key, `examples` is not an array, or an entry is not a string.
    /// The first offending entry is reported.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ScrubError::Dataset(format!(
                "expected a JSON object with an '{EXAMPLES_KEY}' key, got {}",
                json_kind(value)
            ))
        })?;

        let examples = object.get(EXAMPLES_KEY).ok_or_else(|| {
            ScrubError::Dataset(format!("missing required key '{EXAMPLES_KEY}'"))
        })?;

        let entries = examples.as_array().ok_or_else(|| {
            ScrubError::Dataset(format!(
                "'{EXAMPLES_KEY}' must be an array, got {}",
                json_kind(examples)
            ))
        })?;

        let examples = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                entry.as_str().map(str::to_string).ok_or_else(|| {
                    ScrubError::Dataset(format!(
                        "example at index {idx} must be a string, got {}",
                        json_kind(entry)
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { examples })
    }

    /// Parse a dataset from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    /// Convert into a JSON value of the same shape
    pub fn to_value(&self) -> Value {
        serde_json::json!({ EXAMPLES_KEY: self.examples })
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the dataset has no examples
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
