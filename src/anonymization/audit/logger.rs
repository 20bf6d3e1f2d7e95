//! Audit logger for anonymization operations

use crate::anonymization::models::ScrubbedExample;
use crate::domain::{Result, ScrubError};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    example_index: usize,
    replacements_count: usize,
    categories: Vec<AuditCategory>,
    processing_time_ms: u64,
    /// SHA-256 hash of the original text (never log plaintext input)
    input_hash: String,
}

#[derive(Debug, Serialize)]
struct AuditCategory {
    category: String,
    count: usize,
}

/// Audit logger for anonymization operations
#[derive(Debug)]
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ScrubError::Io(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Path of the audit log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Log one scrubbed example
    pub fn log_example(&self, example: &ScrubbedExample) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: example.timestamp.to_rfc3339(),
            example_index: example.index,
            replacements_count: example.total_replacements(),
            categories: example
                .replacements
                .iter()
                .map(|(category, count)| AuditCategory {
                    category: category.label().to_string(),
                    count: *count,
                })
                .collect(),
            processing_time_ms: example.processing_time_ms,
            input_hash: hash_text(&example.original),
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                ScrubError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)?;
            writeln!(file, "{json_line}")?;
        } else {
            writeln!(
                file,
                "[{}] Example: {} | Replacements: {} | Time: {}ms | Input: {}",
                entry.timestamp,
                entry.example_index,
                entry.replacements_count,
                entry.processing_time_ms,
                entry.input_hash
            )?;
        }

        Ok(())
    }
}

/// Hash a text using SHA-256
fn hash_text(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
