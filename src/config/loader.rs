//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScrubConfig;
use crate::anonymization::config::parse_list;
use crate::domain::errors::ScrubError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ScrubConfig
/// 4. Applies environment variable overrides (TEXTSCRUB_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use textscrub::config::loader::load_config;
///
/// let config = load_config("textscrub.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ScrubConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScrubError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScrubError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: ScrubConfig = toml::from_str(&contents)
        .map_err(|e| ScrubError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finalize(config)
}

/// Loads configuration from a file if it exists, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ScrubConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        finalize(ScrubConfig::default())
    }
}

fn finalize(mut config: ScrubConfig) -> Result<ScrubConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ScrubError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ScrubError::Other(format!("Invalid substitution pattern: {}", e)))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Comment lines are copied untouched
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ScrubError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using TEXTSCRUB_* prefix
///
/// Environment variables follow the pattern: TEXTSCRUB_<SECTION>_<KEY>
/// For example: TEXTSCRUB_APPLICATION_LOG_LEVEL, TEXTSCRUB_ANONYMIZATION_SCRUBBERS
fn apply_env_overrides(config: &mut ScrubConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("TEXTSCRUB_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Anonymization overrides
    config.anonymization.apply_env_overrides()?;

    // Logging overrides
    if let Ok(val) = std::env::var("TEXTSCRUB_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("TEXTSCRUB_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("TEXTSCRUB_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

/// Override the configured scrubbers from a comma-separated CLI value
pub fn override_scrubbers(config: &mut ScrubConfig, value: &str) -> Result<()> {
    config.anonymization.scrubbers = parse_list(value);
    config.anonymization.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("TEXTSCRUB_LOADER_TEST_VAR", "./audit/custom.log");
        let input = "log_path = \"${TEXTSCRUB_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "log_path = \"./audit/custom.log\"\n");
        std::env::remove_var("TEXTSCRUB_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("TEXTSCRUB_LOADER_MISSING_VAR");
        let input = "log_path = \"${TEXTSCRUB_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("TEXTSCRUB_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("TEXTSCRUB_LOADER_COMMENTED_VAR");
        let input = "# path = \"${TEXTSCRUB_LOADER_COMMENTED_VAR}\"\nscrubbers = [\"location\"]";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${TEXTSCRUB_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("nonexistent.toml").unwrap_err();
        assert!(matches!(err, ScrubError::Configuration(_)));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "warn"

[anonymization]
scrubbers = ["location"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.anonymization.scrubbers, vec!["location".to_string()]);
    }

    #[test]
    fn test_load_config_rejects_unknown_scrubber() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[anonymization]\nscrubbers = [\"phone\"]\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, ScrubError::Configuration(_)));
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let config = load_config_or_default("does-not-exist.toml").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_override_scrubbers() {
        let mut config = ScrubConfig::default();
        override_scrubbers(&mut config, "Location").unwrap();
        assert_eq!(config.anonymization.scrubbers, vec!["Location".to_string()]);
        assert!(override_scrubbers(&mut config, "location,unknown").is_err());
    }
}
