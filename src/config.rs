use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved service configuration with all values filled in (no Options).
///
/// This struct carries the service defaults and can be deserialized by the
/// TOML loader. All fields have concrete values, making it safe to access
/// directly without unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    // Simulated latency per operation class, in milliseconds.
    // Defaults mirror the latencies the platform has always shown.
    /// Delay before list queries (tenders, companies) resolve
    pub list_latency_ms: u64,
    /// Delay before by-id lookups resolve
    pub detail_latency_ms: u64,
    /// Delay before combined free-text search resolves
    pub search_latency_ms: u64,
    /// Delay before sector aggregation resolves
    pub aggregate_latency_ms: u64,
    /// Delay before an export completes
    pub export_latency_ms: u64,

    /// Default page size echoed by list queries when the caller sets none
    pub page_limit: u32,
    /// Directory exported files are written to
    pub export_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            list_latency_ms: 600,
            detail_latency_ms: 500,
            search_latency_ms: 800,
            aggregate_latency_ms: 600,
            export_latency_ms: 1000,
            page_limit: 10,
            export_dir: PathBuf::from("data/exports"),
        }
    }
}

impl ServiceConfig {
    /// Configuration with every simulated delay set to zero. Intended for
    /// tests and embedders that do not want the artificial latency.
    pub fn instant() -> Self {
        Self {
            list_latency_ms: 0,
            detail_latency_ms: 0,
            search_latency_ms: 0,
            aggregate_latency_ms: 0,
            export_latency_ms: 0,
            ..Self::default()
        }
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// Every field is optional and falls back to its default. Rejects
    /// unknown keys to prevent typos from being silently ignored, and
    /// validates that `page_limit` is greater than 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are
    /// present, or `page_limit` is zero. Returns `IoError` if the file
    /// cannot be read.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.page_limit == 0 {
            return Err(AppError::InvalidInput(
                "Page limit must be greater than 0".into(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.list_latency_ms, 600);
        assert_eq!(config.detail_latency_ms, 500);
        assert_eq!(config.search_latency_ms, 800);
        assert_eq!(config.export_latency_ms, 1000);
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.export_dir, PathBuf::from("data/exports"));
    }

    #[test]
    fn instant_config_has_no_delays() {
        let config = ServiceConfig::instant();
        assert_eq!(config.list_latency_ms, 0);
        assert_eq!(config.detail_latency_ms, 0);
        assert_eq!(config.search_latency_ms, 0);
        assert_eq!(config.aggregate_latency_ms, 0);
        assert_eq!(config.export_latency_ms, 0);
        // Non-latency fields keep their defaults
        assert_eq!(config.page_limit, 10);
    }

    #[test]
    fn partial_toml_is_parsed_and_defaults_apply() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            list_latency_ms = 0
            page_limit = 25
            "#,
        )
        .unwrap();

        let config = ServiceConfig::from_toml_file(tmp.path()).unwrap();
        assert_eq!(config.list_latency_ms, 0);
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.detail_latency_ms, 500);
        assert_eq!(config.export_latency_ms, 1000);
    }

    #[test]
    fn zero_page_limit_errors() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "page_limit = 0").unwrap();

        assert!(ServiceConfig::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn unknown_key_errors() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            page_limit = 10
            extra_flag = true
            "#,
        )
        .unwrap();

        assert!(ServiceConfig::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn nonexistent_file_errors() {
        let result = ServiceConfig::from_toml_file(Path::new("nonexistent.toml"));
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
