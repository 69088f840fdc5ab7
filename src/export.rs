//! Export of query results to files.
//!
//! The platform has always shipped exports as pretty-printed JSON whatever
//! the chosen format; the format only decides the file extension. Parsing an
//! exported file back yields a structure deep-equal to the input.

use crate::constants::EXPORT_FILE_PREFIX;
use crate::errors::AppResult;
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Target file extension for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl From<&str> for ExportFormat {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            // Default silently to CSV; callers can decide to log if needed.
            _ => Self::Csv,
        }
    }
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Serializes an export payload to its on-disk representation.
pub fn render_export<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Writes `data` to a date-stamped file under `dir` and returns a receipt.
///
/// The directory is created if missing. Succeeds for any serializable input.
pub async fn write_export<T: Serialize>(
    data: &T,
    format: ExportFormat,
    dir: &Path,
) -> AppResult<ExportReceipt> {
    let payload = render_export(data)?;
    let file_name = format!(
        "{EXPORT_FILE_PREFIX}-{}.{}",
        Utc::now().date_naive(),
        format.extension()
    );
    let path = dir.join(file_name);

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, payload.as_bytes()).await?;

    info!(
        path = %path.display(),
        bytes = payload.len(),
        "Export written"
    );

    Ok(ExportReceipt {
        path,
        bytes_written: payload.len() as u64,
    })
}
