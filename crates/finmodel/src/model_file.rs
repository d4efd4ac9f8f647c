//! Model and history documents on disk
//!
//! A model file pairs the business assumptions with optional run settings:
//!
//! ```yaml
//! assumptions:
//!   revenue_start: 100000
//!   revenue_growth_rate: 0.15
//!   equity_raises:
//!     - { month: 6, amount: 500000 }
//! projection:
//!   months: 24
//!   start_date: 2025-01-01
//! ```
//!
//! History files carry `revenue:` and `cogs:` series for inference. Both are
//! read as YAML or JSON depending on the file extension.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use finmodel_core::inference::HistoricalFinancials;
use finmodel_core::{ModelAssumptions, ProjectionConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Assumptions plus run settings, as stored in a model file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub assumptions: ModelAssumptions,
    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ModelFileError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ModelFileError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Error types for model file operations
#[derive(Debug)]
pub enum ModelFileError {
    /// File could not be read
    Io { path: PathBuf, message: String },
    /// Content is not a valid document of the expected shape
    Parse { path: PathBuf, message: String },
    /// Value could not be encoded
    Serialize(String),
    /// Extension is neither YAML nor JSON
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for ModelFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFileError::Io { path, message } => {
                write!(f, "IO error reading {}: {}", path.display(), message)
            }
            ModelFileError::Parse { path, message } => {
                write!(f, "Parse error in {}: {}", path.display(), message)
            }
            ModelFileError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            ModelFileError::UnsupportedFormat(path) => write!(
                f,
                "Unsupported file type {} (expected .yaml, .yml or .json)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ModelFileError {}

/// Read and decode a YAML or JSON document
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ModelFileError> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| ModelFileError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_document(&content, format).map_err(|message| ModelFileError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_document<T: DeserializeOwned>(content: &str, format: Format) -> Result<T, String> {
    match format {
        Format::Yaml => serde_saphyr::from_str(content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Load a model file
pub fn load_model(path: &Path) -> Result<ModelFile, ModelFileError> {
    let model: ModelFile = read_document(path)?;
    tracing::debug!(
        path = %path.display(),
        equity_events = model.assumptions.equity_raises.len(),
        debt_events = model.assumptions.debt_raises.len(),
        capex_events = model.assumptions.capex_schedule.len(),
        "loaded model file"
    );
    Ok(model)
}

/// Load historical revenue and COGS series
pub fn load_history(path: &Path) -> Result<HistoricalFinancials, ModelFileError> {
    read_document(path)
}

/// Encode a value as YAML
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, ModelFileError> {
    serde_saphyr::to_string(value).map_err(|e| ModelFileError::Serialize(e.to_string()))
}
