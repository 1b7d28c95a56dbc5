//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::mapping::{self, Format, ParseError, Record};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse redirect table {}: {source}", .path.display())]
    Mapping {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("invalid server settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate server settings from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ServerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Read and decode a redirect table file.
///
/// When `format` is `None` it is inferred from the file extension.
pub fn load_mapping(path: &Path, format: Option<Format>) -> Result<Vec<Record>, ConfigError> {
    let format = format.unwrap_or_else(|| Format::from_path(path));
    let bytes = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = mapping::parse(&bytes, format).map_err(|source| ConfigError::Mapping {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        format = %format,
        records = records.len(),
        "Redirect table loaded"
    );

    Ok(records)
}
