//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate the effective configuration, command-line overrides included
//! - Read the redirect table named by the configuration
//! - Build the server with its full redirect chain
//!
//! # Design Decisions
//! - Fail fast: any startup error is returned before a socket is bound
//! - No partial startup; a broken table never yields a server

use std::path::Path;

use crate::config::{load_mapping, validate_config, ConfigError, ServerConfig};
use crate::http::HttpServer;

/// Load everything `config` refers to and assemble the server.
pub fn build_server(config: ServerConfig) -> Result<HttpServer, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;

    let records = load_mapping(Path::new(&config.mapping.path), config.mapping.format)?;
    Ok(HttpServer::new(config, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationError;

    #[test]
    fn test_broken_table_yields_no_server() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.json");
        std::fs::write(&path, "[{\"path\": ").unwrap();

        let mut config = ServerConfig::default();
        config.mapping.path = path.display().to_string();

        assert!(matches!(build_server(config), Err(ConfigError::Mapping { .. })));
    }

    #[test]
    fn test_invalid_overrides_rejected_before_loading() {
        let mut config = ServerConfig::default();
        config.mapping.path = String::new();
        config.listener.bind_address = "not-an-address".into();

        match build_server(config) {
            Err(ConfigError::Validation(errors)) => assert_eq!(
                errors,
                vec![
                    ValidationError::InvalidBindAddress("not-an-address".into()),
                    ValidationError::EmptyMappingPath,
                ]
            ),
            Err(other) => panic!("expected validation error, got {other}"),
            Ok(_) => panic!("expected validation error, got a server"),
        }
    }

    #[test]
    fn test_missing_table_yields_no_server() {
        let mut config = ServerConfig::default();
        config.mapping.path = "/nonexistent/urlshort/paths.json".into();

        assert!(matches!(build_server(config), Err(ConfigError::Read { .. })));
    }
}
