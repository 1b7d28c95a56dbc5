//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address resolves)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::ToSocketAddrs;

use crate::config::schema::ServerConfig;

/// A single semantic problem in the server settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' does not resolve to a socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("mapping.path must not be empty")]
    EmptyMappingPath,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Same resolution `TcpListener::bind` performs, so `localhost:8080` passes.
    let resolves = config
        .listener
        .bind_address
        .to_socket_addrs()
        .map(|mut addrs| addrs.next().is_some())
        .unwrap_or(false);
    if !resolves {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.mapping.path.trim().is_empty() {
        errors.push(ValidationError::EmptyMappingPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_host_names_accepted() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost:8080".into();
        assert!(validate_config(&config).is_ok());

        config.listener.bind_address = "[::1]:0".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.mapping.path = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBindAddress("localhost".into()),
                ValidationError::ZeroRequestTimeout,
                ValidationError::EmptyMappingPath,
            ]
        );
    }
}
