//! Configuration schema definitions.
//!
//! This module defines the server settings read from the optional TOML file.
//! All types derive Serde traits and every section falls back to defaults,
//! so an empty file (or no file at all) yields a working server.

use serde::{Deserialize, Serialize};

use crate::mapping::{Format, Record};

/// Root configuration for the redirect server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Location and encoding of the redirect table file.
    pub mapping: MappingConfig,

    /// Redirects compiled into the chain behind the file table.
    pub redirects: Vec<Record>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            mapping: MappingConfig::default(),
            redirects: default_redirects(),
        }
    }
}

fn default_redirects() -> Vec<Record> {
    vec![
        Record::new(
            "/urlshort-godoc",
            "https://godoc.org/github.com/gophercises/urlshort",
        ),
        Record::new("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
    ]
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Redirect table file settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Path to the JSON or YAML redirect table.
    pub path: String,

    /// Explicit encoding; inferred from the file extension when absent.
    pub format: Option<Format>,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            path: "paths.json".to_string(),
            format: None,
        }
    }
}
