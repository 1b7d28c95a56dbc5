//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! server settings (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!
//! redirect table (JSON/YAML)
//!     → loader.rs (read file, pick format)
//!     → mapping::parse
//!     → Vec<Record>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Any loading error is returned; the binary decides to abort

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_mapping, ConfigError};
pub use schema::{ListenerConfig, MappingConfig, ServerConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
