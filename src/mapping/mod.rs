//! Redirect table parsing.
//!
//! # Data Flow
//! ```text
//! raw bytes (JSON or YAML)
//!     → parser.rs (tab normalisation for YAML, serde decode)
//!     → Vec<Record> (ordered, duplicates preserved)
//!     → handed to routing::PathMapping
//! ```
//!
//! # Design Decisions
//! - Records keep input order so later duplicates can overwrite earlier ones
//! - Missing `path`/`url` fields decode to empty strings, not errors
//! - Parsing never panics; the caller decides whether a failure is fatal

pub mod parser;
pub mod record;

pub use parser::{parse, parse_json, parse_yaml, Format, ParseError};
pub use record::Record;
