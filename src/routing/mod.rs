//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, target)
//!     → matcher.rs (extract lookup key: path + query)
//!     → router.rs (exact lookup in PathMapping)
//!     → hit:  location.rs (307 + Location)
//!     → miss: fallback service, request untouched
//!
//! Chain Construction (at startup):
//!     Vec<Record>
//!     → PathMapping (last duplicate wins)
//!     → RedirectService { mapping, fallback }
//!     → nested as often as there are tables
//! ```
//!
//! # Design Decisions
//! - Tables built at startup, immutable at runtime
//! - No pattern matching: exact string equality only
//! - Deterministic: same target always yields the same outcome

pub mod location;
pub mod matcher;
pub mod redirect;
pub mod router;

pub use redirect::{RedirectLayer, RedirectService};
pub use router::PathMapping;

use crate::mapping::{parse_json, parse_yaml, ParseError, Record};

/// Build a redirect service from records, in input order.
pub fn build_handler<S, I>(records: I, fallback: S) -> RedirectService<S>
where
    I: IntoIterator<Item = Record>,
{
    RedirectService::new(PathMapping::from_records(records), fallback)
}

/// Build a redirect service from in-memory `(path, url)` pairs.
pub fn map_handler<S, I, K, V>(pairs: I, fallback: S) -> RedirectService<S>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    RedirectService::new(pairs.into_iter().collect::<PathMapping>(), fallback)
}

/// Parse a JSON redirect table and wrap `fallback` with it.
pub fn json_handler<S>(json: &[u8], fallback: S) -> Result<RedirectService<S>, ParseError> {
    Ok(build_handler(parse_json(json)?, fallback))
}

/// Parse a YAML redirect table and wrap `fallback` with it.
pub fn yaml_handler<S>(yaml: &[u8], fallback: S) -> Result<RedirectService<S>, ParseError> {
    Ok(build_handler(parse_yaml(yaml)?, fallback))
}
