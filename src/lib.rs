//! URL shortener: redirect mapped request paths, fall through otherwise.
//!
//! A redirect table (JSON or YAML list of `path`/`url` pairs) is parsed into
//! an immutable [`PathMapping`](routing::PathMapping) and wrapped around a
//! fallback tower service. Requests whose target is in the table get a
//! `307 Temporary Redirect`; all others are passed to the fallback, which may
//! itself be another redirect table.
//!
//! ```no_run
//! use urlshort::{http::default_router, routing::yaml_handler};
//!
//! let yaml = b"- path: /urlshort\n  url: https://github.com/gophercises/urlshort\n";
//! let service = yaml_handler(yaml, default_router()).expect("valid table");
//! # let _ = service;
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mapping;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use mapping::{Format, ParseError, Record};
pub use routing::{PathMapping, RedirectLayer, RedirectService};
