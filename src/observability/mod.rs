//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (startup, table loading, redirects)
//!     → tower-http request spans (method, uri, request ID)
//!
//! Consumer:
//!     → logging.rs (fmt subscriber on stdout)
//! ```

pub mod logging;
