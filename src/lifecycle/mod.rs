//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load settings → Read redirect table → Build chain → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: tables first, listener last (traffic only when ready)
//! - No reload path: the redirect tables live for the whole process

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
