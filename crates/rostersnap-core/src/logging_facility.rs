//! Structured logging facility for rostersnap
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Chain-mutating operations (take, purge, delete, restore, rename) own the
//! start/end events. Lower layers (diff, resolve) only use `tracing::debug!`
//! or `tracing::trace!` for internal details.
//!
//! # Usage
//!
//! ```rust
//! use rostersnap_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
