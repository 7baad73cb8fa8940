//! Core types shared across rostersnap facilities
//!
//! This crate holds the canonical schema constants used by the logging and
//! error facilities of every other crate in the workspace:
//!
//! - **Field keys**: structured logging field names
//! - **Event names**: operation lifecycle events (start/end/end_error)

pub mod schema;
