//! Subcommand implementations
//!
//! Each command loads the chain file, runs one engine operation and, for
//! mutating commands, saves the result.

pub mod diff;
pub mod lifecycle;
pub mod list;
pub mod purge;
pub mod show;
pub mod take;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rostersnap_core::errors::{ExError, RosterError};

/// Result type shared by every subcommand
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// File locations resolved from the global options
#[derive(Debug)]
pub struct Context {
    pub chain_path: PathBuf,
    pub policy_path: PathBuf,
}

/// Attach the subcommand name to an engine error
pub(crate) fn engine_error(op: &'static str) -> impl Fn(RosterError) -> ExError {
    move |err| ExError::from(err).with_op(op)
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn format_millis(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(date) => date.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{millis} ms"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rostersnap_core::errors::ExErrorKind;

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(0), "1970-01-01 00:00");
        assert_eq!(format_millis(i64::MAX), format!("{} ms", i64::MAX));
    }

    #[test]
    fn test_engine_error_sets_op() {
        let err = engine_error("show")(RosterError::EmptyChain { index: 0 });
        assert_eq!(err.kind(), ExErrorKind::EmptyChain);
        assert_eq!(err.op(), Some("show"));
    }
}
