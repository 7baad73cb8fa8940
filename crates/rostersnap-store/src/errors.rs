//! Error handling for rostersnap-store
//!
//! Wraps rostersnap-core ExError with store-specific helpers

use std::path::Path;

use rostersnap_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create a JSON (de)serialization error
pub fn json_error(operation: &str, path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation)
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create a TOML policy parse error
pub fn policy_parse_error(path: &Path, err: toml::de::Error) -> ExError {
    ExError::new(ExErrorKind::InvalidPolicy)
        .with_op("load_policy")
        .with_message(format!("{}: {}", path.display(), err))
}
