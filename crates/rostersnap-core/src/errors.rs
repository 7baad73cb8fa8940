use thiserror::Error;

use crate::model::ChainIndex;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that hosts can use for programmatic
/// handling, testing, and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Chain addressing
    EmptyChain,
    IndexOutOfBounds,

    // Diff application
    /// A diff for a unit with no predecessor is missing a required field
    IncompleteUnit,

    // Configuration
    InvalidPolicy,
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyChain => "ERR_EMPTY_CHAIN",
            ExErrorKind::IndexOutOfBounds => "ERR_INDEX_OUT_OF_BOUNDS",
            ExErrorKind::IncompleteUnit => "ERR_INCOMPLETE_UNIT",
            ExErrorKind::InvalidPolicy => "ERR_INVALID_POLICY",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context (operation, chain index,
/// unit id) for programmatic handling and debugging. Hosts (store, CLI) report
/// failures through this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    index: Option<ChainIndex>,
    unit_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            index: None,
            unit_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add chain index context
    pub fn with_index(mut self, index: ChainIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Add unit id context
    pub fn with_unit_id(mut self, id: impl Into<String>) -> Self {
        self.unit_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the chain index context, if any
    pub fn index(&self) -> Option<ChainIndex> {
        self.index
    }

    /// Get the unit id context, if any
    pub fn unit_id(&self) -> Option<&str> {
        self.unit_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(unit_id) = &self.unit_id {
            write!(f, " (unit_id: {})", unit_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for snapshot chain operations
///
/// Every variant is a caller-contract violation: the host asked for something
/// the chain cannot provide. Stale-UI races (deleting an entry that no longer
/// exists) are not errors; those operations return the chain unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Chain has no base snapshot, so no index can be resolved
    #[error("Cannot resolve index {index}: snapshot chain is empty (no base)")]
    EmptyChain { index: ChainIndex },

    /// Index outside the chain
    #[error("Snapshot index {index} is out of bounds for a chain with {len} diffs")]
    IndexOutOfBounds { index: ChainIndex, len: usize },

    /// A diff introducing a new unit did not populate every field
    #[error("Diff for new unit {unit_id} is missing field `{field}`")]
    IncompleteNewUnit { unit_id: String, field: &'static str },

    /// Retention policy values are unusable
    #[error("Invalid retention policy: {reason}")]
    InvalidPolicy { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::EmptyChain { index } => ExError::new(ExErrorKind::EmptyChain)
                .with_index(index)
                .with_message("Snapshot chain has no base"),

            RosterError::IndexOutOfBounds { index, len } => {
                ExError::new(ExErrorKind::IndexOutOfBounds)
                    .with_index(index)
                    .with_message(format!("Chain has {} diffs", len))
            }

            RosterError::IncompleteNewUnit { unit_id, field } => {
                ExError::new(ExErrorKind::IncompleteUnit)
                    .with_unit_id(unit_id)
                    .with_message(format!("New unit diff is missing `{}`", field))
            }

            RosterError::InvalidPolicy { reason } => {
                ExError::new(ExErrorKind::InvalidPolicy).with_message(reason)
            }

            RosterError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_carries_context() {
        let ex: ExError = RosterError::IndexOutOfBounds { index: 7, len: 3 }.into();
        assert_eq!(ex.kind(), ExErrorKind::IndexOutOfBounds);
        assert_eq!(ex.code(), "ERR_INDEX_OUT_OF_BOUNDS");
        assert_eq!(ex.index(), Some(7));
        assert!(ex.to_string().contains("3 diffs"));
    }

    #[test]
    fn test_incomplete_unit_carries_unit_id() {
        let ex: ExError = RosterError::IncompleteNewUnit {
            unit_id: "ultraTitus".to_string(),
            field: "rank",
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::IncompleteUnit);
        assert_eq!(ex.unit_id(), Some("ultraTitus"));
    }

    #[test]
    fn test_display_without_context() {
        let ex = ExError::new(ExErrorKind::Internal);
        assert_eq!(ex.to_string(), "[ERR_INTERNAL]");
    }
}
