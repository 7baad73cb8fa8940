//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Chain addressing
pub const FIELD_CHAIN_INDEX: &str = "chain_index";
pub const FIELD_UNIT_ID: &str = "unit_id";

// Collection sizes
pub const FIELD_CHAIN_LEN: &str = "chain_len";
pub const FIELD_DELETED_LEN: &str = "deleted_len";
pub const FIELD_PURGED_LEN: &str = "purged_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
