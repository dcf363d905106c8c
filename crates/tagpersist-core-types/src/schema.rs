//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Persistence context
pub const FIELD_COMPONENT_TYPE: &str = "component_type";
pub const FIELD_PROPERTY: &str = "property";
pub const FIELD_TAG: &str = "tag";
pub const FIELD_DEPTH: &str = "depth";

// Output sizes
pub const FIELD_BYTES_WRITTEN: &str = "bytes_written";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
