//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the logging macros,
//! error reports and test capture.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Record sizes
pub const FIELD_LEFT_LEN: &str = "left_len";
pub const FIELD_RIGHT_LEN: &str = "right_len";
pub const FIELD_RESULT_LEN: &str = "result_len";

// Shape transforms
pub const FIELD_FIELD_COUNT: &str = "field_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
/// Rendered `ErrorReport`, operation name included
pub const FIELD_ERROR: &str = "error";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_INVALID_BRANCH: &str = "invalid_branch";
