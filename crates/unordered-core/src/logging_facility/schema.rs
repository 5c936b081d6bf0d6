//! Canonical schema constants for structured logging

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Default filter directive when `RUST_LOG` is unset
pub const DEFAULT_FILTER_DEV: &str = "unordered=debug";
/// Production keeps library events at `info` but shows CLI command start/end
pub const DEFAULT_FILTER_PROD: &str = "unordered=info,unordered::commands=debug";
