//! Structured logging facility
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Canonical field keys and event names in [`schema`]
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use unordered_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! Library code only emits events; nothing is printed until a binary or a
//! test installs a subscriber.

pub mod init;
pub mod macros;
pub mod schema;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
