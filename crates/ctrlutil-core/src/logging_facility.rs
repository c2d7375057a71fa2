//! Structured logging facility for ctrlutil
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use ctrlutil_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! The level filter defaults per profile and can be overridden with `RUST_LOG`.

use std::time::Instant;

pub mod init;
pub mod macros;
pub mod test_capture;

pub use ctrlutil_core_types::schema;
pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

/// Milliseconds since `start`, saturating at `u64::MAX`
pub fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
