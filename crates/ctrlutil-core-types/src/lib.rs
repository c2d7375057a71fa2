//! Core types shared across ctrlutil facilities
//!
//! This crate provides the foundational vocabulary used by both the error
//! facility and the logging facility of `ctrlutil-core`:
//!
//! - **Schema constants**: canonical field keys and event names
//! - **Record sides**: which operand of a binary record operation is meant

pub mod schema;
pub mod side;

pub use side::Side;
