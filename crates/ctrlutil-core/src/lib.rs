//! ctrlutil core - small helpers shared by controller code
//!
//! This crate provides:
//! - Set difference over key-value records (`set_diff`, `json`)
//! - Exhaustiveness assertions for closed enumerations (`exhaustive`)
//! - Record shape transforms mirroring set difference on schemas (`shape`)
//! - The error and logging facilities used by all of the above

pub mod errors;
pub mod exhaustive;
pub mod json;
pub mod logging_facility;
pub mod set_diff;
pub mod shape;

// Re-export commonly used types
pub use errors::{ErrorKind, ErrorReport, Result, UtilError};
pub use exhaustive::{assert_exhaustive, into_ok, invalid_branch};
pub use set_diff::{set_diff, set_diff_owned, KeySet};
pub use shape::{Field, KeyKind, PropertyKey, Shape, ValueType};
