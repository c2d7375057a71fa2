//! Exhaustiveness assertions for closed enumerations.
//!
//! [`assert_exhaustive`] only accepts [`Infallible`], so a call compiles only
//! where the compiler has proven every other case handled:
//!
//! ```
//! use std::convert::Infallible;
//! use ctrlutil_core::assert_exhaustive;
//!
//! enum SnapSource<E> {
//!     Local(String),
//!     Npm(String),
//!     Other(E),
//! }
//!
//! fn location(source: SnapSource<Infallible>) -> String {
//!     match source {
//!         SnapSource::Local(path) => path,
//!         SnapSource::Npm(name) => format!("npm:{name}"),
//!         SnapSource::Other(never) => assert_exhaustive(never),
//!     }
//! }
//!
//! assert_eq!(location(SnapSource::Npm("x".into())), "npm:x");
//! ```
//!
//! Where exhaustiveness cannot be proven statically (a `#[non_exhaustive]`
//! enum from another crate, a value decoded from untrusted input), the
//! default arm calls [`invalid_branch`] instead, which fails loudly at run
//! time.

use std::convert::Infallible;
use std::fmt::Debug;

use crate::errors::{ErrorReport, UtilError};
use crate::logging_facility::schema::EVENT_INVALID_BRANCH;

/// Statically unreachable; the empty match is the proof.
#[inline(always)]
pub fn assert_exhaustive(value: Infallible) -> ! {
    match value {}
}

/// Runtime fallback for a match arm that should never be taken.
///
/// Logs an `invalid_branch` error event and panics with an
/// [`UtilError::InvalidBranch`] message. Never returns.
#[cold]
#[inline(never)]
#[track_caller]
pub fn invalid_branch<T: Debug + ?Sized>(value: &T) -> ! {
    let err = UtilError::InvalidBranch {
        value: format!("{value:?}"),
    };
    let report = ErrorReport::from(err.clone());
    let location = std::panic::Location::caller();

    tracing::error!(
        component = module_path!(),
        event = EVENT_INVALID_BRANCH,
        err_code = report.code(),
        location = %location,
        "{}",
        report.message()
    );

    panic!("{err}")
}

/// Unwraps a result whose error type is uninhabited.
pub fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => assert_exhaustive(never),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Prefix {
        Local,
        Npm,
    }

    impl FromStr for Prefix {
        type Err = Infallible;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(if s.starts_with("local:") {
                Prefix::Local
            } else {
                Prefix::Npm
            })
        }
    }

    #[test]
    fn test_into_ok_unwraps_infallible_result() {
        assert_eq!(into_ok("local:snap".parse::<Prefix>()), Prefix::Local);
        assert_eq!(into_ok(Prefix::from_str("npm:snap")), Prefix::Npm);
    }

    #[test]
    #[should_panic(expected = "Invalid branch reached. Should be detected during compilation")]
    fn test_invalid_branch_panics() {
        let raw = 7u8;
        match raw {
            0 => {}
            1 => {}
            other => invalid_branch(&other),
        }
    }

    #[test]
    fn test_invalid_branch_never_returns() {
        let outcome = panic::catch_unwind(|| -> u32 { invalid_branch("unlisted") });

        let payload = match outcome {
            Ok(_) => panic!("invalid_branch returned a value"),
            Err(payload) => payload,
        };
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert!(message.contains("\"unlisted\""));
    }
}
