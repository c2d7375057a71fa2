//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter directive used when `RUST_LOG` is unset
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "ctrlutil=debug",
            Profile::Production => "ctrlutil=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
}

/// Initialize the logging facility
///
/// Only the first call has an effect. A host application that already
/// installed a global subscriber keeps it: `try_init` failures are ignored.
///
/// # Example
///
/// ```
/// use ctrlutil_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(env_filter(profile))
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter(profile))
                .finish()
                .try_init(),
            // Test capture is installed separately via init_test_capture()
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
