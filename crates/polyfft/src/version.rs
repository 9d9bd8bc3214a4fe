//! Version information.

use polyfft_core::registry::{DefaultFactory, MultiplierFactory};

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line for `--details`: target, OS and the available multipliers.
#[must_use]
pub fn full_version() -> String {
    let factory = DefaultFactory::new();
    format!(
        "polyfft {} ({}-{}; multipliers: {})",
        version(),
        std::env::consts::ARCH,
        std::env::consts::OS,
        factory.available().join(", ")
    )
}
