//! Build-time information
//!
//! Metadata captured by `build.rs` at compile time.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., aarch64-linux-android, x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.88.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Returns the crate version with its build target
///
/// Format: `{version} ({target_triple}-opt{opt_level})`
pub fn version_string() -> String {
    format!(
        "{} ({}-opt{})",
        env!("CARGO_PKG_VERSION"),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL
    )
}
