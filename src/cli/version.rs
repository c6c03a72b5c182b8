//! Version command for the Ihsan CLI.

/// The current version of Ihsan, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed by `--version`.
pub fn version_line() -> String {
    format!("ihsan {}", VERSION)
}
