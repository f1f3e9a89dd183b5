//! Test support utilities shared by the workspace test suites
//!
//! This crate provides one-time logging setup for test binaries and helpers
//! that generate unique labels (ULID based) so fixtures never collide.

pub mod logging;

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("team");
/// let id2 = unique_str("team");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("team-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique fantasy team name, e.g. `XI 01J...`.
///
/// The result is never blank once trimmed, which makes it a safe default for
/// selections that are expected to pass submission checks.
pub fn unique_team_name() -> String {
    format!("XI {}", Ulid::new())
}
