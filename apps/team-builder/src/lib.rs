#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod ingest;
pub mod report;
pub mod validator;

// Re-exports for public API
pub use config::rules::RulesConfig;
pub use errors::{DomainError, ErrorCode, Violation};
pub use ingest::{parse_selection_file, parse_squad_feed, replay_selection, Replay, Squad};
pub use report::TeamReport;
pub use validator::TeamValidator;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
