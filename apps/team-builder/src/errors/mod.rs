//! Error handling for the team builder.

pub mod domain;
pub mod error_code;
pub mod violation;

pub use domain::DomainError;
pub use error_code::ErrorCode;
pub use violation::Violation;
