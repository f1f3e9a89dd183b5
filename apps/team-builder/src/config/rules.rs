//! Rule-set configuration read from the environment.
//!
//! `FANTASY_ROLE_POLICY` selects the role-composition policy (`minimum` or
//! `range`). Unset or empty means the default `minimum`.

use std::env;

use tracing::debug;

use crate::domain::RolePolicy;
use crate::errors::domain::DomainError;

pub const ROLE_POLICY_VAR: &str = "FANTASY_ROLE_POLICY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesConfig {
    pub policy: RolePolicy,
}

impl RulesConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        let policy = match optional_var(ROLE_POLICY_VAR) {
            Some(raw) => raw.parse()?,
            None => RolePolicy::default(),
        };
        debug!(%policy, "rules config loaded");
        Ok(Self { policy })
    }

    /// Override the policy, e.g. from a command line flag.
    pub fn with_policy(self, policy: RolePolicy) -> Self {
        Self { policy }
    }
}

/// Get an environment variable, treating blank values as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
