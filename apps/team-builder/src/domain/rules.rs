use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::roles::{RoleCategory, RoleCounts};
use crate::errors::domain::DomainError;

pub const ROSTER_SIZE: usize = 11;
pub const TEAM_CAP: usize = 7;

/// Role-composition policy applied at submission.
///
/// Two incompatible rule sets exist for fantasy cricket teams. `MinimumOnly`
/// is the canonical one; `Range` must be opted into explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePolicy {
    /// Batter >= 1, WK-Batter >= 1, Allrounder >= 1, Bowler >= 3.
    #[default]
    MinimumOnly,
    /// WK-Batter 1..=4, Batter 3..=5, Allrounder 1..=3, Bowler 3..=5.
    Range,
}

impl RolePolicy {
    pub const fn name(self) -> &'static str {
        match self {
            RolePolicy::MinimumOnly => "minimum",
            RolePolicy::Range => "range",
        }
    }

    pub const fn bound(self, category: RoleCategory) -> RoleBound {
        match self {
            RolePolicy::MinimumOnly => match category {
                RoleCategory::WkBatter => RoleBound::at_least(1),
                RoleCategory::Batter => RoleBound::at_least(1),
                RoleCategory::BowlingAllrounder => RoleBound::at_least(1),
                RoleCategory::Bowler => RoleBound::at_least(3),
            },
            RolePolicy::Range => match category {
                RoleCategory::WkBatter => RoleBound::between(1, 4),
                RoleCategory::Batter => RoleBound::between(3, 5),
                RoleCategory::BowlingAllrounder => RoleBound::between(1, 3),
                RoleCategory::Bowler => RoleBound::between(3, 5),
            },
        }
    }
}

impl fmt::Display for RolePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RolePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimum" | "minimum_only" | "min" => Ok(RolePolicy::MinimumOnly),
            "range" => Ok(RolePolicy::Range),
            other => Err(DomainError::config(format!(
                "Unknown role policy '{other}' (expected 'minimum' or 'range')"
            ))),
        }
    }
}

/// Inclusive bound on one role category; `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleBound {
    pub min: u8,
    pub max: Option<u8>,
}

impl RoleBound {
    pub const fn at_least(min: u8) -> Self {
        Self { min, max: None }
    }

    pub const fn between(min: u8, max: u8) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn contains(&self, count: u8) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

/// One category whose count falls outside the active policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleViolation {
    pub category: RoleCategory,
    pub count: u8,
    pub bound: RoleBound,
}

impl RoleViolation {
    pub fn is_shortfall(&self) -> bool {
        self.count < self.bound.min
    }
}

impl fmt::Display for RoleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_shortfall(), self.bound.max) {
            (false, Some(max)) => write!(
                f,
                "at most {max} {} allowed (have {})",
                self.category, self.count
            ),
            _ => write!(
                f,
                "need at least {} {} (have {})",
                self.bound.min, self.category, self.count
            ),
        }
    }
}

/// Per-category violations of `policy`, in precedence order.
pub fn role_violations(counts: &RoleCounts, policy: RolePolicy) -> Vec<RoleViolation> {
    counts
        .iter()
        .filter_map(|(category, count)| {
            let bound = policy.bound(category);
            (!bound.contains(count)).then_some(RoleViolation {
                category,
                count,
                bound,
            })
        })
        .collect()
}

pub fn is_role_composition_valid(counts: &RoleCounts, policy: RolePolicy) -> bool {
    counts
        .iter()
        .all(|(category, count)| policy.bound(category).contains(count))
}
