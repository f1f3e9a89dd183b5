//! Submission-time checks and the selection lifecycle stage.

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::domain::rules::{
    is_role_composition_valid, role_violations, RolePolicy, RoleViolation, ROSTER_SIZE,
};
use crate::domain::selection::{role_counts, SelectionState};
use crate::errors::Violation;

/// Itemized verdict on whether a selection may be submitted.
///
/// Every check is evaluated independently so a caller can show all problems
/// at once. `ok` is the conjunction of the boolean checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub exactly_eleven_players: bool,
    pub captain_set: bool,
    pub vice_captain_set: bool,
    /// False only when captain and vice-captain are set to the same player.
    pub captain_vice_captain_distinct: bool,
    pub team_name_non_empty: bool,
    pub role_composition_valid: bool,
    pub role_violations: Vec<RoleViolation>,
    pub selected: usize,
    pub ok: bool,
}

impl ValidationResult {
    /// Failing checks as taxonomy entries, in a stable display order.
    pub fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        if !self.exactly_eleven_players {
            out.push(Violation::IncompleteRoster {
                selected: self.selected,
            });
        }
        if !self.captain_set {
            out.push(Violation::CaptainMissing);
        }
        if !self.vice_captain_set {
            out.push(Violation::ViceCaptainMissing);
        }
        if !self.captain_vice_captain_distinct {
            out.push(Violation::CaptainViceCaptainSame);
        }
        if !self.team_name_non_empty {
            out.push(Violation::InvalidTeamName);
        }
        out.extend(
            self.role_violations
                .iter()
                .copied()
                .map(Violation::RoleCompositionInvalid),
        );
        out
    }
}

/// Trimmed, NFKC-normalized team name.
pub fn normalize_team_name(name: &str) -> String {
    name.trim().nfkc().collect::<String>().trim().to_string()
}

pub fn is_submittable(state: &SelectionState, policy: RolePolicy) -> ValidationResult {
    let counts = role_counts(state);
    let captain = state.captain_id();
    let vice = state.vice_captain_id();

    let exactly_eleven_players = state.len() == ROSTER_SIZE;
    let captain_set = captain.is_some_and(|id| state.contains(id));
    let vice_captain_set = vice.is_some_and(|id| state.contains(id));
    let captain_vice_captain_distinct = match (captain, vice) {
        (Some(c), Some(v)) => c != v,
        _ => true,
    };
    let team_name_non_empty = !normalize_team_name(state.team_name()).is_empty();
    let role_composition_valid = is_role_composition_valid(&counts, policy);

    let ok = exactly_eleven_players
        && captain_set
        && vice_captain_set
        && captain_vice_captain_distinct
        && team_name_non_empty
        && role_composition_valid;

    ValidationResult {
        exactly_eleven_players,
        captain_set,
        vice_captain_set,
        captain_vice_captain_distinct,
        team_name_non_empty,
        role_composition_valid,
        role_violations: role_violations(&counts, policy),
        selected: state.len(),
        ok,
    }
}

/// Where a selection sits in its lifecycle.
///
/// Submitted is terminal and owned by the persistence backend, so it has no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    Empty,
    Building,
    /// Full roster, captaincy, name or roles still pending.
    Complete,
    Submittable,
}

pub fn stage(state: &SelectionState, policy: RolePolicy) -> SelectionStage {
    if state.is_empty() {
        SelectionStage::Empty
    } else if state.len() < ROSTER_SIZE {
        SelectionStage::Building
    } else if is_submittable(state, policy).ok {
        SelectionStage::Submittable
    } else {
        SelectionStage::Complete
    }
}
