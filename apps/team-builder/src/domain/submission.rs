//! Submission payload handed to the persistence backend, and the reverse
//! path used when a saved team is reopened for editing.

use serde::{Deserialize, Serialize};

use crate::domain::player::{MatchId, Player, PlayerId, TeamId};
use crate::domain::roles::RoleCategory;
use crate::domain::rules::RolePolicy;
use crate::domain::selection::{
    can_add, set_captain, set_vice_captain, AddDecision, SelectionState,
};
use crate::domain::validation::{is_submittable, normalize_team_name, ValidationResult};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedPlayer {
    pub id: PlayerId,
    pub name: String,
    pub role: RoleCategory,
    pub team_id: TeamId,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

impl SubmittedPlayer {
    pub fn to_player(&self) -> Player {
        Player::new(self.id, self.name.clone(), self.role, self.team_id)
    }
}

/// Certified team, ready to be posted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub match_id: MatchId,
    pub team_name: String,
    pub players: Vec<SubmittedPlayer>,
}

/// Build the payload, or hand back the failing verdict.
pub fn build_submission(
    state: &SelectionState,
    policy: RolePolicy,
) -> Result<SubmissionPayload, ValidationResult> {
    let verdict = is_submittable(state, policy);
    if !verdict.ok {
        return Err(verdict);
    }

    let players = state
        .players()
        .iter()
        .map(|p| SubmittedPlayer {
            id: p.id,
            name: p.name.clone(),
            role: p.role,
            team_id: p.team_id,
            is_captain: state.is_captain(p.id),
            is_vice_captain: state.is_vice_captain(p.id),
        })
        .collect();

    Ok(SubmissionPayload {
        match_id: state.match_id(),
        team_name: normalize_team_name(state.team_name()),
        players,
    })
}

impl SelectionState {
    /// Reopen a persisted team as a fresh selection.
    ///
    /// Players are replayed through [`can_add`] so the interactive invariants
    /// are re-established rather than trusted. The result is not required to
    /// be submittable; the saved team may predate a rule change.
    pub fn from_submission(payload: &SubmissionPayload) -> Result<Self, DomainError> {
        let mut state = SelectionState::new(payload.match_id).with_team_name(&payload.team_name);

        for saved in &payload.players {
            state = match can_add(&state, &saved.to_player()) {
                AddDecision::Allowed(next) => next,
                AddDecision::Rejected(reason) => {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidSavedTeam,
                        format!("player {} rejected: {}", saved.id, reason.violation()),
                    ))
                }
            };
        }

        let captain = single_flagged(payload, |p| p.is_captain, "captain")?;
        let vice = single_flagged(payload, |p| p.is_vice_captain, "vice-captain")?;
        if captain.is_some() && captain == vice {
            return Err(DomainError::validation(
                ValidationKind::InvalidSavedTeam,
                "captain and vice-captain are the same player",
            ));
        }

        if let Some(id) = captain {
            state = set_captain(&state, id);
        }
        if let Some(id) = vice {
            state = set_vice_captain(&state, id);
        }
        Ok(state)
    }
}

fn single_flagged(
    payload: &SubmissionPayload,
    flag: impl Fn(&SubmittedPlayer) -> bool,
    what: &str,
) -> Result<Option<PlayerId>, DomainError> {
    let mut flagged = payload.players.iter().filter(|p| flag(p)).map(|p| p.id);
    let first = flagged.next();
    if flagged.next().is_some() {
        return Err(DomainError::validation(
            ValidationKind::InvalidSavedTeam,
            format!("more than one {what} flagged"),
        ));
    }
    Ok(first)
}
