//! A user's picks as stored outside the engine, replayed against a squad.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    can_add, set_captain, set_vice_captain, AddDecision, AddRejection, PlayerId, SelectionState,
};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::ingest::squad_feed::Squad;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionFile {
    pub team_name: String,
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub captain_id: Option<PlayerId>,
    #[serde(default)]
    pub vice_captain_id: Option<PlayerId>,
}

/// The state reached by replaying picks in order, plus the picks that were
/// refused along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub state: SelectionState,
    pub rejected: Vec<(PlayerId, AddRejection)>,
}

pub fn parse_selection_file(json: &str) -> Result<SelectionFile, DomainError> {
    serde_json::from_str(json).map_err(|e| {
        DomainError::validation(ValidationKind::MalformedJson, format!("selection file: {e}"))
    })
}

/// Replay `file` against `squad`.
///
/// Unknown player ids are an error; rule rejections are not, they are
/// collected in [`Replay::rejected`] exactly as the builder UI would skip them.
pub fn replay_selection(squad: &Squad, file: &SelectionFile) -> Result<Replay, DomainError> {
    let mut state = SelectionState::new(squad.match_id).with_team_name(&file.team_name);
    let mut rejected = Vec::new();

    for &id in &file.player_ids {
        let candidate = squad.require(id)?;
        state = match can_add(&state, candidate) {
            AddDecision::Allowed(next) => next,
            AddDecision::Rejected(reason) => {
                warn!(player_id = id, ?reason, "pick skipped");
                rejected.push((id, reason));
                state
            }
        };
    }

    if let Some(id) = file.captain_id {
        state = set_captain(&state, id);
    }
    if let Some(id) = file.vice_captain_id {
        state = set_vice_captain(&state, id);
    }

    Ok(Replay { state, rejected })
}
