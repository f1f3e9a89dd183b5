use serde::{Deserialize, Serialize};

use crate::domain::roles::RoleCategory;

pub type PlayerId = u64;
pub type TeamId = u64; // one of the two sides of a match
pub type MatchId = u64;

/// A squad member as seen by the rules engine.
///
/// `role` is classified once at ingestion; nothing downstream re-reads the
/// provider's free-text role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: RoleCategory,
    pub team_id: TeamId,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, role: RoleCategory, team_id: TeamId) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            team_id,
        }
    }
}
