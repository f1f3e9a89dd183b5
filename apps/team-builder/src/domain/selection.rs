//! Interactive selection state and the pure operations that evolve it.
//!
//! Every operation takes the current `SelectionState` by reference and
//! returns a new value. The interactive invariants (unique ids, at most
//! `ROSTER_SIZE` players, at most `TEAM_CAP` per side, captain and
//! vice-captain referencing distinct selected players) hold for every state
//! reachable through these functions.

use tracing::debug;

use crate::domain::player::{MatchId, Player, PlayerId, TeamId};
use crate::domain::roles::RoleCounts;
use crate::domain::rules::{ROSTER_SIZE, TEAM_CAP};
use crate::errors::Violation;

/// A fantasy team under construction for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    match_id: MatchId,
    players: Vec<Player>,
    captain_id: Option<PlayerId>,
    vice_captain_id: Option<PlayerId>,
    team_name: String,
}

impl SelectionState {
    /// Empty selection, as created when the team builder opens for a match.
    pub fn new(match_id: MatchId) -> Self {
        Self {
            match_id,
            players: Vec::with_capacity(ROSTER_SIZE),
            captain_id: None,
            vice_captain_id: None,
            team_name: String::new(),
        }
    }

    pub fn with_team_name(&self, name: impl Into<String>) -> Self {
        Self {
            team_name: name.into(),
            ..self.clone()
        }
    }

    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    /// Selected players in selection order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn captain_id(&self) -> Option<PlayerId> {
        self.captain_id
    }

    pub fn vice_captain_id(&self) -> Option<PlayerId> {
        self.vice_captain_id
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Number of selected players from `team_id`.
    pub fn team_count(&self, team_id: TeamId) -> usize {
        self.players.iter().filter(|p| p.team_id == team_id).count()
    }

    pub fn is_captain(&self, player_id: PlayerId) -> bool {
        self.captain_id == Some(player_id)
    }

    pub fn is_vice_captain(&self, player_id: PlayerId) -> bool {
        self.vice_captain_id == Some(player_id)
    }
}

/// Why an add was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRejection {
    DuplicateSelection,
    RosterFull,
    TeamCapExceeded { team_id: TeamId },
}

impl AddRejection {
    pub fn violation(self) -> Violation {
        match self {
            AddRejection::DuplicateSelection => Violation::DuplicateSelection,
            AddRejection::RosterFull => Violation::RosterFull,
            AddRejection::TeamCapExceeded { team_id } => Violation::TeamCapExceeded { team_id },
        }
    }
}

/// Outcome of [`can_add`]: the next state, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDecision {
    Allowed(SelectionState),
    Rejected(AddRejection),
}

impl AddDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AddDecision::Allowed(_))
    }

    pub fn rejection(&self) -> Option<AddRejection> {
        match self {
            AddDecision::Allowed(_) => None,
            AddDecision::Rejected(r) => Some(*r),
        }
    }
}

/// Decide whether `candidate` may join the selection.
///
/// Checks, in order: already selected, roster full, side cap.
pub fn can_add(state: &SelectionState, candidate: &Player) -> AddDecision {
    let rejection = if state.contains(candidate.id) {
        Some(AddRejection::DuplicateSelection)
    } else if state.len() >= ROSTER_SIZE {
        Some(AddRejection::RosterFull)
    } else if state.team_count(candidate.team_id) + 1 > TEAM_CAP {
        Some(AddRejection::TeamCapExceeded {
            team_id: candidate.team_id,
        })
    } else {
        None
    };

    match rejection {
        Some(reason) => {
            debug!(
                player_id = candidate.id,
                team_id = candidate.team_id,
                selected = state.len(),
                ?reason,
                "add rejected"
            );
            AddDecision::Rejected(reason)
        }
        None => {
            let mut next = state.clone();
            next.players.push(candidate.clone());
            AddDecision::Allowed(next)
        }
    }
}

/// Drop `player_id` from the selection, clearing captaincy it held.
///
/// Unknown ids leave the state unchanged.
pub fn remove(state: &SelectionState, player_id: PlayerId) -> SelectionState {
    if !state.contains(player_id) {
        return state.clone();
    }
    let mut next = state.clone();
    next.players.retain(|p| p.id != player_id);
    if next.captain_id == Some(player_id) {
        next.captain_id = None;
    }
    if next.vice_captain_id == Some(player_id) {
        next.vice_captain_id = None;
    }
    next
}

/// Result of a tap on a player card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added(SelectionState),
    Removed(SelectionState),
    Rejected(AddRejection),
}

impl ToggleOutcome {
    /// The state to continue from; a rejection keeps `current`.
    pub fn into_state(self, current: &SelectionState) -> SelectionState {
        match self {
            ToggleOutcome::Added(s) | ToggleOutcome::Removed(s) => s,
            ToggleOutcome::Rejected(_) => current.clone(),
        }
    }
}

/// Select `candidate`, or deselect it if already selected.
pub fn toggle(state: &SelectionState, candidate: &Player) -> ToggleOutcome {
    if state.contains(candidate.id) {
        return ToggleOutcome::Removed(remove(state, candidate.id));
    }
    match can_add(state, candidate) {
        AddDecision::Allowed(next) => ToggleOutcome::Added(next),
        AddDecision::Rejected(reason) => ToggleOutcome::Rejected(reason),
    }
}

/// Make `player_id` captain.
///
/// No-op for players outside the selection. Choosing the current captain
/// again clears the role; choosing the vice-captain moves them up and leaves
/// the vice-captaincy empty.
pub fn set_captain(state: &SelectionState, player_id: PlayerId) -> SelectionState {
    if !state.contains(player_id) {
        return state.clone();
    }
    let mut next = state.clone();
    if next.captain_id == Some(player_id) {
        next.captain_id = None;
        return next;
    }
    if next.vice_captain_id == Some(player_id) {
        next.vice_captain_id = None;
    }
    next.captain_id = Some(player_id);
    next
}

/// Make `player_id` vice-captain. Mirror image of [`set_captain`].
pub fn set_vice_captain(state: &SelectionState, player_id: PlayerId) -> SelectionState {
    if !state.contains(player_id) {
        return state.clone();
    }
    let mut next = state.clone();
    if next.vice_captain_id == Some(player_id) {
        next.vice_captain_id = None;
        return next;
    }
    if next.captain_id == Some(player_id) {
        next.captain_id = None;
    }
    next.vice_captain_id = Some(player_id);
    next
}

pub fn role_counts(state: &SelectionState) -> RoleCounts {
    RoleCounts::from_roles(state.players.iter().map(|p| p.role))
}
