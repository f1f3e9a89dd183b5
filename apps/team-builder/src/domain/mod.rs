//! Domain layer: pure team-building rules, no I/O.

pub mod contest;
pub mod leaderboard;
pub mod player;
pub mod roles;
pub mod rules;
pub mod selection;
pub mod submission;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_selection;
#[cfg(test)]
mod tests_submission;

// Re-exports for ergonomics
pub use player::{MatchId, Player, PlayerId, TeamId};
pub use roles::{RoleCategory, RoleCounts};
pub use rules::{RolePolicy, RoleViolation, ROSTER_SIZE, TEAM_CAP};
pub use selection::{
    can_add, remove, role_counts, set_captain, set_vice_captain, toggle, AddDecision,
    AddRejection, SelectionState, ToggleOutcome,
};
pub use submission::{build_submission, SubmissionPayload, SubmittedPlayer};
pub use validation::{is_submittable, stage, SelectionStage, ValidationResult};
