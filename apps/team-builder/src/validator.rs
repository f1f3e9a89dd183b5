//! Entry point bundling the rule functions with a chosen role policy.
//!
//! The domain functions stay free functions over `&SelectionState`; this type
//! only pins the policy so callers cannot mix rule sets within one session.

use crate::config::rules::RulesConfig;
use crate::domain::rules::is_role_composition_valid;
use crate::domain::{
    build_submission, can_add, is_submittable, remove, role_counts, set_captain,
    set_vice_captain, stage, toggle, AddDecision, Player, PlayerId, RoleCounts, RolePolicy,
    SelectionStage, SelectionState, SubmissionPayload, ToggleOutcome, ValidationResult,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamValidator {
    policy: RolePolicy,
}

impl TeamValidator {
    pub fn new(policy: RolePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(config.policy)
    }

    pub fn policy(&self) -> RolePolicy {
        self.policy
    }

    pub fn can_add(&self, state: &SelectionState, candidate: &Player) -> AddDecision {
        can_add(state, candidate)
    }

    pub fn remove(&self, state: &SelectionState, player_id: PlayerId) -> SelectionState {
        remove(state, player_id)
    }

    pub fn toggle(&self, state: &SelectionState, candidate: &Player) -> ToggleOutcome {
        toggle(state, candidate)
    }

    pub fn set_captain(&self, state: &SelectionState, player_id: PlayerId) -> SelectionState {
        set_captain(state, player_id)
    }

    pub fn set_vice_captain(&self, state: &SelectionState, player_id: PlayerId) -> SelectionState {
        set_vice_captain(state, player_id)
    }

    pub fn role_counts(&self, state: &SelectionState) -> RoleCounts {
        role_counts(state)
    }

    pub fn is_role_composition_valid(&self, counts: &RoleCounts) -> bool {
        is_role_composition_valid(counts, self.policy)
    }

    pub fn is_submittable(&self, state: &SelectionState) -> ValidationResult {
        is_submittable(state, self.policy)
    }

    pub fn stage(&self, state: &SelectionState) -> SelectionStage {
        stage(state, self.policy)
    }

    pub fn build_submission(
        &self,
        state: &SelectionState,
    ) -> Result<SubmissionPayload, ValidationResult> {
        build_submission(state, self.policy)
    }
}
