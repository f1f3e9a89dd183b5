//! Rule violations reported back to the caller as data.

use serde::Serialize;
use thiserror::Error;

use crate::domain::player::TeamId;
use crate::domain::rules::{RoleViolation, ROSTER_SIZE, TEAM_CAP};
use crate::errors::ErrorCode;

/// Every reason a selection can be blocked, interactive or at submission.
///
/// The messages are written for end users; pair them with [`Violation::code`]
/// when a stable identifier is needed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    #[error("you can only select {ROSTER_SIZE} players")]
    RosterFull,
    #[error("you can select at most {TEAM_CAP} players from one team (team {team_id})")]
    TeamCapExceeded { team_id: TeamId },
    #[error("player is already in your team")]
    DuplicateSelection,
    #[error("select exactly {ROSTER_SIZE} players ({selected} selected)")]
    IncompleteRoster { selected: usize },
    #[error("choose a captain")]
    CaptainMissing,
    #[error("choose a vice-captain")]
    ViceCaptainMissing,
    #[error("captain and vice-captain must be different players")]
    CaptainViceCaptainSame,
    #[error("team name cannot be empty")]
    InvalidTeamName,
    #[error("{0}")]
    RoleCompositionInvalid(RoleViolation),
}

impl Violation {
    pub fn code(&self) -> ErrorCode {
        match self {
            Violation::RosterFull => ErrorCode::RosterFull,
            Violation::TeamCapExceeded { .. } => ErrorCode::TeamCapExceeded,
            Violation::DuplicateSelection => ErrorCode::DuplicateSelection,
            Violation::IncompleteRoster { .. } => ErrorCode::IncompleteRoster,
            Violation::CaptainMissing => ErrorCode::CaptainMissing,
            Violation::ViceCaptainMissing => ErrorCode::ViceCaptainMissing,
            Violation::CaptainViceCaptainSame => ErrorCode::CaptainViceCaptainSame,
            Violation::InvalidTeamName => ErrorCode::InvalidTeamName,
            Violation::RoleCompositionInvalid(_) => ErrorCode::RoleCompositionInvalid,
        }
    }
}
