//! Contest entry eligibility.
//!
//! Contests are owned by the backend; this module only decides whether a
//! saved team may be entered, and reports every blocker at once.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::domain::player::MatchId;
use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: String,
    pub match_id: MatchId,
    /// Display only; payment is handled elsewhere.
    pub entry_fee: u32,
    pub total_prize: u64,
    pub max_participants: u32,
    pub joined: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
}

impl Contest {
    pub fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.joined)
    }

    pub fn is_full(&self) -> bool {
        self.joined >= self.max_participants
    }

    pub fn has_started(&self, now: OffsetDateTime) -> bool {
        now >= self.starts_at
    }
}

/// A persisted team the user may enter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTeamRef {
    pub team_id: String,
    pub match_id: MatchId,
}

#[derive(Debug, Clone, Copy)]
pub struct JoinRequest<'a> {
    pub team: Option<&'a SavedTeamRef>,
    /// Teams this user already entered in the contest.
    pub joined_team_ids: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinBlocker {
    #[error("select a team to join")]
    NoTeamSelected,
    #[error("contest is full")]
    ContestFull,
    #[error("contest has already started")]
    ContestStarted,
    #[error("team was built for match {team_match}, contest is for match {contest_match}")]
    TeamMatchMismatch {
        team_match: MatchId,
        contest_match: MatchId,
    },
    #[error("team already joined this contest")]
    AlreadyJoined,
}

impl JoinBlocker {
    pub fn code(&self) -> ErrorCode {
        match self {
            JoinBlocker::NoTeamSelected => ErrorCode::NoTeamSelected,
            JoinBlocker::ContestFull => ErrorCode::ContestFull,
            JoinBlocker::ContestStarted => ErrorCode::ContestStarted,
            JoinBlocker::TeamMatchMismatch { .. } => ErrorCode::TeamMatchMismatch,
            JoinBlocker::AlreadyJoined => ErrorCode::AlreadyJoined,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JoinEligibility {
    pub blockers: Vec<JoinBlocker>,
}

impl JoinEligibility {
    pub fn ok(&self) -> bool {
        self.blockers.is_empty()
    }
}

pub fn check_join(
    contest: &Contest,
    request: JoinRequest<'_>,
    now: OffsetDateTime,
) -> JoinEligibility {
    let mut blockers = Vec::new();

    match request.team {
        None => blockers.push(JoinBlocker::NoTeamSelected),
        Some(team) => {
            if team.match_id != contest.match_id {
                blockers.push(JoinBlocker::TeamMatchMismatch {
                    team_match: team.match_id,
                    contest_match: contest.match_id,
                });
            }
            if request.joined_team_ids.contains(&team.team_id) {
                blockers.push(JoinBlocker::AlreadyJoined);
            }
        }
    }
    if contest.is_full() {
        blockers.push(JoinBlocker::ContestFull);
    }
    if contest.has_started(now) {
        blockers.push(JoinBlocker::ContestStarted);
    }

    JoinEligibility { blockers }
}
