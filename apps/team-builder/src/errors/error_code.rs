//! Error codes for the team builder.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! shown to callers next to each reported violation.

use core::fmt;

/// Centralized error codes for rule violations, join blockers and domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Interactive selection
    /// Roster already holds the maximum number of players
    RosterFull,
    /// Too many players from one side
    TeamCapExceeded,
    /// Player already selected
    DuplicateSelection,

    // Submission
    /// Fewer than the required number of players
    IncompleteRoster,
    /// No captain chosen
    CaptainMissing,
    /// No vice-captain chosen
    ViceCaptainMissing,
    /// Captain and vice-captain are the same player
    CaptainViceCaptainSame,
    /// Team name empty or whitespace-only
    InvalidTeamName,
    /// A role category count is out of bounds
    RoleCompositionInvalid,

    // Contest entry
    /// No saved team chosen for the contest
    NoTeamSelected,
    /// Contest has no spots left
    ContestFull,
    /// Contest start time has passed
    ContestStarted,
    /// Saved team was built for a different match
    TeamMatchMismatch,
    /// Saved team already entered in this contest
    AlreadyJoined,

    // Domain input
    /// Provider JSON could not be decoded
    MalformedJson,
    /// Role text could not be classified
    UnknownRole,
    /// Player id listed twice in a feed
    DuplicatePlayer,
    /// Feed does not describe exactly two sides
    InvalidSquad,
    /// Saved team breaks selection invariants
    InvalidSavedTeam,
    /// General validation error
    ValidationError,

    // Not found
    /// Player not found in squad
    PlayerNotFound,
    /// General not found error
    NotFound,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Interactive selection
            Self::RosterFull => "ROSTER_FULL",
            Self::TeamCapExceeded => "TEAM_CAP_EXCEEDED",
            Self::DuplicateSelection => "DUPLICATE_SELECTION",

            // Submission
            Self::IncompleteRoster => "INCOMPLETE_ROSTER",
            Self::CaptainMissing => "CAPTAIN_MISSING",
            Self::ViceCaptainMissing => "VICE_CAPTAIN_MISSING",
            Self::CaptainViceCaptainSame => "CAPTAIN_VICE_CAPTAIN_SAME",
            Self::InvalidTeamName => "INVALID_TEAM_NAME",
            Self::RoleCompositionInvalid => "ROLE_COMPOSITION_INVALID",

            // Contest entry
            Self::NoTeamSelected => "NO_TEAM_SELECTED",
            Self::ContestFull => "CONTEST_FULL",
            Self::ContestStarted => "CONTEST_STARTED",
            Self::TeamMatchMismatch => "TEAM_MATCH_MISMATCH",
            Self::AlreadyJoined => "ALREADY_JOINED",

            // Domain input
            Self::MalformedJson => "MALFORMED_JSON",
            Self::UnknownRole => "UNKNOWN_ROLE",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::InvalidSquad => "INVALID_SQUAD",
            Self::InvalidSavedTeam => "INVALID_SAVED_TEAM",
            Self::ValidationError => "VALIDATION_ERROR",

            // Not found
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
