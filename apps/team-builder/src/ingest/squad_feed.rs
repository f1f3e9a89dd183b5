//! Decoding of the cricket data provider's match-info roster.
//!
//! Expected shape (unknown fields are ignored):
//!
//! ```json
//! { "matchInfo": {
//!     "matchId": 9001,
//!     "team1": { "teamId": 2, "teamName": "India", "teamSName": "IND",
//!                "players": [ { "id": 1413, "name": "V Kohli", "role": "Batter" } ] },
//!     "team2": { "teamId": 9, "teamName": "England", "teamSName": "ENG", "players": [] },
//!     "players": [ { "id": "8733", "name": "J Buttler", "role": "Batter",
//!                    "keeper": true, "teamId": 9 } ] } }
//! ```
//!
//! Players may be listed under their side or in the flat `matchInfo.players`
//! list with an explicit `teamId`. Ids arrive as numbers or numeric strings.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{MatchId, Player, PlayerId, RoleCategory, TeamId};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedEnvelope {
    match_info: FeedMatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedMatchInfo {
    match_id: FeedId,
    team1: FeedTeam,
    team2: FeedTeam,
    #[serde(default)]
    players: Vec<FeedPlayer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedTeam {
    team_id: FeedId,
    team_name: String,
    #[serde(rename = "teamSName", default)]
    short_name: Option<String>,
    #[serde(default)]
    players: Vec<FeedPlayer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedPlayer {
    id: FeedId,
    name: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    keeper: bool,
    #[serde(default)]
    team_id: Option<FeedId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FeedId {
    Num(u64),
    Text(String),
}

impl FeedId {
    fn to_u64(&self, what: &str) -> Result<u64, DomainError> {
        match self {
            FeedId::Num(n) => Ok(*n),
            FeedId::Text(s) => s.trim().parse().map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidSquad,
                    format!("{what} id '{s}' is not numeric"),
                )
            }),
        }
    }
}

/// One side of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub team_id: TeamId,
    pub name: String,
    pub short_name: Option<String>,
}

/// Both sides of a match and their classified players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Squad {
    pub match_id: MatchId,
    pub sides: [Side; 2],
    players: Vec<Player>,
}

impl Squad {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn find(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn require(&self, player_id: PlayerId) -> Result<&Player, DomainError> {
        self.find(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("player {player_id} is not in the squad for match {}", self.match_id),
            )
        })
    }

    pub fn side(&self, team_id: TeamId) -> Option<&Side> {
        self.sides.iter().find(|s| s.team_id == team_id)
    }

    /// Players of one side, in feed order.
    pub fn side_players(&self, team_id: TeamId) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(move |p| p.team_id == team_id)
    }
}

pub fn parse_squad_feed(json: &str) -> Result<Squad, DomainError> {
    let envelope: FeedEnvelope = serde_json::from_str(json).map_err(|e| {
        DomainError::validation(ValidationKind::MalformedJson, format!("squad feed: {e}"))
    })?;
    let match_info = envelope.match_info;

    let match_id = match_info.match_id.to_u64("match")?;
    let side1 = side_from_feed(&match_info.team1)?;
    let side2 = side_from_feed(&match_info.team2)?;
    if side1.team_id == side2.team_id {
        return Err(DomainError::validation(
            ValidationKind::InvalidSquad,
            format!("both sides have team id {}", side1.team_id),
        ));
    }

    let mut players = Vec::new();
    let mut seen = HashSet::new();
    let listed = [
        (&match_info.team1, side1.team_id),
        (&match_info.team2, side2.team_id),
    ];
    for (team, team_id) in listed {
        for raw in &team.players {
            let p = player_from_feed(raw, Some(team_id))?;
            push_unique(&mut players, &mut seen, p)?;
        }
    }
    for raw in &match_info.players {
        let p = player_from_feed(raw, None)?;
        if p.team_id != side1.team_id && p.team_id != side2.team_id {
            return Err(DomainError::validation(
                ValidationKind::InvalidSquad,
                format!("player {} belongs to unknown team {}", p.id, p.team_id),
            ));
        }
        push_unique(&mut players, &mut seen, p)?;
    }

    info!(
        match_id,
        players = players.len(),
        side1 = %side1.name,
        side2 = %side2.name,
        "squad ingested"
    );

    Ok(Squad {
        match_id,
        sides: [side1, side2],
        players,
    })
}

fn side_from_feed(team: &FeedTeam) -> Result<Side, DomainError> {
    Ok(Side {
        team_id: team.team_id.to_u64("team")?,
        name: team.team_name.clone(),
        short_name: team.short_name.clone(),
    })
}

fn player_from_feed(raw: &FeedPlayer, side: Option<TeamId>) -> Result<Player, DomainError> {
    let id = raw.id.to_u64("player")?;
    let team_id = match (side, &raw.team_id) {
        (Some(team_id), _) => team_id,
        (None, Some(feed_team)) => feed_team.to_u64("team")?,
        (None, None) => {
            return Err(DomainError::validation(
                ValidationKind::InvalidSquad,
                format!("player {id} has no team"),
            ))
        }
    };
    let role = RoleCategory::classify_with_keeper(raw.role.as_deref(), raw.keeper)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownRole,
                format!(
                    "player {id} ({}) has unrecognised role {:?}",
                    raw.name,
                    raw.role.as_deref().unwrap_or("")
                ),
            )
        })?;
    debug!(player_id = id, team_id, %role, "player classified");
    Ok(Player::new(id, raw.name.trim(), role, team_id))
}

fn push_unique(
    players: &mut Vec<Player>,
    seen: &mut HashSet<PlayerId>,
    player: Player,
) -> Result<(), DomainError> {
    if !seen.insert(player.id) {
        return Err(DomainError::validation(
            ValidationKind::DuplicatePlayer,
            format!("player {} listed more than once", player.id),
        ));
    }
    players.push(player);
    Ok(())
}
