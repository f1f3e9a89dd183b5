//! Role categories and the fixed-precedence classifier for provider role text.

use std::fmt;
use std::str::FromStr;

use lazy_regex::regex_is_match;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::errors::domain::{DomainError, ValidationKind};

/// Canonical player role buckets used for composition limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoleCategory {
    WkBatter,
    Batter,
    BowlingAllrounder,
    Bowler,
}

impl RoleCategory {
    /// All categories in classification precedence order.
    pub const ALL: [RoleCategory; 4] = [
        RoleCategory::WkBatter,
        RoleCategory::Batter,
        RoleCategory::BowlingAllrounder,
        RoleCategory::Bowler,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RoleCategory::WkBatter => "WK-Batter",
            RoleCategory::Batter => "Batter",
            RoleCategory::BowlingAllrounder => "Bowling Allrounder",
            RoleCategory::Bowler => "Bowler",
        }
    }

    /// Short badge used in compact team listings.
    pub const fn short_label(self) -> &'static str {
        match self {
            RoleCategory::WkBatter => "WK",
            RoleCategory::Batter => "BAT",
            RoleCategory::BowlingAllrounder => "AR",
            RoleCategory::Bowler => "BOWL",
        }
    }

    /// Classify provider role text.
    ///
    /// Matching is a case-insensitive substring search, first match wins in
    /// the order WK-Batter > Batter > Allrounder > Bowler. "WKBatter" lands in
    /// the keeper bucket; "Batting Allrounder" in the allrounder one, since
    /// "batting" is not a batter stem.
    pub fn classify(text: &str) -> Option<Self> {
        let found = if regex_is_match!(r"(?i)wk|wicket[\s-]*keeper|keeper", text) {
            Some(RoleCategory::WkBatter)
        } else if regex_is_match!(r"(?i)bat(ter|sman|smen|swoman|swomen)", text) {
            Some(RoleCategory::Batter)
        } else if regex_is_match!(r"(?i)all[\s-]*rounder", text) {
            Some(RoleCategory::BowlingAllrounder)
        } else if regex_is_match!(r"(?i)bowler", text) {
            Some(RoleCategory::Bowler)
        } else {
            None
        };
        debug!(role_text = text, category = ?found, "classified role");
        found
    }

    /// Classify with the provider's separate keeper flag taken into account.
    ///
    /// Some feeds send `role: "Batter"` plus `keeper: true` instead of a
    /// combined "WK-Batter" tag. The flag wins over the text.
    pub fn classify_with_keeper(text: Option<&str>, keeper: bool) -> Option<Self> {
        if keeper {
            return Some(RoleCategory::WkBatter);
        }
        text.and_then(Self::classify)
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s).ok_or_else(|| {
            DomainError::validation(ValidationKind::UnknownRole, format!("Unknown role: {s}"))
        })
    }
}

impl Serialize for RoleCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RoleCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RoleCategory::classify(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid role: {s}")))
    }
}

/// Number of selected players per role category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCounts {
    pub wk_batter: u8,
    pub batter: u8,
    pub bowling_allrounder: u8,
    pub bowler: u8,
}

impl RoleCounts {
    pub fn from_roles<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = RoleCategory>,
    {
        let mut counts = RoleCounts::default();
        for role in roles {
            let slot = counts.slot_mut(role);
            *slot = slot.saturating_add(1);
        }
        counts
    }

    pub const fn get(&self, category: RoleCategory) -> u8 {
        match category {
            RoleCategory::WkBatter => self.wk_batter,
            RoleCategory::Batter => self.batter,
            RoleCategory::BowlingAllrounder => self.bowling_allrounder,
            RoleCategory::Bowler => self.bowler,
        }
    }

    fn slot_mut(&mut self, category: RoleCategory) -> &mut u8 {
        match category {
            RoleCategory::WkBatter => &mut self.wk_batter,
            RoleCategory::Batter => &mut self.batter,
            RoleCategory::BowlingAllrounder => &mut self.bowling_allrounder,
            RoleCategory::Bowler => &mut self.bowler,
        }
    }

    /// `(category, count)` pairs in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (RoleCategory, u8)> + '_ {
        RoleCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, n)| n as usize).sum()
    }
}
