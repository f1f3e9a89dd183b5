use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A contest standing as supplied by the backend; points are taken as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user: String,
    pub team_name: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

/// Order by points (descending) and assign competition ranks: equal points
/// share a rank and the next rank skips accordingly (1, 2, 2, 4).
///
/// Ties are listed by user name so the output is deterministic.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| {
        cmp_points(b.points, a.points).then_with(|| a.user.cmp(&b.user))
    });

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len());
    for (pos, entry) in entries.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if cmp_points(prev.entry.points, entry.points) == Ordering::Equal => {
                prev.rank
            }
            _ => pos as u32 + 1,
        };
        ranked.push(RankedEntry { rank, entry });
    }
    ranked
}

// Total order on points with -0.0 folded into 0.0.
fn cmp_points(a: f64, b: f64) -> Ordering {
    let fold = |p: f64| if p == 0.0 { 0.0 } else { p };
    fold(a).total_cmp(&fold(b))
}
