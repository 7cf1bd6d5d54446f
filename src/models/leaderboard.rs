// src/models/leaderboard.rs

use serde::{Deserialize, Serialize};

/// One leaderboard row. `rank` is recomputed from points on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    pub rank: u32,
    pub points: u32,
    pub courses_completed: u32,
    pub badges: u32,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,

    /// Rank of the caller, if they appear on the board.
    pub current_user_rank: Option<u32>,
}

/// Sorts by points descending (ties by user id) and assigns ranks 1..n.
pub fn rank_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }
}
