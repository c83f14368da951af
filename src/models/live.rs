use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{MatchScore, Side};

/// A match still being played
///
/// Lives only in the store's active set; there is no durable copy until
/// the match completes. Identity is the `uuid`, player identity is a
/// name snapshot resolved to database ids at persistence time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveMatch {
    pub uuid: Uuid,
    pub player_one_name: String,
    pub player_two_name: String,
    pub score: MatchScore,
    pub created_at: NaiveDateTime,
}

impl ActiveMatch {
    pub fn new(player_one_name: String, player_two_name: String) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            player_one_name,
            player_two_name,
            score: MatchScore::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn player_name(&self, side: Side) -> &str {
        match side {
            Side::Player1 => &self.player_one_name,
            Side::Player2 => &self.player_two_name,
        }
    }

    /// Name of the winning player, once the match is terminal.
    pub fn winner_name(&self) -> Option<&str> {
        self.score.winner.map(|side| self.player_name(side))
    }

    /// Case-insensitive substring match against either player name.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.player_one_name.to_lowercase().contains(&needle)
            || self.player_two_name.to_lowercase().contains(&needle)
    }
}
