use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::db::CompletedMatch;
use crate::models::live::ActiveMatch;

/// Live score block for a match still being played, side 1 first.
///
/// `points` carries display labels ("0"/"15"/"30"/"40"/"AD", blank for
/// the side facing advantage).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveScore {
    pub sets: [u8; 2],
    pub games: [u8; 2],
    pub points: [String; 2],
    pub tiebreak_points: [u8; 2],
    pub is_tiebreak: bool,
}

/// Score payload of a match view.
///
/// Completed matches carry only the rendered final-score string; the
/// consumer matches on the tag instead of sniffing the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScoreView {
    Live(LiveScore),
    Final { rendered: String },
}

/// Flat match projection handed to the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub match_uuid: Uuid,
    pub player_one_name: String,
    pub player_two_name: String,
    pub score: ScoreView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_completed: Option<bool>,
}

impl MatchView {
    /// Project an in-memory match into a live scoreboard view.
    pub fn from_active(active: &ActiveMatch) -> Self {
        let score = &active.score;
        Self {
            match_uuid: active.uuid,
            player_one_name: active.player_one_name.clone(),
            player_two_name: active.player_two_name.clone(),
            score: ScoreView::Live(LiveScore {
                sets: [score.player_one.sets, score.player_two.sets],
                games: [score.player_one.games, score.player_two.games],
                points: score.point_labels(),
                tiebreak_points: [
                    score.player_one.tiebreak_points,
                    score.player_two.tiebreak_points,
                ],
                is_tiebreak: score.is_tiebreak,
            }),
            winner: active.winner_name().map(str::to_string),
            error: None,
            info: None,
            match_completed: score.is_complete().then_some(true),
        }
    }

    /// Final view of a terminal match straight from its in-memory state,
    /// carrying the rendered score string instead of a live block.
    pub fn final_from_active(active: &ActiveMatch) -> Self {
        Self {
            match_uuid: active.uuid,
            player_one_name: active.player_one_name.clone(),
            player_two_name: active.player_two_name.clone(),
            score: ScoreView::Final {
                rendered: active.score.final_score(),
            },
            winner: active.winner_name().map(str::to_string),
            error: None,
            info: None,
            match_completed: Some(true),
        }
    }

    /// Project a persisted match into its immutable final view.
    pub fn from_completed(completed: &CompletedMatch) -> Self {
        Self {
            match_uuid: completed.uuid,
            player_one_name: completed.player_one_name.clone(),
            player_two_name: completed.player_two_name.clone(),
            score: ScoreView::Final {
                rendered: completed.score_str.clone(),
            },
            winner: completed.winner_name.clone(),
            error: None,
            info: None,
            match_completed: Some(true),
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn with_info(mut self, message: impl Into<String>) -> Self {
        self.info = Some(message.into());
        self
    }
}
