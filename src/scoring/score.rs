use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Sets needed to win a match (best-of-3).
pub const SETS_TO_WIN: u8 = 2;

/// Display labels for the regular-game point ladder.
pub const POINT_LABELS: [&str; 4] = ["0", "15", "30", "40"];

/// One side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player1 => "player1",
            Side::Player2 => "player2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player1" => Ok(Side::Player1),
            "player2" => Ok(Side::Player2),
            other => Err(AppError::InvalidSide(format!(
                "Expected \"player1\" or \"player2\", got \"{}\"",
                other
            ))),
        }
    }
}

/// Counters for one side of a match.
///
/// `points` indexes into [`POINT_LABELS`] (0..=3) and is only meaningful
/// outside a tiebreak; `tiebreak_points` is only meaningful inside one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideScore {
    pub sets: u8,
    pub games: u8,
    pub points: u8,
    pub advantage: bool,
    pub tiebreak_points: u8,
}

/// A completed set, ordered side-1-first regardless of who won it.
///
/// The tiebreak fields are populated iff the set was decided by tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub player_one_games: u8,
    pub player_two_games: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_one_tiebreak: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_two_tiebreak: Option<u8>,
}

/// Complete score state of one match.
///
/// Holds data only; all transitions go through [`crate::scoring::engine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub player_one: SideScore,
    pub player_two: SideScore,
    pub is_tiebreak: bool,
    pub winner: Option<Side>,
    pub set_history: Vec<SetRecord>,
}

impl MatchScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: Side) -> &SideScore {
        match side {
            Side::Player1 => &self.player_one,
            Side::Player2 => &self.player_two,
        }
    }

    /// Mutable access to a side and its opponent at once.
    pub fn sides_mut(&mut self, side: Side) -> (&mut SideScore, &mut SideScore) {
        match side {
            Side::Player1 => (&mut self.player_one, &mut self.player_two),
            Side::Player2 => (&mut self.player_two, &mut self.player_one),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }

    /// Display labels for the current game points, side 1 first.
    ///
    /// A side holding advantage shows "AD" and blanks the opponent;
    /// otherwise the ordinal label for the point index is shown.
    pub fn point_labels(&self) -> [String; 2] {
        let label = |own: &SideScore, other: &SideScore| -> String {
            if own.advantage {
                "AD".to_string()
            } else if other.advantage {
                String::new()
            } else {
                POINT_LABELS[own.points as usize].to_string()
            }
        };
        [
            label(&self.player_one, &self.player_two),
            label(&self.player_two, &self.player_one),
        ]
    }

    /// Canonical final-score string, e.g. `"6-4, 7-6(7-3)"`.
    ///
    /// Tiebreak tallies are written with the set winner's count first.
    /// An empty set history falls back to the bare set counters.
    pub fn final_score(&self) -> String {
        if self.set_history.is_empty() {
            return format!("{}-{}", self.player_one.sets, self.player_two.sets);
        }

        self.set_history
            .iter()
            .map(|set| match (set.player_one_tiebreak, set.player_two_tiebreak) {
                (Some(p1_tb), Some(p2_tb)) => {
                    let (tb_win, tb_lose) = if set.player_one_games > set.player_two_games {
                        (p1_tb, p2_tb)
                    } else {
                        (p2_tb, p1_tb)
                    };
                    format!(
                        "{}-{}({}-{})",
                        set.player_one_games, set.player_two_games, tb_win, tb_lose
                    )
                }
                _ => format!("{}-{}", set.player_one_games, set.player_two_games),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Consistency checks for the score invariants. Violations are
    /// programmer errors in the engine, so this only runs in debug builds.
    #[cfg(debug_assertions)]
    pub(crate) fn assert_consistent(&self) {
        debug_assert!(
            !(self.player_one.advantage && self.player_two.advantage),
            "both sides hold advantage"
        );
        if self.player_one.points < 3 || self.player_two.points < 3 {
            debug_assert!(
                !self.player_one.advantage && !self.player_two.advantage,
                "advantage held before deuce"
            );
        }
        if self.is_tiebreak {
            debug_assert!(
                self.player_one.games == 6 && self.player_two.games == 6,
                "tiebreak outside 6-6"
            );
            debug_assert!(
                self.player_one.points == 0 && self.player_two.points == 0,
                "game points carried into tiebreak"
            );
        } else {
            debug_assert!(
                self.player_one.tiebreak_points == 0 && self.player_two.tiebreak_points == 0,
                "tiebreak points outside tiebreak"
            );
        }
        debug_assert_eq!(
            self.set_history.len(),
            (self.player_one.sets + self.player_two.sets) as usize,
            "set history out of sync with set counters"
        );
    }
}
