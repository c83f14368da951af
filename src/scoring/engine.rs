use crate::errors::AppError;

use super::score::{MatchScore, SETS_TO_WIN, SetRecord, Side};

/// Result of applying one point award to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Play continues within the current set.
    Continued,
    /// The point closed out a set; the match goes on.
    SetWon,
    /// The point closed out the match; `winner` is now set.
    MatchWon,
    /// The match already has a winner; nothing was changed.
    AlreadyComplete,
}

/// Award one point to `side` and advance the score.
///
/// Handles the regular point ladder (0-15-30-40), deuce/advantage,
/// tiebreak tallies, set completion and match completion. Terminal
/// matches are left untouched.
pub fn award_point(score: &mut MatchScore, side: Side) -> PointOutcome {
    if score.is_complete() {
        tracing::warn!("Point award on completed match ignored");
        return PointOutcome::AlreadyComplete;
    }

    let outcome = if score.is_tiebreak {
        tiebreak_point(score, side)
    } else {
        regular_point(score, side)
    };

    #[cfg(debug_assertions)]
    score.assert_consistent();

    outcome
}

/// Re-initialize all score fields. Terminal matches are immutable.
pub fn reset(score: &mut MatchScore) -> Result<(), AppError> {
    if score.is_complete() {
        return Err(AppError::NotResettable);
    }
    *score = MatchScore::new();
    tracing::info!("Match score reset to initial state");
    Ok(())
}

/// One point in a regular (non-tiebreak) game.
fn regular_point(score: &mut MatchScore, side: Side) -> PointOutcome {
    {
        let (player, opponent) = score.sides_mut(side);

        if player.advantage {
            // Advantage converted: game won.
            player.advantage = false;
            opponent.advantage = false;
            player.games += 1;
            player.points = 0;
            opponent.points = 0;
        } else if opponent.advantage {
            // Back to deuce.
            opponent.advantage = false;
            return PointOutcome::Continued;
        } else if player.points < 3 {
            player.points += 1;
            return PointOutcome::Continued;
        } else if opponent.points < 3 {
            // 40 against fewer: game won.
            player.games += 1;
            player.points = 0;
            opponent.points = 0;
        } else {
            // Deuce broken in the scorer's favor.
            player.advantage = true;
            return PointOutcome::Continued;
        }
    }

    settle_game_win(score, side)
}

/// One point in a tiebreak. First to seven with a two-point margin takes
/// the set as 7-6.
fn tiebreak_point(score: &mut MatchScore, side: Side) -> PointOutcome {
    let (tb_points, tb_opponent) = {
        let (player, opponent) = score.sides_mut(side);
        player.tiebreak_points += 1;
        (player.tiebreak_points, opponent.tiebreak_points)
    };

    if tb_points < 7 || tb_points < tb_opponent + 2 {
        return PointOutcome::Continued;
    }

    tracing::info!("Tiebreak won {}-{} by {}", tb_points, tb_opponent, side);

    let record = match side {
        Side::Player1 => SetRecord {
            player_one_games: 7,
            player_two_games: 6,
            player_one_tiebreak: Some(tb_points),
            player_two_tiebreak: Some(tb_opponent),
        },
        Side::Player2 => SetRecord {
            player_one_games: 6,
            player_two_games: 7,
            player_one_tiebreak: Some(tb_opponent),
            player_two_tiebreak: Some(tb_points),
        },
    };
    score.set_history.push(record);
    score.is_tiebreak = false;

    let (player, opponent) = score.sides_mut(side);
    player.sets += 1;
    for s in [player, opponent] {
        s.games = 0;
        s.points = 0;
        s.advantage = false;
        s.tiebreak_points = 0;
    }

    settle_match_win(score, side)
}

/// After a game win: close out the set, enter a tiebreak at 6-6, or
/// play on.
fn settle_game_win(score: &mut MatchScore, side: Side) -> PointOutcome {
    let (games, opponent_games) = {
        let player = score.side(side);
        let opponent = score.side(side.opponent());
        (player.games, opponent.games)
    };

    let set_won =
        (games >= 6 && games >= opponent_games + 2) || (games == 7 && opponent_games == 5);

    if set_won {
        tracing::info!("Set won {}-{} by {}", games, opponent_games, side);

        let (player_one_games, player_two_games) = match side {
            Side::Player1 => (games, opponent_games),
            Side::Player2 => (opponent_games, games),
        };
        score.set_history.push(SetRecord {
            player_one_games,
            player_two_games,
            player_one_tiebreak: None,
            player_two_tiebreak: None,
        });

        let (player, opponent) = score.sides_mut(side);
        player.sets += 1;
        for s in [player, opponent] {
            s.games = 0;
            s.points = 0;
            s.advantage = false;
        }

        return settle_match_win(score, side);
    }

    if games == 6 && opponent_games == 6 {
        tracing::info!("Tiebreak started at 6-6");
        score.is_tiebreak = true;
        let (player, opponent) = score.sides_mut(side);
        for s in [player, opponent] {
            s.points = 0;
            s.advantage = false;
            s.tiebreak_points = 0;
        }
    }

    PointOutcome::Continued
}

/// After a set win: the match ends once a side holds enough sets.
fn settle_match_win(score: &mut MatchScore, side: Side) -> PointOutcome {
    if score.side(side).sets >= SETS_TO_WIN {
        score.winner = Some(side);
        tracing::info!("Match won by {}", side);
        PointOutcome::MatchWon
    } else {
        PointOutcome::SetWon
    }
}
