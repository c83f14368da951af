// Tennis scoring rules: pure state + transitions, no I/O.
//
// `score` holds the per-match counters (sets, games, points, tiebreak),
// `engine` applies point awards to them. Everything here is reentrant;
// the store serializes calls per match.

pub mod engine;
pub mod score;

pub use engine::{PointOutcome, award_point, reset};
pub use score::{MatchScore, POINT_LABELS, SETS_TO_WIN, SetRecord, Side, SideScore};
