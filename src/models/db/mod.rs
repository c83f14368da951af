//! Database models representing PostgreSQL tables
//!
//! This module contains all models that map directly to database tables.
//! All structs here derive `FromRow` for SQLx compatibility.

pub mod match_record;
pub mod player;

pub use match_record::{CompletedMatch, MatchRecord};
pub use player::Player;
