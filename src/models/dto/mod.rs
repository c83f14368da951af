//! Data Transfer Objects (DTOs)
//!
//! This module contains structs used for API requests, responses, and queries.
//! These are typically not stored directly but used for data transfer.

pub mod pagination;
pub mod view;

pub use pagination::Pagination;
pub use view::{LiveScore, MatchView, ScoreView};
