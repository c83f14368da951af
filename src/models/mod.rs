//! Models module - organized by storage layer and purpose
//!
//! ## Structure
//! - `db/` - PostgreSQL models (FromRow-derived structs)
//! - `live` - In-memory state of matches still being played
//! - `dto/` - Data Transfer Objects (requests, responses, view models)

pub mod db;
pub mod dto;
pub mod live;
