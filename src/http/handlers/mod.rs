// Request handlers, one module per domain
pub mod matches;
