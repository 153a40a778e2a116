//! HTTP API layer

pub mod accounts;
pub mod health;
pub mod router;
pub mod state;
pub mod types;
