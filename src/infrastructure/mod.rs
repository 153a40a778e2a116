//! Infrastructure layer - concrete implementations of domain contracts

pub mod account;
pub mod forwarder;
pub mod logging;
