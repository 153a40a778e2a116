//! Domain layer - entities, repository traits and validation

pub mod account;
pub mod error;

pub use error::DomainError;
