//! Account infrastructure - hashing, storage backends and the service

pub mod password;
pub mod postgres_repository;
pub mod repository;
pub mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresAccountRepository;
pub use repository::InMemoryAccountRepository;
pub use service::{AccountService, RegisterAccountRequest, ResetPasswordRequest};
