//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Account;
use crate::domain::DomainError;

/// Storage contract for account records
///
/// Every operation is atomic against the underlying store. `create` must
/// enforce email uniqueness so a concurrent duplicate register cannot slip
/// through between check and insert.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Insert a new account; `Conflict` if the email is already taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Look up an account by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Replace the stored password hash; returns false if no account matched
    async fn update_password(&self, email: &str, new_hash: &str) -> Result<bool, DomainError>;

    /// Delete an account; returns false if no account matched
    async fn delete(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
