//! In-memory account repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountRepository};
use crate::domain::DomainError;

/// In-memory implementation of `AccountRepository`, keyed by email
///
/// The uniqueness check and the insert happen under a single write lock,
/// so concurrent duplicate registrations cannot race each other.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(account.email()) {
            return Err(DomainError::conflict("Email already exists"));
        }

        accounts.insert(account.email().to_string(), account.clone());

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    async fn update_password(&self, email: &str, new_hash: &str) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(email) {
            Some(account) => {
                account.set_password_hash(new_hash);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, email: &str) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(email).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account(email: &str) -> Account {
        Account::new("Jane Doe", email, "9876543210", 30, "hashed")
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryAccountRepository::new();
        let account = test_account("jane@example.com");

        repo.create(account.clone()).await.unwrap();

        let found = repo.find_by_email("jane@example.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().id(), account.id());

        let missing = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryAccountRepository::new();

        repo.create(test_account("jane@example.com")).await.unwrap();

        let result = repo.create(test_account("jane@example.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_email_exists() {
        let repo = InMemoryAccountRepository::new();

        assert!(!repo.email_exists("jane@example.com").await.unwrap());

        repo.create(test_account("jane@example.com")).await.unwrap();

        assert!(repo.email_exists("jane@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_password() {
        let repo = InMemoryAccountRepository::new();
        repo.create(test_account("jane@example.com")).await.unwrap();

        let updated = repo
            .update_password("jane@example.com", "new_hash")
            .await
            .unwrap();
        assert!(updated);

        let account = repo
            .find_by_email("jane@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.password_hash(), "new_hash");
    }

    #[tokio::test]
    async fn test_update_password_unknown_email() {
        let repo = InMemoryAccountRepository::new();

        let updated = repo
            .update_password("nobody@example.com", "new_hash")
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryAccountRepository::new();
        repo.create(test_account("jane@example.com")).await.unwrap();

        assert!(repo.delete("jane@example.com").await.unwrap());
        assert!(!repo.delete("jane@example.com").await.unwrap());

        let found = repo.find_by_email("jane@example.com").await.unwrap();
        assert!(found.is_none());
    }
}
