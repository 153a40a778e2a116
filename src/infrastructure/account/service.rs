//! Account service - the validation and credential pipeline behind every
//! endpoint

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::account::{
    validate_login, validate_registration, validate_reset, Account, AccountRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new account
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAccountRequest {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub age: i64,
    pub password: String,
    pub confirm_password: String,
}

/// Request for resetting an account's password
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Orchestrates validation, hashing and storage per operation
#[derive(Debug)]
pub struct AccountService<R: AccountRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AccountRepository, H: PasswordHasher> AccountService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account
    ///
    /// Validation runs fully before any store access; the email uniqueness
    /// pre-check gives a clean 409, the store constraint backs it up under
    /// concurrency.
    pub async fn register(&self, request: RegisterAccountRequest) -> Result<Account, DomainError> {
        validate_registration(
            &request.name,
            &request.email,
            &request.mobile_number,
            request.age,
            &request.password,
            &request.confirm_password,
        )
        .map_err(DomainError::validation)?;

        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict("Email already exists"));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let account = Account::new(
            &request.name,
            &request.email,
            &request.mobile_number,
            request.age as u8, // range-checked by the validator
            password_hash,
        );

        self.repository.create(account).await
    }

    /// Check credentials against the store
    ///
    /// Unknown email and wrong password both come back as `None` so callers
    /// cannot tell which one failed.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        validate_login(email, password).map_err(DomainError::validation)?;

        let account = match self.repository.find_by_email(email).await? {
            Some(account) => account,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, account.password_hash()) {
            return Ok(None);
        }

        Ok(Some(account))
    }

    /// Replace the password for an existing account
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), DomainError> {
        validate_reset(
            &request.email,
            &request.new_password,
            &request.confirm_password,
        )
        .map_err(DomainError::validation)?;

        let new_hash = self.hasher.hash(&request.new_password)?;

        if !self
            .repository
            .update_password(&request.email, &new_hash)
            .await?
        {
            return Err(DomainError::not_found("User not found"));
        }

        Ok(())
    }

    /// Fetch an account by email
    pub async fn get(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.repository.find_by_email(email).await
    }

    /// Delete an account; returns false if the email is unknown
    pub async fn delete(&self, email: &str) -> Result<bool, DomainError> {
        self.repository.delete(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::account::password::Argon2Hasher;
    use crate::infrastructure::account::repository::InMemoryAccountRepository;

    fn create_service() -> AccountService<InMemoryAccountRepository, Argon2Hasher> {
        AccountService::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )
    }

    fn register_request(email: &str, password: &str) -> RegisterAccountRequest {
        RegisterAccountRequest {
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            mobile_number: "9876543210".to_string(),
            age: 30,
            password: password.to_string(),
            confirm_password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = create_service();

        let account = service
            .register(register_request("jane@example.com", "secret1"))
            .await
            .unwrap();
        assert!(!account.id().is_empty());

        let authenticated = service
            .authenticate("jane@example.com", "secret1")
            .await
            .unwrap();
        assert!(authenticated.is_some());
        assert_eq!(authenticated.unwrap().id(), account.id());
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let service = create_service();

        let mut request = register_request("jane@example.com", "secret1");
        request.confirm_password = "secret2".to_string();

        let result = service.register(request).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        // Nothing was persisted
        let account = service.get("jane@example.com").await.unwrap();
        assert!(account.is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service();

        service
            .register(register_request("jane@example.com", "secret1"))
            .await
            .unwrap();

        let result = service
            .register(register_request("jane@example.com", "secret2"))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_register_does_not_store_plaintext() {
        let service = create_service();

        let account = service
            .register(register_request("jane@example.com", "secret1"))
            .await
            .unwrap();

        assert_ne!(account.password_hash(), "secret1");
        assert!(!account.password_hash().is_empty());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_and_unknown_email() {
        let service = create_service();

        service
            .register(register_request("jane@example.com", "secret1"))
            .await
            .unwrap();

        // Wrong password and unknown email are indistinguishable
        let wrong_password = service
            .authenticate("jane@example.com", "wrong-pass")
            .await
            .unwrap();
        let unknown_email = service
            .authenticate("nobody@example.com", "secret1")
            .await
            .unwrap();

        assert!(wrong_password.is_none());
        assert!(unknown_email.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_malformed_input() {
        let service = create_service();

        let result = service.authenticate("not-an-email", "secret1").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_reset_password() {
        let service = create_service();

        service
            .register(register_request("jane@example.com", "secret1"))
            .await
            .unwrap();

        service
            .reset_password(ResetPasswordRequest {
                email: "jane@example.com".to_string(),
                new_password: "secret2".to_string(),
                confirm_password: "secret2".to_string(),
            })
            .await
            .unwrap();

        // Old password fails, new one works
        let old = service
            .authenticate("jane@example.com", "secret1")
            .await
            .unwrap();
        assert!(old.is_none());

        let new = service
            .authenticate("jane@example.com", "secret2")
            .await
            .unwrap();
        assert!(new.is_some());
    }

    #[tokio::test]
    async fn test_reset_password_mismatch() {
        let service = create_service();

        let result = service
            .reset_password(ResetPasswordRequest {
                email: "jane@example.com".to_string(),
                new_password: "secret2".to_string(),
                confirm_password: "secret3".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_reset_password_unknown_email() {
        let service = create_service();

        let result = service
            .reset_password(ResetPasswordRequest {
                email: "nobody@example.com".to_string(),
                new_password: "secret2".to_string(),
                confirm_password: "secret2".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = create_service();

        service
            .register(register_request("jane@example.com", "secret1"))
            .await
            .unwrap();

        assert!(service.delete("jane@example.com").await.unwrap());
        assert!(!service.delete("jane@example.com").await.unwrap());

        let account = service.get("jane@example.com").await.unwrap();
        assert!(account.is_none());
    }
}
