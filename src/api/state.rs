//! Application state shared across handlers

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::{Account, AccountRepository};
use crate::domain::DomainError;
use crate::infrastructure::account::{
    AccountService, PasswordHasher, RegisterAccountRequest, ResetPasswordRequest,
};
use crate::infrastructure::forwarder::Forwarder;

/// Shared services, injected via dynamic dispatch so tests can swap
/// backends and disable mirroring
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub forwarder: Arc<dyn Forwarder>,
}

/// Trait for account service operations
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterAccountRequest) -> Result<Account, DomainError>;
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError>;
    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), DomainError>;
    async fn get(&self, email: &str) -> Result<Option<Account>, DomainError>;
    async fn delete(&self, email: &str) -> Result<bool, DomainError>;
}

#[async_trait]
impl<R, H> AccountServiceTrait for AccountService<R, H>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegisterAccountRequest) -> Result<Account, DomainError> {
        AccountService::register(self, request).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, DomainError> {
        AccountService::authenticate(self, email, password).await
    }

    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), DomainError> {
        AccountService::reset_password(self, request).await
    }

    async fn get(&self, email: &str) -> Result<Option<Account>, DomainError> {
        AccountService::get(self, email).await
    }

    async fn delete(&self, email: &str) -> Result<bool, DomainError> {
        AccountService::delete(self, email).await
    }
}

impl AppState {
    pub fn new(account_service: Arc<dyn AccountServiceTrait>, forwarder: Arc<dyn Forwarder>) -> Self {
        Self {
            account_service,
            forwarder,
        }
    }
}
