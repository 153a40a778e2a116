//! User account service: registration, login, password reset, lookup
//! and deletion over HTTP, with pluggable storage and optional
//! best-effort request mirroring to an external endpoint.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPool;

use crate::api::state::AppState;
use crate::config::AppConfig;
use crate::infrastructure::account::{
    AccountService, Argon2Hasher, InMemoryAccountRepository, PostgresAccountRepository,
};
use crate::infrastructure::forwarder::{Forwarder, HttpForwarder, NoopForwarder};

/// Wire up repositories, hashing and the forwarder from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());

    let account_service: Arc<dyn api::state::AccountServiceTrait> =
        match config.storage.backend.as_str() {
            "postgres" => {
                let url = std::env::var("DATABASE_URL")
                    .context("DATABASE_URL must be set for the postgres backend")?;
                let pool = PgPool::connect(&url)
                    .await
                    .context("failed to connect to postgres")?;

                let repository = PostgresAccountRepository::new(pool);
                repository.ensure_schema().await?;

                Arc::new(AccountService::new(Arc::new(repository), hasher))
            }
            "memory" => Arc::new(AccountService::new(
                Arc::new(InMemoryAccountRepository::new()),
                hasher,
            )),
            other => anyhow::bail!("unknown storage backend: {other}"),
        };

    let forwarder: Arc<dyn Forwarder> = if config.forwarder.enabled {
        Arc::new(HttpForwarder::new(
            config.forwarder.base_url.clone(),
            Duration::from_secs(config.forwarder.timeout_secs),
        )?)
    } else {
        Arc::new(NoopForwarder)
    };

    Ok(AppState::new(account_service, forwarder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_builds_state() {
        let config = AppConfig::default();

        let state = create_app_state(&config).await.unwrap();
        assert!(state.forwarder.forward("/", None, reqwest::Method::GET).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let mut config = AppConfig::default();
        config.storage.backend = "sqlite".to_string();

        let result = create_app_state(&config).await;
        assert!(result.is_err());
    }
}
