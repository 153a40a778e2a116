//! PostgreSQL account repository

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::{Account, AccountRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of `AccountRepository`
///
/// The `accounts` table carries a UNIQUE constraint on `email`, so a
/// concurrent duplicate register loses at the insert instead of slipping
/// past the pre-check.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the accounts table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                mobile_number TEXT NOT NULL,
                age SMALLINT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create accounts table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, mobile_number, age, password_hash,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.id())
        .bind(account.name())
        .bind(account.email())
        .bind(account.mobile_number())
        .bind(account.age() as i16)
        .bind(account.password_hash())
        .bind(account.created_at())
        .bind(account.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict("Email already exists")
            } else {
                DomainError::storage(format!("Failed to create account: {}", e))
            }
        })?;

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, mobile_number, age, password_hash,
                   created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to find account: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_password(&self, email: &str, new_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE email = $1",
        )
        .bind(email)
        .bind(new_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update password: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, email: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete account: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<Account, DomainError> {
    let age: i16 = row.get("age");
    let age = u8::try_from(age)
        .map_err(|_| DomainError::storage(format!("Invalid age in database: {}", age)))?;

    Ok(Account::from_parts(
        row.get("id"),
        row.get("name"),
        row.get("email"),
        row.get("mobile_number"),
        age,
        row.get("password_hash"),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}
