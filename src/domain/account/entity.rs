//! Account entity and its client-facing projection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted user account, keyed logically by email
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// System-generated identifier, immutable after creation
    id: String,
    name: String,
    /// Unique across all live accounts
    email: String,
    /// Exactly 10 digits, stored as text
    mobile_number: String,
    age: u8,
    /// Argon2 PHC string - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh UUID
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile_number: impl Into<String>,
        age: u8,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            mobile_number: mobile_number.into(),
            age,
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an account from stored fields
    pub(crate) fn from_parts(
        id: String,
        name: String,
        email: String,
        mobile_number: String,
        age: u8,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            mobile_number,
            age,
            password_hash,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the password hash; the only field mutable after creation
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.updated_at = Utc::now();
    }
}

/// Password-free projection of an account returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub age: u8,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            mobile_number: account.mobile_number.clone(),
            age: account.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        Account::new("Jane Doe", "jane@example.com", "9876543210", 30, "hashed")
    }

    #[test]
    fn test_account_creation() {
        let account = test_account();

        assert!(!account.id().is_empty());
        assert_eq!(account.name(), "Jane Doe");
        assert_eq!(account.email(), "jane@example.com");
        assert_eq!(account.mobile_number(), "9876543210");
        assert_eq!(account.age(), 30);
        assert_eq!(account.password_hash(), "hashed");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(test_account().id(), test_account().id());
    }

    #[test]
    fn test_set_password_hash_touches_updated_at() {
        let mut account = test_account();
        let id = account.id().to_string();
        let original_updated = account.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        account.set_password_hash("new_hash");
        assert_eq!(account.password_hash(), "new_hash");
        assert!(account.updated_at() > original_updated);
        // id never changes
        assert_eq!(account.id(), id);
    }

    #[test]
    fn test_serialization_excludes_password_hash() {
        let account = test_account();

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("hashed"));
    }

    #[test]
    fn test_view_excludes_password() {
        let account = test_account();
        let view = AccountView::from(&account);

        assert_eq!(view.id, account.id());
        assert_eq!(view.name, "Jane Doe");
        assert_eq!(view.age, 30);

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("password"));
    }
}
