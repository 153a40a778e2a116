//! Request validation for the account endpoints
//!
//! Each request shape gets one aggregating validator that reports every
//! failing field, not just the first one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 50;
const MOBILE_NUMBER_LENGTH: usize = 10;
const MIN_AGE: i64 = 1;
const MAX_AGE: i64 = 120;
const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// A single failed field with a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

/// Aggregated validation failures for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.push(FieldViolation {
            field: field.into(),
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.reason))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validate a registration request
///
/// Rules:
/// - `password` and `confirm_password` must match
/// - `name` 2-50 characters, alphabetic and spaces only
/// - `email` syntactically valid
/// - `mobile_number` exactly 10 digits
/// - `age` in [1, 120]
/// - `password` at least 6 characters
pub fn validate_registration(
    name: &str,
    email: &str,
    mobile_number: &str,
    age: i64,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(reason) = check_name(name) {
        errors.add("name", reason);
    }

    if let Err(reason) = check_email(email) {
        errors.add("email", reason);
    }

    if let Err(reason) = check_mobile_number(mobile_number) {
        errors.add("mobile_number", reason);
    }

    if let Err(reason) = check_age(age) {
        errors.add("age", reason);
    }

    if let Err(reason) = check_password(password) {
        errors.add("password", reason);
    }

    if password != confirm_password {
        errors.add("confirm_password", "passwords do not match");
    }

    errors.into_result()
}

/// Validate a login request (format only; credentials are checked later)
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(reason) = check_email(email) {
        errors.add("email", reason);
    }

    if let Err(reason) = check_password(password) {
        errors.add("password", reason);
    }

    errors.into_result()
}

/// Validate a password-reset request
pub fn validate_reset(
    email: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(reason) = check_email(email) {
        errors.add("email", reason);
    }

    if let Err(reason) = check_password(new_password) {
        errors.add("new_password", reason);
    }

    if new_password != confirm_password {
        errors.add("confirm_password", "passwords do not match");
    }

    errors.into_result()
}

fn check_name(name: &str) -> Result<(), String> {
    let length = name.chars().count();

    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(format!(
            "must be {} to {} characters",
            MIN_NAME_LENGTH, MAX_NAME_LENGTH
        ));
    }

    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err("must contain only alphabetic characters and spaces".to_string());
    }

    Ok(())
}

fn check_email(email: &str) -> Result<(), String> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err("is not a valid email address".to_string())
    }
}

fn check_mobile_number(mobile_number: &str) -> Result<(), String> {
    if mobile_number.len() == MOBILE_NUMBER_LENGTH
        && mobile_number.chars().all(|c| c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(format!("must be exactly {} digits", MOBILE_NUMBER_LENGTH))
    }
}

fn check_age(age: i64) -> Result<(), String> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(())
    } else {
        Err(format!("must be between {} and {}", MIN_AGE, MAX_AGE))
    }
}

fn check_password(password: &str) -> Result<(), String> {
    if password.chars().count() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(format!(
            "must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ))
    }
}
