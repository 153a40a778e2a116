//! Account domain - the persisted user record and its rules

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{Account, AccountView};
pub use repository::AccountRepository;
pub use validation::{
    validate_login, validate_registration, validate_reset, FieldViolation, ValidationErrors,
};
