//! Account endpoints
//!
//! Each handler is a linear pipeline: validate, hit the store, mirror the
//! call, assemble the response. The mirror outcome rides along in the
//! response body but never changes the status code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::account::AccountView;
use crate::infrastructure::account::{RegisterAccountRequest, ResetPasswordRequest};
use crate::infrastructure::forwarder::{Method, MirrorOutcome};

/// Create the account router
pub fn create_account_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/reset-password", patch(reset_password))
        .route("/delete/{email}", delete(delete_account))
        .route("/user/{email}", get(get_account))
}

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub age: i64,
    pub password: String,
    pub confirm_password: String,
}

impl From<RegisterRequest> for RegisterAccountRequest {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            mobile_number: request.mobile_number,
            age: request.age,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Password-reset request body
#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Response carrying a message and the affected account id
#[derive(Debug, Serialize)]
pub struct AccountIdResponse {
    pub message: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_server_response: Option<MirrorOutcome>,
}

/// Response carrying only a message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_server_response: Option<MirrorOutcome>,
}

/// Account view response for GET /user/{email}
#[derive(Debug, Serialize)]
pub struct AccountViewResponse {
    #[serde(flatten)]
    pub account: AccountView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_server_response: Option<MirrorOutcome>,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountIdResponse>), ApiError> {
    let account = state.account_service.register(request.into()).await?;

    // Mirror payload carries no credentials
    let mirror = state
        .forwarder
        .forward(
            "/register",
            Some(json!({
                "name": account.name(),
                "email": account.email(),
                "mobile_number": account.mobile_number(),
                "age": account.age(),
            })),
            Method::POST,
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(AccountIdResponse {
            message: "User registered".to_string(),
            user_id: account.id().to_string(),
            mock_server_response: mirror,
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccountIdResponse>, ApiError> {
    let account = state
        .account_service
        .authenticate(&request.email, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let mirror = state
        .forwarder
        .forward(
            "/login",
            Some(json!({"email": request.email})),
            Method::POST,
        )
        .await;

    Ok(Json(AccountIdResponse {
        message: "Login successful".to_string(),
        user_id: account.id().to_string(),
        mock_server_response: mirror,
    }))
}

/// PATCH /reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .account_service
        .reset_password(ResetPasswordRequest {
            email: request.email.clone(),
            new_password: request.new_password,
            confirm_password: request.confirm_password,
        })
        .await?;

    let mirror = state
        .forwarder
        .forward(
            "/reset-password",
            Some(json!({"email": request.email})),
            Method::PATCH,
        )
        .await;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
        mock_server_response: mirror,
    }))
}

/// DELETE /delete/{email}
pub async fn delete_account(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.account_service.delete(&email).await? {
        return Err(ApiError::not_found("User not found"));
    }

    let mirror = state
        .forwarder
        .forward(&format!("/delete/{}", email), None, Method::DELETE)
        .await;

    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
        mock_server_response: mirror,
    }))
}

/// GET /user/{email}
pub async fn get_account(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AccountViewResponse>, ApiError> {
    let account = state
        .account_service
        .get(&email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let mirror = state
        .forwarder
        .forward(&format!("/user/{}", email), None, Method::GET)
        .await;

    Ok(Json(AccountViewResponse {
        account: AccountView::from(&account),
        mock_server_response: mirror,
    }))
}
