//! Axum route handlers for signup, login and the current-user profile.

use std::sync::OnceLock;

use axum::{extract::State, http::StatusCode, Json};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::repository::{find_user_by_email, find_user_by_id, insert_user};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::UserProfile;
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
    pub user_id: Uuid,
}

/// Validated signup input. The email is trimmed and lowercased.
#[derive(Debug, PartialEq)]
struct NewAccount {
    name: String,
    email: String,
    password: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_signup(request: SignupRequest) -> Result<NewAccount, AppError> {
    let name = request.name.as_deref().map(str::trim).unwrap_or_default();
    let email = request.email.as_deref().map(normalize_email).unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::Validation("All fields are required".to_string()));
    }
    if !email_regex().is_match(&email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    Ok(NewAccount {
        name: name.to_string(),
        email,
        password,
    })
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid email or password".to_string())
}

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    AppJson(request): AppJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let account = validate_signup(request)?;
    let password_hash = hash_password(account.password).await?;
    let user = insert_user(&state.db, &account.name, &account.email, &password_hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_string(),
            user_id: user.id,
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = request.email.as_deref().map(normalize_email).unwrap_or_default();
    let password = request.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let Some(user) = find_user_by_email(&state.db, &email).await? else {
        warn!("Login attempt for unknown email");
        return Err(invalid_credentials());
    };

    if !verify_password(password, user.password_hash.clone()).await? {
        warn!("Failed login for user {}", user.id);
        return Err(invalid_credentials());
    }

    let token = state.jwt.issue(&user)?;
    info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        token,
        name: user.name,
        user_id: user.id,
    }))
}

/// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let user = find_user_by_id(&state.db, caller.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_signup_normalizes_email() {
        let account = validate_signup(signup(" Test User ", " Test@Test.com ", "test123")).unwrap();
        assert_eq!(account.name, "Test User");
        assert_eq!(account.email, "test@test.com");
    }

    #[test]
    fn test_signup_requires_all_fields() {
        let err = validate_signup(SignupRequest {
            name: Some("x".to_string()),
            email: None,
            password: Some("secret1".to_string()),
        })
        .unwrap_err();
        assert_eq!(message(err), "All fields are required");
    }

    #[test]
    fn test_signup_rejects_bad_email() {
        for email in ["plainaddress", "a@b", "a b@c.com", "@c.com"] {
            let err = validate_signup(signup("n", email, "secret1")).unwrap_err();
            assert_eq!(message(err), "Invalid email format", "email={email}");
        }
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let err = validate_signup(signup("n", "n@x.io", "12345")).unwrap_err();
        assert_eq!(message(err), "Password must be at least 6 characters long");
        assert!(validate_signup(signup("n", "n@x.io", "123456")).is_ok());
    }
}
