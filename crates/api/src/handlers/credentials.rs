//! Handlers for signup and login.
//!
//! No token or session is issued: a successful login only echoes the
//! username back.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use plotline_core::error::CoreError;
use plotline_core::validation::{present, require};
use plotline_db::models::user::CreateUser;
use plotline_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Hashes the password and stores a new user. Nothing from the stored row is
/// echoed back.
pub async fn signup(
    State(state): State<AppState>,
    Payload(input): Payload<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    require(&input)?;
    let username = present("username", input.username)?;
    let email = present("email", input.email)?;
    let password = present("password", input.password)?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username,
            email,
            password_hash,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

/// POST /login
///
/// Both an unknown email and a wrong password answer 400.
pub async fn login(
    State(state): State<AppState>,
    Payload(input): Payload<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    require(&input)?;
    let email = present("email", input.email)?;
    let password = present("password", input.password)?;

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::info!("Login rejected: unknown email");
            AppError::Core(CoreError::UnknownAccount("User not found".into()))
        })?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::InvalidCredentials(
            "Invalid password".into(),
        )));
    }

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse {
        username: user.username,
    }))
}
