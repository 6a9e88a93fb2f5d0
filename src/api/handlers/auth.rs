//! Handlers for registration and login endpoints.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Response
///
/// `201 Created` with the new account's public fields:
///
/// ```json
/// { "id": 1, "email": "alice@example.com", "created_at": "..." }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed email or password shorter than 8 characters
/// - **409 Conflict**: email already registered
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    tracing::info!(user_id = user.id, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }),
    ))
}

/// Authenticates credentials and issues a bearer token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Response
///
/// ```json
/// { "token": "<jwt>" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed email or empty password
/// - **401 Unauthorized**: same body for unknown email and wrong password
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
