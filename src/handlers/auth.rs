// src/handlers/auth.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use serde_json::json;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{LoginRequest, SessionResponse},
    services::session::SessionRegistry,
    store::SharedStore,
    utils::jwt::{Claims, sign_jwt},
};

use super::current_user;

/// Authenticates a user by (email, role) and returns a JWT token.
///
/// Any mismatch yields the same `InvalidCredentials` error.
pub async fn login(
    State(store): State<SharedStore>,
    State(sessions): State<SessionRegistry>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = store
        .read()
        .await
        .authenticate(&payload.email, payload.role)
        .cloned()
        .inspect_err(|_| tracing::warn!(role = payload.role.as_str(), "Failed login attempt"))?;

    let expires_at = i64::try_from(config.jwt_expiration)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(|| AppError::InternalServerError("JWT_EXPIRATION out of range".to_string()))?;
    let session_id = sessions.open(&user, expires_at).await;

    let token = match sign_jwt(&user.id, user.role, session_id, &config.jwt_secret, expires_at) {
        Ok(token) => token,
        Err(e) => {
            sessions.close(session_id).await;
            return Err(e);
        }
    };

    let active_sessions = sessions.len().await;
    tracing::info!(
        user_id = %user.id,
        role = user.role.as_str(),
        active_sessions,
        "User logged in"
    );

    Ok(Json(json!({
        "token": token,
        "type": "Bearer",
        "menu": user.role.menu(),
        "user": user,
    })))
}

/// Ends the caller's session and drops their quiz attempts.
pub async fn logout(
    State(store): State<SharedStore>,
    State(sessions): State<SessionRegistry>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    sessions.close(claims.sid).await;
    let abandoned = store.write().await.abandon_attempts_for(&claims.sub);

    tracing::info!(user_id = %claims.sub, abandoned, "User logged out");

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the active user and their menu.
pub async fn current_session(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = current_user(&*store.read().await, &claims)?;

    Ok(Json(SessionResponse {
        menu: user.role.menu(),
        user,
    }))
}
