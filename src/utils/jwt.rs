// src/utils/jwt.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::user::{Role, View},
    state::AppState,
};

/// JWT Claims structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Subject - Stores the User ID.
    pub sub: String,
    /// User's role.
    pub role: Role,
    /// Session id, checked against the live session registry.
    pub sid: Uuid,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

/// Signs a new JWT for a session. `exp` is taken from the session expiry.
pub fn sign_jwt(
    user_id: &str,
    role: Role,
    session_id: Uuid,
    secret: &str,
    expires_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id.to_owned(),
        role,
        sid: session_id,
        exp: expires_at.timestamp().max(0) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies and decodes a JWT string.
///
/// Returns the `Claims` if valid, otherwise returns an `AppError`.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Axum Middleware: Authentication.
///
/// Validates the 'Authorization: Bearer <token>' header and checks that the
/// session it names is still open. On success injects `Claims` into the
/// request extensions for handlers to use.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => return Err(AppError::AuthError("Missing bearer token".to_string())),
    };

    let claims = verify_jwt(token, &state.config.jwt_secret)?;

    if state.sessions.get(claims.sid, &claims.sub).await.is_none() {
        return Err(AppError::AuthError("Session has ended".to_string()));
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Axum Middleware: View gate.
///
/// Must be used AFTER `auth_middleware`. Lets the request through only if the
/// caller's role has `view` in its menu.
pub async fn require_view(view: View, req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| AppError::AuthError("Missing session".to_string()))?;

    if !claims.role.can_access(view) {
        tracing::debug!(role = claims.role.as_str(), ?view, "View not available for role");
        return Err(AppError::Forbidden(format!(
            "The {} role cannot access this view",
            claims.role.as_str()
        )));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_a_minute() -> DateTime<Utc> {
        Utc::now() + chrono::Duration::seconds(60)
    }

    #[test]
    fn sign_then_verify() {
        let sid = Uuid::new_v4();
        let token = sign_jwt("user-3", Role::Learner, sid, "secret", in_a_minute()).unwrap();
        let claims = verify_jwt(&token, "secret").unwrap();
        assert_eq!(claims.sub, "user-3");
        assert_eq!(claims.role, Role::Learner);
        assert_eq!(claims.sid, sid);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_jwt("user-1", Role::Admin, Uuid::new_v4(), "secret", in_a_minute()).unwrap();
        assert!(matches!(verify_jwt(&token, "other"), Err(AppError::AuthError(_))));
    }
}
