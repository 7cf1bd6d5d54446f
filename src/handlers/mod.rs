// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod quiz;

use crate::{error::AppError, models::user::User, store::Store, utils::jwt::Claims};

/// Resolves the user behind a token.
fn current_user(store: &Store, claims: &Claims) -> Result<User, AppError> {
    store
        .user(&claims.sub)
        .cloned()
        .ok_or_else(|| AppError::AuthError("User no longer exists".to_string()))
}
