// src/handlers/admin.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, store::SharedStore};

/// Lists all users in the system.
/// Admin only.
pub async fn list_users(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let users = store.read().await.users().to_vec();
    Ok(Json(users))
}
