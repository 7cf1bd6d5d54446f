// src/handlers/dashboard.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{error::AppError, store::SharedStore, utils::jwt::Claims};

use super::current_user;

/// Role-specific dashboard summary.
pub async fn get_dashboard(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    let user = current_user(&store, &claims)?;
    Ok(Json(store.dashboard_for(&user)))
}

pub async fn get_leaderboard(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let board = store.read().await.leaderboard_for(&claims.sub);
    Ok(Json(board))
}

/// Earned and locked badges of the caller.
pub async fn get_badges(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    let user = current_user(&store, &claims)?;
    Ok(Json(store.badge_shelf(&user)))
}

pub async fn get_certificates(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let store = store.read().await;
    let user = current_user(&store, &claims)?;
    Ok(Json(store.certificates_for(&user)))
}
