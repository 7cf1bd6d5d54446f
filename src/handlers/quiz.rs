// src/handlers/quiz.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::QUIZ_TICK,
    error::AppError,
    models::quiz::{SelectAnswerRequest, StartAttemptRequest, SubmitQuizRequest},
    services::timer::spawn_countdown,
    store::SharedStore,
    utils::jwt::Claims,
};

/// Scores a complete answer sheet in one call and records the result.
pub async fn submit_quiz(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Path(quiz_id): Path<String>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let outcome = store
        .write()
        .await
        .submit_quiz(&quiz_id, &claims.sub, &req.answers, Utc::now())?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Result history. Learners see their own, trainers and admins see all.
pub async fn list_results(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let results = store.read().await.results_visible_to(&claims.sub, claims.role);
    Ok(Json(results))
}

/// Opens a quiz attempt for a module and starts its countdown if timed.
pub async fn start_attempt(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<StartAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let mut guard = store.write().await;
    let started = guard.start_attempt(&req.module_id, &claims.sub, Utc::now())?;

    if started.attempt.time_left.is_some() {
        // The task blocks on the lock we hold, so it cannot tick before the
        // handle is attached.
        let timer = spawn_countdown(store.clone(), started.attempt.id, QUIZ_TICK);
        guard.attach_timer(started.attempt.id, timer);
    }

    Ok((StatusCode::CREATED, Json(started)))
}

pub async fn get_attempt(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = store.read().await.attempt_view(id, &claims.sub)?;
    Ok(Json(view))
}

/// Records the option chosen for one question.
pub async fn select_answer(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view = store
        .write()
        .await
        .select_answer(id, &claims.sub, req.question, req.option)?;
    Ok(Json(view))
}

/// Submits an attempt by hand. Its countdown is cancelled first.
pub async fn submit_attempt(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = store
        .write()
        .await
        .submit_attempt(id, &claims.sub, Utc::now())?;
    Ok(Json(outcome))
}

/// Leaves an attempt without submitting.
pub async fn abandon_attempt(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    store.write().await.abandon_attempt(id, &claims.sub)?;
    Ok(StatusCode::NO_CONTENT)
}
