// src/handlers/courses.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::{error::AppError, models::course::CourseListQuery, store::SharedStore};

/// Lists courses, optionally narrowed to in-progress or completed ones.
pub async fn list_courses(
    State(store): State<SharedStore>,
    Query(query): Query<CourseListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let courses = store.read().await.courses_matching(query.filter);
    Ok(Json(courses))
}

/// Retrieves a course with its modules.
pub async fn get_course(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = store.read().await.course_detail(&id)?;
    Ok(Json(detail))
}

/// Marks a module complete; the course progress is recomputed.
pub async fn complete_module(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let completion = store.write().await.complete_module(&id)?;
    Ok(Json(completion))
}

/// Returns the module's quiz without the answer key.
pub async fn module_quiz(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store.read().await.public_quiz_for_module(&id)?;
    Ok(Json(quiz))
}
