// src/routes.rs

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware::{self, Next},
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, auth, courses, dashboard, quiz},
    models::user::View,
    state::AppState,
    utils::jwt::{auth_middleware, require_view},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (session, courses, quizzes, learner screens, admin).
/// * Gates each sub-router by the view it backs.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let public_routes = Router::new().route("/auth/login", post(auth::login));

    // Reachable by every role.
    let session_routes = Router::new()
        .route("/auth/logout", post(auth::logout))
        .route("/session", get(auth::current_session))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/courses", get(courses::list_courses))
        .route("/courses/{id}", get(courses::get_course))
        .route("/quizzes/results", get(quiz::list_results));

    let learning_routes = Router::new()
        .route("/modules/{id}/complete", post(courses::complete_module))
        .route("/modules/{id}/quiz", get(courses::module_quiz))
        .route("/quizzes/{id}/submissions", post(quiz::submit_quiz))
        .route("/attempts", post(quiz::start_attempt))
        .route(
            "/attempts/{id}",
            get(quiz::get_attempt).delete(quiz::abandon_attempt),
        )
        .route("/attempts/{id}/answers", put(quiz::select_answer))
        .route("/attempts/{id}/submit", post(quiz::submit_attempt))
        .layer(middleware::from_fn(
            |req: Request<Body>, next: Next| require_view(View::Learning, req, next),
        ));

    let leaderboard_routes = Router::new()
        .route("/leaderboard", get(dashboard::get_leaderboard))
        .layer(middleware::from_fn(
            |req: Request<Body>, next: Next| require_view(View::Leaderboard, req, next),
        ));

    let badge_routes = Router::new()
        .route("/badges", get(dashboard::get_badges))
        .layer(middleware::from_fn(
            |req: Request<Body>, next: Next| require_view(View::Badges, req, next),
        ));

    let certificate_routes = Router::new()
        .route("/certificates", get(dashboard::get_certificates))
        .layer(middleware::from_fn(
            |req: Request<Body>, next: Next| require_view(View::Certificates, req, next),
        ));

    let admin_routes = Router::new()
        .route("/users", get(admin::list_users))
        .layer(middleware::from_fn(
            |req: Request<Body>, next: Next| require_view(View::Users, req, next),
        ));

    // View gates run after auth: layers added later run first.
    let protected = Router::new()
        .merge(session_routes)
        .merge(learning_routes)
        .merge(leaderboard_routes)
        .merge(badge_routes)
        .merge(certificate_routes)
        .nest("/admin", admin_routes)
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api", public_routes.merge(protected))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
