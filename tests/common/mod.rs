// tests/common/mod.rs

#![allow(dead_code)]

use learnhub::{config::Config, routes, state::AppState, store::Store};

/// Spawns the app on a random port with a freshly seeded store.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app() -> String {
    spawn_app_with_expiration(600).await // 10 minutes for tests
}

/// Same as `spawn_app`, with sessions lasting `jwt_expiration` seconds.
pub async fn spawn_app_with_expiration(jwt_expiration: u64) -> String {
    let config = Config {
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        jwt_expiration,
        rust_log: "error".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        log_dir: "logs".to_string(),
    };

    let state = AppState::new(Store::seeded(), config);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Logs in and returns the bearer token.
pub async fn login(client: &reqwest::Client, address: &str, email: &str, role: &str) -> String {
    let body = client
        .post(format!("{}/api/auth/login", address))
        .json(&serde_json::json!({ "email": email, "role": role }))
        .send()
        .await
        .expect("Failed to execute request")
        .json::<serde_json::Value>()
        .await
        .unwrap();

    body["token"]
        .as_str()
        .expect("login response has no token")
        .to_string()
}

pub const ADMIN: (&str, &str) = ("admin@learnhub.com", "admin");
pub const TRAINER: (&str, &str) = ("trainer@learnhub.com", "trainer");
pub const LEARNER: (&str, &str) = ("learner@learnhub.com", "learner");
pub const OTHER_LEARNER: (&str, &str) = ("priya@learnhub.com", "learner");

pub async fn login_as(client: &reqwest::Client, address: &str, who: (&str, &str)) -> String {
    login(client, address, who.0, who.1).await
}
