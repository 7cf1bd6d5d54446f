// tests/countdown_tests.rs

use std::time::Duration;

use chrono::Utc;
use learnhub::{
    config::QUIZ_TICK,
    services::{attempt::AttemptState, timer::spawn_countdown},
    store::{SharedStore, Store},
};
use uuid::Uuid;

const LEARNER: &str = "user-3";

/// Starts a timed attempt at quiz-3 (five minutes) the way the handler does.
async fn start_timed_attempt(store: &SharedStore) -> Uuid {
    let mut guard = store.write().await;
    let started = guard
        .start_attempt("module-3-3", LEARNER, Utc::now())
        .expect("module-3-3 has a quiz");
    assert_eq!(started.attempt.time_left, Some(300));

    let timer = spawn_countdown(store.clone(), started.attempt.id, QUIZ_TICK);
    guard.attach_timer(started.attempt.id, timer);
    started.attempt.id
}

#[tokio::test(start_paused = true)]
async fn countdown_auto_submits_when_time_runs_out() {
    let store = Store::seeded().into_shared();
    let id = start_timed_attempt(&store).await;

    // Half-second offsets keep the sleeps off tick instants.
    tokio::time::sleep(Duration::from_millis(120_500)).await;
    {
        let store = store.read().await;
        let attempt = store.attempt(id).unwrap();
        assert_eq!(attempt.state(), AttemptState::Unanswered);
        assert_eq!(attempt.time_left(), Some(180));
    }

    store.write().await.select_answer(id, LEARNER, 0, 1).unwrap();

    tokio::time::sleep(Duration::from_secs(185)).await;

    let store = store.read().await;
    let attempt = store.attempt(id).unwrap();
    assert_eq!(attempt.state(), AttemptState::Scored);
    assert_eq!(attempt.time_left(), Some(0));

    let results = store.results();
    assert_eq!(results.len(), 1);
    // One of three correct: 33 < 67.
    assert_eq!(results[0].score, 33);
    assert!(!results[0].passed);
    assert_eq!(results[0].answers, vec![Some(1), None, None]);
}

#[tokio::test(start_paused = true)]
async fn manual_submit_cancels_the_countdown() {
    let store = Store::seeded().into_shared();
    let id = start_timed_attempt(&store).await;

    tokio::time::sleep(Duration::from_millis(10_500)).await;
    let outcome = store
        .write()
        .await
        .submit_attempt(id, LEARNER, Utc::now())
        .unwrap();
    assert_eq!(outcome.result.score, 0);

    tokio::time::sleep(Duration::from_secs(400)).await;

    let store = store.read().await;
    assert_eq!(store.results().len(), 1);
    let attempt = store.attempt(id).unwrap();
    assert_eq!(attempt.state(), AttemptState::Scored);
    assert_eq!(attempt.time_left(), Some(290));
}

#[tokio::test(start_paused = true)]
async fn abandoning_cancels_the_countdown() {
    let store = Store::seeded().into_shared();
    let id = start_timed_attempt(&store).await;

    tokio::time::sleep(Duration::from_secs(5)).await;
    store.write().await.abandon_attempt(id, LEARNER).unwrap();

    tokio::time::sleep(Duration::from_secs(400)).await;

    let store = store.read().await;
    assert!(store.attempt(id).is_none());
    assert!(store.results().is_empty());
}
