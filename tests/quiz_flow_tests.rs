// tests/quiz_flow_tests.rs

mod common;

use common::{ADMIN, LEARNER, OTHER_LEARNER, TRAINER, login_as, spawn_app};
use serde_json::{Value, json};

async fn get_json(client: &reqwest::Client, url: String, token: &str) -> (u16, Value) {
    let response = client.get(url).bearer_auth(token).send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap_or(Value::Null))
}

#[tokio::test]
async fn module_quiz_hides_answer_key() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let (status, quiz) =
        get_json(&client, format!("{}/api/modules/module-1-4/quiz", address), &token).await;
    assert_eq!(status, 200);
    assert_eq!(quiz["id"], "quiz-1");
    assert_eq!(quiz["passing_score"], 70);
    let questions = quiz["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    for question in questions {
        assert!(question.get("correct_answer").is_none());
        assert!(question.get("explanation").is_none());
    }
}

#[tokio::test]
async fn module_without_quiz_is_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let (status, body) =
        get_json(&client, format!("{}/api/modules/module-1-1/quiz", address), &token).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "No quiz available for module 'module-1-1'");

    let (status, _) =
        get_json(&client, format!("{}/api/modules/module-9-9/quiz", address), &token).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn one_shot_submission_is_scored_and_recorded() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let learner = login_as(&client, &address, LEARNER).await;

    let response = client
        .post(format!("{}/api/quizzes/quiz-1/submissions", address))
        .bearer_auth(&learner)
        .json(&json!({ "answers": [0, 2, 0, 3] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["result"]["score"], 75);
    assert_eq!(outcome["result"]["passed"], true);
    assert_eq!(outcome["correct_count"], 3);
    assert_eq!(outcome["total_questions"], 4);
    assert_eq!(outcome["review"][2]["is_correct"], false);
    assert_eq!(outcome["review"][2]["correct_answer"], 1);

    // Short sheet: missing answers count as unanswered.
    let response = client
        .post(format!("{}/api/quizzes/quiz-1/submissions", address))
        .bearer_auth(&learner)
        .json(&json!({ "answers": [0] }))
        .send()
        .await
        .unwrap();
    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["result"]["score"], 25);
    assert_eq!(outcome["result"]["passed"], false);
    assert_eq!(outcome["review"][3]["selected_text"], "Not answered");

    let (_, own) = get_json(&client, format!("{}/api/quizzes/results", address), &learner).await;
    assert_eq!(own.as_array().unwrap().len(), 2);

    let other = login_as(&client, &address, OTHER_LEARNER).await;
    let (_, theirs) = get_json(&client, format!("{}/api/quizzes/results", address), &other).await;
    assert!(theirs.as_array().unwrap().is_empty());

    for who in [ADMIN, TRAINER] {
        let token = login_as(&client, &address, who).await;
        let (status, all) =
            get_json(&client, format!("{}/api/quizzes/results", address), &token).await;
        assert_eq!(status, 200);
        assert_eq!(all.as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn submitting_unknown_quiz_is_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let response = client
        .post(format!("{}/api/quizzes/quiz-404/submissions", address))
        .bearer_auth(&token)
        .json(&json!({ "answers": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn oversized_answer_sheet_is_rejected() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let answers = vec![Value::Null; 201];
    let response = client
        .post(format!("{}/api/quizzes/quiz-1/submissions", address))
        .bearer_auth(&token)
        .json(&json!({ "answers": answers }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let (_, history) = get_json(&client, format!("{}/api/quizzes/results", address), &token).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn attempt_lifecycle() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let response = client
        .post(format!("{}/api/attempts", address))
        .bearer_auth(&token)
        .json(&json!({ "module_id": "module-1-4" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let started: Value = response.json().await.unwrap();
    assert_eq!(started["attempt"]["state"], "unanswered");
    assert_eq!(started["attempt"]["total_questions"], 4);
    assert_eq!(started["quiz"]["id"], "quiz-1");
    let time_left = started["attempt"]["time_left"].as_u64().unwrap();
    assert!(time_left <= 600 && time_left > 590);
    let id = started["attempt"]["id"].as_str().unwrap().to_string();

    for (question, option) in [(0, 0), (1, 2), (2, 1), (3, 3)] {
        let response = client
            .put(format!("{}/api/attempts/{}/answers", address, id))
            .bearer_auth(&token)
            .json(&json!({ "question": question, "option": option }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    let (_, view) = get_json(&client, format!("{}/api/attempts/{}", address, id), &token).await;
    assert_eq!(view["state"], "in_progress");
    assert_eq!(view["answered"], 4);

    let response = client
        .post(format!("{}/api/attempts/{}/submit", address, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["result"]["score"], 100);
    assert_eq!(outcome["result"]["passed"], true);

    let again = client
        .post(format!("{}/api/attempts/{}/submit", address, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(again.status().as_u16(), 409);

    let late = client
        .put(format!("{}/api/attempts/{}/answers", address, id))
        .bearer_auth(&token)
        .json(&json!({ "question": 0, "option": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(late.status().as_u16(), 409);

    let (_, view) = get_json(&client, format!("{}/api/attempts/{}", address, id), &token).await;
    assert_eq!(view["state"], "scored");
    assert_eq!(view["result_id"], outcome["result"]["id"]);

    let (_, history) = get_json(&client, format!("{}/api/quizzes/results", address), &token).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn untimed_attempt_has_no_countdown() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let started: Value = client
        .post(format!("{}/api/attempts", address))
        .bearer_auth(&token)
        .json(&json!({ "module_id": "module-2-2" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(started["quiz"]["id"], "quiz-2");
    assert!(started["attempt"]["time_left"].is_null());
}

#[tokio::test]
async fn invalid_selection_is_rejected() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let started: Value = client
        .post(format!("{}/api/attempts", address))
        .bearer_auth(&token)
        .json(&json!({ "module_id": "module-1-4" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["attempt"]["id"].as_str().unwrap();

    for (question, option) in [(4, 0), (0, 4)] {
        let response = client
            .put(format!("{}/api/attempts/{}/answers", address, id))
            .bearer_auth(&token)
            .json(&json!({ "question": question, "option": option }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
    }

    let (_, view) = get_json(&client, format!("{}/api/attempts/{}", address, id), &token).await;
    assert_eq!(view["state"], "unanswered");
}

#[tokio::test]
async fn attempts_are_private_to_their_owner() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let owner = login_as(&client, &address, LEARNER).await;
    let other = login_as(&client, &address, OTHER_LEARNER).await;

    let started: Value = client
        .post(format!("{}/api/attempts", address))
        .bearer_auth(&owner)
        .json(&json!({ "module_id": "module-3-3" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["attempt"]["id"].as_str().unwrap();

    let (status, _) = get_json(&client, format!("{}/api/attempts/{}", address, id), &other).await;
    assert_eq!(status, 403);

    let submit = client
        .post(format!("{}/api/attempts/{}/submit", address, id))
        .bearer_auth(&other)
        .send()
        .await
        .unwrap();
    assert_eq!(submit.status().as_u16(), 403);

    let trainer = login_as(&client, &address, TRAINER).await;
    let response = client
        .post(format!("{}/api/attempts", address))
        .bearer_auth(&trainer)
        .json(&json!({ "module_id": "module-3-3" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn abandoned_attempt_is_gone() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let started: Value = client
        .post(format!("{}/api/attempts", address))
        .bearer_auth(&token)
        .json(&json!({ "module_id": "module-1-4" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["attempt"]["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/api/attempts/{}", address, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let (status, _) = get_json(&client, format!("{}/api/attempts/{}", address, id), &token).await;
    assert_eq!(status, 404);

    let (_, history) = get_json(&client, format!("{}/api/quizzes/results", address), &token).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn restarting_replaces_the_open_attempt() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let started: Value = client
            .post(format!("{}/api/attempts", address))
            .bearer_auth(&token)
            .json(&json!({ "module_id": "module-1-4" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(started["attempt"]["id"].as_str().unwrap().to_string());
    }

    let (first, _) = get_json(&client, format!("{}/api/attempts/{}", address, ids[0]), &token).await;
    let (second, _) =
        get_json(&client, format!("{}/api/attempts/{}", address, ids[1]), &token).await;
    assert_eq!(first, 404);
    assert_eq!(second, 200);
}

#[tokio::test]
async fn logout_abandons_open_attempts() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login_as(&client, &address, LEARNER).await;

    let started: Value = client
        .post(format!("{}/api/attempts", address))
        .bearer_auth(&token)
        .json(&json!({ "module_id": "module-1-4" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["attempt"]["id"].as_str().unwrap();

    client
        .post(format!("{}/api/auth/logout", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    let fresh = login_as(&client, &address, LEARNER).await;
    let (status, _) = get_json(&client, format!("{}/api/attempts/{}", address, id), &fresh).await;
    assert_eq!(status, 404);
}
