// tests/quiz_tests.rs

use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashSet;
use trivia_api::{config::Config, models::question::NewQuestion, routes, state::AppState};

async fn spawn_app() -> (String, AppState) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        rust_log: "error".to_string(),
    };

    let state = AppState::new(pool, config);
    let app = routes::create_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, state)
}

async fn seed_question(state: &AppState, question: &str, category: Option<i64>) -> i64 {
    state
        .questions
        .insert(&NewQuestion {
            question: question.to_string(),
            answer: "Answer".to_string(),
            category,
            difficulty: Some(1),
        })
        .await
        .expect("Failed to seed question")
}

#[tokio::test]
async fn single_question_category_plays_out_to_null() {
    let (address, state) = spawn_app().await;
    state.categories.insert("Science").await.unwrap();
    let id = seed_question(&state, "The only question", Some(1)).await;

    let client = reqwest::Client::new();

    // First draw returns the question.
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [],
            "quiz_category": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(data["success"], true);
    assert_eq!(data["question"]["id"], id);
    assert_eq!(data["question"]["question"], "The only question");

    // Second draw with that id seen comes back empty.
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [id],
            "quiz_category": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(data["success"], true);
    assert_eq!(data["question"], serde_json::Value::Null);
}

#[tokio::test]
async fn quiz_never_repeats_seen_questions() {
    let (address, state) = spawn_app().await;
    state.categories.insert("History").await.unwrap();
    for i in 1..=5 {
        seed_question(&state, &format!("Question {}", i), Some(1)).await;
    }

    let client = reqwest::Client::new();
    let mut seen: Vec<i64> = Vec::new();

    // Draw until the pool runs dry; every draw must be fresh.
    loop {
        let response = client
            .post(format!("{}/quizzes", address))
            .json(&serde_json::json!({
                "previous_questions": seen,
                "quiz_category": 1
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200);
        let data: serde_json::Value = response.json().await.unwrap();
        if data["question"].is_null() {
            break;
        }
        let id = data["question"]["id"].as_i64().unwrap();
        assert!(!seen.contains(&id), "question {} served twice", id);
        seen.push(id);
    }

    let unique: HashSet<i64> = seen.iter().copied().collect();
    assert_eq!(unique.len(), 5);
}

#[tokio::test]
async fn quiz_without_category_draws_from_all_questions() {
    let (address, state) = spawn_app().await;
    state.categories.insert("Science").await.unwrap();
    state.categories.insert("Art").await.unwrap();
    let science = seed_question(&state, "Science question", Some(1)).await;
    let art = seed_question(&state, "Art question", Some(2)).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({"previous_questions": []}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let data: serde_json::Value = response.json().await.unwrap();
    let id = data["question"]["id"].as_i64().unwrap();
    assert!(id == science || id == art);
}

#[tokio::test]
async fn quiz_category_zero_means_all_categories() {
    let (address, state) = spawn_app().await;
    state.categories.insert("Science").await.unwrap();
    let id = seed_question(&state, "Science question", Some(1)).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [],
            "quiz_category": 0
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(data["question"]["id"], id);
}

#[tokio::test]
async fn quiz_accepts_numeric_string_categories() {
    let (address, state) = spawn_app().await;
    state.categories.insert("Science").await.unwrap();
    let id = seed_question(&state, "Science question", Some(1)).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [],
            "quiz_category": "1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(data["question"]["id"], id);
}

#[tokio::test]
async fn quiz_rejects_non_numeric_categories() {
    let (address, state) = spawn_app().await;
    state.categories.insert("Science").await.unwrap();
    seed_question(&state, "Science question", Some(1)).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [],
            "quiz_category": "Science"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(data["success"], false);
    assert_eq!(data["error"], 400);
}

#[tokio::test]
async fn quiz_over_an_empty_category_returns_null() {
    let (address, state) = spawn_app().await;
    state.categories.insert("Science").await.unwrap();

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [],
            "quiz_category": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(data["success"], true);
    assert_eq!(data["question"], serde_json::Value::Null);
}

#[tokio::test]
async fn quiz_with_a_malformed_body_is_400() {
    let (address, _state) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/quizzes", address))
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(data["success"], false);
    assert_eq!(data["error"], 400);
}
