// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::seq::SliceRandom;
use serde_json::json;

use crate::{
    error::AppError,
    models::question::{Question, QuestionPayload, QuizRequest},
    store::QuestionStore,
};

/// Drops questions already seen this session and picks one uniformly at
/// random from the remainder. None when every candidate has been seen.
fn pick_unseen(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    remaining.choose(&mut rand::thread_rng()).cloned()
}

/// Serves the next quiz question.
///
/// The client holds the session state: it sends the ids it has already seen
/// and optionally a category to draw from. A category of 0 (or none) draws
/// from all questions. When every question has been seen the response is
/// `{"success": true, "question": null}` rather than an error.
pub async fn next_question(
    State(questions): State<QuestionStore>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = body?;

    let category_id = match &req.quiz_category {
        Some(category) => Some(category.resolve().map_err(AppError::BadRequest)?),
        None => None,
    };

    let candidates = match category_id {
        Some(id) if id != 0 => questions.list_by_category(id).await?,
        _ => questions.list_all().await?,
    };

    let question = pick_unseen(candidates, &req.previous_questions).map(QuestionPayload::from);

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
