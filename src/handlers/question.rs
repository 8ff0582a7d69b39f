// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::category_map,
        question::{QuestionPayload, QuestionPostBody},
    },
    store::{CategoryStore, QuestionStore},
    utils::paginate::paginate,
};

/// `page` query parameter shared by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Lists all questions, paginated, together with the category mapping.
/// `total_questions` is the unfiltered count, not the page length.
pub async fn list_questions(
    State(questions): State<QuestionStore>,
    State(categories): State<CategoryStore>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let selection = questions.list_all().await?;
    let current_page: Vec<QuestionPayload> = paginate(&selection, params.page())
        .iter()
        .cloned()
        .map(QuestionPayload::from)
        .collect();

    let category_selection = categories.list().await?;

    Ok(Json(json!({
        "success": true,
        "questions": current_page,
        "total_questions": selection.len(),
        "categories": category_map(&category_selection),
        "current_category": null,
    })))
}

/// Search-or-create endpoint, kept on a single route for compatibility with
/// existing clients. A non-empty `searchTerm` selects the search path;
/// otherwise the body must carry a non-empty question and answer.
pub async fn search_or_create_question(
    State(questions): State<QuestionStore>,
    Query(params): Query<PageParams>,
    body: Result<Json<QuestionPostBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;

    if let Some(term) = body.search_term.as_deref().filter(|t| !t.is_empty()) {
        let matches = questions.search(term).await?;
        let current_page: Vec<QuestionPayload> = paginate(&matches, params.page())
            .iter()
            .cloned()
            .map(QuestionPayload::from)
            .collect();

        return Ok(Json(json!({
            "success": true,
            "questions": current_page,
            "total_questions": matches.len(),
            "current_category": null,
        })));
    }

    let new_question = body.into_new_question();
    if let Err(validation_errors) = new_question.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    questions.insert(&new_question).await.map_err(|e| {
        tracing::error!("Failed to insert question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(json!({
        "success": true,
    })))
}

/// Deletes a question by id. A non-integer path segment and an unknown id
/// are both 404s.
pub async fn delete_question(
    State(questions): State<QuestionStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::NotFound("Not Found".to_string()))?;

    let deleted = questions.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    if !deleted {
        return Err(AppError::NotFound(
            "The question doesn't exist".to_string(),
        ));
    }

    Ok(Json(json!({
        "success": true,
        "id": id,
    })))
}
