// src/handlers/category.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    handlers::question::PageParams,
    models::{category::category_map, question::QuestionPayload},
    store::{CategoryStore, QuestionStore},
    utils::paginate::paginate,
};

/// Lists all categories as an id-to-label mapping.
/// An empty table yields `{}`, not an error.
pub async fn list_categories(
    State(categories): State<CategoryStore>,
) -> Result<impl IntoResponse, AppError> {
    let selection = categories.list().await?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&selection),
    })))
}

/// Lists the questions of one category, paginated.
///
/// The category id is echoed back as `current_category` even when no
/// questions match; an unknown category yields an empty list, not an error.
/// A non-integer path segment is a 404, matching the original route contract.
pub async fn questions_by_category(
    State(questions): State<QuestionStore>,
    Path(category_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let category_id: i64 = category_id
        .parse()
        .map_err(|_| AppError::NotFound("Not Found".to_string()))?;

    let selection = questions.list_by_category(category_id).await?;
    let current_page: Vec<QuestionPayload> = paginate(&selection, params.page())
        .iter()
        .cloned()
        .map(QuestionPayload::from)
        .collect();

    Ok(Json(json!({
        "success": true,
        "questions": current_page,
        "total_questions": selection.len(),
        "current_category": category_id,
    })))
}
