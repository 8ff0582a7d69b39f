// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question itself.
    pub question: String,

    pub answer: String,

    /// Foreign key into 'categories'. Nullable: a question may be uncategorized.
    pub category: Option<i64>,

    /// 1-5 by convention; not enforced at the storage layer.
    pub difficulty: Option<i64>,

    #[serde(skip_serializing)]
    pub created_at: Option<chrono::NaiveDateTime>,
}

/// Wire form of a question. Excludes `created_at`.
#[derive(Debug, Serialize)]
pub struct QuestionPayload {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl From<Question> for QuestionPayload {
    fn from(q: Question) -> Self {
        QuestionPayload {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Combined body of `POST /questions`. The route is dual-purpose for
/// compatibility with existing clients: a non-empty `searchTerm` selects the
/// search path, otherwise the body is treated as a create request.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// DTO for inserting a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

impl QuestionPostBody {
    /// Interprets the body as a create request. Absent text fields become
    /// empty strings so that validation rejects them uniformly.
    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<CategoryRef>,
}

/// Category identifier as sent by quiz clients: either an integer or a
/// numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

impl CategoryRef {
    /// Coerces to a category id. Non-numeric text is an error for the
    /// caller to surface as a bad request.
    pub fn resolve(&self) -> Result<i64, String> {
        match self {
            CategoryRef::Id(id) => Ok(*id),
            CategoryRef::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("'{}' is not a category id", text)),
        }
    }
}
