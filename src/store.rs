// src/store.rs

use sqlx::SqlitePool;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Default trivia categories, seeded when the table is empty.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty, created_at";

/// Typed queries over the 'categories' table.
#[derive(Clone)]
pub struct CategoryStore {
    pool: SqlitePool,
}

impl CategoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All categories, ordered by id.
    pub async fn list(&self) -> sqlx::Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert(&self, category_type: &str) -> sqlx::Result<Category> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("INSERT INTO categories (type) VALUES (?1)")
            .bind(category_type)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Category {
            id: result.last_insert_rowid(),
            category_type: category_type.to_string(),
        })
    }

    /// Bulk removal, used by test setups.
    pub async fn clear(&self) -> sqlx::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM categories").execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Inserts the default categories when the table is empty.
    pub async fn seed_defaults(&self) -> sqlx::Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        tracing::info!("Seeding default categories");
        let mut tx = self.pool.begin().await?;
        for category_type in DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (type) VALUES (?1)")
                .bind(category_type)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

/// Typed queries over the 'questions' table.
#[derive(Clone)]
pub struct QuestionStore {
    pool: SqlitePool,
}

impl QuestionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All questions, ordered by id.
    pub async fn list_all(&self) -> sqlx::Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// Questions belonging to the given category, ordered by id.
    pub async fn list_by_category(&self, category_id: i64) -> sqlx::Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Case-insensitive substring match against the question text.
    pub async fn search(&self, term: &str) -> sqlx::Result<Vec<Question>> {
        let pattern = format!("%{}%", term.to_lowercase());
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE LOWER(question) LIKE ?1 ORDER BY id"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
    }

    /// Inserts a question and returns its assigned id.
    pub async fn insert(&self, new: &NewQuestion) -> sqlx::Result<i64> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(result.last_insert_rowid())
    }

    /// Deletes a question. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> sqlx::Result<bool> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
