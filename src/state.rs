// src/state.rs

use crate::config::Config;
use crate::store::{CategoryStore, QuestionStore};
use axum::extract::FromRef;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub categories: CategoryStore,
    pub questions: QuestionStore,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            config,
            categories: CategoryStore::new(pool.clone()),
            questions: QuestionStore::new(pool),
        }
    }
}

impl FromRef<AppState> for CategoryStore {
    fn from_ref(state: &AppState) -> Self {
        state.categories.clone()
    }
}

impl FromRef<AppState> for QuestionStore {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
