//! Accounts Backend Library
//!
//! User record definition, its identifier scheme, and the persistence
//! boundary that assigns identifiers before the first insert.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use database::Database;
use models::IdGenerator;
use repositories::UserRepository;
use services::UserService;
use std::sync::Arc;

/// Application state containing repositories and services
pub struct AppState {
    pub database: Database,
    pub user_repo: Arc<UserRepository>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Create a new AppState with initialized repositories
    pub fn new(pool: sqlx::PgPool, id_generator: IdGenerator) -> Self {
        let database = Database::new(pool.clone());
        let user_repo = Arc::new(UserRepository::new(pool, id_generator));

        Self {
            database,
            user_service: Arc::new(UserService::new(user_repo.clone())),
            user_repo,
        }
    }
}
