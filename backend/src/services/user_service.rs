use crate::error::{option_to_result, AppError, AppResult};
use crate::models::User;
use crate::repositories::UserRepository;
use std::sync::Arc;
use tracing::{error, info};

/// Service for registering and looking up user accounts
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new account; the id is assigned on insert
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<User> {
        info!("Registering user: username={}", username);

        let user = User::new(username, email, first_name, last_name);
        let user = self.user_repo.create(user).await.map_err(|e| {
            error!("Failed to register user {}: {}", username, e);
            AppError::from(e)
        })?;

        info!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Fetch a user by id
    pub async fn get(&self, id: &str) -> AppResult<User> {
        let user = self.user_repo.find_by_id(id).await?;
        option_to_result(user, &format!("User {} not found", id))
    }
}
