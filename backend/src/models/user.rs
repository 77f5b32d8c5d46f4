use crate::models::user_id::{IdGenerator, UserIdError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User model representing one registered account, stored in `users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Primary key, empty until [`User::generate_id`] runs before the first insert
    #[serde(default)]
    pub id: String,
    pub username: String,
    pub email: String,
    #[sqlx(rename = "firstName")]
    pub first_name: String,
    #[sqlx(rename = "lastName")]
    pub last_name: String,
}

impl User {
    /// Create a record with an empty id, ready to hand to `UserRepository::create`
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Whether an identifier has been assigned
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Before-insert hook: assign a freshly generated identifier.
    ///
    /// Calling this again overwrites the previous id. On error the current id
    /// is left as it was.
    pub fn generate_id(&mut self, generator: &IdGenerator) -> Result<&str, UserIdError> {
        self.id = generator.generate()?.into_string();
        Ok(&self.id)
    }
}
