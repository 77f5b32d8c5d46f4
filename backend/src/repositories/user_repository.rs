use crate::error::RepositoryResult;
use crate::models::{IdGenerator, User};
use sqlx::PgPool;
use tracing::debug;

/// Repository for user data access.
///
/// This is the persistence boundary that runs the before-insert id hook.
pub struct UserRepository {
    pool: PgPool,
    id_generator: IdGenerator,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool, id_generator: IdGenerator) -> Self {
        Self { pool, id_generator }
    }

    /// Insert a new user.
    ///
    /// Assigns the id immediately before the insert. If generation fails
    /// nothing is written.
    pub async fn create(&self, mut user: User) -> RepositoryResult<User> {
        user.generate_id(&self.id_generator)?;
        debug!(id = %user.id, "Generated user id");

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, "firstName", "lastName")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, "firstName", "lastName"
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by primary key
    pub async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, "firstName", "lastName"
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use crate::models::{Clock, TokenSource, UserIdError};
    use chrono::{DateTime, TimeZone, Utc};
    use sqlx::postgres::PgPoolOptions;

    struct EmptyTokens;

    impl TokenSource for EmptyTokens {
        fn token(&self) -> String {
            String::new()
        }
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        }
    }

    #[tokio::test]
    async fn test_create_fails_before_touching_database() {
        // Nothing listens on this address; a lazy pool only connects on first query
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://accounts@127.0.0.1:1/accounts")
            .unwrap();
        let repo = UserRepository::new(pool, IdGenerator::with_sources(EmptyTokens, FixedClock));

        let err = repo
            .create(User::new("jdoe", "jdoe@example.com", "John", "Doe"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::IdGeneration(UserIdError::EmptyToken)));
    }
}
