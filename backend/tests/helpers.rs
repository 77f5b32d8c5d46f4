#![allow(dead_code)]

use accounts_backend::models::*;
use accounts_backend::repositories::*;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;

/// Test database wrapper around a pool handed out by `#[sqlx::test]`
pub struct TestDatabase {
    pub pool: PgPool,
    pub user_repo: Arc<UserRepository>,
}

impl TestDatabase {
    /// Create the `users` table on the given pool and build the repository
    pub async fn from_pool(pool: PgPool) -> Self {
        Self::with_generator(pool, IdGenerator::new()).await
    }

    /// Same as `from_pool`, with a custom id generator for the repository
    pub async fn with_generator(pool: PgPool, id_generator: IdGenerator) -> Self {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT NOT NULL,
                "firstName" TEXT NOT NULL,
                "lastName" TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .expect("Failed to create users table");

        Self {
            pool: pool.clone(),
            user_repo: Arc::new(UserRepository::new(pool, id_generator)),
        }
    }

    pub async fn count_users(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }
}

/// Token source that always returns the same token
pub struct FixedToken(pub &'static str);

impl TokenSource for FixedToken {
    fn token(&self) -> String {
        self.0.to_string()
    }
}

/// Clock frozen at a single instant
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn jan_15_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

pub fn sample_user(username: &str) -> User {
    User::new(
        username,
        format!("{}@example.com", username),
        "Test",
        "User",
    )
}
