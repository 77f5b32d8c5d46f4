//! Domain models for the accounts backend.
//!
//! This module contains the database-backed user record and the
//! identifier scheme used for its primary key.

pub mod user;
pub mod user_id;

// Re-export all models for convenient access
pub use user::User;
pub use user_id::{
    format_timestamp, Clock, IdGenerator, NanoidTokens, SystemClock, TokenSource, UserId, UserIdError,
};
