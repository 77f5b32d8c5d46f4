//! Record identifiers of the form `user_<token>_<timestamp>`.
//!
//! The token is a URL-safe NanoID and the timestamp is the generation time in
//! UTC, ISO-8601 with millisecond precision (`2024-01-15T10:30:00.000Z`).

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Prefix shared by every user identifier
pub const USER_ID_PREFIX: &str = "user_";

/// Errors raised while generating or parsing a user identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Token source produced an empty token")]
    EmptyToken,

    #[error("Token contains non URL-safe character {0:?}")]
    InvalidTokenChar(char),

    #[error("Identifier does not start with 'user_': {0}")]
    MissingPrefix(String),

    #[error("Identifier has no timestamp segment: {0}")]
    MissingTimestamp(String),

    #[error("Identifier timestamp is not valid ISO-8601: {0}")]
    InvalidTimestamp(String),
}

/// Source of the random token segment
pub trait TokenSource: Send + Sync {
    fn token(&self) -> String;
}

/// Source of the timestamp segment
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Default token source: 21 characters from the NanoID alphabet (`A-Za-z0-9_-`)
#[derive(Debug, Clone, Copy, Default)]
pub struct NanoidTokens;

impl TokenSource for NanoidTokens {
    fn token(&self) -> String {
        nanoid::nanoid!()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Generates identifiers for new user records.
///
/// Cheap to clone; the token source and clock are shared.
#[derive(Clone)]
pub struct IdGenerator {
    tokens: Arc<dyn TokenSource>,
    clock: Arc<dyn Clock>,
}

impl IdGenerator {
    /// Generator backed by NanoID and the system clock
    pub fn new() -> Self {
        Self::with_sources(NanoidTokens, SystemClock)
    }

    /// Generator with explicit token source and clock
    pub fn with_sources(
        tokens: impl TokenSource + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            tokens: Arc::new(tokens),
            clock: Arc::new(clock),
        }
    }

    /// Produce a fresh identifier.
    ///
    /// Fails if the token source hands back an empty or non URL-safe token.
    pub fn generate(&self) -> Result<UserId, UserIdError> {
        let token = self.tokens.token();
        validate_token(&token)?;

        let generated_at = self.clock.now().trunc_subsecs(3);
        let value = format!(
            "{}{}_{}",
            USER_ID_PREFIX,
            token,
            format_timestamp(&generated_at)
        );

        Ok(UserId {
            value,
            token,
            generated_at,
        })
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

/// A well-formed user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId {
    value: String,
    token: String,
    generated_at: DateTime<Utc>,
}

impl UserId {
    /// Parse an identifier produced by [`IdGenerator::generate`].
    ///
    /// The timestamp must be UTC with exactly millisecond precision, so one
    /// instant has one textual form. The token alphabet includes `_`, so the
    /// timestamp is whatever follows the last underscore.
    pub fn parse(value: &str) -> Result<Self, UserIdError> {
        let rest = value
            .strip_prefix(USER_ID_PREFIX)
            .ok_or_else(|| UserIdError::MissingPrefix(value.to_string()))?;

        let (token, timestamp) = rest
            .rsplit_once('_')
            .ok_or_else(|| UserIdError::MissingTimestamp(value.to_string()))?;

        validate_token(token)?;

        let generated_at = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|_| UserIdError::InvalidTimestamp(timestamp.to_string()))?
            .with_timezone(&Utc);

        // Only the canonical `YYYY-MM-DDTHH:MM:SS.mmmZ` rendering is accepted
        if format_timestamp(&generated_at) != timestamp {
            return Err(UserIdError::InvalidTimestamp(timestamp.to_string()));
        }

        Ok(Self {
            value: value.to_string(),
            token: token.to_string(),
            generated_at,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The random segment
    pub fn token(&self) -> &str {
        &self.token
    }

    /// When the identifier was generated
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.into_string()
    }
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn validate_token(token: &str) -> Result<(), UserIdError> {
    if token.is_empty() {
        return Err(UserIdError::EmptyToken);
    }

    match token
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        Some(c) => Err(UserIdError::InvalidTokenChar(c)),
        None => Ok(()),
    }
}
