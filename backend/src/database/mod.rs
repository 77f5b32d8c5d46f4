//! PostgreSQL connection pool management.

pub mod pool;

pub use pool::{create_pool, Database, DatabaseError};
