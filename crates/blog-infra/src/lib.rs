//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL store via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryBlogPostRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresBlogPostRepository};
