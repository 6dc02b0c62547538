//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresBlogPostRepository};

use crate::server::ServerError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with the configured store.
    ///
    /// Without a database configuration the in-memory store is used. A
    /// configured database that cannot be reached is a startup error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, ServerError> {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => {
                let connections = DatabaseConnections::init(config)
                    .await
                    .map_err(|e| ServerError::Database(e.to_string()))?;
                let conn = Arc::new(connections);
                let repo = Arc::new(PostgresBlogPostRepository::new(conn.main.clone()));
                Self {
                    posts: repo,
                    db: Some(conn),
                }
            }
            None => {
                tracing::warn!("No database configured. Running on the in-memory store.");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring database configuration");
            }
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryBlogPostRepository::new()))
    }

    /// State backed by an existing store.
    pub fn with_repository(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Release the database pool once no handler holds it.
    pub async fn shutdown(self) {
        #[cfg(feature = "postgres")]
        {
            let Self { posts, db } = self;
            drop(posts);

            if let Some(db) = db {
                match Arc::try_unwrap(db) {
                    Ok(connections) => {
                        if let Err(e) = connections.close().await {
                            tracing::error!("Failed to close database connection: {}", e);
                        }
                    }
                    Err(_) => {
                        tracing::debug!("Database pool still shared; it closes with the last handle")
                    }
                }
            }
        }
    }
}
