use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::RepoError;

/// Blog post store - abstraction over the backing collection (Postgres, in-memory).
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Persist every draft, assigning ids and creation timestamps.
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Persist a single draft.
    async fn insert(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        self.insert_many(vec![draft])
            .await?
            .pop()
            .ok_or_else(|| RepoError::Query("Insert returned no record".to_string()))
    }

    /// All persisted posts in insertion order.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Replace the named fields. Fails with `RepoError::NotFound` if absent.
    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges) -> Result<(), RepoError>;

    /// Fails with `RepoError::NotFound` if absent.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Wipe every post. Used by test teardown.
    async fn drop_all(&self) -> Result<(), RepoError>;
}
