//! In-memory blog post store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

/// In-memory blog post store using a Vec behind an async RwLock.
///
/// Records are kept in insertion order. Every write takes the lock for its
/// whole duration, so each update is atomic per record.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let created: Vec<BlogPost> = drafts.into_iter().map(BlogPost::new).collect();

        let mut posts = self.posts.write().await;
        posts.extend(created.iter().cloned());

        tracing::debug!(inserted = created.len(), "Inserted blog posts");
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(changes);
        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        tracing::warn!(deleted = posts.len(), "Dropped all blog posts");
        posts.clear();
        Ok(())
    }
}
