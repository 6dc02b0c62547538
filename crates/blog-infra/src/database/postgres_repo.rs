//! PostgreSQL blog post repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, ActiveModel, Entity as BlogPostEntity};

/// PostgreSQL-backed blog post store.
pub struct PostgresBlogPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Blog post already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<BlogPost> = drafts.into_iter().map(BlogPost::new).collect();
        let models = posts.iter().cloned().map(ActiveModel::from);

        // Single statement, so the batch lands atomically.
        let inserted = BlogPostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(inserted, "Inserted blog posts");
        Ok(posts)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Seq)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges) -> Result<(), RepoError> {
        if changes.is_empty() {
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound),
            };
        }

        let mut update = BlogPostEntity::update_many().filter(blog_post::Column::Id.eq(id));
        if let Some(title) = changes.title {
            update = update.col_expr(blog_post::Column::Title, Expr::value(title));
        }
        if let Some(content) = changes.content {
            update = update.col_expr(blog_post::Column::Content, Expr::value(content));
        }
        if let Some(author) = changes.author {
            update = update
                .col_expr(
                    blog_post::Column::AuthorFirstName,
                    Expr::value(author.first_name),
                )
                .col_expr(
                    blog_post::Column::AuthorLastName,
                    Expr::value(author.last_name),
                );
        }

        let result = update.exec(&self.db).await.map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::warn!(deleted = result.rows_affected, "Dropped all blog posts");
        Ok(())
    }
}
