//! Schema migrations for the blog store.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_blog_posts;
mod m20240102_000001_add_blog_post_seq;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_blog_posts::Migration),
            Box::new(m20240102_000001_add_blog_post_seq::Migration),
        ]
    }
}
