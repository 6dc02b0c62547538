//! Fixtures shared by the HTTP test suites.
//!
//! Seed and teardown take the store explicitly; nothing here holds state.

#![allow(dead_code)]

use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::ports::BlogPostRepository;
use uuid::Uuid;

const FIRST_NAMES: [&str; 5] = ["Ada", "Grace", "Alan", "Edsger", "Barbara"];
const LAST_NAMES: [&str; 5] = ["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov"];

/// A random-looking but valid blog post draft.
pub fn generate_blog_post_data(seq: usize) -> NewBlogPost {
    let tag = Uuid::new_v4().simple().to_string();
    NewBlogPost {
        title: format!("Post {} {}", seq, &tag[..8]),
        content: format!("Paragraph {} for post {}.", &tag[8..], seq),
        author: Author::new(
            FIRST_NAMES[seq % FIRST_NAMES.len()],
            LAST_NAMES[(seq / FIRST_NAMES.len()) % LAST_NAMES.len()],
        )
        .expect("fixture author is valid"),
    }
}

/// Insert `count` generated posts.
pub async fn seed_blog_post_data(repo: &dyn BlogPostRepository, count: usize) -> Vec<BlogPost> {
    let drafts = (1..=count).map(generate_blog_post_data).collect();
    repo.insert_many(drafts).await.expect("seeding blog posts")
}

/// Wipe the store after a test.
pub async fn tear_down_db(repo: &dyn BlogPostRepository) {
    repo.drop_all().await.expect("dropping blog posts");
}
