//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Author as accepted on input: the composite name, never the display string.
///
/// Both parts are optional here so that a missing part surfaces as a
/// validation error naming the field rather than a JSON parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorInput {
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.first_name, self.last_name)
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

/// Body of `PUT /posts/{id}`. `id` must repeat the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

/// External representation of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Display name, `"First Last"`.
    pub author: String,
    /// RFC 3339 creation timestamp.
    pub created: String,
}
