use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post, kept as separate name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Build an author, rejecting blank name parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        let mut missing = Vec::new();
        if is_blank(&first_name) {
            missing.push("author.firstName");
        }
        if is_blank(&last_name) {
            missing.push("author.lastName");
        }
        if !missing.is_empty() {
            return Err(missing_fields(&missing));
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// Display form used in every external representation: `"First Last"`.
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - a persisted post with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Assign an id and creation timestamp to a validated draft.
    pub fn new(draft: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            // Stores keep microsecond precision.
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Replace the fields named in `changes`. `id` and `created` never change.
    pub fn apply(&mut self, changes: BlogPostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

/// A validated blog post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl NewBlogPost {
    /// Validate raw input. Every missing or blank field is reported at once.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<(Option<String>, Option<String>)>,
    ) -> Result<Self, DomainError> {
        let mut missing = Vec::new();

        let title = title.filter(|t| !is_blank(t));
        if title.is_none() {
            missing.push("title");
        }
        let content = content.filter(|c| !is_blank(c));
        if content.is_none() {
            missing.push("content");
        }

        let (first_name, last_name) = match author {
            Some((first, last)) => {
                let first = first.filter(|f| !is_blank(f));
                let last = last.filter(|l| !is_blank(l));
                if first.is_none() {
                    missing.push("author.firstName");
                }
                if last.is_none() {
                    missing.push("author.lastName");
                }
                (first, last)
            }
            None => {
                missing.push("author");
                (None, None)
            }
        };

        match (title, content, first_name, last_name) {
            (Some(title), Some(content), Some(first_name), Some(last_name)) => Ok(Self {
                title,
                content,
                author: Author {
                    first_name,
                    last_name,
                },
            }),
            _ => Err(missing_fields(&missing)),
        }
    }
}

/// Partial update of a blog post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl BlogPostChanges {
    /// Validate a partial update: any field that is present must be non-blank.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<(Option<String>, Option<String>)>,
    ) -> Result<Self, DomainError> {
        let mut blank = Vec::new();
        if title.as_deref().is_some_and(is_blank) {
            blank.push("title");
        }
        if content.as_deref().is_some_and(is_blank) {
            blank.push("content");
        }
        if !blank.is_empty() {
            return Err(DomainError::Validation(format!(
                "Fields must not be empty: {}",
                blank.join(", ")
            )));
        }

        let author = author
            .map(|(first, last)| Author::new(first.unwrap_or_default(), last.unwrap_or_default()))
            .transpose()?;

        Ok(Self {
            title,
            content,
            author,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn missing_fields(fields: &[&str]) -> DomainError {
    DomainError::Validation(format!("Missing required fields: {}", fields.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_parts(first: &str, last: &str) -> Option<(Option<String>, Option<String>)> {
        Some((Some(first.to_string()), Some(last.to_string())))
    }

    #[test]
    fn test_author_display_name() {
        let author = Author::new("Lorn", "Ipson").unwrap();
        assert_eq!(author.display_name(), "Lorn Ipson");
    }

    #[test]
    fn test_author_rejects_blank_parts() {
        let err = Author::new("Lorn", "  ").unwrap_err();
        assert!(err.to_string().contains("author.lastName"));
    }

    #[test]
    fn test_new_blog_post_accepts_complete_input() {
        let draft = NewBlogPost::new(
            Some("Lorem".to_string()),
            Some("Ipsum".to_string()),
            name_parts("Lorn", "Ipson"),
        )
        .unwrap();

        assert_eq!(draft.title, "Lorem");
        assert_eq!(draft.author.display_name(), "Lorn Ipson");
    }

    #[test]
    fn test_new_blog_post_reports_every_missing_field() {
        let err = NewBlogPost::new(None, Some(" ".to_string()), None).unwrap_err();
        let message = err.to_string();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(message.contains("title"));
        assert!(message.contains("content"));
        assert!(message.contains("author"));
    }

    #[test]
    fn test_new_blog_post_requires_both_name_parts() {
        let err = NewBlogPost::new(
            Some("Lorem".to_string()),
            Some("Ipsum".to_string()),
            Some((Some("Lorn".to_string()), None)),
        )
        .unwrap_err();

        assert!(err.to_string().contains("author.lastName"));
        assert!(!err.to_string().contains("author.firstName"));
    }

    #[test]
    fn test_apply_replaces_only_given_fields() {
        let draft = NewBlogPost::new(
            Some("Lorem".to_string()),
            Some("Ipsum".to_string()),
            name_parts("Lorn", "Ipson"),
        )
        .unwrap();
        let mut post = BlogPost::new(draft);
        let (id, created) = (post.id, post.created);

        let changes = BlogPostChanges::new(Some("lorem".to_string()), None, None).unwrap();
        post.apply(changes);

        assert_eq!(post.title, "lorem");
        assert_eq!(post.content, "Ipsum");
        assert_eq!(post.id, id);
        assert_eq!(post.created, created);
    }

    #[test]
    fn test_created_has_microsecond_precision() {
        let draft = NewBlogPost::new(
            Some("Lorem".to_string()),
            Some("Ipsum".to_string()),
            name_parts("Lorn", "Ipson"),
        )
        .unwrap();
        let post = BlogPost::new(draft);

        assert_eq!(post.created.timestamp_subsec_nanos() % 1_000, 0);
        assert_eq!(post.created, post.created.trunc_subsecs(6));
    }

    #[test]
    fn test_changes_reject_blank_fields() {
        assert!(BlogPostChanges::new(Some("".to_string()), None, None).is_err());
        assert!(BlogPostChanges::new(None, None, Some((Some("Lorn".to_string()), None))).is_err());
        assert!(BlogPostChanges::new(None, None, None).unwrap().is_empty());
    }
}
