//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        author: post.author.display_name(),
        title: post.title,
        content: post.content,
        created: post.created.to_rfc3339(),
    }
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id,
    }
    .into()
}

/// An id that does not parse cannot name a stored post.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("BlogPost with id {} not found", raw)))
}

fn or_not_found(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<BlogPostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewBlogPost::new(
        req.title,
        req.content,
        req.author.map(|author| author.into_parts()),
    )?;

    let post = state.posts.insert(draft).await?;
    tracing::info!(
        post_id = %post.id,
        request_id = request_id.as_str(),
        "Blog post created"
    );

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let req = body.into_inner();

    if req.id.as_deref() != Some(raw_id.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            raw_id,
            req.id.as_deref().unwrap_or("missing")
        )));
    }
    let id = parse_post_id(&raw_id)?;

    let changes = BlogPostChanges::new(
        req.title,
        req.content,
        req.author.map(|author| author.into_parts()),
    )?;

    state
        .posts
        .update_by_id(id, changes)
        .await
        .map_err(or_not_found(id))?;

    tracing::info!(
        post_id = %id,
        request_id = request_id.as_str(),
        "Blog post updated"
    );

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state
        .posts
        .delete_by_id(id)
        .await
        .map_err(or_not_found(id))?;

    tracing::info!(
        post_id = %id,
        request_id = request_id.as_str(),
        "Blog post deleted"
    );

    Ok(HttpResponse::NoContent().finish())
}
