//! Post handlers - listing, lookup, search, likes, creation.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::PostDraft;
use quill_shared::dto::{CreatePostRequest, LikeResponse, ListPostsQuery, SearchQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
///
/// Optional `category` filter and `limit`. An empty result is a 200.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list(query.category.as_deref(), query.limit)
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/featured
pub async fn featured_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.featured().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    // A path segment that is not a uuid cannot name a stored post.
    let id = Uuid::parse_str(&path)
        .map_err(|_| AppError::NotFound("Post not found".to_string()))?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/search?q=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let q = query.q.as_deref().unwrap_or_default();
    if q.is_empty() {
        return Err(AppError::BadRequest("Search query is required".to_string()));
    }

    let posts = state.posts.search(q).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts/{id}/like
///
/// The store no-ops on unknown ids; the response always carries the
/// current count, zero when the post does not exist.
pub async fn like_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let likes = match Uuid::parse_str(&path) {
        Ok(id) => {
            state.posts.like(id).await?;
            state
                .posts
                .find_by_id(id)
                .await?
                .map(|post| post.likes)
                .unwrap_or(0)
        }
        Err(_) => 0,
    };

    Ok(HttpResponse::Ok().json(LikeResponse { likes }))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let draft = validate_submission(body.into_inner())?;
    let post = state.posts.create(draft).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Check a submission field by field; the first failure is the response.
/// Nothing is written to the store until every check passes.
fn validate_submission(req: CreatePostRequest) -> Result<PostDraft, AppError> {
    if req.title.is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if req.excerpt.is_empty() {
        return Err(AppError::BadRequest("Excerpt is required".to_string()));
    }
    if req.content.is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }
    if req.category.is_empty() {
        return Err(AppError::BadRequest("Category is required".to_string()));
    }
    if req.image_url.is_empty() {
        return Err(AppError::BadRequest("Image URL is required".to_string()));
    }
    if req.author_name.is_empty() {
        return Err(AppError::BadRequest("Author name is required".to_string()));
    }
    if req.author_avatar.is_empty() {
        return Err(AppError::BadRequest("Author avatar is required".to_string()));
    }

    let read_time = u32::try_from(req.read_time)
        .ok()
        .filter(|&minutes| minutes >= 1)
        .ok_or_else(|| {
            AppError::BadRequest("Read time must be a positive integer".to_string())
        })?;

    let featured = match req.featured.as_deref() {
        None => false,
        Some("true") => true,
        Some("false") => false,
        Some(_) => {
            return Err(AppError::BadRequest(
                "Featured must be \"true\" or \"false\"".to_string(),
            ));
        }
    };

    Ok(PostDraft {
        title: req.title,
        excerpt: req.excerpt,
        content: req.content,
        category: req.category,
        image_url: req.image_url,
        author_name: req.author_name,
        author_avatar: req.author_avatar,
        author_bio: req.author_bio,
        read_time,
        featured,
    })
}
