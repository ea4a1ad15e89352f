//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query parameters for the post listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPostsQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Request to create a post.
///
/// `featured` keeps its legacy string form; validation turns it into a
/// boolean before the draft reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: String,
    pub author_name: String,
    pub author_avatar: String,
    pub author_bio: Option<String>,
    pub read_time: i64,
    pub featured: Option<String>,
}

/// Response to a like request - the post's current count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub likes: u32,
}

/// Request to subscribe to the newsletter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Acknowledgement for a newsletter subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub message: String,
}
