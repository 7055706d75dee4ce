//! Wire types for post REST responses.

use crate::shared::UserId;
use serde::{Deserialize, Serialize};

/// A single post as the backend sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostResponse {
    pub id: i64,
    #[serde(alias = "author_id")]
    pub user_id: UserId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(alias = "body")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `{ "posts": [...] }`: user posts and search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsEnvelope {
    pub posts: Vec<PostResponse>,
}

/// `{ "post": {...} }`: single post lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope {
    pub post: PostResponse,
}
