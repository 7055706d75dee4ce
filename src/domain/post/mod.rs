//! Post domain: user posts.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated post owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: UserId,
    pub title: Option<String>,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Error, PartialEq)]
pub enum PostValidationError {
    #[error("Post id must be positive, got {0}")]
    InvalidId(i64),
    #[error("Post {0}: invalid created_at {1:?}")]
    InvalidTimestamp(u64, String),
}

impl From<PostValidationError> for crate::error::FetchError {
    fn from(err: PostValidationError) -> Self {
        crate::error::FetchError::Decode(err.to_string())
    }
}
