//! Conversion: PostResponse → Post.

use super::wire::PostResponse;
use super::{Post, PostValidationError};
use crate::shared::serde_util::timestamp_iso;

impl TryFrom<PostResponse> for Post {
    type Error = PostValidationError;

    fn try_from(source: PostResponse) -> Result<Self, Self::Error> {
        let id = u64::try_from(source.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(PostValidationError::InvalidId(source.id))?;

        let created_at = match source.created_at {
            Some(raw) => Some(
                timestamp_iso::parse(&raw)
                    .ok_or(PostValidationError::InvalidTimestamp(id, raw))?,
            ),
            None => None,
        };

        Ok(Post {
            id,
            author: source.user_id,
            title: source.title.filter(|t| !t.trim().is_empty()),
            content: source.content,
            created_at,
        })
    }
}
