//! Post → view model.

use crate::domain::post::Post;
use crate::shared::fmt::format_timestamp;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostViewModel {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub posted_at: Option<String>,
}

pub fn renderable_of_post(post: &Post) -> PostViewModel {
    PostViewModel {
        id: post.id,
        author: post.author.to_string(),
        title: post
            .title
            .clone()
            .unwrap_or_else(|| format!("Post #{}", post.id)),
        content: post.content.clone(),
        posted_at: post.created_at.as_ref().map(format_timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::UserId;

    #[test]
    fn test_untitled_post_gets_fallback_title() {
        let post = Post {
            id: 3,
            author: UserId::from(9_i64),
            title: None,
            content: "hello".into(),
            created_at: None,
        };
        let vm = renderable_of_post(&post);
        assert_eq!(vm.title, "Post #3");
        assert_eq!(vm.author, "9");
        assert!(vm.posted_at.is_none());
    }
}
