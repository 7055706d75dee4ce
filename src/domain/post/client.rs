//! Posts sub-client: per-user posts, lookup, search, delete.
//!
//! Every endpoint requires the bearer credential. With no stored token the
//! call fails with `FetchError::Unauthorized` before any request is sent.

use crate::auth::AuthToken;
use crate::client::DashboardClient;
use crate::domain::post::wire::{PostEnvelope, PostResponse, PostsEnvelope};
use crate::domain::post::Post;
use crate::error::FetchError;
use crate::shared::UserId;

pub struct Posts<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Posts<'a> {
    /// `GET /posts/{user_id}` → `{ posts }`.
    pub async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Post>, FetchError> {
        let token = self.require_token()?;
        let url = format!(
            "{}/posts/{}",
            self.client.http.base_url(),
            urlencoding::encode(user_id.as_str())
        );
        let env: PostsEnvelope = self.client.http.get(&url, Some(&token)).await?;
        convert_all(env.posts)
    }

    /// `GET /post/id={id}` → `{ post }`.
    pub async fn get(&self, id: u64) -> Result<Post, FetchError> {
        let token = self.require_token()?;
        let url = format!("{}/post/id={}", self.client.http.base_url(), id);
        let env: PostEnvelope = self.client.http.get(&url, Some(&token)).await?;
        Ok(Post::try_from(env.post)?)
    }

    /// `GET /posts/q={query}` → `{ posts }`.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, FetchError> {
        let token = self.require_token()?;
        let url = format!(
            "{}/posts/q={}",
            self.client.http.base_url(),
            urlencoding::encode(query)
        );
        let env: PostsEnvelope = self.client.http.get(&url, Some(&token)).await?;
        convert_all(env.posts)
    }

    /// `POST /post/id={id}`. Returns the backend's acknowledgement as-is:
    /// parsed JSON, or the raw text when the reply is not JSON.
    pub async fn delete(&self, id: u64) -> Result<serde_json::Value, FetchError> {
        let token = self.require_token()?;
        let url = format!("{}/post/id={}", self.client.http.base_url(), id);
        let text = self
            .client
            .http
            .post_text::<()>(&url, None, Some(&token))
            .await?;
        Ok(acknowledgement(text))
    }

    fn require_token(&self) -> Result<AuthToken, FetchError> {
        self.client.credentials.token().ok_or_else(|| {
            tracing::debug!("No stored credential; refusing authenticated request");
            FetchError::Unauthorized
        })
    }
}

fn acknowledgement(text: String) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}

fn convert_all(posts: Vec<PostResponse>) -> Result<Vec<Post>, FetchError> {
    posts
        .into_iter()
        .map(|p| Post::try_from(p).map_err(FetchError::from))
        .collect()
}
