//! Reqwest-backed implementation of [`KudosApi`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::wire::{
    AuthorPostsDto, CommentDto, ErrorBodyDto, FeedPostDto, FollowAckDto, InteractionStatusDto,
    ProfileDto,
};
use super::{KudosApi, TokenProvider};
use crate::core::{
    ApiError, AuthorPost, Comment, FollowAck, Post, PostId, Profile, Reaction, UserId,
};

/// HTTP API configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the Kudos server, without the `api/` prefix.
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Builder for creating an [`HttpApi`].
pub struct HttpApiBuilder {
    config: HttpConfig,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl HttpApiBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpConfig::default(),
            tokens: None,
        }
    }

    /// Set the server base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the bearer credential provider.
    pub fn token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<HttpApi, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpApi {
            http,
            base_url: self.config.base_url.trim_end_matches('/').to_string(),
            tokens: self.tokens.unwrap_or_else(|| Arc::new(NoToken)),
        })
    }
}

impl Default for HttpApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider for sessions that have no credential.
struct NoToken;

impl TokenProvider for NoToken {
    fn access_token(&self) -> Option<String> {
        None
    }
}

/// Reqwest-backed Kudos API client.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpApi {
    /// Create a builder.
    pub fn builder() -> HttpApiBuilder {
        HttpApiBuilder::new()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request and map transport failures and non-success statuses
    /// into [`ApiError`].
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        // Prefer the server's own message over the canned status text.
        let message = resp
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBodyDto>(&body).ok())
            .and_then(ErrorBodyDto::into_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

#[async_trait]
impl KudosApi for HttpApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let req = self.authorize(self.http.get(self.url("api/posts/get/")));
        let resp = self.send(req).await?;
        let posts: Vec<FeedPostDto> = Self::decode(resp).await?;
        Ok(posts.into_iter().map(FeedPostDto::into_post).collect())
    }

    async fn interaction_status(&self, post: PostId) -> Result<Reaction, ApiError> {
        let path = format!("api/post/{post}/interaction-status/");
        let req = self.authorize(self.http.get(self.url(&path)));
        let resp = self.send(req).await?;
        let dto: InteractionStatusDto = Self::decode(resp).await?;
        Ok(dto.interaction_type)
    }

    async fn toggle_like(&self, post: PostId) -> Result<(), ApiError> {
        let path = format!("api/post/{post}/like/");
        let req = self.authorize(self.http.post(self.url(&path)));
        self.send(req).await?;
        Ok(())
    }

    async fn toggle_dislike(&self, post: PostId) -> Result<(), ApiError> {
        let path = format!("api/post/{post}/dislike/");
        let req = self.authorize(self.http.post(self.url(&path)));
        self.send(req).await?;
        Ok(())
    }

    async fn comments(&self, post: PostId) -> Result<Vec<Comment>, ApiError> {
        // Comment reads are public; no credential attached.
        let path = format!("api/post/{post}/comments/");
        let resp = self.send(self.http.get(self.url(&path))).await?;
        let comments: Vec<CommentDto> = Self::decode(resp).await?;
        Ok(comments
            .into_iter()
            .map(|c| c.into_comment(post))
            .collect())
    }

    async fn add_comment(&self, post: PostId, content: &str) -> Result<(), ApiError> {
        let path = format!("api/post/{post}/add-comment/");
        let req = self
            .authorize(self.http.post(self.url(&path)))
            .json(&json!({ "content": content }));
        self.send(req).await?;
        Ok(())
    }

    async fn toggle_follow(&self, author: UserId) -> Result<FollowAck, ApiError> {
        let path = format!("api/user/{author}/follow/");
        let req = self.authorize(self.http.post(self.url(&path)));
        let resp = self.send(req).await?;
        let dto: FollowAckDto = Self::decode(resp).await?;
        Ok(dto.into_ack())
    }

    async fn profile(&self, user: UserId) -> Result<Profile, ApiError> {
        let path = format!("api/user/{user}/profile/");
        let req = self.authorize(self.http.get(self.url(&path)));
        let resp = self.send(req).await?;
        let dto: ProfileDto = Self::decode(resp).await?;
        Ok(dto.into_profile())
    }

    async fn author_posts(&self, user: UserId) -> Result<Vec<AuthorPost>, ApiError> {
        let path = format!("api/user/{user}/posts/");
        let req = self.authorize(self.http.get(self.url(&path)));
        let resp = self.send(req).await?;
        let envelope: AuthorPostsDto = Self::decode(resp).await?;
        Ok(envelope
            .posts
            .into_iter()
            .map(|p| p.into_author_post())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StaticToken;

    #[test]
    fn test_url_join_strips_trailing_slash() {
        let api = HttpApi::builder()
            .base_url("http://localhost:8000/")
            .build()
            .unwrap();
        assert_eq!(
            api.url("api/posts/get/"),
            "http://localhost:8000/api/posts/get/"
        );
    }

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_static_token_attached() {
        let api = HttpApi::builder()
            .token_provider(Arc::new(StaticToken("abc".to_string())))
            .build()
            .unwrap();
        assert_eq!(api.tokens.access_token().as_deref(), Some("abc"));
    }
}
