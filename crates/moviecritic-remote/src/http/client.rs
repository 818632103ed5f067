use async_trait::async_trait;
use moviecritic_models::{Movie, MovieDraft, MovieId, Review, ReviewDraft};
use reqwest::{Client, Url};
use std::sync::Arc;
use tracing::debug;

use crate::error::RemoteError;
use crate::http::api;
use crate::traits::RemoteDataService;

/// Create the shared reqwest client. No timeout is set; a hung request simply
/// never completes.
pub fn create_http_client() -> Result<Client, RemoteError> {
    Client::builder()
        .user_agent(concat!("moviecritic/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(RemoteError::from)
}

/// `RemoteDataService` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpDataService {
    client: Arc<Client>,
    base_url: String,
}

impl HttpDataService {
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        Self::with_client(create_http_client()?, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, RemoteError> {
        let base_url = normalize_base_url(base_url)?;
        debug!(%base_url, "Created movie service client");
        Ok(Self {
            client: Arc::new(client),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Validate the URL and strip any trailing slash so paths can be appended.
fn normalize_base_url(raw: &str) -> Result<String, RemoteError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|_| RemoteError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(RemoteError::InvalidUrl(raw.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[async_trait]
impl RemoteDataService for HttpDataService {
    fn service_name(&self) -> &str {
        &self.base_url
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, RemoteError> {
        api::list_movies(&self.client, &self.base_url).await
    }

    async fn get_movie(&self, id: &MovieId) -> Result<Movie, RemoteError> {
        api::get_movie(&self.client, &self.base_url, id).await
    }

    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, RemoteError> {
        api::create_movie(&self.client, &self.base_url, draft).await
    }

    async fn update_movie(&self, id: &MovieId, draft: &MovieDraft) -> Result<Movie, RemoteError> {
        api::update_movie(&self.client, &self.base_url, id, draft).await
    }

    async fn delete_movie(&self, id: &MovieId) -> Result<(), RemoteError> {
        api::delete_movie(&self.client, &self.base_url, id).await
    }

    async fn list_reviews(&self, movie_id: &MovieId) -> Result<Vec<Review>, RemoteError> {
        api::list_reviews(&self.client, &self.base_url, movie_id).await
    }

    async fn create_review(&self, draft: &ReviewDraft) -> Result<Review, RemoteError> {
        api::create_review(&self.client, &self.base_url, draft).await
    }
}
