use async_trait::async_trait;
use moviecritic_models::{Movie, MovieDraft, MovieId, Review, ReviewDraft};

use crate::error::RemoteError;

/// The REST API that owns movies and reviews.
///
/// Implementations are pass-throughs: no caching, no retries. View controllers
/// hold the only client-side copies of the data.
#[async_trait]
pub trait RemoteDataService: Send + Sync {
    /// Human-readable name used in logs (base URL for the HTTP implementation)
    fn service_name(&self) -> &str;

    // Movies
    async fn list_movies(&self) -> Result<Vec<Movie>, RemoteError>;
    async fn get_movie(&self, id: &MovieId) -> Result<Movie, RemoteError>;
    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, RemoteError>;
    async fn update_movie(&self, id: &MovieId, draft: &MovieDraft) -> Result<Movie, RemoteError>;
    async fn delete_movie(&self, id: &MovieId) -> Result<(), RemoteError>;

    // Reviews
    async fn list_reviews(&self, movie_id: &MovieId) -> Result<Vec<Review>, RemoteError>;
    async fn create_review(&self, draft: &ReviewDraft) -> Result<Review, RemoteError>;
}
