//! One function per endpoint of the movie service.
//!
//! Every function takes the shared `reqwest::Client` and the base URL (no
//! trailing slash). Non-2xx responses become `RemoteError::Status` carrying the
//! response body; bodies that are not the expected JSON become
//! `RemoteError::Decode`.

use moviecritic_models::{Movie, MovieDraft, MovieId, Review, ReviewDraft};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::RemoteError;

fn movies_url(base_url: &str) -> String {
    format!("{}/movies", base_url)
}

fn movie_url(base_url: &str, id: &MovieId) -> String {
    format!("{}/movies/{}", base_url, urlencoding::encode(id.as_str()))
}

fn reviews_url(base_url: &str) -> String {
    format!("{}/reviews", base_url)
}

/// Turn a non-2xx response into an error, otherwise hand it back
async fn check_status(operation: &'static str, response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    debug!(operation, status = status.as_u16(), url = %response.url(), "Response received");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::status(operation, status.as_u16(), body))
}

async fn read_json<T: DeserializeOwned>(operation: &'static str, response: Response) -> Result<T, RemoteError> {
    let response = check_status(operation, response).await?;
    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| {
        error!(operation, error = %e, body = %body, "Failed to parse response");
        RemoteError::Decode { operation, source: e }
    })
}

/// GET /movies
pub async fn list_movies(client: &Client, base_url: &str) -> Result<Vec<Movie>, RemoteError> {
    let response = client.get(movies_url(base_url)).send().await?;
    read_json("list movies", response).await
}

/// GET /movies/{id}
pub async fn get_movie(client: &Client, base_url: &str, id: &MovieId) -> Result<Movie, RemoteError> {
    let response = client.get(movie_url(base_url, id)).send().await?;
    read_json("get movie", response).await
}

/// POST /movies
pub async fn create_movie(client: &Client, base_url: &str, draft: &MovieDraft) -> Result<Movie, RemoteError> {
    let response = client.post(movies_url(base_url)).json(draft).send().await?;
    read_json("create movie", response).await
}

/// PUT /movies/{id}
pub async fn update_movie(
    client: &Client,
    base_url: &str,
    id: &MovieId,
    draft: &MovieDraft,
) -> Result<Movie, RemoteError> {
    let response = client.put(movie_url(base_url, id)).json(draft).send().await?;
    read_json("update movie", response).await
}

/// DELETE /movies/{id}
///
/// The acknowledgement body (if any) is ignored.
pub async fn delete_movie(client: &Client, base_url: &str, id: &MovieId) -> Result<(), RemoteError> {
    let response = client.delete(movie_url(base_url, id)).send().await?;
    check_status("delete movie", response).await?;
    Ok(())
}

/// GET /reviews?movieId={id}
pub async fn list_reviews(client: &Client, base_url: &str, movie_id: &MovieId) -> Result<Vec<Review>, RemoteError> {
    let response = client
        .get(reviews_url(base_url))
        .query(&[("movieId", movie_id.as_str())])
        .send()
        .await?;
    read_json("list reviews", response).await
}

/// POST /reviews
pub async fn create_review(client: &Client, base_url: &str, draft: &ReviewDraft) -> Result<Review, RemoteError> {
    let response = client.post(reviews_url(base_url)).json(draft).send().await?;
    read_json("create review", response).await
}
