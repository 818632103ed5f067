//! In-memory `RemoteDataService` for controller tests.

use async_trait::async_trait;
use moviecritic_models::{Movie, MovieDraft, MovieId, Review, ReviewDraft, ReviewId};
use moviecritic_remote::{RemoteDataService, RemoteError};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
struct Store {
    movies: Vec<Movie>,
    reviews: Vec<Review>,
    next_id: u64,
    failing: HashSet<&'static str>,
    calls: Vec<String>,
}

#[derive(Default)]
pub struct FakeService {
    store: Mutex<Store>,
}

impl FakeService {
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let fake = Self::default();
        {
            let mut store = fake.store.lock().unwrap();
            store.next_id = 100;
            store.movies = movies;
        }
        fake
    }

    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        self.store.lock().unwrap().reviews = reviews;
        self
    }

    /// Make `operation` ("list_movies", "create_movie", ...) fail with a 500
    pub fn fail(&self, operation: &'static str) {
        self.store.lock().unwrap().failing.insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.store.lock().unwrap().failing.remove(operation);
    }

    pub fn calls(&self) -> Vec<String> {
        self.store.lock().unwrap().calls.clone()
    }

    pub fn set_next_id(&self, id: u64) {
        self.store.lock().unwrap().next_id = id;
    }

    fn begin(&self, operation: &'static str, detail: String) -> Result<std::sync::MutexGuard<'_, Store>, RemoteError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(if detail.is_empty() {
            operation.to_string()
        } else {
            format!("{} {}", operation, detail)
        });
        if store.failing.contains(operation) {
            return Err(RemoteError::status(operation, 500, "injected failure"));
        }
        Ok(store)
    }
}

pub fn movie(id: &str, name: &str, release_date: &str) -> Movie {
    Movie {
        id: MovieId::new(id),
        name: name.to_string(),
        release_date: release_date.to_string(),
        average_rating: None,
    }
}

pub fn review(id: &str, movie_id: &str, name: &str, rating: f64, comments: &str) -> Review {
    Review {
        id: Some(ReviewId::new(id)),
        movie_id: MovieId::new(movie_id),
        reviewer_name: Some(name.to_string()),
        rating: Some(rating),
        comments: comments.to_string(),
    }
}

#[async_trait]
impl RemoteDataService for FakeService {
    fn service_name(&self) -> &str {
        "fake"
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, RemoteError> {
        let store = self.begin("list_movies", String::new())?;
        Ok(store.movies.clone())
    }

    async fn get_movie(&self, id: &MovieId) -> Result<Movie, RemoteError> {
        let store = self.begin("get_movie", id.to_string())?;
        let found = store.movies.iter().find(|m| &m.id == id).cloned();
        found.ok_or_else(|| RemoteError::status("get_movie", 404, "Not Found"))
    }

    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, RemoteError> {
        let mut store = self.begin("create_movie", draft.name.clone())?;
        store.next_id += 1;
        let created = Movie {
            id: MovieId::new(store.next_id.to_string()),
            name: draft.name.clone(),
            release_date: draft.release_date.clone(),
            average_rating: None,
        };
        store.movies.push(created.clone());
        Ok(created)
    }

    async fn update_movie(&self, id: &MovieId, draft: &MovieDraft) -> Result<Movie, RemoteError> {
        let mut store = self.begin("update_movie", id.to_string())?;
        let existing = store
            .movies
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| RemoteError::status("update_movie", 404, "Not Found"))?;
        existing.name = draft.name.clone();
        existing.release_date = draft.release_date.clone();
        let updated = existing.clone();
        Ok(updated)
    }

    async fn delete_movie(&self, id: &MovieId) -> Result<(), RemoteError> {
        let mut store = self.begin("delete_movie", id.to_string())?;
        store.movies.retain(|m| &m.id != id);
        Ok(())
    }

    async fn list_reviews(&self, movie_id: &MovieId) -> Result<Vec<Review>, RemoteError> {
        let store = self.begin("list_reviews", movie_id.to_string())?;
        let reviews = store
            .reviews
            .iter()
            .filter(|r| &r.movie_id == movie_id)
            .cloned()
            .collect();
        Ok(reviews)
    }

    async fn create_review(&self, draft: &ReviewDraft) -> Result<Review, RemoteError> {
        let mut store = self.begin("create_review", draft.movie_id.to_string())?;
        store.next_id += 1;
        let created = Review {
            id: Some(ReviewId::new(store.next_id.to_string())),
            movie_id: draft.movie_id.clone(),
            reviewer_name: Some(draft.reviewer_name.clone()),
            rating: Some(f64::from(draft.rating)),
            comments: draft.comments.clone(),
        };
        store.reviews.push(created.clone());
        Ok(created)
    }
}
