//! Detail view: one movie, its reviews, comment search, and new reviews.

use moviecritic_models::{Movie, MovieId, Review};
use moviecritic_remote::{RemoteDataService, RemoteError};
use tracing::{info, warn};

use crate::error::DetailError;
use crate::filter::filter_reviews;
use crate::form::ReviewForm;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub movie_id: MovieId,
    pub movie: Option<Movie>,
    pub reviews: Vec<Review>,
    pub query: String,
    pub form: ReviewForm,
}

impl DetailState {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            movie: None,
            reviews: Vec::new(),
            query: String::new(),
            form: ReviewForm::default(),
        }
    }

    /// Reviews whose comments match the current query. Derived on every call,
    /// so it follows both the query and the loaded list.
    pub fn visible_reviews(&self) -> Vec<&Review> {
        filter_reviews(&self.reviews, &self.query)
    }

    pub fn apply_movie(&mut self, movie: Movie) {
        self.movie = Some(movie);
    }

    pub fn apply_reviews(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
    }

    /// Append the service's record of a new review and reset the form
    pub fn apply_review_created(&mut self, review: Review) {
        self.reviews.push(review);
        self.form.clear();
    }
}

/// Outcome of loading a detail view. Either half may fail independently.
#[derive(Debug, Default)]
pub struct DetailLoad {
    pub movie_error: Option<RemoteError>,
    pub reviews_error: Option<RemoteError>,
}

impl DetailLoad {
    pub fn is_complete(&self) -> bool {
        self.movie_error.is_none() && self.reviews_error.is_none()
    }
}

pub struct DetailController<S> {
    service: S,
    state: DetailState,
}

impl<S: RemoteDataService> DetailController<S> {
    pub fn new(service: S, movie_id: MovieId) -> Self {
        Self {
            service,
            state: DetailState::new(movie_id),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn movie_id(&self) -> &MovieId {
        &self.state.movie_id
    }

    pub fn movie(&self) -> Option<&Movie> {
        self.state.movie.as_ref()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.state.reviews
    }

    pub fn visible_reviews(&self) -> Vec<&Review> {
        self.state.visible_reviews()
    }

    /// Set the comment query and return the matching reviews
    pub fn search(&mut self, term: impl Into<String>) -> Vec<&Review> {
        self.state.query = term.into();
        self.state.visible_reviews()
    }

    pub fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.state.form
    }

    /// Fetch the movie and its reviews concurrently. A failed half keeps its
    /// previous value.
    pub async fn load(&mut self) -> DetailLoad {
        let movie_id = self.state.movie_id.clone();
        let (movie, reviews) = futures::join!(
            self.service.get_movie(&movie_id),
            self.service.list_reviews(&movie_id)
        );

        let mut outcome = DetailLoad::default();

        match movie {
            Ok(movie) => self.state.apply_movie(movie),
            Err(e) => {
                warn!(movie_id = %movie_id, error = %e, "Error fetching movie");
                outcome.movie_error = Some(e);
            }
        }

        match reviews {
            Ok(reviews) => {
                info!(movie_id = %movie_id, count = reviews.len(), "Loaded reviews");
                self.state.apply_reviews(reviews);
            }
            Err(e) => {
                warn!(movie_id = %movie_id, error = %e, "Error fetching reviews");
                outcome.reviews_error = Some(e);
            }
        }

        outcome
    }

    /// Switch to another movie. Cached data is dropped and reloaded only when
    /// the id actually changes.
    pub async fn navigate(&mut self, movie_id: MovieId) -> Option<DetailLoad> {
        if movie_id == self.state.movie_id {
            return None;
        }
        self.state = DetailState::new(movie_id);
        Some(self.load().await)
    }

    /// Post the review form for this movie. Validation failures send nothing;
    /// request failures keep the entered values.
    pub async fn submit_review(&mut self) -> Result<Review, DetailError> {
        let draft = self.state.form.to_draft(&self.state.movie_id)?;

        match self.service.create_review(&draft).await {
            Ok(review) => {
                info!(movie_id = %review.movie_id, "Added review");
                self.state.apply_review_created(review.clone());
                Ok(review)
            }
            Err(e) => {
                warn!(movie_id = %draft.movie_id, error = %e, "Error adding review");
                Err(DetailError::Remote {
                    action: "add review",
                    source: e,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests;
