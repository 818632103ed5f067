//! Catalog view: the full movie list, title search, and movie writes.
//!
//! `CatalogState` holds the cached list and form state; its `apply_*` methods
//! are the reconciliation rules and never touch the network.
//! `CatalogController` issues the requests and feeds results into them.

use moviecritic_models::{Movie, MovieId, Review};
use moviecritic_remote::{RemoteDataService, RemoteError};
use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::filter::filter_movies;
use crate::form::{ActiveForm, MovieForm, ReviewForm};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub movies: Vec<Movie>,
    pub query: String,
    pub active: ActiveForm,
    pub movie_form: MovieForm,
    pub review_form: ReviewForm,
}

impl CatalogState {
    /// Movies matching the current query
    pub fn visible(&self) -> Vec<&Movie> {
        filter_movies(&self.movies, &self.query)
    }

    pub fn find(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| &m.id == id)
    }

    pub fn apply_loaded(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    /// Append the service's record and close the add form
    pub fn apply_created(&mut self, movie: Movie) {
        self.movies.push(movie);
        self.active = ActiveForm::None;
        self.movie_form.clear();
    }

    /// Replace every cached entry with `target`'s id by the service's record
    /// and close the edit form
    pub fn apply_updated(&mut self, target: &MovieId, movie: Movie) {
        for entry in self.movies.iter_mut().filter(|m| &m.id == target) {
            *entry = movie.clone();
        }
        self.active = ActiveForm::None;
        self.movie_form.clear();
    }

    pub fn apply_deleted(&mut self, id: &MovieId) {
        self.movies.retain(|m| &m.id != id);
        if matches!(&self.active, ActiveForm::EditingMovie { id: editing } if editing == id) {
            self.active = ActiveForm::None;
            self.movie_form.clear();
        }
    }

    /// A review was posted from the catalog; only the form changes
    pub fn apply_review_added(&mut self) {
        self.active = ActiveForm::None;
        self.review_form.clear();
    }

    /// Seed the movie form from `id` and mark it as the edit target
    pub fn begin_edit(&mut self, id: &MovieId) -> Result<(), CatalogError> {
        let movie = self.find(id).ok_or_else(|| CatalogError::UnknownMovie(id.clone()))?;
        self.movie_form = MovieForm::from_movie(movie);
        self.active = ActiveForm::EditingMovie { id: id.clone() };
        Ok(())
    }
}

pub struct CatalogController<S> {
    service: S,
    state: CatalogState,
}

impl<S: RemoteDataService> CatalogController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: CatalogState::default(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn movies(&self) -> &[Movie] {
        &self.state.movies
    }

    pub fn visible(&self) -> Vec<&Movie> {
        self.state.visible()
    }

    /// Set the title query and return the matching movies
    pub fn search(&mut self, term: impl Into<String>) -> Vec<&Movie> {
        self.state.query = term.into();
        self.state.visible()
    }

    pub fn active_form(&self) -> &ActiveForm {
        &self.state.active
    }

    pub fn movie_form_mut(&mut self) -> &mut MovieForm {
        &mut self.state.movie_form
    }

    pub fn review_form_mut(&mut self) -> &mut ReviewForm {
        &mut self.state.review_form
    }

    /// Fetch the whole collection. On failure the list stays as it was
    /// (empty on first load) and the error is logged and returned.
    pub async fn load(&mut self) -> Result<usize, CatalogError> {
        match self.service.list_movies().await {
            Ok(movies) => {
                info!(count = movies.len(), service = self.service.service_name(), "Loaded movies");
                self.state.apply_loaded(movies);
                Ok(self.state.movies.len())
            }
            Err(e) => {
                warn!(error = %e, "Error fetching movies");
                Err(remote("load movies", e))
            }
        }
    }

    pub fn open_add_movie(&mut self) {
        self.state.movie_form.clear();
        self.state.active = ActiveForm::AddingMovie;
    }

    pub fn start_edit(&mut self, id: &MovieId) -> Result<(), CatalogError> {
        self.state.begin_edit(id)?;
        debug!(movie_id = %id, "Editing movie");
        Ok(())
    }

    pub fn open_add_review(&mut self) {
        self.state.review_form.clear();
        self.state.active = ActiveForm::AddingReview;
    }

    /// Close whichever form is open, keeping nothing from it
    pub fn close_form(&mut self) {
        match self.state.active {
            ActiveForm::AddingReview => self.state.review_form.clear(),
            ActiveForm::AddingMovie | ActiveForm::EditingMovie { .. } => self.state.movie_form.clear(),
            ActiveForm::None => {}
        }
        self.state.active = ActiveForm::None;
    }

    /// Submit the add-movie form. The form stays open with its values if the
    /// request fails.
    pub async fn create_movie(&mut self) -> Result<Movie, CatalogError> {
        if self.state.active != ActiveForm::AddingMovie {
            return Err(CatalogError::FormNotOpen(ActiveForm::AddingMovie.label()));
        }

        let draft = self.state.movie_form.to_draft();
        match self.service.create_movie(&draft).await {
            Ok(movie) => {
                info!(movie_id = %movie.id, name = %movie.name, "Added movie");
                self.state.apply_created(movie.clone());
                Ok(movie)
            }
            Err(e) => {
                warn!(error = %e, "Error adding movie");
                Err(remote("add movie", e))
            }
        }
    }

    /// Submit the edit form. Blank fields abort before any request.
    pub async fn update_movie(&mut self) -> Result<Movie, CatalogError> {
        let target = match &self.state.active {
            ActiveForm::EditingMovie { id } => id.clone(),
            _ => return Err(CatalogError::FormNotOpen("edit movie")),
        };
        self.state.movie_form.require_complete()?;

        let draft = self.state.movie_form.to_draft();
        match self.service.update_movie(&target, &draft).await {
            Ok(movie) => {
                info!(movie_id = %target, name = %movie.name, "Updated movie");
                self.state.apply_updated(&target, movie.clone());
                Ok(movie)
            }
            Err(e) => {
                warn!(movie_id = %target, error = %e, "Error updating movie");
                Err(remote("update movie", e))
            }
        }
    }

    /// Delete on the service, then drop the cached entry. Nothing is removed
    /// locally if the request fails.
    pub async fn delete_movie(&mut self, id: &MovieId) -> Result<(), CatalogError> {
        match self.service.delete_movie(id).await {
            Ok(()) => {
                info!(movie_id = %id, "Deleted movie");
                self.state.apply_deleted(id);
                Ok(())
            }
            Err(e) => {
                warn!(movie_id = %id, error = %e, "Error deleting movie");
                Err(remote("delete movie", e))
            }
        }
    }

    /// Submit the catalog's add-review form for the movie picked in it
    pub async fn add_review(&mut self) -> Result<Review, CatalogError> {
        if self.state.active != ActiveForm::AddingReview {
            return Err(CatalogError::FormNotOpen(ActiveForm::AddingReview.label()));
        }

        let draft = self.state.review_form.to_draft_for_selected()?;
        if self.state.find(&draft.movie_id).is_none() {
            return Err(CatalogError::UnknownMovie(draft.movie_id));
        }

        match self.service.create_review(&draft).await {
            Ok(review) => {
                info!(movie_id = %review.movie_id, "Added review");
                self.state.apply_review_added();
                Ok(review)
            }
            Err(e) => {
                warn!(movie_id = %draft.movie_id, error = %e, "Error adding review");
                Err(remote("add review", e))
            }
        }
    }
}

fn remote(action: &'static str, source: RemoteError) -> CatalogError {
    CatalogError::Remote { action, source }
}
