//! Raw form fields and the single "which form is open" state.

use moviecritic_models::{Movie, MovieDraft, MovieId, ReviewDraft};

use crate::error::ValidationError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

/// Which catalog form is showing. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveForm {
    #[default]
    None,
    AddingMovie,
    EditingMovie { id: MovieId },
    AddingReview,
}

impl ActiveForm {
    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveForm::None)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveForm::None => "none",
            ActiveForm::AddingMovie => "add movie",
            ActiveForm::EditingMovie { .. } => "edit movie",
            ActiveForm::AddingReview => "add review",
        }
    }
}

/// Add/edit movie fields exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub name: String,
    pub release_date: String,
}

impl MovieForm {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            release_date: movie.release_date.clone(),
        }
    }

    /// Both fields must be filled (checked before updates)
    pub fn require_complete(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) || is_blank(&self.release_date) {
            return Err(ValidationError::IncompleteMovie);
        }
        Ok(())
    }

    pub fn to_draft(&self) -> MovieDraft {
        MovieDraft {
            name: self.name.clone(),
            release_date: self.release_date.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Review fields exactly as entered. `movie_id` is only used by the catalog
/// form, where the user picks the movie; the detail view supplies its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub movie_id: String,
    pub reviewer_name: String,
    pub rating: String,
    pub comments: String,
}

impl ReviewForm {
    /// Build the request body for `movie_id`.
    ///
    /// Reviewer name, rating and comments are required, and the rating must
    /// be an integer from 1 to 10.
    pub fn to_draft(&self, movie_id: &MovieId) -> Result<ReviewDraft, ValidationError> {
        if is_blank(&self.reviewer_name) || is_blank(&self.rating) || is_blank(&self.comments) {
            return Err(ValidationError::IncompleteReview);
        }
        let rating = parse_rating(&self.rating)?;

        Ok(ReviewDraft {
            movie_id: movie_id.clone(),
            reviewer_name: self.reviewer_name.trim().to_string(),
            rating,
            comments: self.comments.clone(),
        })
    }

    /// Same as `to_draft`, using the movie picked in the form
    pub fn to_draft_for_selected(&self) -> Result<ReviewDraft, ValidationError> {
        let movie_id = MovieId::new(self.movie_id.trim());
        if movie_id.is_empty() {
            return Err(ValidationError::NoMovieSelected);
        }
        self.to_draft(&movie_id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn parse_rating(raw: &str) -> Result<u8, ValidationError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| ValidationError::InvalidRating(raw.to_string()))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
