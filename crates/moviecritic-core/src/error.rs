use moviecritic_models::MovieId;
use moviecritic_remote::RemoteError;
use thiserror::Error;

/// A form was submitted without what the service needs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields before updating.")]
    IncompleteMovie,

    #[error("Please fill in all fields.")]
    IncompleteReview,

    #[error("Please select a movie.")]
    NoMovieSelected,

    #[error("Rating must be a whole number from 1 to 10, got {0:?}")]
    InvalidRating(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("The {0} form is not open")]
    FormNotOpen(&'static str),

    #[error("Movie {0} is not loaded")]
    UnknownMovie(MovieId),

    #[error("Failed to {action}. Please try again.")]
    Remote {
        action: &'static str,
        #[source]
        source: RemoteError,
    },
}

#[derive(Debug, Error)]
pub enum DetailError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to {action}. Please try again.")]
    Remote {
        action: &'static str,
        #[source]
        source: RemoteError,
    },
}

impl CatalogError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}

impl DetailError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DetailError::Validation(_))
    }
}
