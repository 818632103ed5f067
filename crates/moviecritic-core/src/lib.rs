pub mod catalog;
pub mod detail;
pub mod error;
pub mod filter;
pub mod form;

#[cfg(test)]
pub(crate) mod fake;

pub use catalog::{CatalogController, CatalogState};
pub use detail::{DetailController, DetailLoad, DetailState};
pub use error::{CatalogError, DetailError, ValidationError};
pub use filter::{filter_movies, filter_reviews, matches_query};
pub use form::{ActiveForm, MovieForm, ReviewForm};
