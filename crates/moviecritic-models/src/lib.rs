pub mod ids;
pub mod movie;
pub mod review;
pub mod wire;

pub use ids::{MovieId, ReviewId};
pub use movie::{parse_release_date, Movie, MovieDraft, NO_RATINGS_YET};
pub use review::{Review, ReviewDraft, ANONYMOUS_REVIEWER};
