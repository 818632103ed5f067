//! Local free-text search over loaded collections.

use moviecritic_models::{Movie, Review};

/// Case-insensitive substring match. The empty query matches everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Movies whose name contains `query`, in their original order
pub fn filter_movies<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    movies.iter().filter(|m| matches_query(&m.name, query)).collect()
}

/// Reviews whose comments contain `query`, in their original order
pub fn filter_reviews<'a>(reviews: &'a [Review], query: &str) -> Vec<&'a Review> {
    reviews.iter().filter(|r| matches_query(&r.comments, query)).collect()
}
