use serde::{Deserialize, Serialize};

use crate::ids::{MovieId, ReviewId};
use crate::wire;

pub const ANONYMOUS_REVIEWER: &str = "Anonymous";

const UNRATED: &str = "-";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReviewId>,
    pub movie_id: MovieId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    /// 1-10 when set. The service stores whatever was posted, so blank or
    /// non-numeric ratings come back as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "wire::lenient_number")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comments: String,
}

impl Review {
    pub fn reviewer_display(&self) -> &str {
        match self.reviewer_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => ANONYMOUS_REVIEWER,
        }
    }

    /// `"8/10"`, or `"-/10"` when the rating is missing
    pub fn rating_display(&self) -> String {
        match self.rating {
            Some(rating) => format!("{}/10", wire::format_rating(rating)),
            None => format!("{}/10", UNRATED),
        }
    }
}

/// Body of `POST /reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub movie_id: MovieId,
    pub reviewer_name: String,
    pub rating: u8,
    pub comments: String,
}
