use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::MovieId;
use crate::wire;

pub const NO_RATINGS_YET: &str = "No ratings yet";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    /// ISO-like date string exactly as the service stores it
    #[serde(default)]
    pub release_date: String,
    /// Aggregated by the service; `None` until the movie has reviews
    #[serde(
        default,
        deserialize_with = "wire::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_rating: Option<f64>,
}

impl Movie {
    /// Release date as a calendar date (`m/d/yyyy`).
    ///
    /// Only the leading `YYYY-MM-DD` is considered, so full timestamps work too.
    /// Unparseable values are returned unchanged.
    pub fn release_date_display(&self) -> String {
        parse_release_date(&self.release_date)
            .map(|date| date.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| self.release_date.clone())
    }

    pub fn rating_display(&self) -> String {
        match self.average_rating {
            Some(rating) if rating != 0.0 => wire::format_rating(rating),
            _ => NO_RATINGS_YET.to_string(),
        }
    }
}

/// Body of `POST /movies` and `PUT /movies/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub name: String,
    pub release_date: String,
}

pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
