use comfy_table::{Attribute, Cell, Color, Table};
use moviecritic_models::{Movie, Review};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::output::Output;

pub const NO_MOVIES: &str = "No movies found.";
pub const NO_REVIEWS: &str = "No reviews found.";

fn styled_table(header: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table.set_header(header);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn header(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

pub fn movies_table(movies: &[&Movie]) -> Table {
    let mut table = styled_table(vec![header("ID"), header("Title"), header("Released"), header("Rating")]);
    for movie in movies {
        let rating = match movie.average_rating {
            Some(r) if r != 0.0 => format!("{}/10", movie.rating_display()),
            _ => movie.rating_display(),
        };
        table.add_row(vec![
            Cell::new(movie.id.as_str()),
            Cell::new(&movie.name),
            Cell::new(movie.release_date_display()),
            Cell::new(rating),
        ]);
    }
    table
}

pub fn reviews_table(reviews: &[&Review]) -> Table {
    let mut table = styled_table(vec![header("Reviewer"), header("Rating"), header("Comments")]);
    for review in reviews {
        table.add_row(vec![
            Cell::new(review.reviewer_display()),
            Cell::new(review.rating_display()),
            Cell::new(&review.comments),
        ]);
    }
    table
}

pub fn print_movies(output: &Output, movies: &[&Movie], query: &str) {
    let data = json!({ "query": query, "movies": movies });
    if movies.is_empty() && output.is_human() {
        output.info(NO_MOVIES);
        return;
    }
    output.table(&movies_table(movies), &data);
}

pub fn print_detail(output: &Output, movie: Option<&Movie>, reviews: &[&Review], query: &str) {
    if !output.is_human() {
        output.json(&json!({ "movie": movie, "query": query, "reviews": reviews }));
        return;
    }

    match movie {
        Some(movie) => {
            output.info(format!("\n{}", movie.name.bold()));
            output.info(format!("Release Date: {}", movie.release_date_display()));
            output.info(format!("Average Rating: {}", movie.rating_display()));
        }
        None => output.warn("Movie details unavailable"),
    }

    output.info("");
    if reviews.is_empty() {
        output.info(NO_REVIEWS);
    } else {
        output.table(&reviews_table(reviews), &serde_json::Value::Null);
    }
}
