use super::*;
use crate::error::ValidationError;
use crate::fake::{movie, review, FakeService};

fn seeded() -> FakeService {
    FakeService::with_movies(vec![
        movie("1", "Dune", "2021-10-22"),
        movie("2", "Alien", "1979-05-25"),
    ])
    .with_reviews(vec![
        review("10", "1", "Bo", 9.0, "Great sound design"),
        review("11", "1", "Cy", 6.0, "Too long"),
        review("12", "2", "Di", 8.0, "Great tension"),
    ])
}

fn fill(form: &mut ReviewForm, name: &str, rating: &str, comments: &str) {
    form.reviewer_name = name.to_string();
    form.rating = rating.to_string();
    form.comments = comments.to_string();
}

#[tokio::test]
async fn test_load_fetches_movie_and_its_reviews() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    let outcome = detail.load().await;

    assert!(outcome.is_complete());
    assert_eq!(detail.movie().unwrap().name, "Dune");
    assert_eq!(detail.reviews().len(), 2);
    assert!(detail.reviews().iter().all(|r| r.movie_id == MovieId::new("1")));

    let mut calls = detail.service().calls();
    calls.sort();
    assert_eq!(calls, vec!["get_movie 1", "list_reviews 1"]);
}

#[tokio::test]
async fn test_partial_load_when_reviews_fail() {
    let service = seeded();
    service.fail("list_reviews");
    let mut detail = DetailController::new(service, MovieId::new("1"));

    let outcome = detail.load().await;
    assert!(outcome.movie_error.is_none());
    assert!(outcome.reviews_error.is_some());
    assert!(!outcome.is_complete());
    assert_eq!(detail.movie().unwrap().name, "Dune");
    assert!(detail.reviews().is_empty());
}

#[tokio::test]
async fn test_partial_load_when_movie_fails() {
    let service = seeded();
    service.fail("get_movie");
    let mut detail = DetailController::new(service, MovieId::new("1"));

    let outcome = detail.load().await;
    assert!(outcome.movie_error.is_some());
    assert!(outcome.reviews_error.is_none());
    assert!(detail.movie().is_none());
    assert_eq!(detail.reviews().len(), 2);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_reviews() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    detail.load().await;
    detail.service().fail("list_reviews");

    detail.load().await;
    assert_eq!(detail.reviews().len(), 2);
}

#[tokio::test]
async fn test_search_filters_comments() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    detail.load().await;

    let found = detail.search("GREAT");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].comments, "Great sound design");

    let first: Vec<Review> = detail.search("o").into_iter().cloned().collect();
    let second: Vec<Review> = detail.search("o").into_iter().cloned().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn test_submit_review_appends_to_full_and_filtered_lists() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    detail.load().await;
    fill(detail.form_mut(), "Ann", "8", "Great film");

    let created = detail.submit_review().await.unwrap();
    assert_eq!(created.movie_id, MovieId::new("1"));
    assert!(created.id.is_some());

    assert_eq!(detail.reviews().len(), 3);
    assert_eq!(detail.reviews().last(), Some(&created));
    assert!(detail.visible_reviews().contains(&&created));
    assert_eq!(detail.state().form, ReviewForm::default());
}

#[tokio::test]
async fn test_new_review_shows_under_matching_query() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    detail.load().await;
    detail.search("great");
    fill(detail.form_mut(), "Ann", "8", "Great film");

    detail.submit_review().await.unwrap();
    let comments: Vec<&str> = detail.visible_reviews().iter().map(|r| r.comments.as_str()).collect();
    assert_eq!(comments, vec!["Great sound design", "Great film"]);
}

#[tokio::test]
async fn test_submit_review_validation_sends_nothing() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    detail.load().await;
    let calls_before = detail.service().calls().len();

    fill(detail.form_mut(), "Ann", "", "Great film");
    let err = detail.submit_review().await.unwrap_err();
    assert!(matches!(err, DetailError::Validation(ValidationError::IncompleteReview)));
    assert_eq!(err.to_string(), "Please fill in all fields.");

    fill(detail.form_mut(), "Ann", "0", "Great film");
    let err = detail.submit_review().await.unwrap_err();
    assert!(err.is_validation());

    assert_eq!(detail.service().calls().len(), calls_before);
    assert_eq!(detail.state().form.reviewer_name, "Ann");
}

#[tokio::test]
async fn test_submit_review_failure_keeps_form() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    detail.load().await;
    detail.service().fail("create_review");
    fill(detail.form_mut(), "Ann", "8", "Great film");

    let err = detail.submit_review().await.unwrap_err();
    assert!(matches!(err, DetailError::Remote { action: "add review", .. }));
    assert_eq!(detail.reviews().len(), 2);
    assert_eq!(detail.state().form.comments, "Great film");
}

#[tokio::test]
async fn test_navigate_reloads_only_on_change() {
    let mut detail = DetailController::new(seeded(), MovieId::new("1"));
    detail.load().await;
    detail.search("great");

    assert!(detail.navigate(MovieId::new("1")).await.is_none());
    assert_eq!(detail.state().query, "great");

    let outcome = detail.navigate(MovieId::new("2")).await.unwrap();
    assert!(outcome.is_complete());
    assert_eq!(detail.movie().unwrap().name, "Alien");
    assert_eq!(detail.reviews().len(), 1);
    assert_eq!(detail.state().query, "");
}
