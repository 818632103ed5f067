//! Exercises `HttpDataService` against an in-process JSON server that mimics
//! the movie service's REST contract.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use moviecritic_models::{MovieDraft, MovieId, ReviewDraft};
use moviecritic_remote::{HttpDataService, RemoteDataService, RemoteError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Default)]
struct Store {
    movies: Vec<Value>,
    reviews: Vec<Value>,
    next_id: u64,
    requests: Vec<String>,
}

type Shared = Arc<Mutex<Store>>;

fn record(state: &Shared, line: String) {
    state.lock().unwrap().requests.push(line);
}

async fn list_movies(State(state): State<Shared>) -> Json<Value> {
    record(&state, "GET /movies".to_string());
    Json(Value::Array(state.lock().unwrap().movies.clone()))
}

async fn create_movie(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "POST /movies".to_string());
    let mut store = state.lock().unwrap();
    store.next_id += 1;
    let movie = json!({
        "id": store.next_id,
        "name": body["name"],
        "releaseDate": body["releaseDate"],
    });
    store.movies.push(movie.clone());
    (StatusCode::CREATED, Json(movie))
}

fn id_matches(value: &Value, id: &str) -> bool {
    match &value["id"] {
        Value::Number(n) => n.to_string() == id,
        Value::String(s) => s == id,
        _ => false,
    }
}

async fn get_movie(State(state): State<Shared>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    record(&state, format!("GET /movies/{}", id));
    let store = state.lock().unwrap();
    let found = store.movies.iter().find(|m| id_matches(m, &id)).cloned();
    found.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_movie(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    record(&state, format!("PUT /movies/{}", id));
    let mut store = state.lock().unwrap();
    let movie = store
        .movies
        .iter_mut()
        .find(|m| id_matches(m, &id))
        .ok_or(StatusCode::NOT_FOUND)?;
    movie["name"] = body["name"].clone();
    movie["releaseDate"] = body["releaseDate"].clone();
    let updated = movie.clone();
    Ok(Json(updated))
}

async fn delete_movie(State(state): State<Shared>, Path(id): Path<String>) -> StatusCode {
    record(&state, format!("DELETE /movies/{}", id));
    let mut store = state.lock().unwrap();
    let before = store.movies.len();
    store.movies.retain(|m| !id_matches(m, &id));
    if store.movies.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn list_reviews(State(state): State<Shared>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let movie_id = params.get("movieId").cloned().unwrap_or_default();
    record(&state, format!("GET /reviews?movieId={}", movie_id));
    let store = state.lock().unwrap();
    let reviews = store
        .reviews
        .iter()
        .filter(|r| r["movieId"] == Value::String(movie_id.clone()))
        .cloned()
        .collect();
    Json(Value::Array(reviews))
}

async fn create_review(State(state): State<Shared>, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "POST /reviews".to_string());
    let mut store = state.lock().unwrap();
    store.next_id += 1;
    body["id"] = json!(store.next_id);
    store.reviews.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_store(store: Store) -> (HttpDataService, Shared) {
    let state: Shared = Arc::new(Mutex::new(store));
    let router = Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/:id", get(get_movie).put(update_movie).delete(delete_movie))
        .route("/reviews", get(list_reviews).post(create_review))
        .with_state(state.clone());
    let base_url = spawn(router).await;
    (HttpDataService::new(&base_url).unwrap(), state)
}

fn seeded() -> Store {
    Store {
        movies: vec![
            json!({"id": 1, "name": "Dune", "releaseDate": "2021-10-22", "averageRating": 8.5}),
            json!({"id": 2, "name": "Alien", "releaseDate": "1979-05-25"}),
        ],
        reviews: vec![
            json!({"id": 10, "movieId": "1", "reviewerName": "Ann", "rating": 9, "comments": "Sandy"}),
            json!({"id": 11, "movieId": "2", "rating": "7", "comments": "Scary"}),
        ],
        next_id: 20,
        requests: Vec::new(),
    }
}

#[tokio::test]
async fn test_list_and_get_movies() {
    let (service, _) = spawn_store(seeded()).await;

    let movies = service.list_movies().await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].name, "Dune");
    assert_eq!(movies[0].average_rating, Some(8.5));
    assert_eq!(movies[1].average_rating, None);

    let alien = service.get_movie(&MovieId::new("2")).await.unwrap();
    assert_eq!(alien.name, "Alien");
    assert_eq!(alien.release_date, "1979-05-25");
}

#[tokio::test]
async fn test_create_update_delete_movie() {
    let (service, state) = spawn_store(Store::default()).await;

    let draft = MovieDraft {
        name: "Dune".to_string(),
        release_date: "2021-10-22".to_string(),
    };
    let created = service.create_movie(&draft).await.unwrap();
    assert_eq!(created.id, MovieId::new("1"));
    assert_eq!(created.name, "Dune");

    let edited = MovieDraft {
        name: "Dune: Part One".to_string(),
        release_date: "2021-10-22".to_string(),
    };
    let updated = service.update_movie(&created.id, &edited).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Dune: Part One");

    service.delete_movie(&created.id).await.unwrap();
    assert!(service.list_movies().await.unwrap().is_empty());

    let requests = state.lock().unwrap().requests.clone();
    assert_eq!(
        requests,
        vec!["POST /movies", "PUT /movies/1", "DELETE /movies/1", "GET /movies"]
    );
}

#[tokio::test]
async fn test_reviews_are_filtered_by_movie() {
    let (service, state) = spawn_store(seeded()).await;

    let reviews = service.list_reviews(&MovieId::new("2")).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].comments, "Scary");
    assert_eq!(reviews[0].rating, Some(7.0));
    assert_eq!(reviews[0].reviewer_display(), "Anonymous");

    assert_eq!(
        state.lock().unwrap().requests.last().unwrap(),
        "GET /reviews?movieId=2"
    );
}

#[tokio::test]
async fn test_unscored_review_does_not_hide_the_others() {
    let mut store = seeded();
    store
        .reviews
        .push(json!({"id": 12, "movieId": "1", "reviewerName": "Cy", "rating": "", "comments": "Posted without a score"}));
    let (service, _) = spawn_store(store).await;

    let reviews = service.list_reviews(&MovieId::new("1")).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].rating, Some(9.0));
    assert_eq!(reviews[1].rating, None);
    assert_eq!(reviews[1].rating_display(), "-/10");
}

#[tokio::test]
async fn test_create_review_returns_server_record() {
    let (service, _) = spawn_store(seeded()).await;

    let draft = ReviewDraft {
        movie_id: MovieId::new("1"),
        reviewer_name: "Bo".to_string(),
        rating: 8,
        comments: "Great film".to_string(),
    };
    let review = service.create_review(&draft).await.unwrap();
    assert!(review.id.is_some());
    assert_eq!(review.movie_id, MovieId::new("1"));
    assert_eq!(review.rating, Some(8.0));

    let reviews = service.list_reviews(&MovieId::new("1")).await.unwrap();
    assert_eq!(reviews.len(), 2);
}

#[tokio::test]
async fn test_missing_movie_is_status_error() {
    let (service, _) = spawn_store(seeded()).await;

    let err = service.get_movie(&MovieId::new("99")).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    let err = service.delete_movie(&MovieId::new("99")).await.unwrap_err();
    assert!(matches!(err, RemoteError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_server_error_carries_body() {
    let router = Router::new().route(
        "/movies",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
    );
    let service = HttpDataService::new(&spawn(router).await).unwrap();

    match service.list_movies().await.unwrap_err() {
        RemoteError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database offline");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let router = Router::new().route("/movies", get(|| async { "<html>not json</html>" }));
    let service = HttpDataService::new(&spawn(router).await).unwrap();

    let err = service.list_movies().await.unwrap_err();
    assert!(matches!(err, RemoteError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpDataService::new(&format!("http://{}", addr)).unwrap();
    let err = service.list_movies().await.unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)));
}
