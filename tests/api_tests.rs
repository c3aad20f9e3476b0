use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hangry_api::{
    error::{AppError, AppResult},
    models::{CatalogMovie, GenreMap, MovieQuery, RecipeRecord},
    routes::{create_router, AppState},
    services::providers::{LanguageModel, MovieCatalog, RecipeCatalog},
};

struct StubMovies {
    movies: Vec<CatalogMovie>,
}

#[async_trait::async_trait]
impl MovieCatalog for StubMovies {
    async fn search(&self, _query: &MovieQuery) -> AppResult<Vec<CatalogMovie>> {
        Ok(self.movies.clone())
    }

    async fn genres(&self) -> AppResult<GenreMap> {
        Ok(genres())
    }

    async fn trending(&self) -> AppResult<Vec<CatalogMovie>> {
        Ok(self.movies.clone())
    }

    fn name(&self) -> &'static str {
        "stub-movies"
    }
}

struct StubModel {
    reply: Option<String>,
}

#[async_trait::async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        self.reply
            .clone()
            .ok_or_else(|| AppError::ExternalApi("model unavailable".to_string()))
    }

    fn model(&self) -> String {
        "stub-model".to_string()
    }
}

#[derive(Default)]
struct StubRecipes {
    recipes: HashMap<String, RecipeRecord>,
    queries: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl RecipeCatalog for StubRecipes {
    async fn search_by_name(&self, name: &str) -> AppResult<Option<RecipeRecord>> {
        self.queries.lock().unwrap().push(name.to_string());
        Ok(self.recipes.get(name).cloned())
    }

    fn name(&self) -> &'static str {
        "stub-recipes"
    }
}

fn genres() -> GenreMap {
    [(80, "Crime".to_string()), (18, "Drama".to_string())]
        .into_iter()
        .collect()
}

fn godfather() -> CatalogMovie {
    CatalogMovie {
        title: Some("The Godfather".to_string()),
        release_date: Some("1972-03-14".to_string()),
        genre_ids: vec![18, 80],
        overview: Some("The aging patriarch of an organized crime dynasty...".to_string()),
        vote_average: Some(8.7),
        poster_url: None,
    }
}

fn carbonara() -> RecipeRecord {
    RecipeRecord {
        name: Some("Spaghetti Carbonara".to_string()),
        category: Some("Pasta".to_string()),
        cuisine: Some("Italian".to_string()),
        ingredients: vec!["320g Spaghetti".to_string(), "6 Egg Yolks".to_string()],
        ..Default::default()
    }
}

struct Fixture {
    server: TestServer,
    recipes: Arc<StubRecipes>,
}

fn create_test_server(movies: Vec<CatalogMovie>, reply: Option<&str>) -> Fixture {
    let mut recipes = StubRecipes::default();
    recipes
        .recipes
        .insert("Spaghetti Carbonara".to_string(), carbonara());
    let recipes = Arc::new(recipes);

    let state = AppState::new(
        Arc::new(StubMovies { movies }),
        Arc::new(StubModel {
            reply: reply.map(str::to_string),
        }),
        recipes.clone(),
        genres(),
    );

    Fixture {
        server: TestServer::new(create_router(Arc::new(state))).unwrap(),
        recipes,
    }
}

const REPLY: &str = "MAIN DISH: Spaghetti Carbonara\nDRINK: Chianti\nSNACK: Garlic Bread\n🍽️ text...";

#[tokio::test]
async fn test_health_check() {
    let fixture = create_test_server(vec![], None);
    let response = fixture.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_echoed() {
    let fixture = create_test_server(vec![], None);
    let response = fixture
        .server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-42"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "trace-42");
}

#[tokio::test]
async fn test_status() {
    let fixture = create_test_server(vec![], None);
    let response = fixture.server.get("/api/v1/status").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["movie_catalog"], "stub-movies");
    assert_eq!(body["movie_catalog_connected"], true);
    assert_eq!(body["genres"], 2);
    assert_eq!(body["language_model"], "stub-model");
    assert_eq!(body["recipe_catalog"], "stub-recipes");
}

#[tokio::test]
async fn test_movie_search() {
    let fixture = create_test_server(vec![godfather()], None);
    let response = fixture
        .server
        .get("/api/v1/movies/search")
        .add_query_param("q", "Godfather (1972)")
        .await;
    response.assert_status_ok();

    let movies: Vec<Value> = response.json();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "The Godfather");
    assert_eq!(movies[0]["year"], 1972);
    assert_eq!(movies[0]["genres"], json!(["Drama", "Crime"]));
}

#[tokio::test]
async fn test_movie_search_year_filter() {
    let fixture = create_test_server(vec![godfather()], None);
    let response = fixture
        .server
        .get("/api/v1/movies/search")
        .add_query_param("q", "Godfather")
        .add_query_param("year_min", "2000")
        .await;
    response.assert_status_ok();

    let movies: Vec<Value> = response.json();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_movie_search_blank_query() {
    let fixture = create_test_server(vec![godfather()], None);
    let response = fixture
        .server
        .get("/api/v1/movies/search")
        .add_query_param("q", "  ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trending() {
    let fixture = create_test_server(vec![godfather()], None);
    let response = fixture.server.get("/api/v1/movies/trending").await;
    response.assert_status_ok();
    let movies: Vec<Value> = response.json();
    assert_eq!(movies[0]["title"], "The Godfather");
}

#[tokio::test]
async fn test_extract_dishes() {
    let fixture = create_test_server(vec![], None);
    let response = fixture
        .server
        .post("/api/v1/dishes/extract")
        .json(&json!({ "text": "MAIN DISH: A DRINK: B SNACK: C" }))
        .await;
    response.assert_status_ok();

    let dishes: Value = response.json();
    assert_eq!(dishes, json!({ "main": "A", "drink": "B", "snack": "C" }));
}

#[tokio::test]
async fn test_recipe_search_exact_match() {
    let fixture = create_test_server(vec![], None);
    let response = fixture
        .server
        .get("/api/v1/recipes/search")
        .add_query_param("dish", "Spaghetti Carbonara")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["recipe"]["name"], "Spaghetti Carbonara");
    assert!(body.get("manual_search").is_none());
    assert_eq!(
        *fixture.recipes.queries.lock().unwrap(),
        vec!["Spaghetti Carbonara"]
    );
}

#[tokio::test]
async fn test_recipe_search_not_found_offers_manual_links() {
    let fixture = create_test_server(vec![], None);
    let response = fixture
        .server
        .get("/api/v1/recipes/search")
        .add_query_param("dish", "Candlelit Unicorn Pie")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["normalized"], "Unicorn Pie");
    assert!(body["recipe"].is_null());
    assert_eq!(
        body["manual_search"]["youtube"],
        "https://www.youtube.com/results?search_query=Candlelit%20Unicorn%20Pie%20recipe"
    );
}

#[tokio::test]
async fn test_order_links() {
    let fixture = create_test_server(vec![], None);
    let response = fixture
        .server
        .get("/api/v1/links/order")
        .add_query_param("dish", "Decadent Tiramisu")
        .await;
    response.assert_status_ok();

    let links: Vec<Value> = response.json();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0]["url"], "https://www.ubereats.com/search?q=Tiramisu");
}

#[tokio::test]
async fn test_pairing_end_to_end() {
    let fixture = create_test_server(vec![godfather()], Some(REPLY));
    let response = fixture
        .server
        .post("/api/v1/pairings")
        .json(&json!({ "query": "Godfather", "mood": "romantic", "cuisine": "italian" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let pairing = &body["pairings"][0];
    assert_eq!(pairing["movie"]["title"], "The Godfather");
    assert_eq!(
        pairing["dishes"],
        json!({ "main": "Spaghetti Carbonara", "drink": "Chianti", "snack": "Garlic Bread" })
    );
    assert_eq!(pairing["recipe"]["name"], "Spaghetti Carbonara");
    assert_eq!(pairing["order_links"]["drink"][0]["url"], "https://www.ubereats.com/search?q=Chianti");
    assert_eq!(
        *fixture.recipes.queries.lock().unwrap(),
        vec!["Spaghetti Carbonara"]
    );
}

#[tokio::test]
async fn test_pairing_when_model_fails() {
    let fixture = create_test_server(vec![godfather()], None);
    let response = fixture
        .server
        .post("/api/v1/pairings")
        .json(&json!({ "query": "Godfather" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let pairing = &body["pairings"][0];
    assert!(pairing["suggestion"].is_null());
    assert_eq!(pairing["dish_query"], "Godfather");
    assert!(pairing["manual_search"]["google"].is_string());
}

#[tokio::test]
async fn test_pairing_no_movies() {
    let fixture = create_test_server(vec![], Some(REPLY));
    let response = fixture
        .server
        .post("/api/v1/pairings")
        .json(&json!({ "query": "nothing matches" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "No movies found for 'nothing matches'");
}
