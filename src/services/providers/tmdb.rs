/// TMDB (The Movie Database) provider
///
/// API Flow:
/// 1. Genres: /genre/movie/list → id/name table, loaded once at startup
/// 2. Search: /search/movie → movie list with genre ids
/// 3. Trending: /trending/movie/week → movie list with genre ids
///
/// Authenticates with the v3 `api_key` query parameter.
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{CatalogMovie, GenreMap, MovieQuery},
    services::providers::{ensure_success, MovieCatalog},
};

const PROVIDER: &str = "tmdb";
const LANGUAGE: &str = "en-US";

#[derive(Debug, Deserialize)]
struct TmdbMovieList {
    #[serde(default)]
    results: Vec<TmdbMovie>,
}

/// Movie entry as returned by search and trending endpoints
#[derive(Debug, Clone, Deserialize)]
struct TmdbMovie {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u32>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenreList {
    #[serde(default)]
    genres: Vec<TmdbGenre>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    id: u32,
    name: String,
}

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_url: String,
}

impl TmdbProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String, image_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
            image_url,
        }
    }

    /// Convert a TMDB entry into a catalog movie, expanding the poster path
    fn convert_movie(&self, movie: TmdbMovie) -> CatalogMovie {
        CatalogMovie {
            title: movie.title,
            release_date: movie.release_date,
            genre_ids: movie.genre_ids,
            overview: movie.overview,
            vote_average: movie.vote_average,
            poster_url: movie
                .poster_path
                .filter(|path| !path.is_empty())
                .map(|path| format!("{}{}", self.image_url, path)),
        }
    }

    async fn fetch_movie_list(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> AppResult<Vec<CatalogMovie>> {
        let url = format!("{}{}", self.api_url, endpoint);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .query(params)
            .send()
            .await?;

        let list: TmdbMovieList = ensure_success("TMDB", response).await?.json().await?;
        Ok(list
            .results
            .into_iter()
            .map(|movie| self.convert_movie(movie))
            .collect())
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbProvider {
    async fn search(&self, query: &MovieQuery) -> AppResult<Vec<CatalogMovie>> {
        let mut params = vec![
            ("query", query.query.clone()),
            ("page", query.page.to_string()),
            ("include_adult", query.include_adult.to_string()),
        ];
        if let Some(year) = query.year {
            params.push(("year", year.to_string()));
        }

        let movies = self.fetch_movie_list("/search/movie", &params).await?;

        tracing::info!(
            query = %query.query,
            year = ?query.year,
            results = movies.len(),
            provider = PROVIDER,
            "Movie search completed"
        );

        Ok(movies)
    }

    async fn genres(&self) -> AppResult<GenreMap> {
        let url = format!("{}/genre/movie/list", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .send()
            .await?;

        let list: TmdbGenreList = ensure_success("TMDB", response).await?.json().await?;
        let genres: GenreMap = list.genres.into_iter().map(|g| (g.id, g.name)).collect();

        tracing::info!(genres = genres.len(), provider = PROVIDER, "Genres loaded");

        Ok(genres)
    }

    async fn trending(&self) -> AppResult<Vec<CatalogMovie>> {
        let movies = self.fetch_movie_list("/trending/movie/week", &[]).await?;

        tracing::info!(
            results = movies.len(),
            provider = PROVIDER,
            "Trending movies fetched"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
