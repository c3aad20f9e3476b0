use regex::Regex;
use std::sync::OnceLock;

use crate::{
    models::{GenreMap, Movie, MovieQuery, YearRange},
    services::providers::MovieCatalog,
};

pub const DEFAULT_RESULTS: usize = 3;
pub const MAX_RESULTS: usize = 5;
const TRENDING_LIMIT: usize = 5;

/// Title text with an optional release-year hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleQuery {
    pub title: String,
    pub year: Option<i32>,
}

/// Splits `"The Housemaid (2025)"` into the title and a year hint
pub fn parse_title_query(raw: &str) -> TitleQuery {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    let year_pattern = YEAR.get_or_init(|| Regex::new(r"\((\d{4})\)").expect("year pattern is a valid regex"));

    let year = year_pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok());

    let stripped = year_pattern.replace_all(raw, "");
    let title = stripped.trim();

    TitleQuery {
        title: if title.is_empty() {
            raw.trim().to_string()
        } else {
            title.to_string()
        },
        year,
    }
}

/// One user-facing movie search
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSearch {
    pub query: String,
    pub results: usize,
    /// Filter by release year when set; movies with no known year always pass
    pub year_range: Option<YearRange>,
}

impl MovieSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: DEFAULT_RESULTS,
            year_range: None,
        }
    }

    pub fn with_results(mut self, results: usize) -> Self {
        self.results = results.clamp(1, MAX_RESULTS);
        self
    }

    pub fn with_year_range(mut self, year_range: Option<YearRange>) -> Self {
        self.year_range = year_range;
        self
    }
}

/// Searches the catalog, resolving genres and applying the year filter.
///
/// Catalog failures are logged and produce an empty list.
pub async fn search_movies(
    catalog: &dyn MovieCatalog,
    genres: &GenreMap,
    search: &MovieSearch,
) -> Vec<Movie> {
    let parsed = parse_title_query(&search.query);
    let query = MovieQuery::new(parsed.title).with_year(parsed.year);

    let entries = match catalog.search(&query).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                error = %e,
                query = %search.query,
                provider = catalog.name(),
                "Movie search failed"
            );
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .map(|entry| Movie::from_catalog(entry, genres))
        .filter(|movie| match (search.year_range, movie.year) {
            (Some(range), Some(year)) => range.contains(year),
            _ => true,
        })
        .take(search.results)
        .collect()
}

/// This week's trending movies, fail open
pub async fn trending_movies(catalog: &dyn MovieCatalog, genres: &GenreMap) -> Vec<Movie> {
    match catalog.trending().await {
        Ok(entries) => entries
            .into_iter()
            .take(TRENDING_LIMIT)
            .map(|entry| Movie::from_catalog(entry, genres))
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, provider = catalog.name(), "Trending fetch failed");
            Vec::new()
        }
    }
}
