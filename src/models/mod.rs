use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod pairing;
pub mod recipe;

pub use pairing::{
    Cuisine, DishTriple, ManualSearchLinks, Mood, MoviePairing, OrderLink, OrderLinks,
    PairingRequest, PairingResponse,
};
pub use recipe::RecipeRecord;

const UNKNOWN: &str = "Unknown";
const NO_OVERVIEW: &str = "No description available";

/// Inclusive release-year window for movie searches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 1900,
            max: 2026,
        }
    }
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Parameters for a single movie catalog search call
#[derive(Debug, Clone, PartialEq)]
pub struct MovieQuery {
    pub query: String,
    /// Release-year hint parsed out of the user's query
    pub year: Option<i32>,
    pub page: u32,
    pub language: String,
    pub include_adult: bool,
}

impl MovieQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            year: None,
            page: 1,
            language: "en-US".to_string(),
            include_adult: false,
        }
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }
}

/// Provider-agnostic movie catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogMovie {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub genre_ids: Vec<u32>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    /// Fully-qualified poster image URL
    pub poster_url: Option<String>,
}

/// Read-only genre id to name table.
///
/// Loaded once at startup and shared by reference; an empty table means the
/// catalog could not be reached when the service started.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreMap(HashMap<u32, String>);

impl GenreMap {
    pub fn new(genres: HashMap<u32, String>) -> Self {
        Self(genres)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves genre ids in order, rendering unknown ids as "Unknown"
    pub fn names(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .map(|id| {
                self.0
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN.to_string())
            })
            .collect()
    }
}

impl FromIterator<(u32, String)> for GenreMap {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Movie as returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    pub overview: String,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

impl Movie {
    pub fn from_catalog(entry: CatalogMovie, genres: &GenreMap) -> Self {
        let year = entry
            .release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .and_then(|year| year.parse().ok());

        Self {
            title: entry
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            year,
            genres: genres.names(&entry.genre_ids),
            overview: entry
                .overview
                .filter(|o| !o.trim().is_empty())
                .unwrap_or_else(|| NO_OVERVIEW.to_string()),
            rating: entry.vote_average,
            poster_url: entry.poster_url,
        }
    }

    pub fn year_label(&self) -> String {
        self.year
            .map(|y| y.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn genre_label(&self) -> String {
        self.genres.join(", ")
    }

    /// One-line description embedded into the pairing prompt
    pub fn summary(&self) -> String {
        format!(
            "Title: {}. Year: {}. Genre: {}. Overview: {}",
            self.title,
            self.year_label(),
            self.genre_label(),
            self.overview
        )
    }
}
