use serde::{Deserialize, Serialize};

use super::{Movie, RecipeRecord, YearRange};

/// Dish, drink and snack extracted from a language-model suggestion.
/// An empty field means the suggestion did not name one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishTriple {
    pub main: String,
    pub drink: String,
    pub snack: String,
}

impl DishTriple {
    pub fn new(main: impl Into<String>, drink: impl Into<String>, snack: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            drink: drink.into(),
            snack: snack.into(),
        }
    }

    /// Keeps every field already set and fills the empty ones from `other`
    pub fn merge(self, other: DishTriple) -> Self {
        fn pick(first: String, second: String) -> String {
            if first.is_empty() {
                second
            } else {
                first
            }
        }

        Self {
            main: pick(self.main, other.main),
            drink: pick(self.drink, other.drink),
            snack: pick(self.snack, other.snack),
        }
    }
}

/// Mood the user is in, steering the pairing suggestion
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Romantic,
    Adventurous,
    CozyComfort,
    FunEnergetic,
    ChillRelaxed,
    Spooky,
    Nostalgic,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Romantic => "Romantic",
            Mood::Adventurous => "Adventurous",
            Mood::CozyComfort => "Cozy & Comfort",
            Mood::FunEnergetic => "Fun & Energetic",
            Mood::ChillRelaxed => "Chill & Relaxed",
            Mood::Spooky => "Spooky",
            Mood::Nostalgic => "Nostalgic",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    #[default]
    NoPreference,
    Italian,
    Japanese,
    Mexican,
    Indian,
    French,
    American,
    Korean,
    Thai,
    Mediterranean,
}

impl Cuisine {
    pub fn label(&self) -> &'static str {
        match self {
            Cuisine::NoPreference => "No Preference",
            Cuisine::Italian => "Italian",
            Cuisine::Japanese => "Japanese",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::French => "French",
            Cuisine::American => "American",
            Cuisine::Korean => "Korean",
            Cuisine::Thai => "Thai",
            Cuisine::Mediterranean => "Mediterranean",
        }
    }
}

/// Delivery platform deep link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLink {
    pub platform: String,
    pub url: String,
}

/// Search links offered when no recipe could be resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManualSearchLinks {
    pub youtube: String,
    pub google: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLinks {
    pub main: Vec<OrderLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink: Option<Vec<OrderLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snack: Option<Vec<OrderLink>>,
}

/// Request for the full movie → food pairing pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct PairingRequest {
    pub query: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub cuisine: Cuisine,
    #[serde(default = "default_results")]
    pub results: usize,
    /// Only keep movies released within this range when set
    #[serde(default)]
    pub year_range: Option<YearRange>,
}

fn default_results() -> usize {
    3
}

/// Pairing generated for one movie match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePairing {
    pub movie: Movie,
    /// Raw language-model suggestion; `None` when the model call failed
    pub suggestion: Option<String>,
    pub dishes: DishTriple,
    /// Name the recipe lookup and order links were built from
    pub dish_query: String,
    pub recipe: Option<RecipeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_search: Option<ManualSearchLinks>,
    pub order_links: OrderLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairingResponse {
    pub query: String,
    pub pairings: Vec<MoviePairing>,
}
