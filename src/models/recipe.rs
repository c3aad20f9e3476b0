use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// TheMealDB numbers ingredient/measure pairs from 1 to 20
const INGREDIENT_SLOTS: usize = 20;

/// A recipe resolved from the recipe catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipeRecord {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    /// "quantity item" strings in catalog order
    pub ingredients: Vec<String>,
    pub source_url: Option<String>,
}

impl RecipeRecord {
    /// Builds a record from a single TheMealDB meal object
    pub fn from_meal(meal: &Map<String, Value>) -> Self {
        let ingredients = (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = text_field(meal, &format!("strIngredient{}", slot))?;
                let measure = text_field(meal, &format!("strMeasure{}", slot)).unwrap_or_default();
                Some(format!("{} {}", measure, ingredient).trim().to_string())
            })
            .collect();

        Self {
            name: text_field(meal, "strMeal"),
            category: text_field(meal, "strCategory"),
            cuisine: text_field(meal, "strArea"),
            instructions: text_field(meal, "strInstructions"),
            image_url: text_field(meal, "strMealThumb"),
            video_url: text_field(meal, "strYoutube"),
            ingredients,
            source_url: text_field(meal, "strSource"),
        }
    }
}

/// Non-blank string field, trimmed
fn text_field(meal: &Map<String, Value>, key: &str) -> Option<String> {
    meal.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
