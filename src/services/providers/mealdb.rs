/// TheMealDB recipe provider
///
/// Free API, no key. `/search.php?s=<name>` matches meal names by substring and returns
/// `{"meals": null}` when nothing matches; only the first meal is used.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::AppResult,
    models::RecipeRecord,
    services::providers::{ensure_success, RecipeCatalog},
};

const PROVIDER: &str = "themealdb";

#[derive(Debug, Deserialize)]
struct MealSearchResponse {
    #[serde(default)]
    meals: Option<Vec<Map<String, Value>>>,
}

impl MealSearchResponse {
    fn first_recipe(&self) -> Option<RecipeRecord> {
        self.meals
            .as_ref()
            .and_then(|meals| meals.first())
            .map(RecipeRecord::from_meal)
    }
}

#[derive(Clone)]
pub struct MealDbProvider {
    http_client: HttpClient,
    api_url: String,
}

impl MealDbProvider {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl RecipeCatalog for MealDbProvider {
    async fn search_by_name(&self, name: &str) -> AppResult<Option<RecipeRecord>> {
        let url = format!("{}/search.php", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("s", name)])
            .send()
            .await?;

        let search: MealSearchResponse = ensure_success("TheMealDB", response).await?.json().await?;
        let recipe = search.first_recipe();

        tracing::debug!(
            query = %name,
            found = recipe.is_some(),
            provider = PROVIDER,
            "Recipe search completed"
        );

        Ok(recipe)
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_meals() {
        let response: MealSearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert_eq!(response.first_recipe(), None);
    }

    #[test]
    fn test_missing_meals_field() {
        let response: MealSearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_recipe(), None);
    }

    #[test]
    fn test_takes_first_meal() {
        let response: MealSearchResponse = serde_json::from_str(
            r#"{"meals": [
                {"strMeal": "Beef Wellington", "strArea": "British"},
                {"strMeal": "Beef Wellington Bites"}
            ]}"#,
        )
        .unwrap();

        let recipe = response.first_recipe().unwrap();
        assert_eq!(recipe.name.as_deref(), Some("Beef Wellington"));
        assert_eq!(recipe.cuisine.as_deref(), Some("British"));
    }
}
