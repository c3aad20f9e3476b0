use std::sync::Arc;

use crate::{
    models::GenreMap,
    services::{
        providers::{LanguageModel, MovieCatalog, RecipeCatalog},
        PairingService, RecipeResolver,
    },
};

/// Shared application state.
///
/// Everything here is read-only after startup; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub movie_catalog: Arc<dyn MovieCatalog>,
    pub language_model: Arc<dyn LanguageModel>,
    pub resolver: RecipeResolver,
    /// Loaded once at startup
    pub genres: Arc<GenreMap>,
}

impl AppState {
    pub fn new(
        movie_catalog: Arc<dyn MovieCatalog>,
        language_model: Arc<dyn LanguageModel>,
        recipe_catalog: Arc<dyn RecipeCatalog>,
        genres: GenreMap,
    ) -> Self {
        Self {
            movie_catalog,
            language_model,
            resolver: RecipeResolver::new(recipe_catalog),
            genres: Arc::new(genres),
        }
    }

    pub fn pairing_service(&self) -> PairingService {
        PairingService::new(
            self.movie_catalog.clone(),
            self.language_model.clone(),
            self.resolver.clone(),
            self.genres.clone(),
        )
    }
}
