/// Movie → food pairing pipeline
///
/// One request runs strictly in sequence: catalog search, then for each movie a
/// language-model call, dish extraction, recipe resolution and link generation.
/// External failures degrade to empty values; only a blank query or an empty movie
/// search is reported to the caller as an error.
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{GenreMap, Movie, MoviePairing, OrderLinks, PairingRequest, PairingResponse},
    services::{
        extractor::extract_dishes,
        links::{manual_search_links, order_links},
        movies::{search_movies, MovieSearch},
        prompt::build_pairing_prompt,
        providers::{LanguageModel, MovieCatalog},
        resolver::RecipeResolver,
    },
};

#[derive(Clone)]
pub struct PairingService {
    movie_catalog: Arc<dyn MovieCatalog>,
    language_model: Arc<dyn LanguageModel>,
    resolver: RecipeResolver,
    genres: Arc<GenreMap>,
}

impl PairingService {
    pub fn new(
        movie_catalog: Arc<dyn MovieCatalog>,
        language_model: Arc<dyn LanguageModel>,
        resolver: RecipeResolver,
        genres: Arc<GenreMap>,
    ) -> Self {
        Self {
            movie_catalog,
            language_model,
            resolver,
            genres,
        }
    }

    pub async fn pair(&self, request: PairingRequest) -> AppResult<PairingResponse> {
        let query = request.query.trim().to_string();
        if query.is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let search = MovieSearch::new(query.clone())
            .with_results(request.results)
            .with_year_range(request.year_range);
        let movies = search_movies(self.movie_catalog.as_ref(), &self.genres, &search).await;

        if movies.is_empty() {
            return Err(AppError::NotFound(format!("No movies found for '{}'", query)));
        }

        let mut pairings = Vec::with_capacity(movies.len());
        for movie in movies {
            pairings.push(self.pair_movie(movie, &request, &query).await);
        }

        tracing::info!(
            query = %query,
            pairings = pairings.len(),
            recipes = pairings.iter().filter(|p| p.recipe.is_some()).count(),
            "Pairings generated"
        );

        Ok(PairingResponse { query, pairings })
    }

    async fn pair_movie(&self, movie: Movie, request: &PairingRequest, query: &str) -> MoviePairing {
        let prompt = build_pairing_prompt(&movie, request.mood, request.cuisine);

        let suggestion = match self.language_model.generate(&prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(error = %e, movie = %movie.title, "Pairing generation failed");
                None
            }
        };

        let dishes = extract_dishes(suggestion.as_deref().unwrap_or_default());

        // Without a main dish the user's search text is the best query left.
        let dish_query = if dishes.main.is_empty() {
            query.to_string()
        } else {
            dishes.main.clone()
        };

        let recipe = self.resolver.resolve(&dish_query).await;
        let manual_search = recipe.is_none().then(|| manual_search_links(&dish_query));

        let normalizer = self.resolver.normalizer();
        let optional_links = |dish: &str| {
            (!dish.is_empty()).then(|| order_links(dish, normalizer))
        };
        let links = OrderLinks {
            main: order_links(&dish_query, normalizer),
            drink: optional_links(&dishes.drink),
            snack: optional_links(&dishes.snack),
        };

        MoviePairing {
            movie,
            suggestion,
            dishes,
            dish_query,
            recipe,
            manual_search,
            order_links: links,
        }
    }
}
