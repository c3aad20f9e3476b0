/// Recipe resolution
///
/// Language-model dish names rarely match a catalog entry exactly ("Candlelit Seared
/// Salmon with Lemon Butter"). The resolver normalizes the name, then walks a fixed
/// sequence of simpler queries until the catalog returns a hit:
///
/// 1. the full normalized name
/// 2. the name with leading words dropped one at a time ("Seared Salmon" → "Salmon")
/// 3. each word longer than three characters on its own, longest first
///
/// Catalog failures count as misses; running out of candidates is a normal outcome.
use std::sync::Arc;

use crate::{models::RecipeRecord, services::providers::RecipeCatalog};

/// Marketing words the model likes to decorate dishes with
pub const FLAIR_WORDS: &[&str] = &[
    "seduction",
    "romantic",
    "passionate",
    "cozy",
    "spooky",
    "dreamy",
    "magical",
    "enchanted",
    "ultimate",
    "perfect",
    "date night",
    "love",
    "special",
    "delicious",
    "homemade",
    "gourmet",
    "classic",
    "authentic",
    "traditional",
    "famous",
    "epic",
    "heavenly",
    "divine",
    "sinful",
    "decadent",
    "lusty",
    "fiery",
    "sizzling",
    "steamy",
    "midnight",
    "moonlit",
    "candlelit",
    "sultry",
    "sensual",
    "forbidden",
    "irresistible",
    "tempting",
    "indulgent",
    "luxurious",
];

/// Words this short are never searched on their own
const MIN_WORD_QUERY_LEN: usize = 4;

/// Cleans dish names into catalog queries
#[derive(Debug, Clone)]
pub struct DishNormalizer {
    /// Lowercased token sequences, longest first
    flair: Vec<Vec<String>>,
}

impl Default for DishNormalizer {
    fn default() -> Self {
        Self::with_flair_words(FLAIR_WORDS)
    }
}

impl DishNormalizer {
    pub fn with_flair_words(words: &[&str]) -> Self {
        let mut flair: Vec<Vec<String>> = words
            .iter()
            .map(|entry| entry.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>())
            .filter(|tokens| !tokens.is_empty())
            .collect();
        flair.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { flair }
    }

    /// Strips punctuation and emoji, drops flair words as whole tokens, collapses whitespace.
    ///
    /// Normalizing an already-normalized name returns it unchanged.
    pub fn normalize(&self, dish_name: &str) -> String {
        let stripped: String = dish_name
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '\'' | '-'))
            .collect();

        let mut words: Vec<&str> = stripped.split_whitespace().collect();
        loop {
            let before = words.len();
            words = self.strip_flair(&words);
            if words.len() == before {
                break;
            }
        }

        words.join(" ")
    }

    fn strip_flair<'a>(&self, words: &[&'a str]) -> Vec<&'a str> {
        let mut kept = Vec::with_capacity(words.len());
        let mut i = 0;

        'words: while i < words.len() {
            for phrase in &self.flair {
                let end = i + phrase.len();
                if end <= words.len()
                    && words[i..end]
                        .iter()
                        .zip(phrase)
                        .all(|(word, token)| word.to_lowercase() == *token)
                {
                    i = end;
                    continue 'words;
                }
            }
            kept.push(words[i]);
            i += 1;
        }

        kept
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Full,
    Trimming { start: usize },
    PerWord { index: usize },
    Done,
}

/// Lazily yields the catalog queries to try for one normalized dish name
#[derive(Debug, Clone)]
pub struct RecipeCandidates {
    words: Vec<String>,
    /// Words eligible for single-word queries, longest first
    long_words: Vec<String>,
    stage: Stage,
}

impl RecipeCandidates {
    pub fn new(normalized: &str) -> Self {
        let words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();

        let mut long_words: Vec<String> = words
            .iter()
            .filter(|w| w.chars().count() >= MIN_WORD_QUERY_LEN)
            .cloned()
            .collect();
        long_words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let stage = if words.is_empty() {
            Stage::Done
        } else {
            Stage::Full
        };

        Self {
            words,
            long_words,
            stage,
        }
    }
}

impl Iterator for RecipeCandidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let candidate = match self.stage {
                Stage::Full => {
                    self.stage = Stage::Trimming { start: 1 };
                    self.words.join(" ")
                }
                Stage::Trimming { start } if start < self.words.len() => {
                    self.stage = Stage::Trimming { start: start + 1 };
                    self.words[start..].join(" ")
                }
                Stage::Trimming { .. } => {
                    self.stage = Stage::PerWord { index: 0 };
                    continue;
                }
                Stage::PerWord { index } => match self.long_words.get(index) {
                    Some(word) => {
                        self.stage = Stage::PerWord { index: index + 1 };
                        word.clone()
                    }
                    None => {
                        self.stage = Stage::Done;
                        continue;
                    }
                },
                Stage::Done => return None,
            };

            // A single-word suffix is tried again in the per-word stage.
            return Some(candidate);
        }
    }
}

/// Resolves dish names to recipes through the fallback query sequence
#[derive(Clone)]
pub struct RecipeResolver {
    catalog: Arc<dyn RecipeCatalog>,
    normalizer: DishNormalizer,
}

impl RecipeResolver {
    pub fn new(catalog: Arc<dyn RecipeCatalog>) -> Self {
        Self::with_normalizer(catalog, DishNormalizer::default())
    }

    pub fn with_normalizer(catalog: Arc<dyn RecipeCatalog>, normalizer: DishNormalizer) -> Self {
        Self {
            catalog,
            normalizer,
        }
    }

    pub fn normalizer(&self) -> &DishNormalizer {
        &self.normalizer
    }

    pub fn catalog_name(&self) -> &'static str {
        self.catalog.name()
    }

    pub fn candidates(&self, dish_name: &str) -> RecipeCandidates {
        RecipeCandidates::new(&self.normalizer.normalize(dish_name))
    }

    /// Returns the first catalog hit, or `None` once every candidate has missed
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, dish_name: &str) -> Option<RecipeRecord> {
        for (attempt, query) in self.candidates(dish_name).enumerate() {
            match self.catalog.search_by_name(&query).await {
                Ok(Some(recipe)) => {
                    tracing::info!(
                        query = %query,
                        attempt = attempt + 1,
                        recipe = ?recipe.name,
                        "Recipe resolved"
                    );
                    return Some(recipe);
                }
                Ok(None) => {
                    tracing::debug!(query = %query, "No recipe match");
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        query = %query,
                        "Recipe lookup failed, treating as no match"
                    );
                }
            }
        }

        tracing::info!("No recipe found after all fallback queries");
        None
    }
}
