pub mod extractor;
pub mod links;
pub mod movies;
pub mod pairing;
pub mod prompt;
pub mod providers;
pub mod resolver;

pub use pairing::PairingService;
pub use resolver::{DishNormalizer, RecipeResolver};
