use crate::{
    models::{ManualSearchLinks, OrderLink},
    services::resolver::DishNormalizer,
};

/// Delivery platforms and the URL prefix the encoded dish name is appended to
const DELIVERY_PLATFORMS: &[(&str, &str)] = &[
    ("Uber Eats", "https://www.ubereats.com/search?q="),
    ("Lieferando", "https://www.lieferando.de/en/delivery/food/"),
    ("Just Eat", "https://www.just-eat.co.uk/search?q="),
];

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";
const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Delivery deep links for a dish, searched by its normalized name
pub fn order_links(dish_name: &str, normalizer: &DishNormalizer) -> Vec<OrderLink> {
    let normalized = normalizer.normalize(dish_name);
    let encoded = urlencoding::encode(&normalized);

    DELIVERY_PLATFORMS
        .iter()
        .map(|(platform, prefix)| OrderLink {
            platform: platform.to_string(),
            url: format!("{}{}", prefix, encoded),
        })
        .collect()
}

/// Video and web searches for a recipe, built from the name as given
pub fn manual_search_links(dish_name: &str) -> ManualSearchLinks {
    let query = format!("{} recipe", dish_name);
    let encoded = urlencoding::encode(&query);

    ManualSearchLinks {
        youtube: format!("{}{}", YOUTUBE_SEARCH_URL, encoded),
        google: format!("{}{}", GOOGLE_SEARCH_URL, encoded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_links_use_normalized_name() {
        let links = order_links("Sizzling Pad Thai 🍜", &DishNormalizer::default());

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].platform, "Uber Eats");
        assert_eq!(links[0].url, "https://www.ubereats.com/search?q=Pad%20Thai");
        assert_eq!(
            links[1].url,
            "https://www.lieferando.de/en/delivery/food/Pad%20Thai"
        );
        assert_eq!(links[2].url, "https://www.just-eat.co.uk/search?q=Pad%20Thai");
    }

    #[test]
    fn test_order_links_encode_apostrophes() {
        let links = order_links("Shepherd's Pie", &DishNormalizer::default());
        assert_eq!(
            links[0].url,
            "https://www.ubereats.com/search?q=Shepherd%27s%20Pie"
        );
    }

    #[test]
    fn test_manual_search_links_keep_raw_name() {
        let links = manual_search_links("Romantic Risotto");
        assert_eq!(
            links.youtube,
            "https://www.youtube.com/results?search_query=Romantic%20Risotto%20recipe"
        );
        assert_eq!(
            links.google,
            "https://www.google.com/search?q=Romantic%20Risotto%20recipe"
        );
    }
}
