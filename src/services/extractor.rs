/// Dish-field extraction
///
/// Turns the free-form text of a pairing suggestion into a `DishTriple`. The model is
/// asked to open its reply with `MAIN DISH:`, `DRINK:` and `SNACK:` lines, but replies
/// drift: labels get underscores, everything lands on one line, or only the markdown
/// description block (`**Main Dish**: ...`) is present. Extraction is a chain of
/// strategies, each returning a partial triple, merged left to right.
use regex::Regex;
use std::sync::OnceLock;

use crate::models::DishTriple;

/// Clause separators that end a dish name in the markdown description lines
pub const DEFAULT_SEPARATORS: &[&str] = &[" - ", " – ", ". ", ", a ", ", this ", ", an "];

type Strategy = fn(&str, &[String]) -> DishTriple;

/// Later strategies only run while the main dish is still missing
const STRATEGIES: &[Strategy] = &[labelled_fields, markdown_lines];

const MAIN_LABEL: &str = r"MAIN[ _]DISH";
const DRINK_LABEL: &str = "DRINK";
const SNACK_LABEL: &str = "SNACK";

/// Extracts dishes using the default separator vocabulary
pub fn extract_dishes(response: &str) -> DishTriple {
    DishExtractor::default().extract(response)
}

#[derive(Debug, Clone)]
pub struct DishExtractor {
    separators: Vec<String>,
}

impl Default for DishExtractor {
    fn default() -> Self {
        Self::with_separators(DEFAULT_SEPARATORS)
    }
}

impl DishExtractor {
    pub fn with_separators(separators: &[&str]) -> Self {
        Self {
            separators: separators.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Never fails: fields that cannot be found are left empty
    pub fn extract(&self, response: &str) -> DishTriple {
        let mut dishes = DishTriple::default();

        for strategy in STRATEGIES {
            if !dishes.main.is_empty() {
                break;
            }
            dishes = dishes.merge(strategy(response, &self.separators));
        }

        DishTriple {
            main: sanitize(&dishes.main),
            drink: sanitize(&dishes.drink),
            snack: sanitize(&dishes.snack),
        }
    }
}

struct LabelPatterns {
    main: Regex,
    drink: Regex,
    snack: Regex,
}

fn label_patterns() -> &'static LabelPatterns {
    static PATTERNS: OnceLock<LabelPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| LabelPatterns {
        main: label_regex(MAIN_LABEL, &[DRINK_LABEL, SNACK_LABEL]),
        drink: label_regex(DRINK_LABEL, &[SNACK_LABEL, MAIN_LABEL]),
        snack: label_regex(SNACK_LABEL, &[MAIN_LABEL, DRINK_LABEL]),
    })
}

/// `LABEL:` followed by the shortest text up to another label, a line break or the end
fn label_regex(label: &str, stops: &[&str]) -> Regex {
    let stops: String = stops.iter().map(|stop| format!(r"\s*{}:|", stop)).collect();
    let pattern = format!(r"(?i){}:\s*(.+?)(?:{}\n|$)", label, stops);
    Regex::new(&pattern).expect("label pattern is a valid regex")
}

fn capture(pattern: &Regex, response: &str) -> String {
    pattern
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// `MAIN DISH: X` / `DRINK: Y` / `SNACK: Z`, on separate lines or a single one
fn labelled_fields(response: &str, _separators: &[String]) -> DishTriple {
    let patterns = label_patterns();
    DishTriple {
        main: capture(&patterns.main, response),
        drink: capture(&patterns.drink, response),
        snack: capture(&patterns.snack, response),
    }
}

/// Line scan over the markdown description block, e.g. `🍽️ **Main Dish**: Tacos - so good`
fn markdown_lines(response: &str, separators: &[String]) -> DishTriple {
    let mut dishes = DishTriple::default();

    for line in response.lines().map(str::trim) {
        if !line.contains(':') {
            continue;
        }

        // A "Main Dish" line is never read as a drink or snack line.
        let slot = if line.contains("Main Dish") {
            &mut dishes.main
        } else if line.contains("Drink") && dishes.drink.is_empty() {
            &mut dishes.drink
        } else if line.contains("Snack") && dishes.snack.is_empty() {
            &mut dishes.snack
        } else {
            continue;
        };

        if slot.is_empty() {
            *slot = label_value(line, separators);
        }
    }

    dishes
}

/// Text after the last colon, cut at the first separator present
fn label_value(line: &str, separators: &[String]) -> String {
    let raw = line
        .rsplit_once(':')
        .map_or(line, |(_, value)| value)
        .trim()
        .trim_matches('*')
        .trim();

    separators
        .iter()
        .find(|sep| raw.contains(sep.as_str()))
        .and_then(|sep| raw.split(sep.as_str()).next())
        .unwrap_or(raw)
        .trim()
        .to_string()
}

/// Keeps letters, digits, underscore, whitespace, apostrophe and hyphen; collapses whitespace
fn sanitize(field: &str) -> String {
    let kept: String = field
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '\'' | '-'))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(main: &str, drink: &str, snack: &str) -> DishTriple {
        DishTriple::new(main, drink, snack)
    }

    #[test]
    fn test_label_lines() {
        let dishes = extract_dishes("MAIN DISH: A\nDRINK: B\nSNACK: C");
        assert_eq!(dishes, triple("A", "B", "C"));
    }

    #[test]
    fn test_single_line_labels() {
        let dishes = extract_dishes("MAIN DISH: A DRINK: B SNACK: C");
        assert_eq!(dishes, triple("A", "B", "C"));
    }

    #[test]
    fn test_single_line_labels_out_of_order() {
        let dishes = extract_dishes("SNACK: Nachos DRINK: Horchata MAIN DISH: Carne Asada Tacos");
        assert_eq!(dishes, triple("Carne Asada Tacos", "Horchata", "Nachos"));
    }

    #[test]
    fn test_underscore_label() {
        let underscored = extract_dishes("MAIN_DISH: Pad Thai\nDRINK: Thai Iced Tea\nSNACK: Spring Rolls");
        let spaced = extract_dishes("MAIN DISH: Pad Thai\nDRINK: Thai Iced Tea\nSNACK: Spring Rolls");
        assert_eq!(underscored, spaced);
        assert_eq!(underscored.main, "Pad Thai");
    }

    #[test]
    fn test_mixed_case_labels() {
        let dishes = extract_dishes("Main dish: Ramen\ndrink: Sake\nSnack: Edamame");
        assert_eq!(dishes, triple("Ramen", "Sake", "Edamame"));
    }

    #[test]
    fn test_full_model_reply() {
        let response = "MAIN DISH: Spaghetti Carbonara\nDRINK: Chianti\nSNACK: Garlic Bread\n\
                        🍽️ **Main Dish**: Spaghetti Carbonara - creamy and rich\n\
                        🥤 **Drink**: Chianti - a Tuscan red\n\
                        💡 **Why This Works**: It's The Godfather.";
        let dishes = extract_dishes(response);
        assert_eq!(dishes, triple("Spaghetti Carbonara", "Chianti", "Garlic Bread"));
    }

    #[test]
    fn test_markdown_fallback() {
        let dishes = extract_dishes("🍽️ **Main Dish**: Spicy Tofu Stir-fry");
        assert_eq!(dishes.main, "Spicy Tofu Stir-fry");
    }

    #[test]
    fn test_markdown_fallback_truncates_at_separator() {
        let dishes = extract_dishes("**Main Dish**: Tacos - so good");
        assert_eq!(dishes.main, "Tacos");
    }

    #[test]
    fn test_markdown_fallback_each_separator() {
        let cases = [
            ("**Main Dish**: Tacos – so good", "Tacos"),
            ("**Main Dish**: Paella. Saffron heaven", "Paella"),
            ("**Main Dish**: Risotto, a creamy classic", "Risotto"),
            ("**Main Dish**: Gumbo, this one is hot", "Gumbo"),
            ("**Main Dish**: Pho, an aromatic soup", "Pho"),
        ];
        for (input, expected) in cases {
            assert_eq!(extract_dishes(input).main, expected, "input: {}", input);
        }
    }

    #[test]
    fn test_markdown_fallback_all_fields() {
        let response = "Here you go!\n\
                        🍽️ **Main Dish**: Chicken Tikka Masala - bold and warming\n\
                        🥤 **Drink**: Mango Lassi. Sweet and cool\n\
                        🍿 **Snack**: Samosas, a crunchy bite\n\
                        🥤 **Drink**: Chai";
        let dishes = extract_dishes(response);
        assert_eq!(
            dishes,
            triple("Chicken Tikka Masala", "Mango Lassi", "Samosas")
        );
    }

    #[test]
    fn test_markdown_fallback_first_main_line_wins() {
        let response = "**Main Dish**: Lasagna\n**Main Dish**: Pizza";
        assert_eq!(extract_dishes(response).main, "Lasagna");
    }

    #[test]
    fn test_main_dish_line_not_read_as_drink() {
        let response = "**Main Dish**: Burger and a Drink - the combo";
        let dishes = extract_dishes(response);
        assert_eq!(dishes.main, "Burger and a Drink");
        assert_eq!(dishes.drink, "");
    }

    #[test]
    fn test_fallback_skipped_when_primary_found_main() {
        let response = "MAIN DISH: Sushi\n**Drink**: Green Tea";
        let dishes = extract_dishes(response);
        assert_eq!(dishes, triple("Sushi", "", ""));
    }

    #[test]
    fn test_fallback_does_not_override_primary_fields() {
        let response = "DRINK: Espresso\n**Main Dish**: Tiramisu\n**Drink**: Grappa\n**Snack**: Biscotti";
        let dishes = extract_dishes(response);
        assert_eq!(dishes, triple("Tiramisu", "Espresso", "Biscotti"));
    }

    #[test]
    fn test_unstructured_reply() {
        let dishes = extract_dishes("I think you would enjoy some popcorn tonight.");
        assert_eq!(dishes, DishTriple::default());
    }

    #[test]
    fn test_empty_reply() {
        assert_eq!(extract_dishes(""), DishTriple::default());
    }

    #[test]
    fn test_output_is_sanitized() {
        let dishes = extract_dishes("MAIN DISH: 🍝 Mac & Cheese!!  (Baked)\nDRINK: Root   Beer 🍺\nSNACK: S'mores");
        assert_eq!(dishes, triple("Mac Cheese Baked", "Root Beer", "S'mores"));

        for field in [&dishes.main, &dishes.drink, &dishes.snack] {
            assert!(field
                .chars()
                .all(|c| c.is_alphanumeric() || c == ' ' || c == '\'' || c == '-'));
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        let dishes = extract_dishes("MAIN DISH: Pierogi\r\nDRINK: Kompot\r\nSNACK: Pickles\r\n");
        assert_eq!(dishes, triple("Pierogi", "Kompot", "Pickles"));
    }

    #[test]
    fn test_custom_separators() {
        let extractor = DishExtractor::with_separators(&[" / "]);
        let dishes = extractor.extract("**Main Dish**: Fondue / cheesy - gooey");
        assert_eq!(dishes.main, "Fondue");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize("  Fish \t and\nChips  "), "Fish and Chips");
        assert_eq!(sanitize("***"), "");
    }
}
