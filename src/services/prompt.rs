use crate::models::{Cuisine, Mood, Movie};

/// Instructions sent to the language model for every pairing.
///
/// The reply must open with the three label lines the dish extractor reads first;
/// the markdown block after them is what the fallback pass reads when the model
/// ignores the label lines. Movie text is substituted in one pass, so braces in a
/// title or overview are never read as placeholders.
pub fn build_pairing_prompt(movie: &Movie, mood: Mood, cuisine: Cuisine) -> String {
    format!(
        r#"You are Hangry — a fun movie + food pairing expert! 🍕

Movie Information:
{movie_info}

User's Mood: {mood}
Cuisine Preference: {cuisine}

Based on this movie's theme, genre, and the user's preferences,
suggest the perfect food pairing for watching "{title}".

IMPORTANT: You MUST start your response with these THREE lines EXACTLY (no emojis, no extra text on these lines):

MAIN DISH: [just the dish name, nothing else]
DRINK: [just the drink name, nothing else]
SNACK: [just the snack name, nothing else]

Then on new lines describe each:

🍽️ **Main Dish**: [dish with fun description]
🥤 **Drink**: [drink with fun description]
🍿 **Snack**: [snack with fun description]
💡 **Why This Works**: [one sentence]
🎯 **Mood Setting Tip**: [one tip]

Use REAL dish names that exist in restaurants. Keep it fun, brief, and use emojis in descriptions only!"#,
        movie_info = movie.summary(),
        mood = mood.label(),
        cuisine = cuisine.label(),
        title = movie.title,
    )
}
