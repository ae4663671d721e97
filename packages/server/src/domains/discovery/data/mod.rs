//! Built-in discovery vocabulary.
//!
//! Order matters: when an utterance mentions terms from several categories,
//! the entry listed first wins. Food is listed before places so "a good pizza
//! place" resolves to food.
//!
//! Single words are scanned before phrases, so a phrase is only useful when
//! none of its own words is a term. Words that double as everyday verbs or
//! qualifiers ("show", "series") stay out of the table.
//!
//! Bump `BUILTIN_VERSION` whenever these tables change.

use crate::domains::discovery::models::Category;

pub const BUILTIN_VERSION: &str = "2025.2";

pub const BUILTIN_TERMS: &[(&str, Category)] = &[
    // Food
    ("food", Category::Food),
    ("restaurant", Category::Food),
    ("pizza", Category::Food),
    ("sushi", Category::Food),
    ("ramen", Category::Food),
    ("taco", Category::Food),
    ("burger", Category::Food),
    ("brunch", Category::Food),
    ("breakfast", Category::Food),
    ("lunch", Category::Food),
    ("dinner", Category::Food),
    ("cafe", Category::Food),
    ("coffee", Category::Food),
    ("bakery", Category::Food),
    ("dessert", Category::Food),
    ("recipe", Category::Food),
    ("dish", Category::Food),
    ("cuisine", Category::Food),
    ("wine", Category::Food),
    ("cocktail", Category::Food),
    ("bar", Category::Food),
    ("eat", Category::Food),
    ("takeout", Category::Food),
    // Movies
    ("movie", Category::Movies),
    ("film", Category::Movies),
    ("cinema", Category::Movies),
    ("documentary", Category::Movies),
    ("rom com", Category::Movies),
    ("horror flick", Category::Movies),
    // TV
    ("tv", Category::Tv),
    ("sitcom", Category::Tv),
    ("anime", Category::Tv),
    ("miniseries", Category::Tv),
    ("docuseries", Category::Tv),
    ("binge watch", Category::Tv),
    // Books
    ("book", Category::Books),
    ("novel", Category::Books),
    ("author", Category::Books),
    ("audiobook", Category::Books),
    ("memoir", Category::Books),
    ("comic", Category::Books),
    ("manga", Category::Books),
    ("poetry", Category::Books),
    ("sci fi", Category::Books),
    // Music
    ("music", Category::Music),
    ("song", Category::Music),
    ("album", Category::Music),
    ("band", Category::Music),
    ("artist", Category::Music),
    ("playlist", Category::Music),
    ("singer", Category::Music),
    ("concert", Category::Music),
    ("vinyl", Category::Music),
    ("hip hop", Category::Music),
    // Podcasts
    ("podcast", Category::Podcasts),
    ("episode", Category::Podcasts),
    // Games
    ("game", Category::Games),
    ("videogame", Category::Games),
    ("rpg", Category::Games),
    ("boardgame", Category::Games),
    // Products
    ("product", Category::Products),
    ("gift", Category::Products),
    ("gadget", Category::Products),
    ("headphones", Category::Products),
    ("laptop", Category::Products),
    ("phone", Category::Products),
    ("camera", Category::Products),
    ("shoes", Category::Products),
    ("skincare", Category::Products),
    ("gear", Category::Products),
    // Places
    ("place", Category::Places),
    ("spot", Category::Places),
    ("museum", Category::Places),
    ("park", Category::Places),
    ("hike", Category::Places),
    ("trail", Category::Places),
    ("beach", Category::Places),
    ("hotel", Category::Places),
    ("destination", Category::Places),
    ("travel", Category::Places),
    ("trip", Category::Places),
    ("vacation", Category::Places),
    ("neighborhood", Category::Places),
    ("things to do", Category::Places),
    ("weekend getaway", Category::Places),
];

/// Phrases showing the user wants suggestions. Single words also match their
/// plural ("recommendations" hits "recommendation").
pub const BUILTIN_INTENT_SIGNALS: &[&str] = &[
    "recommend",
    "recommendation",
    "recommended",
    "recommending",
    "rec",
    "suggest",
    "suggestion",
    "suggested",
    "suggesting",
    "looking for",
    "look for",
    "searching for",
    "in the mood for",
    "what should i",
    "where should i",
    "where can i",
    "where to",
    "any good",
    "know any",
    "know of any",
    "know a good",
    "whats a good",
    "what is a good",
    "whats the best",
    "what is the best",
    "what are the best",
    "what are some good",
    "ideas for",
    "tips for",
    "help me find",
    "help me pick",
    "help me choose",
    "i want to try",
    "i need a new",
    "worth watching",
    "worth reading",
    "worth trying",
    "must see",
    "must read",
    "must try",
];
