use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discovery category.
///
/// This enum is the closed set every tier is validated against. Keyword
/// tables and LLM prompts are derived from it, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Movies,
    Tv,
    Books,
    Music,
    Podcasts,
    Games,
    Products,
    Places,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Movies,
        Category::Tv,
        Category::Books,
        Category::Music,
        Category::Podcasts,
        Category::Games,
        Category::Products,
        Category::Places,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Movies => "movies",
            Category::Tv => "tv",
            Category::Books => "books",
            Category::Music => "music",
            Category::Podcasts => "podcasts",
            Category::Games => "games",
            Category::Products => "products",
            Category::Places => "places",
        }
    }

    /// Short description used when prompting the remote classifier.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Food => "restaurants, dishes, cafes, recipes, drinks",
            Category::Movies => "films to watch",
            Category::Tv => "tv series and shows",
            Category::Books => "books, novels, audiobooks, comics",
            Category::Music => "songs, albums, artists, playlists",
            Category::Podcasts => "podcasts and episodes",
            Category::Games => "video games and board games",
            Category::Products => "things to buy: gadgets, gear, gifts",
            Category::Places => "places to visit, travel, activities, venues",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown discovery category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or(UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(" Movies ".parse::<Category>(), Ok(Category::Movies));
        assert_eq!("FOOD".parse::<Category>(), Ok(Category::Food));
    }

    #[test]
    fn parse_rejects_values_outside_the_set() {
        assert!("sports".parse::<Category>().is_err());
        assert!("none".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serde_names_match_as_str() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
