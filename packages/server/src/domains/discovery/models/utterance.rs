use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"[\p{L}\p{N}]+").unwrap();
}

const QUESTION_WORDS: &[&str] = &[
    "what", "whats", "where", "wheres", "which", "who", "how", "any", "anything", "can", "could",
    "should", "would", "is", "are", "do", "does",
];

/// Lowercase, drop apostrophes, and split on anything that is not a letter or digit.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace(['\'', '\u{2019}'], "");
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Canonical form of a term or phrase: its tokens joined by single spaces.
pub fn normalize_phrase(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Plural stems used for lookups only: "movies" -> "movie", "stories" -> "story".
fn singular_stems(token: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if token.len() > 4 && token.ends_with("ies") {
        stems.push(format!("{}y", &token[..token.len() - 3]));
    }
    if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        stems.push(token[..token.len() - 1].to_string());
    }
    stems
}

/// A user utterance after normalization.
#[derive(Debug, Clone)]
pub struct Utterance {
    tokens: Vec<String>,
    /// Tokens joined by single spaces, padded with a space at each end so
    /// phrase checks only hit whole words.
    padded: String,
    /// Same as `padded` with a trailing plural `s` removed from each token.
    padded_singular: String,
    lookup: HashSet<String>,
    ends_with_question_mark: bool,
}

impl Utterance {
    /// Returns `None` for empty, whitespace-only, or punctuation-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let tokens = tokenize(trimmed);
        if tokens.is_empty() {
            return None;
        }

        let mut lookup: HashSet<String> = tokens.iter().cloned().collect();
        lookup.extend(tokens.iter().flat_map(|t| singular_stems(t)));

        let singular: Vec<&str> = tokens
            .iter()
            .map(|t| {
                if t.len() > 3 && t.ends_with('s') && !t.ends_with("ss") {
                    &t[..t.len() - 1]
                } else {
                    t.as_str()
                }
            })
            .collect();

        Some(Self {
            padded: format!(" {} ", tokens.join(" ")),
            padded_singular: format!(" {} ", singular.join(" ")),
            tokens,
            lookup,
            ends_with_question_mark: trimmed.ends_with('?'),
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Normalized text without padding.
    pub fn text(&self) -> &str {
        self.padded.trim()
    }

    /// Exact single-token hit, including plural stems.
    pub fn has_token(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    /// Whole-word phrase containment. `phrase` must already be normalized.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        if phrase.is_empty() {
            return false;
        }
        let needle = format!(" {} ", phrase);
        self.padded.contains(&needle) || self.padded_singular.contains(&needle)
    }

    /// Token check for single words, phrase check for anything with a space.
    pub fn contains_term(&self, term: &str) -> bool {
        if term.contains(' ') {
            self.contains_phrase(term)
        } else {
            self.has_token(term)
        }
    }

    pub fn is_question(&self) -> bool {
        self.ends_with_question_mark
            || self
                .tokens
                .first()
                .is_some_and(|first| QUESTION_WORDS.contains(&first.as_str()))
    }
}
