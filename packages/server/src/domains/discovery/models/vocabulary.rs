use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error;

use super::category::Category;
use super::utterance::{normalize_phrase, Utterance};
use crate::domains::discovery::data::{BUILTIN_INTENT_SIGNALS, BUILTIN_TERMS, BUILTIN_VERSION};

lazy_static! {
    static ref BUILTIN: Arc<Vocabulary> = Arc::new(
        Vocabulary::from_parts(
            BUILTIN_VERSION,
            BUILTIN_TERMS.iter().map(|(term, category)| (*term, *category)),
            BUILTIN_INTENT_SIGNALS.iter().copied(),
        )
        .expect("built-in discovery vocabulary is valid"),
    );
}

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid vocabulary file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vocabulary term {0:?} normalizes to nothing")]
    EmptyTerm(String),

    #[error("vocabulary has no terms")]
    NoTerms,

    #[error("vocabulary has no intent signals")]
    NoIntentSignals,
}

/// A term registered for a category. `term` is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub term: String,
    pub category: Category,
}

impl VocabularyEntry {
    pub fn is_phrase(&self) -> bool {
        self.term.contains(' ')
    }
}

/// On-disk vocabulary override. Category names are checked by `Category`'s
/// deserializer, so unknown categories fail the whole load.
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    version: String,
    entries: Vec<VocabularyFileEntry>,
    intent_signals: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VocabularyFileEntry {
    term: String,
    category: Category,
}

/// Token/synonym table and intent signals for the keyword tier.
///
/// Immutable once built and shared as `Arc<Vocabulary>`.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    version: String,
    words: Vec<VocabularyEntry>,
    phrases: Vec<VocabularyEntry>,
    intent_signals: Vec<String>,
}

impl Vocabulary {
    /// Process-wide built-in vocabulary.
    pub fn builtin() -> Arc<Vocabulary> {
        BUILTIN.clone()
    }

    /// Build from ordered `(term, category)` pairs.
    ///
    /// Terms and signals are normalized. A term registered twice keeps its
    /// first category.
    pub fn from_parts<'a, T, S>(
        version: impl Into<String>,
        terms: T,
        intent_signals: S,
    ) -> Result<Self, VocabularyError>
    where
        T: IntoIterator<Item = (&'a str, Category)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let mut phrases = Vec::new();

        for (raw, category) in terms {
            let term = normalize_phrase(raw);
            if term.is_empty() {
                return Err(VocabularyError::EmptyTerm(raw.to_string()));
            }
            if !seen.insert(term.clone()) {
                continue;
            }

            let entry = VocabularyEntry { term, category };
            if entry.is_phrase() {
                phrases.push(entry);
            } else {
                words.push(entry);
            }
        }

        if words.is_empty() && phrases.is_empty() {
            return Err(VocabularyError::NoTerms);
        }

        let mut signals = Vec::new();
        for raw in intent_signals {
            let signal = normalize_phrase(raw);
            if signal.is_empty() {
                return Err(VocabularyError::EmptyTerm(raw.to_string()));
            }
            if !signals.contains(&signal) {
                signals.push(signal);
            }
        }

        if signals.is_empty() {
            return Err(VocabularyError::NoIntentSignals);
        }

        Ok(Self {
            version: version.into(),
            words,
            phrases,
            intent_signals: signals,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, VocabularyError> {
        let file: VocabularyFile = serde_json::from_str(json)?;

        Self::from_parts(
            file.version,
            file.entries.iter().map(|e| (e.term.as_str(), e.category)),
            file.intent_signals.iter().map(String::as_str),
        )
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Single-word entries in registration order.
    pub fn words(&self) -> &[VocabularyEntry] {
        &self.words
    }

    /// Multi-word entries in registration order.
    pub fn phrases(&self) -> &[VocabularyEntry] {
        &self.phrases
    }

    pub fn intent_signals(&self) -> &[String] {
        &self.intent_signals
    }

    pub fn len(&self) -> usize {
        self.words.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Categories with at least one term, in `Category::ALL` order.
    pub fn categories_covered(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.entries().any(|e| e.category == *c))
            .collect()
    }

    /// Categories the keyword tier can never produce. Only the remote tier
    /// can reach them.
    pub fn uncovered_categories(&self) -> Vec<Category> {
        let covered = self.categories_covered();
        Category::ALL
            .into_iter()
            .filter(|c| !covered.contains(c))
            .collect()
    }

    /// Phrases that can never match because one of their own words is a
    /// single-word term, which is scanned first.
    pub fn shadowed_phrases(&self) -> Vec<&VocabularyEntry> {
        self.phrases
            .iter()
            .filter(|phrase| {
                Utterance::parse(&phrase.term).is_some_and(|parsed| {
                    self.words.iter().any(|word| parsed.has_token(&word.term))
                })
            })
            .collect()
    }

    fn entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.words.iter().chain(self.phrases.iter())
    }
}
