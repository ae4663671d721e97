//! Keyword tier: zero-network term lookup gated on an intent signal.

use crate::domains::discovery::models::{Category, Utterance, Vocabulary, VocabularyEntry};

/// Result of scanning an utterance against the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordOutcome {
    /// A term and an intent signal were both present.
    Matched {
        category: Category,
        term: String,
        signal: String,
    },
    /// A category term was mentioned without asking for anything.
    TermWithoutIntent { category: Category, term: String },
    NoTerm,
}

impl KeywordOutcome {
    pub fn category(&self) -> Option<Category> {
        match self {
            KeywordOutcome::Matched { category, .. } => Some(*category),
            _ => None,
        }
    }
}

/// First vocabulary term present in the utterance.
///
/// Single words are scanned before phrases. Within each group the entry
/// registered first wins.
pub fn find_term<'v>(vocabulary: &'v Vocabulary, utterance: &Utterance) -> Option<&'v VocabularyEntry> {
    vocabulary
        .words()
        .iter()
        .find(|entry| utterance.has_token(&entry.term))
        .or_else(|| {
            vocabulary
                .phrases()
                .iter()
                .find(|entry| utterance.contains_phrase(&entry.term))
        })
}

/// First intent signal present in the utterance.
pub fn find_intent_signal<'v>(vocabulary: &'v Vocabulary, utterance: &Utterance) -> Option<&'v str> {
    vocabulary
        .intent_signals()
        .iter()
        .find(|signal| utterance.contains_term(signal))
        .map(String::as_str)
}

pub fn match_keywords(vocabulary: &Vocabulary, utterance: &Utterance) -> KeywordOutcome {
    let Some(entry) = find_term(vocabulary, utterance) else {
        return KeywordOutcome::NoTerm;
    };

    match find_intent_signal(vocabulary, utterance) {
        Some(signal) => KeywordOutcome::Matched {
            category: entry.category,
            term: entry.term.clone(),
            signal: signal.to_string(),
        },
        None => KeywordOutcome::TermWithoutIntent {
            category: entry.category,
            term: entry.term.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(text: &str) -> KeywordOutcome {
        let vocab = Vocabulary::builtin();
        match_keywords(&vocab, &Utterance::parse(text).unwrap())
    }

    #[test]
    fn term_plus_intent_matches() {
        assert_eq!(
            outcome("can you recommend a good pizza place"),
            KeywordOutcome::Matched {
                category: Category::Food,
                term: "pizza".into(),
                signal: "recommend".into(),
            }
        );
    }

    #[test]
    fn bare_noun_does_not_match() {
        assert_eq!(
            outcome("pizza is great"),
            KeywordOutcome::TermWithoutIntent {
                category: Category::Food,
                term: "pizza".into(),
            }
        );
    }

    #[test]
    fn no_vocabulary_term() {
        assert_eq!(outcome("what should I watch tonight"), KeywordOutcome::NoTerm);
        assert_eq!(outcome("recommend something fun"), KeywordOutcome::NoTerm);
    }

    #[test]
    fn plural_terms_and_inflected_signals_match() {
        assert_eq!(
            outcome("Any recommendations for sci-fi novels?").category(),
            Some(Category::Books)
        );
        assert_eq!(outcome("suggestions for new podcasts").category(), Some(Category::Podcasts));
    }

    #[test]
    fn phrases_match_when_no_single_word_hits() {
        assert_eq!(
            outcome("any good rom-com for date night?").category(),
            Some(Category::Movies)
        );
        assert_eq!(
            outcome("suggest some things to do in Lisbon").category(),
            Some(Category::Places)
        );
    }

    #[test]
    fn table_order_breaks_ties() {
        let vocab = Vocabulary::from_parts(
            "t",
            [("spot", Category::Places), ("ramen", Category::Food)],
            ["recommend"],
        )
        .unwrap();
        let utterance = Utterance::parse("recommend a ramen spot").unwrap();

        assert_eq!(match_keywords(&vocab, &utterance).category(), Some(Category::Places));
    }
}
