//! Cheap gate deciding whether an utterance is worth a remote classification call.

use crate::domains::discovery::activities::keyword_match::{find_intent_signal, find_term};
use crate::domains::discovery::models::{Utterance, Vocabulary};

/// Verbs for consuming something a recommendation could be about.
const CONSUMPTION_VERBS: &[&str] = &[
    "watch", "read", "listen", "eat", "drink", "play", "buy", "visit", "try", "see", "stream",
    "cook", "order", "go", "gift", "wear",
];

/// Whether the utterance plausibly asks for a recommendation.
///
/// True when it carries an intent signal, or when it is phrased as a question
/// and mentions either a consumption verb or a vocabulary term.
pub fn is_likely_discovery_query(vocabulary: &Vocabulary, utterance: &Utterance) -> bool {
    if find_intent_signal(vocabulary, utterance).is_some() {
        return true;
    }

    if !utterance.is_question() {
        return false;
    }

    CONSUMPTION_VERBS.iter().any(|verb| utterance.has_token(verb))
        || find_term(vocabulary, utterance).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likely(text: &str) -> bool {
        let vocab = Vocabulary::builtin();
        is_likely_discovery_query(&vocab, &Utterance::parse(text).unwrap())
    }

    #[test]
    fn intent_signal_is_enough() {
        assert!(likely("what should I watch tonight"));
        assert!(likely("I'm in the mood for something cozy"));
    }

    #[test]
    fn questions_about_consumption_are_likely() {
        assert!(likely("anything fun to play this weekend?"));
        assert!(likely("where is the nearest museum?"));
    }

    #[test]
    fn statements_and_small_talk_are_not() {
        assert!(!likely("pizza is great"));
        assert!(!likely("I watched a movie yesterday"));
        assert!(!likely("how are you today?"));
        assert!(!likely("thanks!"));
    }
}
