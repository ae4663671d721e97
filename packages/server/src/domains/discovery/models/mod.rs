pub mod category;
pub mod classification;
pub mod utterance;
pub mod vocabulary;

pub use category::{Category, UnknownCategory};
pub use classification::{ClassificationResult, Tier};
pub use utterance::{normalize_phrase, tokenize, Utterance};
pub use vocabulary::{Vocabulary, VocabularyEntry, VocabularyError};
