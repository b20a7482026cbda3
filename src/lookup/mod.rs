// src/lookup/mod.rs
pub mod datamuse;

use crate::core::types::PhonemeSequence;
use thiserror::Error;

/// Transport-level failure while talking to the lookup service. "The service
/// answered but found nothing" is not an error; that case is `Ok(None)` on the
/// trait methods below.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The word-lookup capability the chain engine consumes. Implemented over
/// HTTP by [`datamuse::DatamuseClient`]; tests inject in-memory fakes.
pub trait WordLookup {
    /// Phonetic transcription of the first sense of `word`, on its exact
    /// spelling. `Ok(None)` when the service has no transcription for it.
    fn transcribe(&self, word: &str) -> Result<Option<PhonemeSequence>, LookupError>;

    /// Some word whose transcription *begins* with `phoneme`, or `Ok(None)`
    /// if no such word can be found.
    fn search_by_first_phoneme(&self, phoneme: &str) -> Result<Option<String>, LookupError>;
}
