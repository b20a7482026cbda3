// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The ordered phoneme symbols for one sense of a word, e.g. ["K", "AE1", "T"].
pub type PhonemeSequence = Vec<String>;

/// Datamuse prefixes the pronunciation tag with this when md=p is requested.
/// Bare phoneme strings pass through untouched.
const PRON_PREFIX: &str = "pron:";

/// One row of a word-lookup response. The service omits `tags` for words it
/// has no metadata for, so the field must stay optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl WordEntry {
    /// The phoneme sequence of this entry's first sense, if the service
    /// supplied one. Only the first tag is consulted; further senses are
    /// ignored.
    pub fn phonemes(&self) -> Option<PhonemeSequence> {
        let tag = self.tags.as_ref()?.first()?;
        let tag = tag.strip_prefix(PRON_PREFIX).unwrap_or(tag);
        Some(tag.split(' ').map(str::to_string).collect())
    }
}

/// Tunables for chain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Upper bound on the chain length, seed word included.
    pub target_length: usize,
    /// How many times to re-run a failed word search before giving up on a
    /// hop. Against a deterministic (e.g. cached) lookup, repeated attempts
    /// return the same answer and the extra tries are no-ops.
    pub max_attempts: u32,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            target_length: 5,
            max_attempts: 10,
        }
    }
}
