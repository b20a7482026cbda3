// src/core/engine.rs
use crate::core::types::ChainConfig;
use crate::lookup::WordLookup;
use log::warn;

/// Builds phonetic chains: duplicate-free word sequences where each hop is a
/// word whose transcription begins with a phoneme drawn from the previous
/// lookup's transcription.
pub struct ChainEngine<L: WordLookup> {
    lookup: L,
    config: ChainConfig,
}

impl<L: WordLookup> ChainEngine<L> {
    pub fn new(lookup: L, config: ChainConfig) -> Self {
        Self { lookup, config }
    }

    pub fn with_defaults(lookup: L) -> Self {
        Self::new(lookup, ChainConfig::default())
    }

    /// Generates a chain starting at `seed`. The result always begins with
    /// the seed and never exceeds `target_length` words; it comes back short
    /// whenever no further link can be found. Lookup failures of any kind end
    /// the chain instead of erroring, so this never fails.
    pub fn generate(&self, seed: &str) -> Vec<String> {
        let mut chain = vec![seed.to_string()];
        let mut current = seed.to_string();
        // Anchor into the current word's transcription. Carried across words
        // on purpose, never reset: each successive hop reads one position
        // deeper into whichever word is current, matching the behavior this
        // generator has always had.
        let mut index = 0usize;

        while chain.len() < self.config.target_length {
            let phonemes = match self.lookup.transcribe(&current) {
                Ok(Some(phonemes)) => phonemes,
                Ok(None) => break,
                Err(e) => {
                    warn!("transcription lookup for '{}' failed: {}", current, e);
                    break;
                }
            };

            if index + 1 >= phonemes.len() {
                break;
            }
            let next_phoneme = phonemes[index + 1].clone();
            index += 1;

            match self.find_unused_word(&next_phoneme, &chain) {
                Some(word) => {
                    chain.push(word.clone());
                    current = word;
                }
                None => break,
            }
        }

        chain
    }

    /// Runs the word search up to `max_attempts` times until it yields a word
    /// not already in the chain. Re-running only helps when the lookup is
    /// nondeterministic; empty or duplicate answers just burn an attempt. A
    /// transport error abandons the hop immediately rather than retrying.
    fn find_unused_word(&self, phoneme: &str, chain: &[String]) -> Option<String> {
        for _ in 0..self.config.max_attempts {
            match self.lookup.search_by_first_phoneme(phoneme) {
                Ok(Some(word)) if !chain.contains(&word) => return Some(word),
                Ok(_) => continue,
                Err(e) => {
                    warn!("word search for phoneme '{}' failed: {}", phoneme, e);
                    return None;
                }
            }
        }
        None
    }
}
