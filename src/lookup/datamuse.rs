// src/lookup/datamuse.rs
use crate::core::types::{PhonemeSequence, WordEntry};
use crate::lookup::{LookupError, WordLookup};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.datamuse.com";

/// Connection settings for the Datamuse word API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    /// Request timeout in seconds. A timed-out call surfaces as a transport
    /// error and the caller degrades it to "not found".
    pub timeout_secs: u64,
    /// Result cap for the wildcard spelling search.
    pub max_results: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            max_results: 100,
        }
    }
}

/// Blocking HTTP client for the Datamuse `/words` endpoint.
pub struct DatamuseClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

/// Relation filters the API exposes on `/words`, named after the lookups the
/// front end offered as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Relation {
    /// Words with a similar meaning (`ml`).
    MeansLike,
    /// Words that sound similar (`sl`).
    SoundsLike,
    /// Words spelled similarly (`sp`).
    SpelledLike,
    /// Synonyms (`rel_syn`).
    Synonym,
    /// Antonyms (`rel_ant`).
    Antonym,
    /// Perfect rhymes (`rel_rhy`).
    Rhyme,
}

impl Relation {
    /// The query-parameter name the API expects for this relation.
    pub fn as_param(&self) -> &'static str {
        match self {
            Relation::MeansLike => "ml",
            Relation::SoundsLike => "sl",
            Relation::SpelledLike => "sp",
            Relation::Synonym => "rel_syn",
            Relation::Antonym => "rel_ant",
            Relation::Rhyme => "rel_rhy",
        }
    }
}

impl DatamuseClient {
    pub fn new(config: ClientConfig) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn with_defaults() -> Result<Self, LookupError> {
        Self::new(ClientConfig::default())
    }

    /// Issues one GET against `/words` and decodes the row list.
    fn get_words(&self, params: &[(&str, &str)]) -> Result<Vec<WordEntry>, LookupError> {
        let url = format!("{}/words", self.config.base_url);
        let response = self.client.get(&url).query(params).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        let body = response.text()?;
        let entries: Vec<WordEntry> = serde_json::from_str(&body)?;
        debug!("GET /words {:?} -> {} entries", params, entries.len());
        Ok(entries)
    }

    /// Words related to `word` under the given relation, in service order.
    pub fn related(&self, word: &str, relation: Relation) -> Result<Vec<String>, LookupError> {
        let entries = self.get_words(&[(relation.as_param(), word)])?;
        Ok(entries.into_iter().map(|entry| entry.word).collect())
    }
}

impl WordLookup for DatamuseClient {
    fn transcribe(&self, word: &str) -> Result<Option<PhonemeSequence>, LookupError> {
        let entries = self.get_words(&[("sp", word), ("md", "p")])?;
        Ok(entries.first().and_then(WordEntry::phonemes))
    }

    fn search_by_first_phoneme(&self, phoneme: &str) -> Result<Option<String>, LookupError> {
        let pattern = format!("{}*", phoneme);
        let max = self.config.max_results.to_string();
        let entries = self.get_words(&[("sp", pattern.as_str()), ("md", "p"), ("max", &max)])?;
        Ok(first_phonetic_match(&entries, phoneme))
    }
}

/// Scans wildcard-search candidates in response order and returns the first
/// whose transcription truly starts with `phoneme`. The wildcard matches on
/// spelling, so a candidate's first phoneme can differ from the pattern
/// prefix; those false positives must be skipped.
fn first_phonetic_match(entries: &[WordEntry], phoneme: &str) -> Option<String> {
    entries.iter().find_map(|entry| {
        let phonemes = entry.phonemes()?;
        if phonemes.first().map(String::as_str) == Some(phoneme) {
            Some(entry.word.clone())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, tag: Option<&str>) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            tags: tag.map(|t| vec![t.to_string()]),
        }
    }

    #[test]
    fn decodes_rows_with_and_without_tags() {
        let body = r#"[
            {"word": "cat", "tags": ["pron:K AE1 T"]},
            {"word": "catamaran"}
        ]"#;
        let entries: Vec<WordEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].phonemes(),
            Some(vec!["K".to_string(), "AE1".to_string(), "T".to_string()])
        );
        assert_eq!(entries[1].phonemes(), None);
    }

    #[test]
    fn decodes_empty_response() {
        let entries: Vec<WordEntry> = serde_json::from_str("[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn phonemes_without_pron_prefix_still_split() {
        let e = entry("cat", Some("K AE1 T"));
        assert_eq!(
            e.phonemes(),
            Some(vec!["K".to_string(), "AE1".to_string(), "T".to_string()])
        );
    }

    #[test]
    fn match_skips_spelling_false_positives() {
        // "aisle" spells with an 'a' but opens with the AY1 phoneme, so a
        // search for "AE1" must pass over it.
        let entries = vec![
            entry("aisle", Some("pron:AY1 L")),
            entry("apple", Some("pron:AE1 P AH0 L")),
        ];
        assert_eq!(
            first_phonetic_match(&entries, "AE1"),
            Some("apple".to_string())
        );
    }

    #[test]
    fn match_skips_entries_without_tags() {
        let entries = vec![entry("ample", None), entry("apple", Some("pron:AE1 P AH0 L"))];
        assert_eq!(
            first_phonetic_match(&entries, "AE1"),
            Some("apple".to_string())
        );
    }

    #[test]
    fn match_returns_none_when_nothing_qualifies() {
        let entries = vec![entry("aisle", Some("pron:AY1 L")), entry("ample", None)];
        assert_eq!(first_phonetic_match(&entries, "AE1"), None);
        assert_eq!(first_phonetic_match(&[], "AE1"), None);
    }

    #[test]
    fn relation_params_match_the_api() {
        assert_eq!(Relation::MeansLike.as_param(), "ml");
        assert_eq!(Relation::SoundsLike.as_param(), "sl");
        assert_eq!(Relation::SpelledLike.as_param(), "sp");
        assert_eq!(Relation::Synonym.as_param(), "rel_syn");
        assert_eq!(Relation::Antonym.as_param(), "rel_ant");
        assert_eq!(Relation::Rhyme.as_param(), "rel_rhy");
    }
}
