//! Display-ready projection of a dictionary entry.

use serde::{Deserialize, Serialize};

use crate::entry::DictionaryEntry;
use crate::errors::CoreError;

const fn default_max_definitions() -> usize {
    3
}

const fn default_max_related() -> usize {
    5
}

/// How much of each meaning is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLimits {
    /// Definitions shown per meaning.
    #[serde(default = "default_max_definitions")]
    pub max_definitions: usize,
    /// Synonyms shown per meaning.
    #[serde(default = "default_max_related")]
    pub max_synonyms: usize,
    /// Antonyms shown per meaning.
    #[serde(default = "default_max_related")]
    pub max_antonyms: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_definitions: default_max_definitions(),
            max_synonyms: default_max_related(),
            max_antonyms: default_max_related(),
        }
    }
}

impl DisplayLimits {
    /// Reject limits that would render meanings with no definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLimit`] when `max_definitions` is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_definitions == 0 {
            return Err(CoreError::InvalidLimit {
                field: "max_definitions".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// The first entry of a lookup, reduced to what the widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    pub word: String,
    /// Empty when no phonetic carries text.
    pub phonetic: String,
    pub audio_url: Option<String>,
    pub meanings: Vec<MeaningView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl EntryView {
    /// Project `entry` through `limits`, keeping the API's ordering.
    #[must_use]
    pub fn from_entry(entry: &DictionaryEntry, limits: &DisplayLimits) -> Self {
        let meanings = entry
            .meanings
            .iter()
            .map(|m| MeaningView {
                part_of_speech: m.part_of_speech.clone(),
                definitions: m
                    .definitions
                    .iter()
                    .take(limits.max_definitions)
                    .map(|d| d.definition.clone())
                    .collect(),
                synonyms: m.synonyms.iter().take(limits.max_synonyms).cloned().collect(),
                antonyms: m.antonyms.iter().take(limits.max_antonyms).cloned().collect(),
            })
            .collect();

        Self {
            word: entry.word.clone(),
            phonetic: entry.first_phonetic_text().to_string(),
            audio_url: entry.first_audio_url().map(str::to_string),
            meanings,
        }
    }
}
