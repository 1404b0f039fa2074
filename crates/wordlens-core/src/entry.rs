//! Dictionary entry shape as returned by `dictionaryapi.dev`.
//!
//! Field names follow the API's camelCase JSON. Only `word` and `meanings`
//! are required; everything else defaults when absent or `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// One dictionary result for a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    /// Top-level phonetic text. Not used for rendering, which always derives
    /// the phonetic from `phonetics`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub source_urls: Vec<String>,
}

/// A pronunciation, optionally textual and/or audio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Definitions grouped under one part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl DictionaryEntry {
    /// Text of the first phonetic with a non-empty `text`, or `""`.
    #[must_use]
    pub fn first_phonetic_text(&self) -> &str {
        self.phonetics
            .iter()
            .find_map(|p| non_empty(p.text.as_deref()))
            .unwrap_or_default()
    }

    /// URL of the first phonetic with a non-empty `audio`.
    #[must_use]
    pub fn first_audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|p| non_empty(p.audio.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
