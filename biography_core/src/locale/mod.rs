//! Localization - locale identifiers and phrase catalogs.
//!
//! English phrases are the catalog keys. A catalog maps each key to the
//! phrase of another locale; a phrase without an entry is returned unchanged.

mod phrases;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{BiographyError, Result};

/// Locales a biography can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "de")]
    German,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::English, Locale::Dutch, Locale::German];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Dutch => "nl",
            Locale::German => "de",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| BiographyError::Config(format!("unknown locale code: {code}")))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Translates an English phrase into a locale.
pub trait Localizer {
    fn localize(&self, locale: Locale, phrase: &str) -> String;
}

/// Phrase tables per locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// Create an empty catalog; every phrase passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in Dutch and German tables.
    pub fn builtin() -> Self {
        Self::new()
            .with_phrases(Locale::Dutch, phrases::DUTCH.iter().copied())
            .with_phrases(Locale::German, phrases::GERMAN.iter().copied())
    }

    /// Add or replace phrases for a locale.
    pub fn with_phrases<K, V>(mut self, locale: Locale, phrases: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.tables.entry(locale).or_default();
        for (key, value) in phrases {
            table.insert(key.into(), value.into());
        }
        self
    }

    /// Number of phrases known for a locale.
    pub fn phrase_count(&self, locale: Locale) -> usize {
        self.tables.get(&locale).map(HashMap::len).unwrap_or(0)
    }
}

impl Localizer for Catalog {
    fn localize(&self, locale: Locale, phrase: &str) -> String {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(phrase))
            .cloned()
            .unwrap_or_else(|| phrase.to_string())
    }
}
