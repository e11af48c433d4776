//! Configuration - locale selection rules, place clean-up and phrase overrides.
//!
//! Every field has a default, so a configuration file only needs to name what
//! it changes:
//!
//! ```toml
//! default_locale = "en"
//!
//! [[locale_rules]]
//! suffix = "Netherlands"
//! locale = "nl"
//!
//! [place]
//! jurisdiction_suffixes = [", Netherlands"]
//!
//! [phrases.nl]
//! born = "geb."
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::locale::{Catalog, Locale};

/// Selects a locale when a place ends with `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRule {
    pub suffix: String,
    pub locale: Locale,
}

impl LocaleRule {
    pub fn new(suffix: impl Into<String>, locale: Locale) -> Self {
        Self {
            suffix: suffix.into(),
            locale,
        }
    }
}

/// A regular-expression substitution applied to place names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
}

impl Substitution {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Place rendering rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceConfig {
    /// Always applied. Undoes known mangling by upstream place authorities.
    pub cleanups: Vec<Substitution>,

    /// Applied unless the `full` format is requested.
    pub shortenings: Vec<Substitution>,

    /// Trailing jurisdictions dropped unless the `full` format is requested.
    /// The longest matching suffix is removed.
    pub jurisdiction_suffixes: Vec<String>,
}

impl Default for PlaceConfig {
    fn default() -> Self {
        Self {
            cleanups: vec![
                Substitution::new(" Op ", " op "),
                Substitution::new("^S-", "'s-"),
            ],
            shortenings: vec![
                Substitution::new("Multnomah, Oregon", "Oregon"),
                Substitution::new("Fairfield, Connecticut", "Connecticut"),
                Substitution::new(", Bergen op Zoom", ""),
                Substitution::new(", Tholen", ""),
            ],
            jurisdiction_suffixes: vec![
                ", Netherlands".to_string(),
                ", Belgium".to_string(),
                ", Germany".to_string(),
                ", United Kingdom".to_string(),
                ", UK".to_string(),
                ", United States".to_string(),
                ", USA".to_string(),
            ],
        }
    }
}

/// Top-level configuration for composing biographies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiographyConfig {
    /// Locale used when no rule matches.
    pub default_locale: Locale,

    /// Checked in order; the first rule whose suffix ends a birth, baptism or
    /// death place wins.
    pub locale_rules: Vec<LocaleRule>,

    pub place: PlaceConfig,

    /// Phrase overrides keyed by locale code, then by English phrase.
    pub phrases: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for BiographyConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::English,
            locale_rules: vec![
                LocaleRule::new("Netherlands", Locale::Dutch),
                LocaleRule::new("USA", Locale::English),
                LocaleRule::new("UK", Locale::English),
                LocaleRule::new("Germany", Locale::German),
                LocaleRule::new("Belgium", Locale::Dutch),
            ],
            place: PlaceConfig::default(),
            phrases: BTreeMap::new(),
        }
    }
}

impl BiographyConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Pick the locale for a set of place names.
    pub fn locale_for<'p>(&self, places: impl IntoIterator<Item = &'p str> + Clone) -> Locale {
        self.locale_rules
            .iter()
            .find(|rule| places.clone().into_iter().any(|place| place.ends_with(&rule.suffix)))
            .map(|rule| rule.locale)
            .unwrap_or(self.default_locale)
    }

    /// The built-in catalog with the configured overrides merged in.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::builtin();
        for (code, phrases) in &self.phrases {
            let locale = Locale::from_code(code)?;
            catalog = catalog.with_phrases(locale, phrases.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            debug!(locale = %locale, phrases = catalog.phrase_count(locale), "merged phrase overrides");
        }
        Ok(catalog)
    }
}
