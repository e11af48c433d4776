//! Place names - clean-up substitutions and jurisdiction shortening.

use regex::{NoExpand, Regex};
use std::str::FromStr;

use super::FormatKeyError;
use crate::config::{PlaceConfig, Substitution};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceFormat {
    /// Only the clean-ups are applied.
    Full,
    /// Clean-ups, shortenings and jurisdiction suffix removal.
    #[default]
    Short,
}

impl FromStr for PlaceFormat {
    type Err = FormatKeyError;

    fn from_str(key: &str) -> std::result::Result<Self, Self::Err> {
        match key {
            "full" => Ok(PlaceFormat::Full),
            "short" => Ok(PlaceFormat::Short),
            other => Err(FormatKeyError::new("place", other)),
        }
    }
}

/// Compiled place rules.
#[derive(Debug, Clone, Default)]
pub struct PlaceRules {
    cleanups: Vec<(Regex, String)>,
    shortenings: Vec<(Regex, String)>,
    suffixes: Vec<String>,
}

impl PlaceRules {
    /// Rules that leave every place unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the patterns of a place configuration.
    pub fn from_config(config: &PlaceConfig) -> Result<Self> {
        let mut suffixes = config.jurisdiction_suffixes.clone();
        // Longest first, so the first match is the longest one.
        suffixes.sort_by_key(|suffix| std::cmp::Reverse(suffix.len()));
        Ok(Self {
            cleanups: compile(&config.cleanups)?,
            shortenings: compile(&config.shortenings)?,
            suffixes,
        })
    }

    pub fn format(&self, place: &str, format: PlaceFormat) -> String {
        let mut place = apply(&self.cleanups, place.trim());
        if format == PlaceFormat::Full {
            return place;
        }
        place = apply(&self.shortenings, &place);
        if let Some(suffix) = self.suffixes.iter().find(|suffix| place.ends_with(suffix.as_str())) {
            place.truncate(place.len() - suffix.len());
        }
        place
    }
}

fn compile(substitutions: &[Substitution]) -> Result<Vec<(Regex, String)>> {
    substitutions
        .iter()
        .map(|s| Ok((Regex::new(&s.pattern)?, s.replacement.clone())))
        .collect()
}

fn apply(substitutions: &[(Regex, String)], place: &str) -> String {
    substitutions
        .iter()
        .fold(place.to_string(), |place, (pattern, replacement)| {
            pattern.replace_all(&place, NoExpand(replacement)).into_owned()
        })
}
