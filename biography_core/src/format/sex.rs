//! Sex codes and the gendered words derived from them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::FormatKeyError;

/// Sex as recorded by a single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// `M` and `F` are recognized; anything else is unknown.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "M" => Sex::Male,
            "F" => Sex::Female,
            _ => Sex::Unknown,
        }
    }
}

/// A family of gendered words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SexFormat {
    #[default]
    Gender,
    Child,
    Sibling,
    Pronoun,
    PronounCapitalized,
    Object,
    Reflexive,
    Gedcomx,
}

impl SexFormat {
    /// Words for male, female and unknown, as English catalog keys.
    pub fn words(&self) -> [&'static str; 3] {
        match self {
            SexFormat::Gender => ["male", "female", "unknown"],
            SexFormat::Child => ["son", "daughter", "child"],
            SexFormat::Sibling => ["brother", "sister", "sibling"],
            SexFormat::Pronoun => ["he", "she", "they"],
            SexFormat::PronounCapitalized => ["He", "She", "They"],
            SexFormat::Object => ["him", "her", "them"],
            SexFormat::Reflexive => ["himself", "herself", "themself"],
            SexFormat::Gedcomx => ["Male", "Female", "Unknown"],
        }
    }

    pub fn word(&self, sex: Sex) -> &'static str {
        let [male, female, unknown] = self.words();
        match sex {
            Sex::Male => male,
            Sex::Female => female,
            Sex::Unknown => unknown,
        }
    }
}

impl FromStr for SexFormat {
    type Err = FormatKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "gender" => SexFormat::Gender,
            "child" => SexFormat::Child,
            "sibling" => SexFormat::Sibling,
            "pronoun" => SexFormat::Pronoun,
            "Pronoun" => SexFormat::PronounCapitalized,
            "object" => SexFormat::Object,
            "reflexive" => SexFormat::Reflexive,
            "gedcomx" => SexFormat::Gedcomx,
            other => return Err(FormatKeyError::new("sex", other)),
        })
    }
}
