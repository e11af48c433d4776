//! Personal names encoded as `Given Names /Surname/`.

use record_graph::Record;
use std::str::FromStr;

use super::FormatKeyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameFormat {
    /// All given names.
    Given,
    /// The first given name.
    GivenFirst,
    /// Given names followed by the quoted also-known-as name.
    GivenAka,
    /// Given names after the first.
    Middle,
    Surname,
    /// Given names, quoted also-known-as name and surname.
    Full,
    #[default]
    GivenSurname,
    /// `Surname, Given`, used for indexes.
    SurnameGiven,
    /// The also-known-as name alone.
    Aka,
    /// The name a person goes by: the also-known-as name, otherwise the first
    /// given name.
    First,
}

impl FromStr for NameFormat {
    type Err = FormatKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "given" => NameFormat::Given,
            "given1st" => NameFormat::GivenFirst,
            "givenaka" => NameFormat::GivenAka,
            "middle" => NameFormat::Middle,
            "surname" | "last" => NameFormat::Surname,
            "full" => NameFormat::Full,
            "givenlast" => NameFormat::GivenSurname,
            "surname,given" | "last,given" => NameFormat::SurnameGiven,
            "aka" => NameFormat::Aka,
            "first" => NameFormat::First,
            other => return Err(FormatKeyError::new("name", other)),
        })
    }
}

/// A name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonName {
    pub given: String,
    pub surname: String,
    pub aka: Option<String>,
}

impl PersonName {
    /// Split an encoded name. The surname sits between the first pair of `/`.
    pub fn parse(encoded: &str) -> Self {
        let mut parts = encoded.split('/');
        let given = parts.next().unwrap_or_default().trim().to_string();
        let surname = parts.next().unwrap_or_default().trim().to_string();
        Self {
            given,
            surname,
            aka: None,
        }
    }

    /// Build a name from the records filed under `NAME`; a second record holds
    /// the also-known-as name.
    pub fn from_records(names: &[&Record]) -> Option<Self> {
        let primary = names.first()?.value.as_deref()?;
        let name = Self::parse(primary);
        let aka = names
            .get(1)
            .and_then(|r| r.value.as_deref())
            .map(str::trim)
            .filter(|aka| !aka.is_empty());
        Some(match aka {
            Some(aka) => name.with_aka(aka),
            None => name,
        })
    }

    pub fn with_aka(mut self, aka: impl Into<String>) -> Self {
        self.aka = Some(aka.into());
        self
    }

    fn given_first(&self) -> &str {
        self.given.split_whitespace().next().unwrap_or_default()
    }

    fn middle(&self) -> String {
        self.given.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
    }

    fn quoted_aka(&self) -> Option<String> {
        self.aka.as_ref().map(|aka| format!("\"{}\"", aka))
    }

    pub fn render(&self, format: NameFormat) -> String {
        match format {
            NameFormat::Given => self.given.clone(),
            NameFormat::GivenFirst => self.given_first().to_string(),
            NameFormat::GivenAka => join_present([Some(self.given.clone()), self.quoted_aka()]),
            NameFormat::Middle => self.middle(),
            NameFormat::Surname => self.surname.clone(),
            NameFormat::Full => join_present([
                Some(self.given.clone()),
                self.quoted_aka(),
                Some(self.surname.clone()),
            ]),
            NameFormat::GivenSurname => {
                join_present([Some(self.given.clone()), Some(self.surname.clone())])
            }
            NameFormat::SurnameGiven => match (self.surname.is_empty(), self.given.is_empty()) {
                (false, false) => format!("{}, {}", self.surname, self.given),
                (false, true) => self.surname.clone(),
                _ => self.given.clone(),
            },
            NameFormat::Aka => self.aka.clone().unwrap_or_default(),
            NameFormat::First => self
                .aka
                .clone()
                .unwrap_or_else(|| self.given_first().to_string()),
        }
    }
}

fn join_present<const N: usize>(parts: [Option<String>; N]) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
