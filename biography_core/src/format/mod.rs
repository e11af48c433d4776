//! Field Formatter - renders resolved field values by semantic type.
//!
//! The final tag of a selector decides the kind of field; the `:format`
//! suffix picks one of the renderings the kind supports. Format keys parse
//! into enums, so an unknown key is detected and reported instead of being
//! silently swallowed.

mod name;
mod place;
mod sex;

pub use name::*;
pub use place::*;
pub use sex::*;

use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// A format key that the field kind does not support.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} format key: {key}")]
pub struct FormatKeyError {
    pub field: &'static str,
    pub key: String,
}

impl FormatKeyError {
    pub fn new(field: &'static str, key: impl Into<String>) -> Self {
        Self {
            field,
            key: key.into(),
        }
    }
}

/// Parse an optional format key. Unknown keys are logged and replaced by the
/// default rendering.
pub fn parse_format<F>(key: Option<&str>) -> F
where
    F: FromStr<Err = FormatKeyError> + Default,
{
    let Some(key) = key else {
        return F::default();
    };
    key.parse().unwrap_or_else(|err: FormatKeyError| {
        warn!(field = err.field, key = %err.key, "unknown format key, using default rendering");
        F::default()
    })
}

/// Tags of events rendered as `<date> in <place>`.
pub const EVENT_TAGS: [&str; 10] = [
    "BIRT", "BAPM", "BAPT", "CHR", "DEAT", "BURI", "CREM", "MARR", "DIV", "ANUL",
];

/// Semantic type of a field, derived from its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Sex,
    Place,
    Date,
    Event,
    Text,
}

impl FieldKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "NAME" => FieldKind::Name,
            "SEX" => FieldKind::Sex,
            "PLAC" => FieldKind::Place,
            "DATE" => FieldKind::Date,
            tag if EVENT_TAGS.contains(&tag) => FieldKind::Event,
            _ => FieldKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_from_tag() {
        assert_eq!(FieldKind::from_tag("NAME"), FieldKind::Name);
        assert_eq!(FieldKind::from_tag("SEX"), FieldKind::Sex);
        assert_eq!(FieldKind::from_tag("PLAC"), FieldKind::Place);
        assert_eq!(FieldKind::from_tag("DATE"), FieldKind::Date);
        assert_eq!(FieldKind::from_tag("BIRT"), FieldKind::Event);
        assert_eq!(FieldKind::from_tag("ANUL"), FieldKind::Event);
        assert_eq!(FieldKind::from_tag("OCCU"), FieldKind::Text);
    }

    #[test]
    fn test_parse_format_falls_back() {
        let format: PlaceFormat = parse_format(Some("full"));
        assert_eq!(format, PlaceFormat::Full);
        let format: PlaceFormat = parse_format(Some("tiny"));
        assert_eq!(format, PlaceFormat::default());
        let format: NameFormat = parse_format(None);
        assert_eq!(format, NameFormat::GivenSurname);
    }
}
