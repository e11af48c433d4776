//! Qualified Date Algebra - genealogical date expressions.
//!
//! A date expression is an optional qualifier followed by one date, a
//! `BET .. AND ..` range, or the literal `STILLBORN`:
//!
//! - `12 NOV 2010`, `Apr 2019`, `1900`, `05-12-2012`
//! - `ABT 1900`, `BEF 3 MAR 1901`, `AFT 1875`
//! - `BET 1940 AND 1945`
//!
//! Parsing is best-effort: unreadable positions stay absent and never fail.

mod age;
mod qualified;
mod simple;

pub use age::*;
pub use qualified::*;
pub use simple::*;

use std::str::FromStr;

use crate::format::FormatKeyError;

/// Output renderings of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `YYYY-MM-DD`, sortable.
    Iso,
    /// `DD-MM-YYYY`.
    World,
    /// `DD Mon YYYY`.
    #[default]
    Us,
    /// The year, or a year range.
    Year,
    /// Age at this date, measured from the context's birth date.
    Age,
    /// The expression as written in the file.
    Original,
    /// GedcomX date format, with qualifiers.
    Gedcomx,
    /// GedcomX date format without qualifiers.
    WtGedcomx,
}

impl FromStr for DateFormat {
    type Err = FormatKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "iso" => DateFormat::Iso,
            "world" => DateFormat::World,
            "us" => DateFormat::Us,
            "year" => DateFormat::Year,
            "age" => DateFormat::Age,
            "original" => DateFormat::Original,
            "gedcomx" => DateFormat::Gedcomx,
            "wtgedcomx" => DateFormat::WtGedcomx,
            other => return Err(FormatKeyError::new("date", other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keys() {
        assert_eq!("iso".parse::<DateFormat>().unwrap(), DateFormat::Iso);
        assert_eq!("wtgedcomx".parse::<DateFormat>().unwrap(), DateFormat::WtGedcomx);
        assert_eq!(DateFormat::default(), DateFormat::Us);
        let err = "julian".parse::<DateFormat>().unwrap_err();
        assert_eq!(err.field, "date");
        assert_eq!(err.key, "julian");
    }
}
