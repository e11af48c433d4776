//! Dates with a precision qualifier, including two-sided ranges.

use serde::{Deserialize, Serialize};

use super::{age_at, DateFormat, SimpleDate};
use crate::context::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    #[default]
    Exact,
    About,
    Before,
    After,
    Between,
    Stillborn,
}

impl Qualifier {
    /// Keyword introducing the qualifier in a date expression.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Qualifier::Exact => None,
            Qualifier::About => Some("ABT"),
            Qualifier::Before => Some("BEF"),
            Qualifier::After => Some("AFT"),
            Qualifier::Between => Some("BET"),
            Qualifier::Stillborn => Some("STILLBORN"),
        }
    }

    /// English catalog key of the qualifier word.
    pub fn phrase(&self) -> Option<&'static str> {
        match self {
            Qualifier::Exact => None,
            Qualifier::About => Some("about"),
            Qualifier::Before => Some("before"),
            Qualifier::After => Some("after"),
            Qualifier::Between => Some("between"),
            Qualifier::Stillborn => Some("stillborn"),
        }
    }
}

/// A parsed date expression.
///
/// `Between` holds two dates in written order, `Stillborn` holds none, every
/// other qualifier holds one. The order of a range is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QualifiedDate {
    pub qualifier: Qualifier,
    pub dates: Vec<SimpleDate>,
    pub original: String,
}

impl QualifiedDate {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let (qualifier, dates) = if trimmed == "STILLBORN" {
            (Qualifier::Stillborn, Vec::new())
        } else if let Some(range) = strip_keyword(trimmed, "BET") {
            parse_range(range)
        } else {
            [Qualifier::About, Qualifier::Before, Qualifier::After]
                .into_iter()
                .find_map(|q| {
                    let rest = strip_keyword(trimmed, q.keyword()?)?;
                    Some((q, vec![SimpleDate::parse(rest)]))
                })
                .unwrap_or_else(|| (Qualifier::Exact, vec![SimpleDate::parse(trimmed)]))
        };
        Self {
            qualifier,
            dates,
            original: text.to_string(),
        }
    }

    /// An exact date with a readable year.
    pub fn is_exact(&self) -> bool {
        self.qualifier == Qualifier::Exact && self.dates.first().is_some_and(|d| d.year.is_some())
    }

    /// Check if the expression carries neither a calendar value nor the
    /// stillborn marker.
    pub fn is_empty(&self) -> bool {
        self.qualifier != Qualifier::Stillborn && self.dates.iter().all(|d| d.year.is_none())
    }

    /// The earliest date the event could have happened; absent when open.
    pub fn lo_bound(&self) -> Option<SimpleDate> {
        match self.qualifier {
            Qualifier::Before | Qualifier::Stillborn => None,
            _ => self.dates.first().copied(),
        }
        .filter(|d| d.year.is_some())
    }

    /// The latest date the event could have happened; absent when open.
    pub fn hi_bound(&self) -> Option<SimpleDate> {
        match self.qualifier {
            Qualifier::After | Qualifier::Stillborn => None,
            _ => self.dates.last().copied(),
        }
        .filter(|d| d.year.is_some())
    }

    pub fn render(&self, ctx: &RenderContext<'_>, format: DateFormat) -> String {
        if format == DateFormat::Original {
            return self.original.clone();
        }
        if self.qualifier == Qualifier::Stillborn {
            return match format {
                DateFormat::Iso | DateFormat::Gedcomx | DateFormat::WtGedcomx => String::new(),
                _ => ctx.tr("stillborn"),
            };
        }
        if self.is_empty() {
            return String::new();
        }

        match format {
            DateFormat::Iso => self
                .dates
                .iter()
                .map(SimpleDate::iso)
                .collect::<Vec<_>>()
                .join("/"),
            DateFormat::World => self.spoken(ctx, |d| d.world()),
            DateFormat::Us => self.spoken(ctx, |d| d.us(|month| ctx.tr(month))),
            DateFormat::Year => self.year_text(ctx),
            DateFormat::Age => self.age_text(ctx),
            DateFormat::Gedcomx => self.gedcomx(),
            DateFormat::WtGedcomx => self
                .dates
                .first()
                .map(|d| format!("+{}", d.iso()))
                .unwrap_or_default(),
            DateFormat::Original => self.original.clone(),
        }
    }

    /// The year alone, a `lo-hi` year range, or the qualified year.
    pub fn year_text(&self, ctx: &RenderContext<'_>) -> String {
        if self.qualifier == Qualifier::Stillborn {
            return ctx.tr("stillborn");
        }
        let lo = self.dates.first().and_then(|d| d.year);
        let hi = self.dates.last().and_then(|d| d.year);
        let (lo, hi) = match (lo, hi) {
            (Some(lo), Some(hi)) => (lo, hi),
            (Some(year), None) | (None, Some(year)) => (year, year),
            (None, None) => return String::new(),
        };
        if lo != hi {
            return format!("{}-{}", lo, hi);
        }
        match self.qualifier {
            Qualifier::About | Qualifier::Before | Qualifier::After => {
                let word = self.qualifier.phrase().map(|p| ctx.tr(p)).unwrap_or_default();
                format!("{} {}", word, lo)
            }
            _ => lo.to_string(),
        }
    }

    /// Age at this date, or the date itself with a note when the birth date
    /// is not exact.
    fn age_text(&self, ctx: &RenderContext<'_>) -> String {
        let Some(birth) = &ctx.birth else {
            return String::new();
        };
        match age_at(birth, self) {
            Ok(age) => age.render(ctx),
            Err(err) => format!("{} ({})", self.render(ctx, DateFormat::Us), ctx.tr(&err.to_string())),
        }
    }

    fn spoken(&self, ctx: &RenderContext<'_>, render: impl Fn(&SimpleDate) -> String) -> String {
        match (self.qualifier, self.dates.as_slice()) {
            (Qualifier::Between, [lo, hi]) => format!(
                "{} {} {} {}",
                ctx.tr("between"),
                render(lo),
                ctx.tr("and"),
                render(hi)
            ),
            (qualifier, [date, ..]) => match qualifier.phrase() {
                Some(phrase) => format!("{} {}", ctx.tr(phrase), render(date)),
                None => render(date),
            },
            _ => String::new(),
        }
    }

    fn gedcomx(&self) -> String {
        match (self.qualifier, self.dates.as_slice()) {
            (Qualifier::Between, [lo, hi]) => format!("+{}/+{}", lo.iso(), hi.iso()),
            (Qualifier::About, [date, ..]) => format!("A+{}", date.iso()),
            (Qualifier::Before, [date, ..]) => format!("/+{}", date.iso()),
            (Qualifier::After, [date, ..]) => format!("+{}/", date.iso()),
            (_, [date, ..]) => format!("+{}", date.iso()),
            _ => String::new(),
        }
    }
}

/// Strip a leading keyword that is followed by whitespace.
fn strip_keyword<'t>(text: &'t str, keyword: &str) -> Option<&'t str> {
    let rest = text.strip_prefix(keyword)?;
    rest.starts_with(char::is_whitespace).then(|| rest.trim_start())
}

/// `d1 AND d2`; without the `AND` the range degrades to a single exact date.
fn parse_range(range: &str) -> (Qualifier, Vec<SimpleDate>) {
    let tokens: Vec<&str> = range.split_whitespace().collect();
    match tokens.iter().position(|t| *t == "AND") {
        Some(idx) => (
            Qualifier::Between,
            vec![
                SimpleDate::parse(&tokens[..idx].join(" ")),
                SimpleDate::parse(&tokens[idx + 1..].join(" ")),
            ],
        ),
        None => (Qualifier::Exact, vec![SimpleDate::parse(range)]),
    }
}
