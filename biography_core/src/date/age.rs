//! Ages and intervals between dates.

use chrono::NaiveDate;
use thiserror::Error;

use super::{Qualifier, QualifiedDate, SimpleDate};
use crate::context::RenderContext;

/// Ages are only measured from exact birth dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("birth date is not exact")]
pub struct InexactBirth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Days,
    Months,
    Years,
}

/// An elapsed span in the coarsest unit that keeps it readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub amount: i64,
    pub unit: IntervalUnit,
}

impl Interval {
    /// Band a number of days: under 60 days in days, under 24 months in
    /// months, otherwise in years. A year counts 365.25 days. Negative spans
    /// band like their magnitude.
    pub fn from_days(days: i64) -> Self {
        let magnitude = days.abs();
        let months = (magnitude as f64 * 12.0 / 365.25).floor() as i64;
        let (amount, unit) = if magnitude < 60 {
            (magnitude, IntervalUnit::Days)
        } else if months < 24 {
            (months, IntervalUnit::Months)
        } else {
            (months / 12, IntervalUnit::Years)
        };
        Self {
            amount: amount * days.signum(),
            unit,
        }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::from_days((end - start).num_days())
    }

    /// Interval between two partial dates; missing months and days count as
    /// the first.
    pub fn between_dates(start: &SimpleDate, end: &SimpleDate) -> Option<Self> {
        Some(Self::between(start.to_naive()?, end.to_naive()?))
    }

    /// The span without its direction.
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            unit: self.unit,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let singular = self.amount.abs() == 1;
        let unit = match (self.unit, singular) {
            (IntervalUnit::Days, true) => "day",
            (IntervalUnit::Days, false) => "days",
            (IntervalUnit::Months, true) => "month",
            (IntervalUnit::Months, false) => "months",
            (IntervalUnit::Years, true) => "year",
            (IntervalUnit::Years, false) => "years",
        };
        format!("{} {}", self.amount, ctx.tr(unit))
    }
}

/// Age at a possibly imprecise date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    Exact(Interval),
    About(Interval),
    Between(Interval, Interval),
    AtLeast(Interval),
    AtMost(Interval),
    Stillborn,
    Unknown,
}

impl Age {
    /// Check if the age points before the birth, i.e. the date precedes it.
    pub fn is_negative(&self) -> bool {
        match self {
            Age::Exact(age) | Age::About(age) | Age::AtLeast(age) | Age::AtMost(age) => age.is_negative(),
            Age::Between(lo, hi) => lo.is_negative() && hi.is_negative(),
            Age::Stillborn | Age::Unknown => false,
        }
    }

    /// The same age with every interval made non-negative.
    pub fn abs(&self) -> Self {
        match *self {
            Age::Exact(age) => Age::Exact(age.abs()),
            Age::About(age) => Age::About(age.abs()),
            Age::Between(lo, hi) => Age::Between(lo.abs(), hi.abs()),
            Age::AtLeast(age) => Age::AtLeast(age.abs()),
            Age::AtMost(age) => Age::AtMost(age.abs()),
            other => other,
        }
    }

    /// Check if there is a span to report.
    pub fn is_known(&self) -> bool {
        !matches!(self, Age::Stillborn | Age::Unknown)
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Age::Exact(age) => age.render(ctx),
            Age::About(age) => format!("{} {}", ctx.tr("about"), age.render(ctx)),
            Age::Between(lo, hi) => format!(
                "{} {} {} {}",
                ctx.tr("between"),
                lo.render(ctx),
                ctx.tr("and"),
                hi.render(ctx)
            ),
            Age::AtLeast(age) => format!("{} {}", ctx.tr("at least"), age.render(ctx)),
            Age::AtMost(age) => format!("{} {}", ctx.tr("at most"), age.render(ctx)),
            Age::Stillborn => ctx.tr("stillborn"),
            Age::Unknown => String::new(),
        }
    }
}

/// Age at `target` for someone born on `birth`.
///
/// The target's earliest and latest plausible dates give the lowest and the
/// highest age; an open side leaves that bound undetermined.
pub fn age_at(birth: &QualifiedDate, target: &QualifiedDate) -> Result<Age, InexactBirth> {
    if target.qualifier == Qualifier::Stillborn {
        return Ok(Age::Stillborn);
    }
    if !birth.is_exact() {
        return Err(InexactBirth);
    }
    let Some(born) = birth.dates.first() else {
        return Err(InexactBirth);
    };

    let lo = target.lo_bound().and_then(|d| Interval::between_dates(born, &d));
    let hi = target.hi_bound().and_then(|d| Interval::between_dates(born, &d));

    Ok(match (lo, hi) {
        (Some(lo), Some(hi)) if lo == hi => match target.qualifier {
            Qualifier::About => Age::About(lo),
            _ => Age::Exact(lo),
        },
        (Some(lo), Some(hi)) => Age::Between(lo, hi),
        (Some(lo), None) => Age::AtLeast(lo),
        (None, Some(hi)) => Age::AtMost(hi),
        (None, None) => Age::Unknown,
    })
}
