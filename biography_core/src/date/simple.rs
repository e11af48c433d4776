//! Single calendar dates with optional month and day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Month abbreviations, also the `us` rendering of a month.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month number (1-12) for an abbreviation, matched case-insensitively.
pub fn month_number(token: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbrev| abbrev.eq_ignore_ascii_case(token))
        .map(|idx| idx as u32 + 1)
}

/// A year with optional month and day. Any component may be absent when the
/// source text could not be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl SimpleDate {
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Self {
        Self {
            year: Some(year),
            month,
            day,
        }
    }

    pub fn year(year: i32) -> Self {
        Self::new(year, None, None)
    }

    /// Parse a date without qualifier such as `12 NOV 2010`, `Apr 2019`,
    /// `1900`, `12-11-2010` or `2010-11-12`.
    ///
    /// The rightmost token is the year unless a hyphenated date starts with a
    /// year of four or more digits. Two tokens are month and year, three are
    /// day, month and year. Unreadable positions stay absent.
    pub fn parse(text: &str) -> Self {
        let mut tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() == 1 {
            tokens = text.trim().split('-').filter(|t| !t.is_empty()).collect();
            // `YYYY-MM-DD` puts the year first; years past 9999 have more digits.
            let year_first = tokens.first().is_some_and(|t| t.len() >= 4 && t.bytes().all(|b| b.is_ascii_digit()));
            if tokens.len() > 1 && year_first {
                tokens.reverse();
            }
        }
        if tokens.len() > 3 {
            tokens.drain(..tokens.len() - 3);
        }

        let mut date = SimpleDate::default();
        let mut positions = tokens.iter().rev();
        if let Some(year) = positions.next() {
            date.year = year.parse::<i32>().ok().filter(|y| *y > 0);
        }
        if let Some(month) = positions.next() {
            date.month = match month.parse::<u32>() {
                Ok(m) => Some(m).filter(|m| (1..=12).contains(m)),
                Err(_) => month_number(month),
            };
        }
        if let Some(day) = positions.next() {
            date.day = day.parse::<u32>().ok().filter(|d| (1..=31).contains(d));
        }
        date
    }

    /// Check if no component could be read.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// `YYYY[-MM[-DD]]`, sortable as a string.
    pub fn iso(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(year) = self.year {
            parts.push(format!("{:04}", year));
        }
        if let Some(month) = self.month {
            parts.push(format!("{:02}", month));
        }
        if let Some(day) = self.day {
            parts.push(format!("{:02}", day));
        }
        parts.join("-")
    }

    /// `DD-MM-YYYY` with absent components left out.
    pub fn world(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(day) = self.day {
            parts.push(format!("{:02}", day));
        }
        if let Some(month) = self.month {
            parts.push(format!("{:02}", month));
        }
        if let Some(year) = self.year {
            parts.push(format!("{:04}", year));
        }
        parts.join("-")
    }

    /// `DD Mon YYYY` with absent components left out. The month abbreviation
    /// is passed through `localize_month`.
    pub fn us(&self, localize_month: impl Fn(&str) -> String) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(day) = self.day {
            parts.push(format!("{:02}", day));
        }
        if let Some(abbrev) = self
            .month
            .and_then(|m| m.checked_sub(1))
            .and_then(|idx| MONTH_ABBREVIATIONS.get(idx as usize))
        {
            parts.push(localize_month(abbrev));
        }
        if let Some(year) = self.year {
            parts.push(format!("{:04}", year));
        }
        parts.join(" ")
    }

    /// Calendar date for interval arithmetic; a missing month or day counts as
    /// the first one. Days past the end of the month are clamped.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let year = self.year?;
        let month = self.month.unwrap_or(1);
        let mut day = self.day.unwrap_or(1);
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
            if day <= 28 {
                return None;
            }
            day -= 1;
        }
    }
}
