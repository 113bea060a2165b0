//! Date windows for balance queries
//!
//! A `DateRange` has optional inclusive bounds. An unbounded side means "no
//! limit", and a fully unbounded range covers the whole history.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Portuguese month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Name of a month (1-12)
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Last calendar day of a month
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)?
    };
    let last = first_of_next.pred_opt()?;
    (last.month() == month).then_some(last)
}

/// Inclusive, optionally open-ended date window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// The whole history
    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Everything up to and including `end`
    pub fn until(end: NaiveDate) -> Self {
        Self::new(None, Some(end))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a record dated `date` falls in this window
    ///
    /// Undated records only match an unbounded window, the same way a
    /// `NULL` date never satisfies a `BETWEEN` filter.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "all time"),
            (Some(start), None) => write!(f, "since {}", start),
            (None, Some(end)) => write!(f, "until {}", end),
            (Some(start), Some(end)) => write!(f, "{} to {}", start, end),
        }
    }
}
