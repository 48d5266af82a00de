// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for date construction, mutation and parsing.

use std::fmt;

/// Individual component of a date, used to tell which setter rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateField::Year => "year",
            DateField::Month => "month",
            DateField::Day => "day",
        })
    }
}

/// A `(year, month, day)` triple rejected by the Gregorian validity rule.
///
/// The triple is kept exactly as requested (month and day as plain numbers,
/// month 1-based), so callers can report what was asked for even when the
/// value could never have been a [`Month`](crate::Month).
///
/// `field` is `None` when a whole date was being built, and names the
/// component when a single setter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid {} {}: {year}-{month}-{day}", origin(.field), verb(.field))]
pub struct InvalidDate {
    /// Requested year.
    pub year: i64,
    /// Requested month (1 = January).
    pub month: i64,
    /// Requested day of the month.
    pub day: i64,
    /// The setter that was rejected, if any.
    pub field: Option<DateField>,
}

fn origin(field: &Option<DateField>) -> String {
    match field {
        Some(field) => field.to_string(),
        None => "date".to_owned(),
    }
}

fn verb(field: &Option<DateField>) -> &'static str {
    match field {
        Some(_) => "set",
        None => "constructed",
    }
}

impl InvalidDate {
    pub(crate) fn constructed(year: i64, month: i64, day: i64) -> Self {
        Self {
            year,
            month,
            day,
            field: None,
        }
    }

    pub(crate) fn set(field: DateField, year: i64, month: i64, day: i64) -> Self {
        Self {
            year,
            month,
            day,
            field: Some(field),
        }
    }
}

/// Error returned by [`Date::from_str`](crate::Date).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    /// The input is not shaped like `YYYY-MM-DD`.
    #[error("malformed date `{input}` (expected YYYY-MM-DD)")]
    Malformed {
        /// The rejected input.
        input: String,
    },

    /// The input is well formed but names a date that does not exist.
    #[error(transparent)]
    Invalid(#[from] InvalidDate),
}
