// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversions between [`Date`] and other calendar representations.
//!
//! - [`BrokenDownTime`]: the C `struct tm` layout (years since 1900,
//!   zero-based month, weekday counted from Sunday).
//! - [`chrono::NaiveDate`], within chrono's narrower year range.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::Weekday;
use crate::date::Date;
use crate::error::InvalidDate;

/// Offset between a calendar year and a broken-down `years_since_1900`.
const TM_YEAR_BASE: i64 = 1900;

/// Calendar fields in the C `struct tm` convention.
///
/// Exported values always describe local midnight, so the time-of-day
/// fields are zero. On import they are ignored.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BrokenDownTime {
    /// Years since 1900 (`tm_year`).
    pub years_since_1900: i32,
    /// Month, 0 = January … 11 = December (`tm_mon`).
    pub month0: i32,
    /// Day of the month, 1-based (`tm_mday`).
    pub day: i32,
    /// Hours, `0..=23` (`tm_hour`).
    pub hour: i32,
    /// Minutes, `0..=59` (`tm_min`).
    pub minute: i32,
    /// Seconds (`tm_sec`).
    pub second: i32,
    /// Day of the week, 0 = Sunday … 6 = Saturday (`tm_wday`), if known.
    pub weekday_from_sunday: Option<i32>,
}

impl BrokenDownTime {
    /// Calendar year described by `years_since_1900`.
    #[inline]
    pub const fn year(&self) -> i64 {
        self.years_since_1900 as i64 + TM_YEAR_BASE
    }
}

impl From<Date> for BrokenDownTime {
    fn from(date: Date) -> Self {
        Self {
            years_since_1900: (date.year() as i64 - TM_YEAR_BASE) as i32,
            month0: date.month().number() as i32 - 1,
            day: date.day() as i32,
            hour: 0,
            minute: 0,
            second: 0,
            weekday_from_sunday: Some(date.weekday().num_days_from_sunday() as i32),
        }
    }
}

impl TryFrom<BrokenDownTime> for Date {
    type Error = InvalidDate;

    /// Validate the calendar fields of a broken-down time.
    ///
    /// A supplied weekday in `0..=6` is compared against the one derived from
    /// the date; the date's own weekday always wins.
    fn try_from(tm: BrokenDownTime) -> Result<Self, Self::Error> {
        let date = Date::from_ymd(tm.year(), tm.month0 as i64 + 1, tm.day as i64)?;
        let supplied = tm
            .weekday_from_sunday
            .and_then(|w| Weekday::from_sunday_index(w as i64));
        if let Some(supplied) = supplied {
            if supplied != date.weekday() {
                debug!(
                    %date,
                    supplied = ?supplied,
                    derived = ?date.weekday(),
                    "broken-down weekday disagrees with date"
                );
            }
        }
        Ok(date)
    }
}

impl Date {
    /// The same day as a [`NaiveDate`], or `None` beyond chrono's range
    /// (about year 262 000).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month().number() as u32, self.day() as u32)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = InvalidDate;

    /// Fails only for dates before year 0.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Date::from_ymd(date.year() as i64, date.month() as i64, date.day() as i64)
    }
}
