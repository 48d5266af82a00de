// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar rules.
//!
//! Everything here is a pure function of its arguments:
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`is_leap_year`] | Gregorian leap-year rule |
//! | [`is_valid_date`] | validity predicate for a raw `(year, month, day)` triple |
//! | [`days_in_month`] | month length, February included |
//! | [`weekday`] | Keith–Craver weekday congruence |
//! | [`Month`] / [`Weekday`] | enumerations (1 = January, 1 = Monday) |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Month
// ---------------------------------------------------------------------------

/// Month of the year, numbered 1 = January … 12 = December.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month for a 1-based number, or `None` outside `1..=12`.
    #[inline]
    pub const fn from_number(number: i64) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self::ALL[(number - 1) as usize])
        } else {
            None
        }
    }

    /// 1-based month number.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Number of days in this month of `year`.
    #[inline]
    pub const fn length(self, year: i32) -> u8 {
        match self {
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::February if is_leap_year(year as i64) => 29,
            Month::February => 28,
            _ => 31,
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = u8;

    /// Fails with the rejected number.
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number as i64).ok_or(number)
    }
}

impl From<Month> for chrono::Month {
    fn from(month: Month) -> Self {
        match month {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
            Month::July => chrono::Month::July,
            Month::August => chrono::Month::August,
            Month::September => chrono::Month::September,
            Month::October => chrono::Month::October,
            Month::November => chrono::Month::November,
            Month::December => chrono::Month::December,
        }
    }
}

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Day of the week, numbered 1 = Monday … 7 = Sunday.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// 1-based number starting at Monday.
    #[inline]
    pub const fn number_from_monday(self) -> u8 {
        self as u8
    }

    /// 0-based number starting at Sunday, the broken-down time convention.
    #[inline]
    pub const fn num_days_from_sunday(self) -> u8 {
        (self as u8) % 7
    }

    /// Weekday for a 0 = Sunday … 6 = Saturday index, or `None` outside `0..=6`.
    #[inline]
    pub const fn from_sunday_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// The following day, wrapping Sunday to Monday.
    #[inline]
    pub const fn succ(self) -> Self {
        match Self::from_sunday_index((self.num_days_from_sunday() as i64 + 1) % 7) {
            Some(next) => next,
            None => unreachable!(),
        }
    }

    /// The preceding day, wrapping Monday to Sunday.
    #[inline]
    pub const fn pred(self) -> Self {
        match Self::from_sunday_index((self.num_days_from_sunday() as i64 + 6) % 7) {
            Some(prev) => prev,
            None => unreachable!(),
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year` (365 or 366).
#[inline]
pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in `month` (1-based) of `year`, or `None` for a bad month.
pub const fn days_in_month(year: i64, month: i64) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Whether `(year, month, day)` names a date this crate can represent.
///
/// Years must be non-negative and fit an `i32`; the month is 1-based.
pub const fn is_valid_date(year: i64, month: i64, day: i64) -> bool {
    if year < 0 || year > i32::MAX as i64 {
        return false;
    }
    match days_in_month(year, month) {
        Some(len) => day >= 1 && day <= len as i64,
        None => false,
    }
}

/// Day of the week for a valid proleptic Gregorian date.
///
/// Keith–Craver congruence; January and February count against the previous
/// year for the leap terms. Euclidean division keeps year 0 correct.
pub const fn weekday(year: i64, month: i64, day: i64) -> Weekday {
    let z = if month < 3 { year - 1 } else { year };
    let shift = if month < 3 { 0 } else { 2 };
    let w = (day + (23 * month) / 9 + 4 + year + z.div_euclid(4) - z.div_euclid(100)
        + z.div_euclid(400)
        - shift)
        .rem_euclid(7);
    match Weekday::from_sunday_index(w) {
        Some(weekday) => weekday,
        None => unreachable!(),
    }
}
