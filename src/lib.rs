// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Date Module
//!
//! A small, `Copy` calendar-date value on the proleptic Gregorian calendar.
//!
//! # Core types
//!
//! - [`Date`] — validated `(year, month, day)` with a derived [`Weekday`].
//! - [`Month`] — 1 = January … 12 = December.
//! - [`Weekday`] — 1 = Monday … 7 = Sunday.
//! - [`BrokenDownTime`] — the C `struct tm` field layout.
//! - [`Clock`] — wall-clock capability ([`SystemClock`], [`FixedClock`]).
//! - [`InvalidDate`] — the rejected triple, plus the setter that rejected it.
//!
//! # Operations
//!
//! | Operation | API |
//! |-----------|-----|
//! | leap-year test | [`is_leap_year`] |
//! | validity test | [`is_valid_date`] |
//! | weekday | [`Date::weekday`], [`weekday`] |
//! | one-day steps | [`Date::increment`], [`Date::post_increment`], [`Date::decrement`], [`Date::post_decrement`] |
//! | N-day shifts | `date + n`, `date - n`, `+=`, `-=`, [`Date::checked_add_days`] |
//! | day difference | [`date_difference`], `a - b` (signed [`qtty::Days`]) |
//! | Julian Date | [`Date::julian_day`], [`Date::from_julian_day`] |
//! | rendering | `Display` / `FromStr` as `YYYY-MM-DD` |
//!
//! # Example
//!
//! ```
//! use lightdate::{date_difference, Date, Month, Weekday};
//!
//! let mut date = Date::new(2017, Month::November, 30)?;
//! date.increment();
//! assert_eq!(date.to_string(), "2017-12-01");
//! assert_eq!(date.weekday(), Weekday::Friday);
//!
//! let later = date + 31;
//! assert_eq!(later.to_string(), "2018-01-01");
//! assert_eq!(date_difference(&date, &later), 31);
//! # Ok::<(), lightdate::InvalidDate>(())
//! ```

mod broken_down;
pub mod calendar;
pub mod clock;
mod date;
mod error;
mod julian_day;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use broken_down::BrokenDownTime;
pub use calendar::{days_in_month, days_in_year, is_leap_year, is_valid_date, weekday, Month, Weekday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{date_difference, Date};
pub use error::{DateField, InvalidDate, ParseDateError};
