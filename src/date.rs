// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`Date`] value type.
//!
//! A `Date` stores a validated `(year, month, day)` triple and nothing else.
//! The weekday is derived on access, so no mutation can leave it stale.
//! Single-day steps roll over month and year boundaries directly; every other
//! shift goes through the Julian Day Number, which also backs day differences
//! and the [`qtty::Days`] bridge.
//!
//! Representable dates run from `0000-01-01` to `2147483647-12-31`. Checked
//! operations return `None` past those edges; operator forms panic.

use chrono::{DateTime, Local, TimeZone, Utc};
use qtty::Days;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{self, Month, Weekday};
use crate::clock::{Clock, SystemClock};
use crate::error::{DateField, InvalidDate, ParseDateError};
use crate::julian_day::{self, MAX_JDN, MIN_JDN, MJD_EPOCH};

// ═══════════════════════════════════════════════════════════════════════════
// Date
// ═══════════════════════════════════════════════════════════════════════════

/// A day on the proleptic Gregorian calendar.
///
/// Equality and ordering compare `(year, month, day)` lexicographically.
///
/// # Examples
///
/// ```
/// use lightdate::{Date, Month, Weekday};
///
/// let date = Date::new(2017, Month::December, 31)?;
/// assert_eq!(date.weekday(), Weekday::Sunday);
/// assert_eq!(date.next_day().to_string(), "2018-01-01");
/// assert_eq!((date + 10).to_string(), "2018-01-10");
/// # Ok::<(), lightdate::InvalidDate>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: Month,
    day: u8,
}

impl Date {
    /// Earliest representable date, `0000-01-01`.
    pub const MIN: Self = Self {
        year: 0,
        month: Month::January,
        day: 1,
    };

    /// Latest representable date, `2147483647-12-31`.
    pub const MAX: Self = Self {
        year: i32::MAX,
        month: Month::December,
        day: 31,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Build a date, rejecting triples that do not exist on the calendar.
    ///
    /// # Errors
    ///
    /// [`InvalidDate`] carrying the rejected triple when the year is
    /// negative or `day` is outside the month.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, InvalidDate> {
        Self::from_ymd(year as i64, month.number() as i64, day as i64)
    }

    /// Build a date from plain numbers (1-based month).
    pub(crate) fn from_ymd(year: i64, month: i64, day: i64) -> Result<Self, InvalidDate> {
        match Month::from_number(month) {
            Some(m) if calendar::is_valid_date(year, month, day) => Ok(Self {
                year: year as i32,
                month: m,
                day: day as u8,
            }),
            _ => {
                debug!(year, month, day, "rejected invalid date");
                Err(InvalidDate::constructed(year, month, day))
            }
        }
    }

    /// Local calendar date of `datetime` in its own time zone.
    ///
    /// # Errors
    ///
    /// [`InvalidDate`] if the local date falls before year 0.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, InvalidDate> {
        Self::try_from(datetime.date_naive())
    }

    /// Calendar date of `timestamp` under the host's local time rule.
    pub fn from_wall_clock(timestamp: DateTime<Utc>) -> Result<Self, InvalidDate> {
        Self::from_datetime(&timestamp.with_timezone(&Local))
    }

    /// Today's local date as reported by `clock`.
    pub fn today_with<C: Clock>(clock: C) -> Result<Self, InvalidDate> {
        let now = clock.now();
        trace!(%now, "read wall clock");
        Self::from_wall_clock(now)
    }

    /// Today's local date according to the system clock.
    pub fn today() -> Result<Self, InvalidDate> {
        Self::today_with(SystemClock)
    }

    /// The civil day containing the Julian Date `jd`.
    ///
    /// Returns `None` for non-finite values and for instants outside the
    /// representable range.
    pub fn from_julian_day(jd: Days) -> Option<Self> {
        julian_day::jdn_containing(jd).and_then(Self::from_jdn)
    }

    fn from_jdn(jdn: i64) -> Option<Self> {
        if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
            return None;
        }
        let (year, month, day) = julian_day::civil_from_jdn(jdn);
        Self::from_ymd(year, month, day).ok()
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of the week, derived from the date.
    #[inline]
    pub const fn weekday(&self) -> Weekday {
        calendar::weekday(self.year as i64, self.month.number() as i64, self.day as i64)
    }

    /// Whether this date's year is a leap year.
    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year as i64)
    }

    // ── setters ───────────────────────────────────────────────────────

    /// Replace the year, keeping month and day.
    ///
    /// # Errors
    ///
    /// [`InvalidDate`] with `field == Some(DateField::Year)` if the result is
    /// not a valid date (a negative year, or February 29 in a common year).
    /// `self` is left unchanged.
    pub fn set_year(&mut self, year: i32) -> Result<(), InvalidDate> {
        *self = Self::replaced(
            DateField::Year,
            year as i64,
            self.month.number() as i64,
            self.day as i64,
        )?;
        Ok(())
    }

    /// Replace the month, keeping year and day. Fails like [`Date::set_year`].
    pub fn set_month(&mut self, month: Month) -> Result<(), InvalidDate> {
        *self = Self::replaced(
            DateField::Month,
            self.year as i64,
            month.number() as i64,
            self.day as i64,
        )?;
        Ok(())
    }

    /// Replace the day of the month. Fails like [`Date::set_year`].
    pub fn set_day(&mut self, day: u8) -> Result<(), InvalidDate> {
        *self = Self::replaced(
            DateField::Day,
            self.year as i64,
            self.month.number() as i64,
            day as i64,
        )?;
        Ok(())
    }

    fn replaced(field: DateField, year: i64, month: i64, day: i64) -> Result<Self, InvalidDate> {
        Self::from_ymd(year, month, day).map_err(|_| InvalidDate::set(field, year, month, day))
    }

    // ── single-day steps ──────────────────────────────────────────────

    /// The following day, or `None` after [`Date::MAX`].
    pub fn checked_next_day(self) -> Option<Self> {
        let (y, m, d) = (self.year as i64, self.month.number() as i64, self.day as i64);
        [(y, m, d + 1), (y, m + 1, 1), (y + 1, 1, 1)]
            .into_iter()
            .find(|&(y, m, d)| calendar::is_valid_date(y, m, d))
            .and_then(|(y, m, d)| Self::from_ymd(y, m, d).ok())
    }

    /// The preceding day, or `None` before [`Date::MIN`].
    #[inline]
    pub fn checked_previous_day(self) -> Option<Self> {
        self.checked_sub_days(1)
    }

    /// The following day.
    ///
    /// # Panics
    ///
    /// On [`Date::MAX`].
    pub fn next_day(self) -> Self {
        self.checked_next_day()
            .expect("`Date::next_day` stepped past the latest representable date")
    }

    /// The preceding day.
    ///
    /// # Panics
    ///
    /// On [`Date::MIN`].
    pub fn previous_day(self) -> Self {
        self.checked_previous_day()
            .expect("`Date::previous_day` stepped before the earliest representable date")
    }

    /// Step forward one day and return the new value.
    pub fn increment(&mut self) -> Self {
        *self = self.next_day();
        *self
    }

    /// Step forward one day and return the value before the step.
    pub fn post_increment(&mut self) -> Self {
        let orig = *self;
        *self = self.next_day();
        orig
    }

    /// Step back one day and return the new value.
    pub fn decrement(&mut self) -> Self {
        *self = self.previous_day();
        *self
    }

    /// Step back one day and return the value before the step.
    pub fn post_decrement(&mut self) -> Self {
        let orig = *self;
        *self = self.previous_day();
        orig
    }

    // ── day-count arithmetic ──────────────────────────────────────────

    /// Julian Day Number of this date (the integer JD at its noon).
    #[inline]
    pub const fn julian_day_number(&self) -> i64 {
        julian_day::jdn_from_civil(self.year as i64, self.month.number() as i64, self.day as i64)
    }

    /// Julian Date at 00:00 of this day.
    #[inline]
    pub fn julian_day(&self) -> Days {
        julian_day::midnight_julian_day(self.julian_day_number())
    }

    /// Modified Julian Date at 00:00 of this day.
    #[inline]
    pub fn modified_julian_day(&self) -> Days {
        self.julian_day() - MJD_EPOCH
    }

    /// Shift forward by `days` (backward when negative).
    ///
    /// Returns `None` if the result is not representable.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        Self::from_jdn(self.julian_day_number().checked_add(days)?)
    }

    /// Shift backward by `days` (forward when negative).
    pub fn checked_sub_days(self, days: i64) -> Option<Self> {
        Self::from_jdn(self.julian_day_number().checked_sub(days)?)
    }

    /// Shift forward by `days`.
    ///
    /// # Panics
    ///
    /// If the result is not representable.
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days)
            .expect("`Date + i64` left the representable date range")
    }

    /// Shift backward by `days`.
    ///
    /// # Panics
    ///
    /// If the result is not representable.
    pub fn sub_days(self, days: i64) -> Self {
        self.checked_sub_days(days)
            .expect("`Date - i64` left the representable date range")
    }

    /// Whole days from `other` to `self`; negative when `self` is earlier.
    #[inline]
    pub const fn signed_days_since(&self, other: &Self) -> i64 {
        self.julian_day_number() - other.julian_day_number()
    }

    /// Absolute number of whole days between two dates.
    #[inline]
    pub const fn abs_diff(&self, other: &Self) -> u64 {
        self.signed_days_since(other).unsigned_abs()
    }
}

/// Absolute number of whole days between `a` and `b`.
///
/// Symmetric, and zero exactly when the dates are equal.
#[inline]
pub const fn date_difference(a: &Date, b: &Date) -> u64 {
    a.abs_diff(b)
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    /// Parses the `YYYY-MM-DD` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseDateError::Malformed {
            input: s.to_owned(),
        };
        let digits = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };

        let mut parts = s.splitn(3, '-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) if digits(y, 4, 10) && digits(m, 2, 2) && digits(d, 2, 2) => {
                (y, m, d)
            }
            _ => return Err(malformed()),
        };

        let year: i64 = year.parse().map_err(|_| malformed())?;
        let month: i64 = month.parse().map_err(|_| malformed())?;
        let day: i64 = day.parse().map_err(|_| malformed())?;
        Ok(Self::from_ymd(year, month, day)?)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateVisitor;

        impl de::Visitor<'_> for DateVisitor {
            type Value = Date;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date formatted as YYYY-MM-DD")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<i64> for Date {
    type Output = Self;

    #[inline]
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl AddAssign<i64> for Date {
    #[inline]
    fn add_assign(&mut self, days: i64) {
        *self = *self + days;
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    #[inline]
    fn sub(self, days: i64) -> Self::Output {
        self.sub_days(days)
    }
}

impl SubAssign<i64> for Date {
    #[inline]
    fn sub_assign(&mut self, days: i64) {
        *self = *self - days;
    }
}

impl Sub for Date {
    type Output = Days;

    /// Signed span `self − rhs` in whole days.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Days::new(self.signed_days_since(&rhs) as f64)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn ymd(year: i32, month: Month, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────

    #[test]
    fn constructor_creates_valid_date() {
        let date = ymd(2018, Month::January, 1);
        assert_eq!(date.year(), 2018);
        assert_eq!(date.month(), Month::January);
        assert_eq!(date.day(), 1);
        assert_eq!(date.weekday(), Weekday::Monday);
    }

    #[test]
    fn constructor_rejects_invalid_triples() {
        let err = Date::new(2018, Month::February, 29).unwrap_err();
        assert_eq!(err, InvalidDate::constructed(2018, 2, 29));
        assert_eq!(err.to_string(), "invalid date constructed: 2018-2-29");

        assert!(Date::new(-1, Month::January, 1).is_err());
        assert!(Date::new(2018, Month::April, 31).is_err());
        assert!(Date::new(2018, Month::January, 0).is_err());
        assert!(Date::new(2016, Month::February, 29).is_ok());
    }

    #[test]
    fn every_day_of_a_leap_year_roundtrips_through_getters() {
        for month_number in 1..=12u8 {
            let month = Month::try_from(month_number).unwrap();
            for day in 1..=month.length(2000) {
                let date = ymd(2000, month, day);
                assert_eq!((date.year(), date.month(), date.day()), (2000, month, day));
            }
        }
    }

    #[test]
    fn from_datetime_uses_the_local_calendar_day() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let utc_evening = Utc.with_ymd_and_hms(2017, 12, 31, 20, 0, 0).unwrap();

        assert_eq!(
            Date::from_datetime(&utc_evening).unwrap(),
            ymd(2017, Month::December, 31)
        );
        assert_eq!(
            Date::from_datetime(&utc_evening.with_timezone(&tokyo)).unwrap(),
            ymd(2018, Month::January, 1)
        );
    }

    #[test]
    fn today_with_fixed_clock_follows_local_time() {
        use crate::clock::FixedClock;
        use chrono::Datelike;

        let now = Utc.with_ymd_and_hms(2018, 6, 15, 12, 0, 0).unwrap();
        let expected = now.with_timezone(&Local).date_naive();
        let today = Date::today_with(FixedClock(now)).unwrap();

        assert_eq!(today.year(), expected.year());
        assert_eq!(today.month().number() as u32, expected.month());
        assert_eq!(today.day() as u32, expected.day());
        assert_eq!(chrono::Weekday::from(today.weekday()), expected.weekday());
    }

    #[test]
    fn today_reads_the_system_clock() {
        assert!(Date::today().unwrap().year() >= 2024);
    }

    // ── setters ───────────────────────────────────────────────────────

    #[test]
    fn setters_update_a_single_field() {
        let mut date = ymd(2010, Month::January, 1);
        date.set_year(2000).unwrap();
        assert_eq!(date, ymd(2000, Month::January, 1));
        date.set_month(Month::March).unwrap();
        assert_eq!(date, ymd(2000, Month::March, 1));
        date.set_day(20).unwrap();
        assert_eq!(date, ymd(2000, Month::March, 20));
    }

    #[test]
    fn setters_keep_weekday_consistent() {
        let mut date = ymd(2018, Month::January, 1);
        date.set_day(2).unwrap();
        assert_eq!(date.weekday(), Weekday::Tuesday);
        date.set_year(2000).unwrap();
        assert_eq!(date.weekday(), Weekday::Sunday);
    }

    #[test]
    fn failed_set_month_leaves_date_unchanged() {
        let mut date = ymd(2004, Month::January, 31);
        let err = date.set_month(Month::February).unwrap_err();
        assert_eq!(err.field, Some(DateField::Month));
        assert_eq!(err.to_string(), "invalid month set: 2004-2-31");
        assert_eq!(date, ymd(2004, Month::January, 31));
    }

    #[test]
    fn moving_leap_day_to_march_is_fine() {
        let mut date = ymd(2004, Month::February, 29);
        date.set_month(Month::March).unwrap();
        assert_eq!(date, ymd(2004, Month::March, 29));
    }

    #[test]
    fn failed_set_day_and_year_leave_date_unchanged() {
        let mut date = ymd(2010, Month::January, 1);
        let err = date.set_day(50).unwrap_err();
        assert_eq!(err.field, Some(DateField::Day));
        assert_eq!(err.to_string(), "invalid day set: 2010-1-50");
        assert_eq!(date, ymd(2010, Month::January, 1));

        let mut leap = ymd(2004, Month::February, 29);
        let err = leap.set_year(2005).unwrap_err();
        assert_eq!(err, InvalidDate::set(DateField::Year, 2005, 2, 29));
        assert!(leap.set_year(-4).is_err());
        assert_eq!(leap, ymd(2004, Month::February, 29));
    }

    // ── stepping ──────────────────────────────────────────────────────

    #[test]
    fn post_increment_adds_one_day() {
        let mut date = ymd(2010, Month::June, 10);
        let before = date.post_increment();
        assert_eq!(before, ymd(2010, Month::June, 10));
        assert_eq!(date, ymd(2010, Month::June, 11));
    }

    #[test]
    fn increment_handles_end_of_month() {
        let mut date = ymd(2017, Month::November, 30);
        let after = date.increment();
        assert_eq!(after, date);
        assert_eq!(date, ymd(2017, Month::December, 1));
        assert_eq!(date.weekday(), Weekday::Friday);
    }

    #[test]
    fn increment_handles_end_of_year() {
        let mut date = ymd(2017, Month::December, 31);
        date.post_increment();
        assert_eq!(date, ymd(2018, Month::January, 1));
        assert_eq!(date.weekday(), Weekday::Monday);
    }

    #[test]
    fn increment_handles_leap_february() {
        assert_eq!(
            ymd(2000, Month::February, 28).next_day(),
            ymd(2000, Month::February, 29)
        );
        assert_eq!(
            ymd(1900, Month::February, 28).next_day(),
            ymd(1900, Month::March, 1)
        );
    }

    #[test]
    fn decrement_rolls_back_over_boundaries() {
        let mut date = ymd(2018, Month::January, 1);
        let before = date.post_decrement();
        assert_eq!(before, ymd(2018, Month::January, 1));
        assert_eq!(date, ymd(2017, Month::December, 31));
        assert_eq!(date.weekday(), Weekday::Sunday);

        let mut march = ymd(2004, Month::March, 1);
        assert_eq!(march.decrement(), ymd(2004, Month::February, 29));
    }

    #[test]
    fn weekday_advances_with_each_step() {
        let mut date = ymd(2015, Month::December, 25);
        for _ in 0..800 {
            let expected = date.weekday().succ();
            date.increment();
            assert_eq!(date.weekday(), expected, "{date}");
        }
    }

    #[test]
    fn stepping_stops_at_range_edges() {
        assert_eq!(Date::MAX.checked_next_day(), None);
        assert_eq!(Date::MIN.checked_previous_day(), None);
        assert_eq!(
            Date::MIN.checked_next_day(),
            Some(ymd(0, Month::January, 2))
        );
    }

    #[test]
    #[should_panic(expected = "latest representable date")]
    fn next_day_panics_past_max() {
        Date::MAX.next_day();
    }

    // ── arithmetic ────────────────────────────────────────────────────

    #[test]
    fn compound_addition() {
        let mut date = ymd(2010, Month::January, 1);
        date += 10;
        assert_eq!(date, ymd(2010, Month::January, 11));

        let mut date = ymd(2010, Month::January, 31);
        date += 10;
        assert_eq!(date, ymd(2010, Month::February, 10));

        let mut date = ymd(2010, Month::December, 31);
        date += 10;
        assert_eq!(date, ymd(2011, Month::January, 10));
    }

    #[test]
    fn compound_subtraction() {
        let mut date = ymd(2010, Month::January, 11);
        date -= 10;
        assert_eq!(date, ymd(2010, Month::January, 1));

        let mut date = ymd(2010, Month::February, 1);
        date -= 10;
        assert_eq!(date, ymd(2010, Month::January, 22));

        let mut date = ymd(2010, Month::January, 1);
        date -= 10;
        assert_eq!(date, ymd(2009, Month::December, 22));
    }

    #[test]
    fn negative_shifts_reverse_direction() {
        let date = ymd(2010, Month::January, 1);
        assert_eq!(date + -10, date - 10);
        assert_eq!(date - -10, date + 10);
        assert_eq!(date.add_days(-10), date.sub_days(10));
    }

    #[test]
    fn addition_agrees_with_repeated_increment() {
        let start = ymd(1999, Month::November, 15);
        let mut stepped = start;
        for n in 1..=500 {
            stepped.increment();
            assert_eq!(start + n, stepped);
        }
    }

    #[test]
    fn checked_arithmetic_reports_out_of_range() {
        assert_eq!(Date::MIN.checked_sub_days(1), None);
        assert_eq!(Date::MAX.checked_add_days(1), None);
        assert_eq!(Date::MIN.checked_add_days(i64::MAX), None);
        assert_eq!(Date::MAX.checked_sub_days(i64::MIN), None);
        assert_eq!(
            Date::MIN.checked_add_days(Date::MAX.signed_days_since(&Date::MIN)),
            Some(Date::MAX)
        );
    }

    #[test]
    #[should_panic(expected = "representable date range")]
    fn subtraction_panics_before_min() {
        let _ = Date::MIN - 1;
    }

    #[test]
    fn date_difference_is_symmetric() {
        let a = ymd(2010, Month::January, 1);
        let b = ymd(2011, Month::January, 1);
        assert_eq!(date_difference(&a, &b), 365);
        assert_eq!(date_difference(&b, &a), 365);
        assert_eq!(date_difference(&a, &a), 0);
        assert_eq!(a.signed_days_since(&b), -365);
        assert_eq!(b - a, Days::new(365.0));
        assert_eq!(a - b, Days::new(-365.0));
    }

    #[test]
    fn julian_day_bridge() {
        let j2000 = ymd(2000, Month::January, 1);
        assert_eq!(j2000.julian_day_number(), 2_451_545);
        assert_eq!(j2000.julian_day(), Days::new(2_451_544.5));
        assert_eq!(j2000.modified_julian_day(), Days::new(51_544.0));
        assert_eq!(Date::from_julian_day(Days::new(2_451_545.0)), Some(j2000));
        assert_eq!(Date::from_julian_day(j2000.julian_day()), Some(j2000));
        assert_eq!(Date::from_julian_day(Days::new(f64::INFINITY)), None);
        assert_eq!(Date::from_julian_day(Days::new(0.0)), None);
    }

    // ── ordering ──────────────────────────────────────────────────────

    #[test]
    fn ordering_is_lexicographic() {
        let a = ymd(2010, Month::December, 31);
        let b = ymd(2011, Month::January, 1);
        assert!(a < b);
        assert!(b > a);
        assert!(ymd(2011, Month::March, 1) > ymd(2011, Month::February, 28));
        assert!(ymd(2011, Month::March, 2) > ymd(2011, Month::March, 1));
        assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
        assert_ne!(a, b);
    }

    // ── rendering / parsing ───────────────────────────────────────────

    #[test]
    fn display_pads_components() {
        assert_eq!(ymd(2018, Month::January, 1).to_string(), "2018-01-01");
        assert_eq!(ymd(33, Month::July, 4).to_string(), "0033-07-04");
        assert_eq!(ymd(12345, Month::October, 10).to_string(), "12345-10-10");
    }

    #[test]
    fn parse_accepts_display_form() {
        assert_eq!("2018-01-01".parse::<Date>(), Ok(ymd(2018, Month::January, 1)));
        assert_eq!("0033-07-04".parse::<Date>(), Ok(ymd(33, Month::July, 4)));
        let date = ymd(12345, Month::October, 10);
        assert_eq!(date.to_string().parse::<Date>(), Ok(date));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in [
            "", "2018", "2018-1-01", "2018-01-1", "18-01-01", "2018/01/01", "2018-01-01-",
            "+2018-01-01", "2018-01-01T00:00", " 2018-01-01",
        ] {
            assert!(
                matches!(input.parse::<Date>(), Err(ParseDateError::Malformed { .. })),
                "{input:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_invalid_dates() {
        assert_eq!(
            "2018-02-29".parse::<Date>(),
            Err(ParseDateError::Invalid(InvalidDate::constructed(2018, 2, 29)))
        );
        assert!(matches!(
            "2018-13-01".parse::<Date>(),
            Err(ParseDateError::Invalid(_))
        ));
        assert!(matches!(
            "9999999999-01-01".parse::<Date>(),
            Err(ParseDateError::Invalid(_))
        ));
    }

    #[test]
    fn date_is_send_sync_copy() {
        fn assert_impl<T: Send + Sync + Copy>() {}
        assert_impl::<Date>();
    }
}
