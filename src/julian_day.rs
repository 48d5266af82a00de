// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day Number conversion.
//!
//! The absolute day count behind all multi-day arithmetic. A Julian Day
//! Number (JDN) labels the civil day whose noon falls on that integer Julian
//! Date; the day itself starts at `JDN − 0.5`.
//!
//! | Epoch | JDN |
//! |-------|-----|
//! | 0000-01-01 | 1 721 060 |
//! | 1858-11-17 (MJD 0) | 2 400 001 |
//! | 1970-01-01 | 2 440 588 |
//! | 2000-01-01 | 2 451 545 |

use qtty::Days;

/// JDN of 1970-01-01.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Days from 0000-03-01 to 1970-01-01.
const UNIX_EPOCH_FROM_MARCH_ZERO: i64 = 719_468;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub(crate) const MJD_EPOCH: Days = Days::new(2_400_000.5);

/// Smallest JDN a [`Date`](crate::Date) can hold (0000-01-01).
pub(crate) const MIN_JDN: i64 = jdn_from_civil(0, 1, 1);

/// Largest JDN a [`Date`](crate::Date) can hold (`i32::MAX`-12-31).
pub(crate) const MAX_JDN: i64 = jdn_from_civil(i32::MAX as i64, 12, 31);

/// JDN of a proleptic Gregorian date. The triple must be valid.
pub(crate) const fn jdn_from_civil(year: i64, month: i64, day: i64) -> i64 {
    // Count years from March so the leap day lands at the end of the year.
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_FROM_MARCH_ZERO + UNIX_EPOCH_JDN
}

/// Proleptic Gregorian `(year, month, day)` for a JDN.
///
/// Defined for any JDN in `MIN_JDN..=MAX_JDN`; callers range-check first.
pub(crate) const fn civil_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let z = jdn - UNIX_EPOCH_JDN + UNIX_EPOCH_FROM_MARCH_ZERO;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// JDN of the civil day containing the Julian Date `jd`, if representable.
pub(crate) fn jdn_containing(jd: Days) -> Option<i64> {
    let jdn = (jd.value() + 0.5).floor();
    if jdn.is_finite() && jdn >= MIN_JDN as f64 && jdn <= MAX_JDN as f64 {
        Some(jdn as i64)
    } else {
        None
    }
}

/// Julian Date at 00:00 of the civil day `jdn`.
#[inline]
pub(crate) fn midnight_julian_day(jdn: i64) -> Days {
    Days::new(jdn as f64 - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_epochs() {
        assert_eq!(jdn_from_civil(2000, 1, 1), 2_451_545);
        assert_eq!(jdn_from_civil(1970, 1, 1), 2_440_588);
        assert_eq!(jdn_from_civil(1858, 11, 17), 2_400_001);
        assert_eq!(jdn_from_civil(0, 1, 1), 1_721_060);
        assert_eq!(MIN_JDN, 1_721_060);
    }

    #[test]
    fn civil_roundtrip_across_leap_boundaries() {
        for jdn in jdn_from_civil(1895, 1, 1)..jdn_from_civil(1905, 1, 1) {
            let (y, m, d) = civil_from_jdn(jdn);
            assert_eq!(jdn_from_civil(y, m, d), jdn);
        }
        for jdn in jdn_from_civil(1995, 1, 1)..jdn_from_civil(2005, 1, 1) {
            let (y, m, d) = civil_from_jdn(jdn);
            assert_eq!(jdn_from_civil(y, m, d), jdn);
        }
    }

    #[test]
    fn consecutive_days_are_consecutive_numbers() {
        assert_eq!(jdn_from_civil(2000, 3, 1) - jdn_from_civil(2000, 2, 28), 2);
        assert_eq!(jdn_from_civil(1900, 3, 1) - jdn_from_civil(1900, 2, 28), 1);
        assert_eq!(jdn_from_civil(2018, 1, 1) - jdn_from_civil(2017, 12, 31), 1);
    }

    #[test]
    fn range_edges_roundtrip() {
        assert_eq!(civil_from_jdn(MIN_JDN), (0, 1, 1));
        assert_eq!(civil_from_jdn(MAX_JDN), (i32::MAX as i64, 12, 31));
        assert_eq!(civil_from_jdn(MAX_JDN + 1), (i32::MAX as i64 + 1, 1, 1));
    }

    #[test]
    fn julian_date_to_containing_day() {
        // 2000-01-01 runs from JD 2451544.5 (inclusive) to 2451545.5 (exclusive).
        assert_eq!(jdn_containing(Days::new(2_451_544.5)), Some(2_451_545));
        assert_eq!(jdn_containing(Days::new(2_451_545.0)), Some(2_451_545));
        assert_eq!(jdn_containing(Days::new(2_451_545.49)), Some(2_451_545));
        assert_eq!(jdn_containing(Days::new(2_451_545.5)), Some(2_451_546));
        assert_eq!(jdn_containing(Days::new(0.0)), None);
        assert_eq!(jdn_containing(Days::new(f64::NAN)), None);
        assert_eq!(midnight_julian_day(2_451_545), Days::new(2_451_544.5));
    }
}
