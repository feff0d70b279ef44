//! Calendar arithmetic shared by every rule set.
//!
//! All functions here are pure: the same inputs always produce the same
//! date, and nothing reads the clock or any global state.  Country rule sets
//! call these primitives instead of re-deriving their own day arithmetic.

use std::str::FromStr;

use hol_core::ensure;
use hol_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::weekday::Weekday;

/// First year of the Gregorian calendar; Easter is undefined before it.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Gregorian Easter Sunday for `year`.
///
/// Meeus/Jones/Butcher algorithm, integer arithmetic only.
///
/// # Errors
/// [`Error::InvalidYear`] for years before [`FIRST_GREGORIAN_YEAR`], and a
/// date error past [`Date::MAX_YEAR`].
pub fn easter(year: i32) -> Result<Date> {
    if year < FIRST_GREGORIAN_YEAR {
        return Err(Error::InvalidYear {
            year,
            reason: format!("Gregorian Easter is defined from {FIRST_GREGORIAN_YEAR}"),
        });
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Which occurrence of a weekday within a month to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayOrdinal {
    /// The n-th occurrence, 1-based (valid range `1..=5`).
    Nth(u8),
    /// The last occurrence in the month.
    Last,
}

impl FromStr for WeekdayOrdinal {
    type Err = Error;

    /// Accepts `"last"` or a number `1`–`5`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("last") {
            return Ok(WeekdayOrdinal::Last);
        }
        let n: u8 = s
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("expected 1..5 or \"last\", got {s:?}")))?;
        ensure!(
            (1..=5).contains(&n),
            InvalidArgument,
            "weekday ordinal {n} out of range [1, 5]"
        );
        Ok(WeekdayOrdinal::Nth(n))
    }
}

/// Resolve the n-th (or last) `weekday` of `month` in `year`.
///
/// The weekday of the month's first (or last) day is computed, the minimal
/// non-negative (non-positive for [`WeekdayOrdinal::Last`]) offset to the
/// target weekday is applied, then `(n - 1) * 7` days for the n-th case.
///
/// ```
/// use hol_time::calendar_math::{nth_weekday_of_month, WeekdayOrdinal};
/// use hol_time::{Date, Month, Weekday};
///
/// let memorial = nth_weekday_of_month(WeekdayOrdinal::Last, Weekday::Monday, Month::May, 2023)?;
/// assert_eq!(memorial, Date::from_ymd(2023, 5, 29)?);
/// # Ok::<(), hol_core::Error>(())
/// ```
///
/// # Errors
/// [`Error::InvalidArgument`] if `n` is outside `1..=5` or the requested
/// occurrence does not exist in that month.
pub fn nth_weekday_of_month(
    ordinal: WeekdayOrdinal,
    weekday: Weekday,
    month: Month,
    year: i32,
) -> Result<Date> {
    let m = month.number();
    let target = weekday.sunday_index() as i32;
    match ordinal {
        WeekdayOrdinal::Nth(n) => {
            ensure!(
                (1..=5).contains(&n),
                InvalidArgument,
                "weekday ordinal {n} out of range [1, 5]"
            );
            let first = Date::from_ymd(year, m, 1)?;
            let skip = (target - first.weekday().sunday_index() as i32).rem_euclid(7);
            let day = 1 + skip + 7 * (n as i32 - 1);
            ensure!(
                day <= days_in_month(year, m) as i32,
                InvalidArgument,
                "there is no occurrence {n} of {weekday} in {year}-{m:02}"
            );
            Date::from_ymd(year, m, day as u8)
        }
        WeekdayOrdinal::Last => {
            let last = Date::from_ymd(year, m, days_in_month(year, m))?;
            let back = (last.weekday().sunday_index() as i32 - target).rem_euclid(7);
            last.add_days(-back)
        }
    }
}

/// Calendar-correct day offset, crossing month and year boundaries.
pub fn add_days(date: Date, delta: i32) -> Result<Date> {
    date.add_days(delta)
}

/// Shift a weekend date to the nearest workday: Sunday → Monday,
/// Saturday → Friday, any other day unchanged.
pub fn nearest_workday(date: Date) -> Result<Date> {
    match date.weekday() {
        Weekday::Sunday => date.add_days(1),
        Weekday::Saturday => date.add_days(-1),
        _ => Ok(date),
    }
}

/// First `weekday` on or after `date`, found by stepping forward one day at
/// a time.
pub fn first_weekday_on_or_after(date: Date, weekday: Weekday) -> Result<Date> {
    let mut d = date;
    while d.weekday() != weekday {
        d = d.add_days(1)?;
    }
    Ok(d)
}

/// Last `weekday` on or before `date`.
pub fn weekday_on_or_before(date: Date, weekday: Weekday) -> Result<Date> {
    let back = (date.weekday().sunday_index() as i32 - weekday.sunday_index() as i32).rem_euclid(7);
    date.add_days(-back)
}

/// The n-th Sunday of Advent (`1..=4`); the fourth is the Sunday on or
/// before 24 December.
pub fn advent_sunday(n: u8, year: i32) -> Result<Date> {
    ensure!(
        (1..=4).contains(&n),
        InvalidArgument,
        "advent Sunday {n} out of range [1, 4]"
    );
    let fourth = weekday_on_or_before(Date::new(year, Month::December, 24)?, Weekday::Sunday)?;
    fourth.add_days(-7 * (4 - n as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_known_years() {
        assert_eq!(easter(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(easter(1583).unwrap(), date(1583, 4, 10));
        assert_eq!(easter(1818).unwrap(), date(1818, 3, 22)); // earliest possible
        assert_eq!(easter(1943).unwrap(), date(1943, 4, 25)); // latest possible
    }

    #[test]
    fn easter_rejects_julian_years() {
        assert!(matches!(easter(1582), Err(Error::InvalidYear { year: 1582, .. })));
    }

    #[test]
    fn last_monday_of_may() {
        let d = nth_weekday_of_month(WeekdayOrdinal::Last, Weekday::Monday, Month::May, 2023).unwrap();
        assert_eq!(d, date(2023, 5, 29));
    }

    #[test]
    fn nth_weekday() {
        // 4th Thursday of November 2023 = 23rd
        let d = nth_weekday_of_month(WeekdayOrdinal::Nth(4), Weekday::Thursday, Month::November, 2023)
            .unwrap();
        assert_eq!(d, date(2023, 11, 23));
        // 1st Monday of January 2024 is the 1st itself
        let d = nth_weekday_of_month(WeekdayOrdinal::Nth(1), Weekday::Monday, Month::January, 2024)
            .unwrap();
        assert_eq!(d, date(2024, 1, 1));
    }

    #[test]
    fn nth_weekday_rejects_bad_ordinals() {
        for n in [0, 6] {
            let r = nth_weekday_of_month(WeekdayOrdinal::Nth(n), Weekday::Monday, Month::May, 2023);
            assert!(matches!(r, Err(Error::InvalidArgument(_))));
        }
        // No 5th Wednesday in February 2024
        let r = nth_weekday_of_month(WeekdayOrdinal::Nth(5), Weekday::Wednesday, Month::February, 2024);
        assert!(matches!(r, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn ordinal_parsing() {
        assert_eq!("last".parse::<WeekdayOrdinal>().unwrap(), WeekdayOrdinal::Last);
        assert_eq!("3".parse::<WeekdayOrdinal>().unwrap(), WeekdayOrdinal::Nth(3));
        assert!("6".parse::<WeekdayOrdinal>().is_err());
        assert!("first".parse::<WeekdayOrdinal>().is_err());
    }

    #[test]
    fn nearest_workday_shifts_weekends() {
        // 2021-07-04 Sunday → Monday 5th
        assert_eq!(nearest_workday(date(2021, 7, 4)).unwrap(), date(2021, 7, 5));
        // 2020-07-04 Saturday → Friday 3rd
        assert_eq!(nearest_workday(date(2020, 7, 4)).unwrap(), date(2020, 7, 3));
        // 2022-01-01 Saturday → previous year's 31 December
        assert_eq!(nearest_workday(date(2022, 1, 1)).unwrap(), date(2021, 12, 31));
    }

    #[test]
    fn scan_forward_to_weekday() {
        // 2024-01-19 is a Friday: already there
        assert_eq!(
            first_weekday_on_or_after(date(2024, 1, 19), Weekday::Friday).unwrap(),
            date(2024, 1, 19)
        );
        // 2023-02-18 is a Saturday: next Sunday is the 19th
        assert_eq!(
            first_weekday_on_or_after(date(2023, 2, 18), Weekday::Sunday).unwrap(),
            date(2023, 2, 19)
        );
    }

    #[test]
    fn advent_sundays() {
        // 2023: 24 December is itself a Sunday
        assert_eq!(advent_sunday(4, 2023).unwrap(), date(2023, 12, 24));
        assert_eq!(advent_sunday(1, 2023).unwrap(), date(2023, 12, 3));
        assert_eq!(advent_sunday(1, 2024).unwrap(), date(2024, 12, 1));
        assert!(advent_sunday(5, 2024).is_err());
    }
}
