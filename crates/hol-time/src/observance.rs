//! Weekend-observance policies.
//!
//! A policy maps the nominal date of a holiday to the entries that should be
//! recorded for it: the unchanged date, a shifted substitute, or several
//! entries when a country observes more than one day.

use hol_core::errors::Result;

use crate::calendar_math;
use crate::date::Date;
use crate::weekday::Weekday;

/// One entry produced by [`ObservancePolicy::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    /// Appended to the holiday key; empty for the holiday's own key.
    pub key_suffix: &'static str,
    /// Prepended to the holiday title.
    pub title_prefix: &'static str,
    /// Date the entry is observed on.
    pub date: Date,
    /// `true` if the entry is a substitute for the nominal date.
    pub substitute: bool,
}

/// Offset applied when a holiday falls on a Sunday, possibly depending on
/// the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SundayShift {
    before: i32,
    switch: Option<(i32, i32)>,
}

impl SundayShift {
    /// Always shift by `offset` days.
    pub const fn fixed(offset: i32) -> Self {
        Self {
            before: offset,
            switch: None,
        }
    }

    /// Shift by `before` days until `year`, by `from` days in `year` and
    /// later.
    pub const fn switching(before: i32, year: i32, from: i32) -> Self {
        Self {
            before,
            switch: Some((year, from)),
        }
    }

    /// The offset in force for `year`.
    pub fn offset_for(&self, year: i32) -> i32 {
        match self.switch {
            Some((switch_year, from)) if year >= switch_year => from,
            _ => self.before,
        }
    }
}

/// Title prefix of table-driven substitute entries.
pub const SUBSTITUTE_TITLE_PREFIX: &str = "Substitute Bank Holiday in lieu of ";

/// One row of a [`SubstitutionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// Days from the nominal date; `0` keeps the original day.
    pub offset: i32,
    /// Appended to the holiday key.
    pub key_suffix: &'static str,
    /// Prepended to the holiday title.
    pub title_prefix: &'static str,
    /// Whether the entry is recorded as a substitute.
    pub substitute: bool,
}

impl Substitution {
    /// Keep the nominal date under the holiday's own key.
    pub const KEEP: Substitution = Substitution {
        offset: 0,
        key_suffix: "",
        title_prefix: "",
        substitute: false,
    };

    /// Move the holiday's own key `offset` days away.
    pub const fn moved(offset: i32) -> Self {
        Self {
            offset,
            key_suffix: "",
            title_prefix: SUBSTITUTE_TITLE_PREFIX,
            substitute: true,
        }
    }

    /// An additional substitute entry under `key + suffix`.
    pub const fn extra(offset: i32, key_suffix: &'static str) -> Self {
        Self {
            offset,
            key_suffix,
            title_prefix: SUBSTITUTE_TITLE_PREFIX,
            substitute: true,
        }
    }
}

const KEEP_ONLY: &[Substitution] = &[Substitution::KEEP];

/// Explicit per-weekday lookup: the entries to record when the nominal date
/// falls on a listed weekday.  Weekdays not listed keep the nominal date.
#[derive(Debug, PartialEq, Eq)]
pub struct SubstitutionTable {
    rows: &'static [(Weekday, &'static [Substitution])],
}

impl SubstitutionTable {
    /// Build a table from `(weekday, entries)` rows.
    pub const fn new(rows: &'static [(Weekday, &'static [Substitution])]) -> Self {
        Self { rows }
    }

    /// Entries for a nominal date on `weekday`.
    pub fn lookup(&self, weekday: Weekday) -> &'static [Substitution] {
        self.rows
            .iter()
            .find(|(w, _)| *w == weekday)
            .map(|(_, entries)| *entries)
            .unwrap_or(KEEP_ONLY)
    }
}

/// How a country substitutes holidays that fall on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservancePolicy {
    /// No substitution.
    #[default]
    None,
    /// Sunday → following Monday, Saturday → preceding Friday.
    NearestWorkday,
    /// Shift only when the holiday falls on a Sunday.
    SundayOnly(SundayShift),
    /// Arbitrary per-weekday substitution.
    TableDriven(&'static SubstitutionTable),
}

impl ObservancePolicy {
    /// Entries to record for a holiday nominally on `raw`.
    ///
    /// Always returns at least one entry; without substitution that is the
    /// nominal date under the holiday's own key.  Shifts made by
    /// `NearestWorkday` and `SundayOnly` keep the holiday's title.
    pub fn apply(&self, raw: Date) -> Result<Vec<Observed>> {
        let single = |date: Date| Observed {
            key_suffix: "",
            title_prefix: "",
            date,
            substitute: date != raw,
        };
        match self {
            ObservancePolicy::None => Ok(vec![single(raw)]),
            ObservancePolicy::NearestWorkday => Ok(vec![single(calendar_math::nearest_workday(raw)?)]),
            ObservancePolicy::SundayOnly(shift) => {
                if raw.weekday() == Weekday::Sunday {
                    Ok(vec![single(raw.add_days(shift.offset_for(raw.year()))?)])
                } else {
                    Ok(vec![single(raw)])
                }
            }
            ObservancePolicy::TableDriven(table) => table
                .lookup(raw.weekday())
                .iter()
                .map(|s| {
                    Ok(Observed {
                        key_suffix: s.key_suffix,
                        title_prefix: s.title_prefix,
                        date: raw.add_days(s.offset)?,
                        substitute: s.substitute,
                    })
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    const ON_SATURDAY: &[Substitution] = &[Substitution::moved(2)];
    const ON_MONDAY: &[Substitution] = &[Substitution::KEEP, Substitution::extra(1, "Substitute")];

    static MONDAY_BOTH: SubstitutionTable = SubstitutionTable::new(&[
        (Weekday::Saturday, ON_SATURDAY),
        (Weekday::Monday, ON_MONDAY),
    ]);

    #[test]
    fn none_keeps_date() {
        let d = date(2021, 12, 25);
        let out = ObservancePolicy::None.apply(d).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, d);
        assert!(!out[0].substitute);
    }

    #[test]
    fn nearest_workday_marks_substitute() {
        let out = ObservancePolicy::NearestWorkday.apply(date(2021, 7, 4)).unwrap();
        assert_eq!(out[0].date, date(2021, 7, 5));
        assert!(out[0].substitute);
    }

    #[test]
    fn sunday_only_switches_direction() {
        let policy = ObservancePolicy::SundayOnly(SundayShift::switching(1, 1980, -1));
        // 1978-04-30 and 1989-04-30 are Sundays
        assert_eq!(policy.apply(date(1978, 4, 30)).unwrap()[0].date, date(1978, 5, 1));
        assert_eq!(policy.apply(date(1989, 4, 30)).unwrap()[0].date, date(1989, 4, 29));
        // Saturdays are left alone
        assert_eq!(policy.apply(date(1983, 4, 30)).unwrap()[0].date, date(1983, 4, 30));
    }

    #[test]
    fn table_driven_produces_zero_one_or_two_shifts() {
        let policy = ObservancePolicy::TableDriven(&MONDAY_BOTH);
        // Saturday 2021-12-25 → Monday 27th
        let sat = policy.apply(date(2021, 12, 25)).unwrap();
        assert_eq!(sat.len(), 1);
        assert_eq!(sat[0].date, date(2021, 12, 27));
        // Monday 2022-12-26 → 26th and 27th
        let mon = policy.apply(date(2022, 12, 26)).unwrap();
        assert_eq!(mon.len(), 2);
        assert_eq!(mon[0].date, date(2022, 12, 26));
        assert_eq!(mon[1].date, date(2022, 12, 27));
        assert_eq!(mon[1].key_suffix, "Substitute");
        // Unlisted weekday keeps the date
        let wed = policy.apply(date(2024, 12, 25)).unwrap();
        assert_eq!(
            wed,
            vec![Observed {
                key_suffix: "",
                title_prefix: "",
                date: date(2024, 12, 25),
                substitute: false,
            }]
        );
    }
}
