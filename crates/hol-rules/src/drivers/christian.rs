//! Christian feasts: the common base of Brazil and Germany.

use hol_core::errors::Result;
use hol_time::calendar_math::{advent_sunday, WeekdayOrdinal};
use hol_time::{Month, Weekday};

use super::easter_cycle::{EasterCycle, Feast};
use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

const CYCLE: &[Feast] = &[
    Feast::AshWednesday,
    Feast::PalmSunday,
    Feast::MaundyThursday,
    Feast::GoodFriday,
    Feast::Easter,
    Feast::EasterMonday,
    Feast::Ascension,
    Feast::Whitsun,
    Feast::WhitMonday,
    Feast::CorpusChristi,
];

/// Fixed-date feasts: key, month, day, title.
const FIXED: &[(&str, Month, u8, &str)] = &[
    ("jesusCircumcision", Month::January, 1, "Circumcision of Jesus"),
    ("epiphany", Month::January, 6, "Epiphany"),
    ("mariaCleaning", Month::February, 2, "Cleaning of Maria"),
    ("josephsDay", Month::March, 19, "Josef's Day"),
    ("mariaAnnunciation", Month::March, 25, "Maria Annunciation"),
    ("johnTheBaptistsBirthday", Month::June, 24, "John the Baptist's Birthday"),
    ("peterAndPaul", Month::June, 29, "Peter and Paul"),
    ("mariaAscension", Month::August, 15, "Maria Ascension"),
    ("mariaBirthday", Month::September, 8, "Maria's Birthday"),
    ("allSaintsDay", Month::November, 1, "All Saints' Day"),
    ("allSoulsDay", Month::November, 2, "All Souls' Day"),
    ("stMartinsDay", Month::November, 11, "St. Martin's Day"),
    ("stNicholasDay", Month::December, 6, "St. Nicholas' Day"),
    ("mariaConception", Month::December, 8, "Conception of Maria"),
    ("christmasEve", Month::December, 24, "Christmas Eve"),
    ("christmasDay", Month::December, 25, "Christmas Day"),
    ("boxingDay", Month::December, 26, "Boxing Day"),
    ("newYearsEve", Month::December, 31, "New Year's Eve"),
];

/// Easter-relative feasts outside the shared cycle: key, offset, title.
const MOVABLE: &[(&str, i32, &str)] = &[
    ("passionSunday", -14, "Passion Sunday"),
    ("painfulFriday", -9, "Painful Friday"),
    ("whiteSunday", 7, "White Sunday"),
    ("heartJesus", 68, "Heart of Jesus celebration"),
];

/// The Christian church year.
///
/// Emits the Easter cycle without Carnival and Holy Saturday, the fixed
/// feasts of the year, Thanksgiving (first Sunday of October), the four
/// Sundays of Advent, the Sunday of the Dead and the Day of Repentance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Christian {
    cycle: EasterCycle,
}

impl Christian {
    /// Christian base rule set.
    pub const fn new() -> Self {
        Self {
            cycle: EasterCycle::new("", CYCLE),
        }
    }
}

impl Default for Christian {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for Christian {
    fn name(&self) -> &str {
        "Christian"
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.cycle)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        for &(key, month, day, title) in FIXED {
            set.add(key, ctx.date(month, day)?, title);
        }
        for &(key, offset, title) in MOVABLE {
            set.add(key, ctx.easter_offset(offset)?, title);
        }

        let thanksgiving = ctx.nth_weekday(WeekdayOrdinal::Nth(1), Weekday::Sunday, Month::October)?;
        set.add("thanksGiving", thanksgiving, "Thanksgiving");

        let year = ctx.year();
        let advent_titles = ["1. Advent", "2. Advent", "3. Advent", "4. Advent"];
        for (n, title) in (1u8..=4).zip(advent_titles) {
            set.add(format!("advent{n}"), advent_sunday(n, year)?, title);
        }

        let death_sunday = advent_sunday(1, year)?.add_days(-7)?;
        set.add("deathSunday", death_sunday, "Death Sunday");
        set.add("dayOfRepentance", death_sunday.add_days(-4)?, "Day of Repentance");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_time::Date;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn cycle_runs_before_fixed_feasts() {
        let set = Christian::new().build(2024).unwrap();
        assert_eq!(set.keys().next(), Some("ashWednesday"));
        assert!(!set.contains_key("carnival"));
        assert!(!set.contains_key("easterSaturday"));
        assert_eq!(set.date("easter"), Some(date(2024, 3, 31)));
        assert_eq!(set.date("corpusChristi"), Some(date(2024, 5, 30)));
    }

    #[test]
    fn advent_and_dependants_2023() {
        let set = Christian::new().build(2023).unwrap();
        assert_eq!(set.date("advent1"), Some(date(2023, 12, 3)));
        assert_eq!(set.date("advent4"), Some(date(2023, 12, 24)));
        assert_eq!(set.date("deathSunday"), Some(date(2023, 11, 26)));
        assert_eq!(set.date("dayOfRepentance"), Some(date(2023, 11, 22)));
        assert_eq!(set.date("thanksGiving"), Some(date(2023, 10, 1)));
    }

    #[test]
    fn movable_feasts_2024() {
        let set = Christian::new().build(2024).unwrap();
        assert_eq!(set.date("passionSunday"), Some(date(2024, 3, 17)));
        assert_eq!(set.date("painfulFriday"), Some(date(2024, 3, 22)));
        assert_eq!(set.date("whiteSunday"), Some(date(2024, 4, 7)));
        assert_eq!(set.date("heartJesus"), Some(date(2024, 6, 7)));
    }
}
