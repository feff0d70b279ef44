//! Iceland.

use hol_core::errors::Result;
use hol_time::calendar_math::{first_weekday_on_or_after, WeekdayOrdinal};
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
];

const FIXED: &[(&str, Month, u8, &str)] = &[
    ("iceland_newYearsDay", Month::January, 1, "New Year's Day"),
    ("iceland_epiphany", Month::January, 6, "Epiphany"),
    ("iceland_mayDay", Month::May, 1, "May Day"),
    ("iceland_mothersDay", Month::May, 13, "Mothers' Day"),
    ("iceland_seamansDay", Month::June, 3, "The Seamen's Day"),
    ("iceland_nationalDay", Month::June, 17, "Icelandic National Day"),
    ("iceland_jonsMass", Month::June, 24, "Jón's Mass"),
    ("iceland_languageDay", Month::November, 16, "Icelandic Language Day"),
    ("iceland_independenceDay", Month::December, 1, "Independence Day"),
    ("iceland_christmas", Month::December, 24, "Christmas Eve"),
    ("iceland_christmasDay", Month::December, 25, "Christmas Day"),
    ("iceland_secondChristmasDay", Month::December, 26, "Boxing Day"),
    ("iceland_newYearsEve", Month::December, 31, "New Year's Eve"),
];

/// Days found by scanning forward from a start date: key, start month,
/// start day, weekday, title.
const SCANNED: &[(&str, Month, u8, Weekday, &str)] = &[
    ("iceland_husbandsDay", Month::January, 19, Weekday::Friday, "Husband's Day"),
    ("iceland_womansDay", Month::February, 18, Weekday::Sunday, "Woman's Day"),
    ("iceland_firstDayOfSummer", Month::April, 19, Weekday::Thursday, "First Day of Summer"),
];

/// English titles that differ from the shared Easter cycle.
const CYCLE_TITLES: &[(&str, &str)] = &[
    ("iceland_easter", "Easter Day"),
    ("iceland_whitsun", "White Sunday"),
    ("iceland_whitMonday", "White Monday"),
];

const IS_IS: &[(&str, &str)] = &[
    ("iceland_newYearsDay", "Nýársdagur"),
    ("iceland_epiphany", "Þrettándinn"),
    ("iceland_husbandsDay", "Bóndadagur"),
    ("iceland_womansDay", "Konudagur"),
    ("iceland_shroveMonday", "Bolludagur"),
    ("iceland_shroveTuesday", "Sprengidagur"),
    ("iceland_ashWednesday", "Öskudagur"),
    ("iceland_palmSunday", "Pálmasunnudagur"),
    ("iceland_maundyThursday", "Skírdagur"),
    ("iceland_goodFriday", "Föstudaginn langi"),
    ("iceland_easter", "Páskadagur"),
    ("iceland_easterMonday", "Annar í páskum"),
    ("iceland_firstDayOfSummer", "Sumardagurinn fyrsti"),
    ("iceland_mayDay", "Verkalýðsdagurinn"),
    ("iceland_mothersDay", "Mæðradagurinn"),
    ("iceland_whitsun", "Hvítasunnudagur"),
    ("iceland_whitMonday", "Annar í hvítasunnu"),
    ("iceland_ascensionDay", "Uppstigningardagur"),
    ("iceland_seamansDay", "Sjómannadagurinn"),
    ("iceland_nationalDay", "Lýðveldisdagurinn"),
    ("iceland_jonsMass", "Jónsmessa"),
    ("iceland_commerceDay", "Frídagur verslunarmanna"),
    ("iceland_languageDay", "Dagur íslenskrar tungu"),
    ("iceland_independenceDay", "Fullveldisdagurinn"),
    ("iceland_christmas", "Aðfangadagur"),
    ("iceland_christmasDay", "Jóladagur"),
    ("iceland_secondChristmasDay", "Annar í jólum"),
    ("iceland_newYearsEve", "Gamlárskvöld"),
];

/// Iceland, with Icelandic (`is_IS`) titles for every holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iceland {
    cycle: EasterCycle,
}

impl Iceland {
    /// Icelandic rule set.
    pub const fn new() -> Self {
        Self {
            cycle: EasterCycle::new("iceland_", CYCLE),
        }
    }
}

impl Default for Iceland {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for Iceland {
    fn name(&self) -> &str {
        "Iceland"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["is", "isl"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.cycle)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        for &(key, title) in CYCLE_TITLES {
            let date = set.require_date(key)?;
            set.add(key, date, title);
        }
        for &(key, month, day, title) in FIXED {
            set.add(key, ctx.date(month, day)?, title);
        }
        for &(key, month, day, weekday, title) in SCANNED {
            set.add(key, first_weekday_on_or_after(ctx.date(month, day)?, weekday)?, title);
        }
        set.add("iceland_shroveMonday", ctx.easter_offset(-48)?, "Shrove Monday");
        set.add("iceland_shroveTuesday", ctx.easter_offset(-47)?, "Shrove Tuesday");
        set.add(
            "iceland_commerceDay",
            ctx.nth_weekday(WeekdayOrdinal::Nth(1), Weekday::Monday, Month::August)?,
            "Commerce Day",
        );
        set.add_translations("is_IS", IS_IS)
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
    fn scanned_days_2024() {
        let set = Iceland::new().build(2024).unwrap();
        assert_eq!(set.date("iceland_husbandsDay"), Some(date(2024, 1, 19)));
        assert_eq!(set.date("iceland_womansDay"), Some(date(2024, 2, 18)));
        assert_eq!(set.date("iceland_firstDayOfSummer"), Some(date(2024, 4, 25)));
        assert_eq!(set.date("iceland_commerceDay"), Some(date(2024, 8, 5)));
    }

    #[test]
    fn shrovetide_precedes_ash_wednesday() {
        let set = Iceland::new().build(2024).unwrap();
        assert_eq!(set.date("iceland_shroveMonday"), Some(date(2024, 2, 12)));
        assert_eq!(set.date("iceland_shroveTuesday"), Some(date(2024, 2, 13)));
        assert_eq!(set.date("iceland_ashWednesday"), Some(date(2024, 2, 14)));
    }

    #[test]
    fn icelandic_titles() {
        let set = Iceland::new().build(2024).unwrap();
        assert!(set.iter().all(|r| r.translations().contains_key("is_IS")));
        assert_eq!(set.get("iceland_goodFriday").unwrap().title_for("is_IS"), "Föstudaginn langi");
        assert_eq!(set.get("iceland_goodFriday").unwrap().title_for("en_US"), "Good Friday");
    }

    #[test]
    fn easter_and_whitsun_titles_stay_in_place() {
        let set = Iceland::new().build(2024).unwrap();
        let easter = set.iter().position(|r| r.key() == "iceland_easter").unwrap();
        let record = set.iter().nth(easter).unwrap();
        assert_eq!(record.title(), "Easter Day");
        assert_eq!(record.date(), date(2024, 3, 31));
        assert_eq!(set.iter().nth(easter - 1).unwrap().key(), "iceland_goodFriday");
        assert_eq!(set.get("iceland_whitsun").unwrap().title(), "White Sunday");
        assert_eq!(set.get("iceland_whitMonday").unwrap().title(), "White Monday");
        assert_eq!(set.get("iceland_whitMonday").unwrap().date(), date(2024, 5, 20));
    }
}
