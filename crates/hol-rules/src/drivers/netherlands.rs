//! Netherlands.

use hol_core::errors::Result;
use hol_time::calendar_math::WeekdayOrdinal;
use hol_time::{Date, Month, ObservancePolicy, SundayShift, Weekday};

use super::easter_cycle::{EasterCycle, Feast};
use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

const CYCLE: &[Feast] = &[
    Feast::AshWednesday,
    Feast::GoodFriday,
    Feast::Easter,
    Feast::EasterMonday,
    Feast::Ascension,
    Feast::Whitsun,
    Feast::WhitMonday,
];

/// Commemoration and Liberation Day are only defined from this year on.
const LIBERATION_FROM: i32 = 1947;

/// Queen's Day was celebrated in these years.
const QUEENS_DAY_YEARS: std::ops::RangeInclusive<i32> = 1891..=2013;
/// Last year Queen's Day fell on 31 August.
const QUEENS_DAY_AUGUST_UNTIL: i32 = 1948;
const QUEENS_DAY_SHIFT: SundayShift = SundayShift::switching(1, 1980, -1);

const KINGS_DAY_FROM: i32 = 2014;

const NL_NL: &[(&str, &str)] = &[
    ("netherlands_newYearsDay", "Nieuwjaarsdag"),
    ("netherlands_epiphany", "Driekoningen"),
    ("netherlands_valentineDay", "Valentijnsdag"),
    ("netherlands_labourDay", "Dag van de Arbeid"),
    ("netherlands_commemorationDay", "Dodenherdenking"),
    ("netherlands_liberationDay", "Bevrijdingsdag"),
    ("netherlands_worldAnimalDay", "Dierendag"),
    ("netherlands_halloween", "Halloween"),
    ("netherlands_stMartinsDay", "Sint-Maarten"),
    ("netherlands_stNicholasDay", "Sinterklaasavond"),
    ("netherlands_christmasDay", "Eerste Kerstdag"),
    ("netherlands_secondChristmasDay", "Tweede Kerstdag"),
    ("netherlands_newYearsEve", "Oudejaarsavond"),
    ("netherlands_carnival1", "Carnaval"),
    ("netherlands_carnival2", "Carnaval"),
    ("netherlands_carnival3", "Carnaval"),
    ("netherlands_ashWednesday", "Aswoensdag"),
    ("netherlands_greenThursday", "Witte Donderdag"),
    ("netherlands_goodFriday", "Goede Vrijdag"),
    ("netherlands_silentSaturday", "Stille Zaterdag"),
    ("netherlands_easter", "Eerste Paasdag"),
    ("netherlands_easterMonday", "Tweede Paasdag"),
    ("netherlands_ascensionDay", "Hemelvaartsdag"),
    ("netherlands_whitsun", "Eerste Pinksterdag"),
    ("netherlands_whitMonday", "Tweede Pinksterdag"),
    ("netherlands_queenDay", "Koninginnedag"),
    ("netherlands_kingsDay", "Koningsdag"),
    ("netherlands_summerTime", "Zomertijd"),
    ("netherlands_mothersDay", "Moederdag"),
    ("netherlands_fathersDay", "Vaderdag"),
    ("netherlands_princesDay", "Prinsjesdag"),
    ("netherlands_winterTime", "Wintertijd"),
];

/// Netherlands: public, commemorative and observance days.
///
/// Queen's Day and King's Day are always present.  Outside the years they
/// were celebrated the set carries a fixed placeholder date (1980-04-30 and
/// 2014-04-27).  Before 1947 Commemoration and Liberation Day carry their
/// 1947 dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Netherlands {
    cycle: EasterCycle,
}

impl Netherlands {
    /// Dutch rule set.
    pub const fn new() -> Self {
        Self {
            cycle: EasterCycle::new("netherlands_", CYCLE),
        }
    }
}

impl Default for Netherlands {
    fn default() -> Self {
        Self::new()
    }
}

/// `month`/`day` of `year`, or of 1947 for earlier years.
fn since_liberation(ctx: &YearContext, month: Month, day: u8) -> Result<Date> {
    Date::new(ctx.year().max(LIBERATION_FROM), month, day)
}

impl RuleSet for Netherlands {
    fn name(&self) -> &str {
        "Netherlands"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["nl", "nld"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.cycle)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        use WeekdayOrdinal::{Last, Nth};

        let year = ctx.year();

        set.add("netherlands_newYearsDay", ctx.date(Month::January, 1)?, "New Year's Day");
        set.add("netherlands_epiphany", ctx.date(Month::January, 6)?, "Epiphany");
        set.add("netherlands_valentineDay", ctx.date(Month::February, 14)?, "Valentine's Day");
        set.add("netherlands_labourDay", ctx.date(Month::May, 1)?, "Labour Day");
        set.add(
            "netherlands_commemorationDay",
            since_liberation(ctx, Month::May, 4)?,
            "Commemoration Day",
        );
        set.add(
            "netherlands_liberationDay",
            since_liberation(ctx, Month::May, 5)?,
            "Liberation Day",
        );
        set.add("netherlands_worldAnimalDay", ctx.date(Month::October, 4)?, "World Animal Day");
        set.add("netherlands_halloween", ctx.date(Month::October, 31)?, "Halloween");
        set.add("netherlands_stMartinsDay", ctx.date(Month::November, 11)?, "St. Martin's Day");
        set.add("netherlands_stNicholasDay", ctx.date(Month::December, 5)?, "St. Nicholas' Day");
        set.add("netherlands_christmasDay", ctx.date(Month::December, 25)?, "Christmas Day");
        set.add("netherlands_secondChristmasDay", ctx.date(Month::December, 26)?, "Boxing Day");
        set.add("netherlands_newYearsEve", ctx.date(Month::December, 31)?, "New Year's Eve");

        for (n, offset) in [(1, -49), (2, -48), (3, -47)] {
            set.add(format!("netherlands_carnival{n}"), ctx.easter_offset(offset)?, "Carnival");
        }
        set.add("netherlands_greenThursday", ctx.easter_offset(-3)?, "Green Thursday");
        set.add("netherlands_silentSaturday", ctx.easter_offset(-1)?, "Silent Saturday");

        set.add("netherlands_queenDay", Date::new(1980, Month::April, 30)?, "Queen's Day");
        if QUEENS_DAY_YEARS.contains(&year) {
            let raw = if year <= QUEENS_DAY_AUGUST_UNTIL {
                ctx.date(Month::August, 31)?
            } else {
                ctx.date(Month::April, 30)?
            };
            set.add_observed(
                "netherlands_queenDay",
                raw,
                "Queen's Day",
                &ObservancePolicy::SundayOnly(QUEENS_DAY_SHIFT),
            )?;
        }

        set.add("netherlands_kingsDay", Date::new(2014, Month::April, 27)?, "King's Day");
        if year >= KINGS_DAY_FROM {
            set.add_observed(
                "netherlands_kingsDay",
                ctx.date(Month::April, 27)?,
                "King's Day",
                &ObservancePolicy::SundayOnly(SundayShift::fixed(-1)),
            )?;
        }

        set.add(
            "netherlands_summerTime",
            ctx.nth_weekday(Last, Weekday::Sunday, Month::March)?,
            "Summertime",
        );
        set.add(
            "netherlands_mothersDay",
            ctx.nth_weekday(Nth(2), Weekday::Sunday, Month::May)?,
            "Mothers' Day",
        );
        set.add(
            "netherlands_fathersDay",
            ctx.nth_weekday(Nth(3), Weekday::Sunday, Month::June)?,
            "Fathers' Day",
        );
        set.add(
            "netherlands_princesDay",
            ctx.nth_weekday(Nth(3), Weekday::Tuesday, Month::September)?,
            "Start of Parliamentary Year",
        );
        set.add(
            "netherlands_winterTime",
            ctx.nth_weekday(Last, Weekday::Sunday, Month::October)?,
            "Wintertime",
        );

        set.add_translations("nl_NL", NL_NL)
    }
}
