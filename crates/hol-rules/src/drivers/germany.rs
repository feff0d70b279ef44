//! Germany.

use hol_core::errors::Result;
use hol_time::Month;

use super::christian::Christian;
use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

/// German Unification Day is observed from this year on.
const UNIFICATION_FROM: i32 = 1990;

const DE_DE: &[(&str, &str)] = &[
    ("newYearsDay", "Neujahr"),
    ("epiphany", "Heilige drei Könige"),
    ("ashWednesday", "Aschermittwoch"),
    ("palmSunday", "Palmsonntag"),
    ("maundyThursday", "Gründonnerstag"),
    ("goodFriday", "Karfreitag"),
    ("easter", "Ostersonntag"),
    ("easterMonday", "Ostermontag"),
    ("dayOfWork", "Tag der Arbeit"),
    ("ascensionDay", "Christi Himmelfahrt"),
    ("whitsun", "Pfingstsonntag"),
    ("whitMonday", "Pfingstmontag"),
    ("corpusChristi", "Fronleichnam"),
    ("mariaAscension", "Mariä Himmelfahrt"),
    ("thanksGiving", "Erntedankfest"),
    ("reformationDay", "Reformationstag"),
    ("allSaintsDay", "Allerheiligen"),
    ("allSoulsDay", "Allerseelen"),
    ("stMartinsDay", "Martinstag"),
    ("dayOfRepentance", "Buß- und Bettag"),
    ("deathSunday", "Totensonntag"),
    ("advent1", "1. Advent"),
    ("advent2", "2. Advent"),
    ("advent3", "3. Advent"),
    ("advent4", "4. Advent"),
    ("stNicholasDay", "Nikolaustag"),
    ("christmasEve", "Heiligabend"),
    ("christmasDay", "1. Weihnachtsfeiertag"),
    ("boxingDay", "2. Weihnachtsfeiertag"),
    ("newYearsEve", "Silvester"),
];

/// Germany: the Christian church year plus the national days, with German
/// (`de_DE`) titles.  State-level selections are expressed as filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Germany {
    base: Christian,
}

impl Germany {
    /// German rule set.
    pub const fn new() -> Self {
        Self {
            base: Christian::new(),
        }
    }
}

impl RuleSet for Germany {
    fn name(&self) -> &str {
        "Germany"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["de", "deu"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.base)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        set.add("newYearsDay", ctx.date(Month::January, 1)?, "New Year's Day");
        set.add("dayOfWork", ctx.date(Month::May, 1)?, "Day of Work");
        if ctx.year() >= UNIFICATION_FROM {
            set.add(
                "germanUnificationDay",
                ctx.date(Month::October, 3)?,
                "German Unification Day",
            );
            set.add_translation("germanUnificationDay", "de_DE", "Tag der deutschen Einheit")?;
        }
        set.add("reformationDay", ctx.date(Month::October, 31)?, "Reformation Day");
        set.add_translations("de_DE", DE_DE)
    }
}
