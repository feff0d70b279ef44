//! Brazil.

use hol_core::errors::Result;
use hol_time::calendar_math::WeekdayOrdinal;
use hol_time::{Month, Weekday};

use super::christian::Christian;
use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

const FIXED: &[(&str, Month, u8, &str)] = &[
    ("newYearsDay", Month::January, 1, "New Year's Day"),
    ("womensDay", Month::March, 8, "International Women's Day"),
    ("tiradentesDay", Month::April, 21, "Tiradentes' Day"),
    ("laborDay", Month::May, 1, "Labor Day"),
    ("valentinesDay", Month::June, 12, "Valentine's Day"),
    ("independenceDay", Month::September, 7, "Independence Day"),
    ("aparecidaDay", Month::October, 12, "Our Lady of Aparecida Day"),
    ("childrenDay", Month::October, 12, "Children's Day"),
    ("republicDay", Month::November, 15, "Proclamation of the Republic"),
];

const PT_BR: &[(&str, &str)] = &[
    ("easter", "Páscoa"),
    ("ashWednesday", "Quarta-Feira de Cinzas"),
    ("goodFriday", "Sexta-Feira Santa"),
    ("corpusChristi", "Corpus Christi"),
    ("thanksGiving", "Dia de Ação de Graças"),
    ("allSoulsDay", "Dia de Finados"),
    ("christmasDay", "Natal"),
    ("newYearsDay", "Ano Novo"),
    ("carnival", "Carnaval"),
    ("womensDay", "Dia Internacional das Mulheres"),
    ("tiradentesDay", "Dia de Tiradentes"),
    ("laborDay", "Dia do Trabalho"),
    ("mothersDay", "Dia das Mães"),
    ("valentinesDay", "Dia dos Namorados"),
    ("fathersDay", "Dia dos Pais"),
    ("independenceDay", "Dia da Independência"),
    ("aparecidaDay", "Dia de Nossa Senhora de Aparecida"),
    ("childrenDay", "Dia das Crianças"),
    ("republicDay", "Proclamação da República"),
];

/// Brazil: the Christian church year plus national days, with Brazilian
/// Portuguese (`pt_BR`) titles.
///
/// Carnival is the day before Ash Wednesday, read back from the Christian
/// base's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brazil {
    base: Christian,
}

impl Brazil {
    /// Brazilian rule set.
    pub const fn new() -> Self {
        Self {
            base: Christian::new(),
        }
    }
}

impl RuleSet for Brazil {
    fn name(&self) -> &str {
        "Brazil"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["br", "bra"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.base)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        let ash_wednesday = set.require_date("ashWednesday")?;
        set.add("carnival", ash_wednesday.add_days(-1)?, "Carnival");

        for &(key, month, day, title) in FIXED {
            set.add(key, ctx.date(month, day)?, title);
        }
        set.add(
            "mothersDay",
            ctx.nth_weekday(WeekdayOrdinal::Nth(2), Weekday::Sunday, Month::May)?,
            "Mothers' Day",
        );
        set.add(
            "fathersDay",
            ctx.nth_weekday(WeekdayOrdinal::Nth(2), Weekday::Sunday, Month::August)?,
            "Fathers' Day",
        );
        set.add_translations("pt_BR", PT_BR)
    }
}
