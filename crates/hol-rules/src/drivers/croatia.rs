//! Croatia.

use hol_core::errors::Result;
use hol_time::Month;

use super::easter_cycle::{EasterCycle, Feast};
use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

const CYCLE: &[Feast] = &[Feast::Easter, Feast::EasterMonday, Feast::CorpusChristi];

const FIXED: &[(&str, Month, u8, &str)] = &[
    ("croatia_newYearsDay", Month::January, 1, "New Year's Day"),
    ("croatia_epiphany", Month::January, 6, "Epiphany"),
    ("croatia_labourDay", Month::May, 1, "Labour Day"),
    ("croatia_antiFascistStruggleDay", Month::June, 22, "Anti-Fascist Struggle Day"),
    ("croatia_statehoodDay", Month::June, 25, "Statehood Day"),
    ("croatia_victoryDay", Month::August, 5, "Victory and Homeland Thanksgiving Day"),
    ("croatia_assumptionDay", Month::August, 15, "Assumption of Mary"),
    ("croatia_independenceDay", Month::October, 8, "Independence Day"),
    ("croatia_allSaintsDay", Month::November, 1, "All Saints' Day"),
    ("croatia_christmasDay", Month::December, 25, "Christmas Day"),
    ("croatia_stStephensDay", Month::December, 26, "St. Stephen's Day"),
];

const HR_HR: &[(&str, &str)] = &[
    ("croatia_newYearsDay", "Nova godina"),
    ("croatia_epiphany", "Sveta tri kralja"),
    ("croatia_easter", "Uskrs"),
    ("croatia_easterMonday", "Uskršnji ponedjeljak"),
    ("croatia_labourDay", "Praznik rada"),
    ("croatia_corpusChristi", "Tijelovo"),
    ("croatia_antiFascistStruggleDay", "Dan antifašističke borbe"),
    ("croatia_statehoodDay", "Dan državnosti"),
    ("croatia_victoryDay", "Dan domovinske zahvalnosti"),
    ("croatia_assumptionDay", "Velika Gospa"),
    ("croatia_independenceDay", "Dan neovisnosti"),
    ("croatia_allSaintsDay", "Dan svih svetih"),
    ("croatia_christmasDay", "Božić"),
    ("croatia_stStephensDay", "Sveti Stjepan"),
];

/// Croatia, with Croatian (`hr_HR`) titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Croatia {
    cycle: EasterCycle,
}

impl Croatia {
    /// Croatian rule set.
    pub const fn new() -> Self {
        Self {
            cycle: EasterCycle::new("croatia_", CYCLE),
        }
    }
}

impl Default for Croatia {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for Croatia {
    fn name(&self) -> &str {
        "Croatia"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["hr", "hrv"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.cycle)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        for &(key, month, day, title) in FIXED {
            set.add(key, ctx.date(month, day)?, title);
        }
        set.add_translations("hr_HR", HR_HR)
    }
}
