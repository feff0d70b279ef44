//! Portugal.

use hol_core::errors::Result;
use hol_time::calendar_math::advent_sunday;
use hol_time::Month;

use super::easter_cycle::{EasterCycle, Feast};
use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

const CYCLE: &[Feast] = &[
    Feast::Carnival,
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

const FIXED: &[(&str, Month, u8, &str)] = &[
    ("portugal_newYearsDay", Month::January, 1, "New Year's Day"),
    ("portugal_epiphany", Month::January, 6, "Epiphany"),
    ("portugal_valentinesDay", Month::February, 14, "Valentine's Day"),
    ("portugal_fathersDay", Month::March, 19, "Fathers' Day"),
    ("portugal_libertyDay", Month::April, 25, "Liberty Day"),
    ("portugal_dayOfWork", Month::May, 1, "Day of Work"),
    ("portugal_nationalDay", Month::June, 10, "Portugal Day"),
    ("portugal_mariaAscension", Month::August, 15, "Assumption of Mary"),
    ("portugal_republicDay", Month::October, 5, "Republic Day"),
    ("portugal_allSaintsDay", Month::November, 1, "All Saints' Day"),
    ("portugal_allSoulsDay", Month::November, 2, "All Souls' Day"),
    ("portugal_independenceDay", Month::December, 1, "Restoration of Independence"),
    ("portugal_santasDay", Month::December, 6, "St. Nicholas' Day"),
    ("portugal_immaculateConceptionDay", Month::December, 8, "Immaculate Conception"),
    ("portugal_christmasEve", Month::December, 24, "Christmas Eve"),
    ("portugal_christmasDay", Month::December, 25, "Christmas Day"),
    ("portugal_newYearsEve", Month::December, 31, "New Year's Eve"),
];

const ADVENT: [(&str, &str); 4] = [
    ("portugal_firstAdvent", "1. Advent"),
    ("portugal_secondAdvent", "2. Advent"),
    ("portugal_thirdAdvent", "3. Advent"),
    ("portugal_fourthAdvent", "4. Advent"),
];

const PT_PT: &[(&str, &str)] = &[
    ("portugal_newYearsDay", "Ano Novo"),
    ("portugal_epiphany", "Dia de Reis"),
    ("portugal_valentinesDay", "Dia dos Namorados"),
    ("portugal_easter", "Páscoa"),
    ("portugal_carnival", "Carnaval"),
    ("portugal_ashWednesday", "Quarta-feira de Cinzas"),
    ("portugal_palmSunday", "Dia de Ramos"),
    ("portugal_maundyThursday", "Quinta-feira Santa"),
    ("portugal_goodFriday", "Sexta-feira Santa"),
    ("portugal_easterMonday", "Segunda de Páscoa"),
    ("portugal_fathersDay", "Dia do Pai"),
    ("portugal_libertyDay", "Dia da Liberdade"),
    ("portugal_dayOfWork", "Dia do Trabalhador"),
    ("portugal_nationalDay", "Dia de Portugal"),
    ("portugal_ascensionDay", "Dia da Ascensão"),
    ("portugal_whitsun", "Pentecostes"),
    ("portugal_whitMonday", "Segunda-feira de Pentecostes"),
    ("portugal_corpusChristi", "Corpo de Deus"),
    ("portugal_mariaAscension", "Assunção de Maria"),
    ("portugal_republicDay", "Implantação da República"),
    ("portugal_allSaintsDay", "Todos os Santos"),
    ("portugal_allSoulsDay", "Dia de Finados"),
    ("portugal_independenceDay", "Restauração da Independência"),
    ("portugal_santasDay", "Dia de S. Nicolau"),
    ("portugal_immaculateConceptionDay", "Imaculada Conceição"),
    ("portugal_firstAdvent", "1. Advento"),
    ("portugal_secondAdvent", "2. Advento"),
    ("portugal_thirdAdvent", "3. Advento"),
    ("portugal_fourthAdvent", "4. Advento"),
    ("portugal_christmasEve", "Consoada"),
    ("portugal_christmasDay", "Natal"),
    ("portugal_newYearsEve", "Véspera de Ano Novo"),
];

/// Portugal, with European Portuguese (`pt_PT`) titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portugal {
    cycle: EasterCycle,
}

impl Portugal {
    /// Portuguese rule set.
    pub const fn new() -> Self {
        Self {
            cycle: EasterCycle::new("portugal_", CYCLE),
        }
    }
}

impl Default for Portugal {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for Portugal {
    fn name(&self) -> &str {
        "Portugal"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["pt", "prt"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.cycle)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        for &(key, month, day, title) in FIXED {
            set.add(key, ctx.date(month, day)?, title);
        }
        for (n, (key, title)) in (1u8..=4).zip(ADVENT) {
            set.add(key, advent_sunday(n, ctx.year())?, title);
        }
        set.add_translations("pt_PT", PT_PT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_time::{Date, Weekday};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn advent_sundays_2024() {
        let set = Portugal::new().build(2024).unwrap();
        assert_eq!(set.date("portugal_firstAdvent"), Some(date(2024, 12, 1)));
        assert_eq!(set.date("portugal_fourthAdvent"), Some(date(2024, 12, 22)));
        for (key, _) in ADVENT {
            assert_eq!(set.date(key).unwrap().weekday(), Weekday::Sunday);
        }
    }

    #[test]
    fn carnival_and_corpus_christi() {
        let set = Portugal::new().build(2024).unwrap();
        assert_eq!(set.date("portugal_carnival"), Some(date(2024, 2, 13)));
        assert_eq!(set.date("portugal_corpusChristi"), Some(date(2024, 5, 30)));
        assert_eq!(set.get("portugal_carnival").unwrap().title_for("pt_PT"), "Carnaval");
    }

    #[test]
    fn every_holiday_has_a_portuguese_title() {
        let set = Portugal::new().build(2025).unwrap();
        assert_eq!(set.len(), PT_PT.len());
        assert!(set.iter().all(|r| r.translations().contains_key("pt_PT")));
    }
}
