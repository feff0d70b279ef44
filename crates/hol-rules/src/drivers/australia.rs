//! Australia (national) and Western Australia.

use hol_core::errors::Result;
use hol_time::calendar_math::WeekdayOrdinal;
use hol_time::{Date, Month, ObservancePolicy, Substitution, SubstitutionTable, Weekday};

use super::easter_cycle::{EasterCycle, Feast};
use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

const CYCLE: &[Feast] = &[Feast::GoodFriday, Feast::HolySaturday, Feast::EasterMonday];

const PLUS_ONE: &[Substitution] = &[Substitution::moved(1)];
const PLUS_TWO: &[Substitution] = &[Substitution::moved(2)];
const BOTH_DAYS: &[Substitution] = &[Substitution::KEEP, Substitution::extra(1, "Substitute")];

/// Monday substitution: Saturday → +2, Sunday → +1.
static MONDAY: SubstitutionTable =
    SubstitutionTable::new(&[(Weekday::Saturday, PLUS_TWO), (Weekday::Sunday, PLUS_ONE)]);

/// Boxing Day: both weekend days move two days ahead.
static BOXING_DAY: SubstitutionTable =
    SubstitutionTable::new(&[(Weekday::Saturday, PLUS_TWO), (Weekday::Sunday, PLUS_TWO)]);

/// Western Australian Boxing Day: a Monday Boxing Day also makes the
/// Tuesday a holiday.
static WA_BOXING_DAY: SubstitutionTable = SubstitutionTable::new(&[
    (Weekday::Saturday, PLUS_TWO),
    (Weekday::Sunday, PLUS_TWO),
    (Weekday::Monday, BOTH_DAYS),
]);

/// Years whose Western Australian Queen's Birthday was set by proclamation
/// instead of the usual rule.
const WA_QUEENS_BIRTHDAY_PROCLAIMED: &[(i32, Month, u8)] = &[
    // moved for CHOGM
    (2011, Month::October, 28),
];

/// Australia, national holidays.
///
/// * New Year's Day, Australia Day (Monday if on a weekend)
/// * Good Friday, Easter Saturday, Easter Monday
/// * Anzac Day (Apr 25)
/// * Queen's Birthday (2nd Monday of June)
/// * Christmas Day (Saturday → Monday, Sunday → Monday)
/// * Boxing Day (Saturday → Monday, Sunday → Tuesday)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Australia {
    cycle: EasterCycle,
}

impl Australia {
    /// National Australian rule set.
    pub const fn new() -> Self {
        Self {
            cycle: EasterCycle::new("australia_", CYCLE),
        }
    }
}

impl Default for Australia {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for Australia {
    fn name(&self) -> &str {
        "Australia"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["au", "aus"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.cycle)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        let monday = ObservancePolicy::TableDriven(&MONDAY);

        set.add_observed(
            "australia_newYearsDay",
            ctx.date(Month::January, 1)?,
            "New Year's Day",
            &monday,
        )?;
        set.add_observed(
            "australia_australiaDay",
            ctx.date(Month::January, 26)?,
            "Australia Day",
            &monday,
        )?;
        set.add("australia_anzacDay", ctx.date(Month::April, 25)?, "Anzac Day");
        set.add(
            "australia_queensBirthday",
            ctx.nth_weekday(WeekdayOrdinal::Nth(2), Weekday::Monday, Month::June)?,
            "Queen's Birthday",
        );
        set.add_observed(
            "australia_christmasDay",
            ctx.date(Month::December, 25)?,
            "Christmas Day",
            &monday,
        )?;
        set.add_observed(
            "australia_boxingDay",
            ctx.date(Month::December, 26)?,
            "Boxing Day",
            &ObservancePolicy::TableDriven(&BOXING_DAY),
        )?;
        Ok(())
    }
}

/// Western Australia.
///
/// Extends [`Australia`] with Labour Day (1st Monday of March) and
/// Foundation Day (1st Monday of June), moves the Queen's Birthday to the
/// end of September or start of October, and replaces the Christmas and
/// Boxing Day substitution with the state's own tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AustraliaWa {
    base: Australia,
}

impl AustraliaWa {
    /// Western Australian rule set.
    pub const fn new() -> Self {
        Self {
            base: Australia::new(),
        }
    }
}

/// Queen's Birthday in Western Australia: whichever of the last Monday of
/// September and the first Monday of October lies closer to 1 October.
/// Ties go to October.
fn wa_queens_birthday(ctx: &YearContext) -> Result<Date> {
    let year = ctx.year();
    if let Some(&(_, month, day)) = WA_QUEENS_BIRTHDAY_PROCLAIMED
        .iter()
        .find(|(y, _, _)| *y == year)
    {
        return ctx.date(month, day);
    }
    let last_in_september = ctx.nth_weekday(WeekdayOrdinal::Last, Weekday::Monday, Month::September)?;
    let first_in_october = ctx.nth_weekday(WeekdayOrdinal::Nth(1), Weekday::Monday, Month::October)?;
    let days_to_end = 30 - last_in_september.day_of_month();
    if days_to_end < first_in_october.day_of_month() {
        Ok(last_in_september)
    } else {
        Ok(first_in_october)
    }
}

impl RuleSet for AustraliaWa {
    fn name(&self) -> &str {
        "Western Australia"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["au-wa"]
    }

    fn base(&self) -> Option<&dyn RuleSet> {
        Some(&self.base)
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        set.add(
            "australia_labourDay",
            ctx.nth_weekday(WeekdayOrdinal::Nth(1), Weekday::Monday, Month::March)?,
            "Labour Day",
        );
        set.add(
            "australia_foundationDay",
            ctx.nth_weekday(WeekdayOrdinal::Nth(1), Weekday::Monday, Month::June)?,
            "Foundation Day",
        );
        set.add("australia_queensBirthday", wa_queens_birthday(ctx)?, "Queen's Birthday");
        set.add_observed(
            "australia_christmasDay",
            ctx.date(Month::December, 25)?,
            "Christmas Day",
            &ObservancePolicy::TableDriven(&MONDAY),
        )?;
        set.add_observed(
            "australia_boxingDay",
            ctx.date(Month::December, 26)?,
            "Boxing Day",
            &ObservancePolicy::TableDriven(&WA_BOXING_DAY),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekend_new_year_moves_to_monday() {
        let set = Australia::new().build(2022).unwrap();
        let r = set.get("australia_newYearsDay").unwrap();
        assert_eq!(r.date(), date(2022, 1, 3));
        assert!(r.is_substitute());
        assert_eq!(r.title(), "Substitute Bank Holiday in lieu of New Year's Day");

        let set = Australia::new().build(2023).unwrap();
        assert_eq!(set.date("australia_newYearsDay"), Some(date(2023, 1, 2)));
    }

    #[test]
    fn easter_holidays_2023() {
        let set = Australia::new().build(2023).unwrap();
        assert_eq!(set.date("australia_goodFriday"), Some(date(2023, 4, 7)));
        assert_eq!(set.date("australia_easterSaturday"), Some(date(2023, 4, 8)));
        assert_eq!(set.date("australia_easterMonday"), Some(date(2023, 4, 10)));
        assert_eq!(set.date("australia_queensBirthday"), Some(date(2023, 6, 12)));
    }

    #[test]
    fn christmas_on_weekend_2021() {
        let set = Australia::new().build(2021).unwrap();
        assert_eq!(set.date("australia_christmasDay"), Some(date(2021, 12, 27)));
        assert_eq!(set.date("australia_boxingDay"), Some(date(2021, 12, 28)));
    }

    #[test]
    fn wa_adds_state_days() {
        let set = AustraliaWa::new().build(2023).unwrap();
        assert_eq!(set.date("australia_labourDay"), Some(date(2023, 3, 6)));
        assert_eq!(set.date("australia_foundationDay"), Some(date(2023, 6, 5)));
        assert_eq!(set.date("australia_anzacDay"), Some(date(2023, 4, 25)));
    }

    #[test]
    fn wa_queens_birthday_picks_closer_monday() {
        let qb = |y| AustraliaWa::new().build(y).unwrap().date("australia_queensBirthday");
        assert_eq!(qb(2021), Some(date(2021, 9, 27)));
        assert_eq!(qb(2022), Some(date(2022, 10, 3)));
        assert_eq!(qb(2023), Some(date(2023, 10, 2)));
        assert_eq!(qb(2024), Some(date(2024, 9, 30)));
        assert_eq!(qb(2011), Some(date(2011, 10, 28)));
    }

    #[test]
    fn wa_monday_boxing_day_adds_tuesday() {
        let set = AustraliaWa::new().build(2022).unwrap();
        assert_eq!(set.date("australia_boxingDay"), Some(date(2022, 12, 26)));
        let extra = set.get("australia_boxingDaySubstitute").unwrap();
        assert_eq!(extra.date(), date(2022, 12, 27));
        assert!(extra.is_substitute());
        // Sunday Christmas moves onto the Monday as well
        assert_eq!(set.date("australia_christmasDay"), Some(date(2022, 12, 26)));
    }
}
