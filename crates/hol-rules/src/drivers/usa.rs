//! United States federal holidays.

use hol_core::errors::Result;
use hol_time::calendar_math::WeekdayOrdinal;
use hol_time::{Month, ObservancePolicy, Weekday};

use crate::holiday_set::HolidaySet;
use crate::rule_set::{RuleSet, YearContext};

/// First year Martin Luther King Jr. Day was observed.
const MLK_DAY_FROM: i32 = 1986;
/// First year Juneteenth was a federal holiday.
const JUNETEENTH_FROM: i32 = 2021;

/// United States of America.
///
/// New Year's Day, Juneteenth, Independence Day and Christmas Day move to
/// the nearest workday when they fall on a weekend (Saturday to Friday,
/// Sunday to Monday).  Veterans Day is never shifted.
///
/// ```
/// use hol_rules::drivers::Usa;
/// use hol_rules::RuleSet;
/// use hol_time::Date;
///
/// let set = Usa.build(2023)?;
/// assert_eq!(set.date("usa_thanksgivingDay"), Some(Date::from_ymd(2023, 11, 23)?));
/// # Ok::<(), hol_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usa;

impl RuleSet for Usa {
    fn name(&self) -> &str {
        "USA"
    }

    fn iso_codes(&self) -> &[&'static str] {
        &["us", "usa"]
    }

    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        use WeekdayOrdinal::{Last, Nth};

        let workday = ObservancePolicy::NearestWorkday;
        let year = ctx.year();

        set.add_observed("usa_newYearsDay", ctx.date(Month::January, 1)?, "New Year's Day", &workday)?;
        if year >= MLK_DAY_FROM {
            set.add(
                "usa_mlkDay",
                ctx.nth_weekday(Nth(3), Weekday::Monday, Month::January)?,
                "Dr. Martin Luther King Jr's Birthday",
            );
        }
        set.add(
            "usa_presidentsDay",
            ctx.nth_weekday(Nth(3), Weekday::Monday, Month::February)?,
            "President's Day",
        );
        set.add(
            "usa_memorialDay",
            ctx.nth_weekday(Last, Weekday::Monday, Month::May)?,
            "Memorial Day",
        );
        if year >= JUNETEENTH_FROM {
            set.add_observed("usa_juneteenth", ctx.date(Month::June, 19)?, "Juneteenth", &workday)?;
        }
        set.add_observed(
            "usa_independenceDay",
            ctx.date(Month::July, 4)?,
            "Independence Day",
            &workday,
        )?;
        set.add(
            "usa_laborDay",
            ctx.nth_weekday(Nth(1), Weekday::Monday, Month::September)?,
            "Labor Day",
        );
        set.add(
            "usa_columbusDay",
            ctx.nth_weekday(Nth(2), Weekday::Monday, Month::October)?,
            "Columbus Day",
        );
        set.add("usa_veteransDay", ctx.date(Month::November, 11)?, "Veteran's Day");
        set.add(
            "usa_thanksgivingDay",
            ctx.nth_weekday(Nth(4), Weekday::Thursday, Month::November)?,
            "Thanksgiving Day",
        );
        set.add_observed("usa_christmasDay", ctx.date(Month::December, 25)?, "Christmas Day", &workday)?;
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
    fn independence_day_2021_moves_to_monday() {
        let set = Usa.build(2021).unwrap();
        let r = set.get("usa_independenceDay").unwrap();
        assert_eq!(r.date(), date(2021, 7, 5));
        assert!(r.is_substitute());
        assert_eq!(r.title(), "Independence Day");
    }

    #[test]
    fn saturday_holiday_moves_to_friday() {
        // 2021-12-25 is a Saturday
        let set = Usa.build(2021).unwrap();
        assert_eq!(set.date("usa_christmasDay"), Some(date(2021, 12, 24)));
        // 2021-06-19 is a Saturday too
        assert_eq!(set.date("usa_juneteenth"), Some(date(2021, 6, 18)));
    }

    #[test]
    fn veterans_day_is_never_shifted() {
        // 2023-11-11 is a Saturday
        let set = Usa.build(2023).unwrap();
        assert_eq!(set.date("usa_veteransDay"), Some(date(2023, 11, 11)));
    }

    #[test]
    fn historical_bounds() {
        let set = Usa.build(1980).unwrap();
        assert!(!set.contains_key("usa_mlkDay"));
        assert!(!set.contains_key("usa_juneteenth"));
        assert_eq!(set.len(), 9);

        let set = Usa.build(2024).unwrap();
        assert_eq!(set.date("usa_mlkDay"), Some(date(2024, 1, 15)));
        assert_eq!(set.len(), 11);
    }

    #[test]
    fn nth_weekday_holidays_2023() {
        let set = Usa.build(2023).unwrap();
        assert_eq!(set.date("usa_presidentsDay"), Some(date(2023, 2, 20)));
        assert_eq!(set.date("usa_memorialDay"), Some(date(2023, 5, 29)));
        assert_eq!(set.date("usa_laborDay"), Some(date(2023, 9, 4)));
        assert_eq!(set.date("usa_columbusDay"), Some(date(2023, 10, 9)));
    }
}
