//! Integration tests for the built-in rule sets.
//!
//! Reference dates are taken from published public-holiday calendars of the
//! respective countries.

use std::collections::HashSet;

use hol_core::Error;
use hol_rules::drivers::{Australia, AustraliaWa, Brazil, Christian, Germany, Netherlands, Usa};
use hol_rules::{DriverRegistry, HolidaySet, RuleSet};
use hol_time::calendar_math::easter;
use hol_time::Date;
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn build(code: &str, year: i32) -> HolidaySet {
    DriverRegistry::builtin().driver(code).unwrap().build(year).unwrap()
}

// ─── Structural properties ────────────────────────────────────────────────────

#[test]
fn keys_are_unique_for_every_driver_1900_2100() {
    let registry = DriverRegistry::builtin();
    for code in registry.codes() {
        let driver = registry.driver(code).unwrap();
        for year in 1900..=2100 {
            let set = driver.build(year).unwrap();
            let keys: HashSet<_> = set.keys().collect();
            assert_eq!(keys.len(), set.len(), "{code} {year}");
            assert_eq!(set.year(), year);
        }
    }
}

#[test]
fn julian_years_are_rejected_by_easter_based_drivers() {
    let registry = DriverRegistry::builtin();
    for code in registry.codes().filter(|c| !matches!(*c, "us" | "usa")) {
        let r = registry.driver(code).unwrap().build(1582);
        assert!(matches!(r, Err(Error::InvalidYear { year: 1582, .. })), "{code}");
    }
}

#[test]
fn fixed_and_weekday_rules_build_any_gregorian_year() {
    let set = DriverRegistry::builtin().driver("us").unwrap().build(1582).unwrap();
    assert_eq!(set.year(), 1582);
    assert_eq!(
        set.date("usa_thanksgivingDay"),
        Some(Date::from_ymd(1582, 11, 25).unwrap())
    );
}

#[test]
fn easter_is_shared_by_base_and_country() {
    let cases: [(&dyn RuleSet, &str); 7] = [
        (&Christian::new(), "easter"),
        (&Brazil::new(), "easter"),
        (&Germany::new(), "easter"),
        (&Netherlands::new(), "netherlands_easter"),
        (&hol_rules::drivers::Iceland::new(), "iceland_easter"),
        (&hol_rules::drivers::Croatia::new(), "croatia_easter"),
        (&hol_rules::drivers::Portugal::new(), "portugal_easter"),
    ];
    for year in [1600, 1818, 1943, 2000, 2024, 2025, 2100] {
        for (driver, key) in cases {
            let set = driver.build(year).unwrap();
            assert_eq!(set.date(key), Some(easter(year).unwrap()), "{} {year}", driver.name());
            assert_eq!(driver.easter(year).unwrap(), easter(year).unwrap());
        }
    }
}

#[test]
fn country_extends_base_without_losing_keys() {
    for year in [1950, 2024] {
        let base = Christian::new().build(year).unwrap();
        let brazil = Brazil::new().build(year).unwrap();
        for key in base.keys() {
            assert!(brazil.contains_key(key), "{key} {year}");
        }
        // base order is kept
        assert_eq!(
            brazil.keys().take(base.len()).collect::<Vec<_>>(),
            base.keys().collect::<Vec<_>>()
        );
    }
}

proptest! {
    #[test]
    fn builds_are_deterministic(year in 1583i32..=4000) {
        let registry = DriverRegistry::builtin();
        for code in ["us", "au-wa", "nl", "is", "br", "hr", "pt", "de"] {
            let driver = registry.driver(code).unwrap();
            prop_assert_eq!(driver.build(year).unwrap(), driver.build(year).unwrap());
        }
    }
}

// ─── USA ──────────────────────────────────────────────────────────────────────

#[test]
fn usa_2021_independence_day_observed_on_monday() {
    let set = build("usa", 2021);
    assert_eq!(set.date("usa_independenceDay"), Some(date(2021, 7, 5)));
}

#[test]
fn usa_2023_thanksgiving() {
    assert_eq!(build("us", 2023).date("usa_thanksgivingDay"), Some(date(2023, 11, 23)));
}

#[test]
fn usa_new_year_on_saturday_moves_into_previous_year() {
    // 2022-01-01 is a Saturday
    let set = Usa.build(2022).unwrap();
    assert_eq!(set.date("usa_newYearsDay"), Some(date(2021, 12, 31)));
}

// ─── Western Australia ────────────────────────────────────────────────────────

#[test]
fn wa_2023_christmas_unmodified() {
    let set = AustraliaWa::new().build(2023).unwrap();
    let r = set.get("australia_christmasDay").unwrap();
    assert_eq!(r.date(), date(2023, 12, 25));
    assert!(!r.is_substitute());
    assert_eq!(r.title(), "Christmas Day");
}

#[test]
fn wa_2021_christmas_substitute() {
    let set = AustraliaWa::new().build(2021).unwrap();
    let r = set.get("australia_christmasDay").unwrap();
    assert_eq!(r.date(), date(2021, 12, 27));
    assert!(r.is_substitute());
    assert_eq!(r.title(), "Substitute Bank Holiday in lieu of Christmas Day");
}

#[test]
fn wa_2022_boxing_day_on_26th_and_27th() {
    let set = AustraliaWa::new().build(2022).unwrap();
    let dates: Vec<_> = set
        .iter()
        .filter(|r| r.key().starts_with("australia_boxingDay"))
        .map(|r| r.date())
        .collect();
    assert_eq!(dates, [date(2022, 12, 26), date(2022, 12, 27)]);
}

#[test]
fn wa_2011_queens_birthday_proclaimed() {
    let set = AustraliaWa::new().build(2011).unwrap();
    assert_eq!(set.date("australia_queensBirthday"), Some(date(2011, 10, 28)));
}

#[test]
fn wa_overrides_national_queens_birthday() {
    let national = Australia::new().build(2024).unwrap();
    let wa = AustraliaWa::new().build(2024).unwrap();
    assert_eq!(national.date("australia_queensBirthday"), Some(date(2024, 6, 10)));
    assert_eq!(wa.date("australia_queensBirthday"), Some(date(2024, 9, 30)));
    // the override keeps the national position
    let pos = |set: &HolidaySet| set.keys().position(|k| k == "australia_queensBirthday");
    assert_eq!(pos(&national), pos(&wa));
}

// ─── Netherlands ──────────────────────────────────────────────────────────────

#[test]
fn netherlands_queens_day_sunday_rule() {
    assert_eq!(build("nl", 1978).date("netherlands_queenDay"), Some(date(1978, 5, 1)));
    assert_eq!(build("nl", 1989).date("netherlands_queenDay"), Some(date(1989, 4, 29)));
}

#[test]
fn netherlands_liberation_day_clamps_to_1947() {
    for year in [1900, 1946] {
        let set = build("nld", year);
        assert_eq!(set.date("netherlands_liberationDay"), Some(date(1947, 5, 5)));
        assert_eq!(set.date("netherlands_commemorationDay"), Some(date(1947, 5, 4)));
    }
    assert_eq!(build("nld", 1947).date("netherlands_liberationDay"), Some(date(1947, 5, 5)));
}

// ─── Brazil ───────────────────────────────────────────────────────────────────

#[test]
fn brazil_carnival_follows_base_ash_wednesday() {
    for year in 1990..=2030 {
        let set = build("br", year);
        let ash = set.date("ashWednesday").unwrap();
        assert_eq!(set.date("carnival"), Some(ash.add_days(-1).unwrap()), "{year}");
        assert_eq!(ash, easter(year).unwrap().add_days(-46).unwrap());
    }
}
