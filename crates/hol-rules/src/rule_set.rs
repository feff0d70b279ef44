//! `RuleSet` trait: the per-country holiday algorithm.
//!
//! Rule sets compose explicitly.  A country rule set names its base through
//! [`RuleSet::base`]; [`RuleSet::build`] runs the base first and then the
//! country's own [`RuleSet::add_holidays`], all against one shared
//! [`YearContext`], so every layer sees the same year and the same Easter
//! date.

use hol_core::errors::Result;
use hol_time::calendar_math::{self, WeekdayOrdinal};
use hol_time::{Date, Month, Weekday};
use tracing::debug;

use crate::holiday_set::HolidaySet;

/// Everything a rule set may depend on while building one year.
///
/// Easter Sunday is computed once per build and shared by the base and
/// every composed rule set.
#[derive(Debug, Clone)]
pub struct YearContext {
    year: i32,
    easter: Result<Date>,
}

impl YearContext {
    /// Context for `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            easter: calendar_math::easter(year),
        }
    }

    /// The year being built.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Easter Sunday of the year.
    ///
    /// # Errors
    /// `InvalidYear` for years before the Gregorian reform.
    pub fn easter(&self) -> Result<Date> {
        self.easter.clone()
    }

    /// Easter Sunday shifted by `offset` days.
    pub fn easter_offset(&self, offset: i32) -> Result<Date> {
        self.easter()?.add_days(offset)
    }

    /// `month`/`day` of the year being built.
    pub fn date(&self, month: Month, day: u8) -> Result<Date> {
        Date::new(self.year, month, day)
    }

    /// n-th (or last) `weekday` of `month` in the year being built.
    pub fn nth_weekday(&self, ordinal: WeekdayOrdinal, weekday: Weekday, month: Month) -> Result<Date> {
        calendar_math::nth_weekday_of_month(ordinal, weekday, month, self.year)
    }
}

/// A per-country (or shared) holiday rule set, a.k.a. driver.
///
/// Implementors only write [`RuleSet::add_holidays`]; the provided
/// [`RuleSet::build`] takes care of composition.  `build` is a pure function
/// of the year: it reads no clock and no shared mutable state, so a rule set
/// can be built from several threads at once.
pub trait RuleSet: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"USA"`).
    fn name(&self) -> &str;

    /// ISO 3166 codes this rule set answers to, lower case.
    ///
    /// Shared bases that are not a country return an empty slice.
    fn iso_codes(&self) -> &[&'static str] {
        &[]
    }

    /// The rule set this one extends, if any.
    fn base(&self) -> Option<&dyn RuleSet> {
        None
    }

    /// Add (or override) this rule set's own holidays.
    fn add_holidays(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()>;

    /// Run the base chain, then this rule set, into `set`.
    fn compose(&self, ctx: &YearContext, set: &mut HolidaySet) -> Result<()> {
        if let Some(base) = self.base() {
            base.compose(ctx, set)?;
        }
        self.add_holidays(ctx, set)
    }

    /// Easter Sunday as this rule set computes it.
    fn easter(&self, year: i32) -> Result<Date> {
        YearContext::new(year).easter()
    }

    /// All holidays for `year`.
    ///
    /// All or nothing: if any rule fails, the error is returned and no
    /// partial set escapes.
    fn build(&self, year: i32) -> Result<HolidaySet> {
        let ctx = YearContext::new(year);
        let mut set = HolidaySet::new(self.name(), year);
        self.compose(&ctx, &mut set)?;
        debug!(rule_set = self.name(), year, holidays = set.len(), "built holiday set");
        Ok(set)
    }
}
