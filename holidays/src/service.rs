//! Query API: "holidays for country X in year Y".

use std::sync::Arc;

use hol_core::errors::Result;
use hol_rules::{DriverRegistry, Filter, HolidayRecord, HolidaySet, RuleSet};
use hol_time::Date;
use serde::Serialize;
use tracing::{info, instrument};

use crate::settings::Settings;

/// One request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayQuery {
    /// ISO 3166 code (`"us"`, `"NLD"`, `"au-wa"`, ...), any case.
    pub country: String,
    /// Calendar year.
    pub year: i32,
    /// Locale for [`HolidayEntry::localized_title`].
    pub locale: Option<String>,
    /// Name of a filter to narrow the result.
    pub filter: Option<String>,
}

impl HolidayQuery {
    /// All holidays of `country` in `year`, default titles only.
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            locale: None,
            filter: None,
        }
    }

    /// Request titles in `locale`.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Narrow the result with the filter called `name`.
    pub fn with_filter(mut self, name: impl Into<String>) -> Self {
        self.filter = Some(name.into());
        self
    }
}

/// One holiday in a query result.
///
/// Serialises with the date as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayEntry {
    /// Stable key.
    pub key: String,
    /// Observed date.
    pub date: Date,
    /// Default title.
    pub title: String,
    /// Title in the requested locale, or the default title when the
    /// holiday has no translation for it; `None` when no locale applies.
    pub localized_title: Option<String>,
}

impl HolidayEntry {
    fn from_record(record: &HolidayRecord, locale: Option<&str>) -> Self {
        Self {
            key: record.key().to_owned(),
            date: record.date(),
            title: record.title().to_owned(),
            localized_title: locale.map(|l| record.title_for(l).to_owned()),
        }
    }
}

/// Resolves queries against a [`DriverRegistry`] and [`Settings`].
#[derive(Debug, Clone)]
pub struct HolidayService {
    registry: DriverRegistry,
    settings: Settings,
}

impl Default for HolidayService {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl HolidayService {
    /// Service over the built-in rule sets and filters plus the filters
    /// defined in `settings`.
    pub fn new(settings: Settings) -> Self {
        Self::with_registry(DriverRegistry::builtin(), settings)
    }

    /// Service over a caller-supplied registry.
    pub fn with_registry(mut registry: DriverRegistry, settings: Settings) -> Self {
        for filter in &settings.filters {
            registry.register_filter(Filter::from(filter));
        }
        Self { registry, settings }
    }

    /// The registry queries are resolved against.
    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    /// The active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build, localise and filter the holiday set for `query`.
    ///
    /// # Errors
    /// `UnsupportedCountry`, `UnknownFilter`, or any error of the rule set's
    /// build (e.g. `InvalidYear`).
    pub fn holiday_set(&self, query: &HolidayQuery) -> Result<HolidaySet> {
        let driver = self.registry.driver(&query.country)?;
        let filter_name = query
            .filter
            .as_deref()
            .or_else(|| self.default_filter(&query.country, &driver));
        // resolve the filter before building so a bad name fails fast
        let filter = filter_name.map(|name| self.registry.filter(name)).transpose()?;

        let mut set = driver.build(query.year)?;
        if !self.settings.translations.is_empty() {
            set.localize(&self.settings.translations);
        }
        Ok(match filter {
            Some(f) => f.apply(&set),
            None => set,
        })
    }

    /// Configured default filter for `country`.  A filter configured for
    /// another code of the same rule set applies too, unless `country`
    /// has its own entry.
    fn default_filter(&self, country: &str, driver: &Arc<dyn RuleSet>) -> Option<&str> {
        self.settings.default_filter(country).or_else(|| {
            self.settings
                .default_filters
                .iter()
                .find(|(code, _)| {
                    self.registry
                        .driver(code)
                        .is_ok_and(|other| Arc::ptr_eq(&other, driver))
                })
                .map(|(_, name)| name.as_str())
        })
    }

    /// Holidays for `query`, in rule-set order.
    #[instrument(skip(self, query), fields(country = %query.country, year = query.year))]
    pub fn holidays(&self, query: &HolidayQuery) -> Result<Vec<HolidayEntry>> {
        let set = self.holiday_set(query)?;
        let locale = query
            .locale
            .as_deref()
            .or(self.settings.default_locale.as_deref());
        let entries: Vec<_> = set
            .iter()
            .map(|r| HolidayEntry::from_record(r, locale))
            .collect();
        info!(rule_set = set.name(), holidays = entries.len(), "resolved holidays");
        Ok(entries)
    }
}
