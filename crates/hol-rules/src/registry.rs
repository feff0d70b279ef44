//! Driver discovery by ISO 3166 code and filter lookup by name.

use std::collections::BTreeMap;
use std::sync::Arc;

use hol_core::errors::{Error, Result};
use tracing::debug;

use crate::drivers::{Australia, AustraliaWa, Brazil, Croatia, Germany, Iceland, Netherlands, Portugal, Usa};
use crate::filter::{builtin_filters, Filter};
use crate::rule_set::RuleSet;

/// Maps ISO codes to rule sets and names to filters.
///
/// Codes are matched case-insensitively.  Rule sets are shared behind
/// `Arc`, so one registry can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct DriverRegistry {
    drivers: BTreeMap<String, Arc<dyn RuleSet>>,
    filters: BTreeMap<String, Arc<Filter>>,
}

impl DriverRegistry {
    /// Registry with no drivers and no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in country rule set and filter.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let drivers: [Arc<dyn RuleSet>; 9] = [
            Arc::new(Usa),
            Arc::new(Australia::new()),
            Arc::new(AustraliaWa::new()),
            Arc::new(Netherlands::new()),
            Arc::new(Iceland::new()),
            Arc::new(Brazil::new()),
            Arc::new(Croatia::new()),
            Arc::new(Portugal::new()),
            Arc::new(Germany::new()),
        ];
        for driver in drivers {
            registry.register(driver);
        }
        for filter in builtin_filters() {
            registry.register_filter(filter);
        }
        registry
    }

    /// Register `driver` under each of its ISO codes, replacing any rule
    /// set previously registered under the same code.
    pub fn register(&mut self, driver: Arc<dyn RuleSet>) {
        for code in driver.iso_codes() {
            debug!(code, driver = driver.name(), "registering rule set");
            self.drivers.insert(code.to_ascii_lowercase(), Arc::clone(&driver));
        }
    }

    /// Register `filter` under its name.
    pub fn register_filter(&mut self, filter: Filter) {
        self.filters.insert(filter.name().to_owned(), Arc::new(filter));
    }

    /// Rule set for `code`.
    ///
    /// # Errors
    /// [`Error::UnsupportedCountry`] if no rule set answers to `code`.
    pub fn driver(&self, code: &str) -> Result<Arc<dyn RuleSet>> {
        self.drivers
            .get(&code.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| Error::UnsupportedCountry(code.to_owned()))
    }

    /// Filter called `name`.
    ///
    /// # Errors
    /// [`Error::UnknownFilter`] if there is no such filter.
    pub fn filter(&self, name: &str) -> Result<Arc<Filter>> {
        self.filters
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownFilter(name.to_owned()))
    }

    /// Supported codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.drivers.keys().map(String::as_str)
    }

    /// Registered filter names, sorted.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = DriverRegistry::builtin();
        assert_eq!(registry.driver("US").unwrap().name(), "USA");
        assert_eq!(registry.driver("nld").unwrap().name(), "Netherlands");
        assert_eq!(registry.driver("AU-WA").unwrap().name(), "Western Australia");
    }

    #[test]
    fn unknown_code_and_filter() {
        let registry = DriverRegistry::builtin();
        assert_eq!(
            registry.driver("xx").unwrap_err(),
            Error::UnsupportedCountry("xx".into())
        );
        assert!(matches!(registry.filter("nope"), Err(Error::UnknownFilter(_))));
    }

    #[test]
    fn every_code_is_listed() {
        let registry = DriverRegistry::builtin();
        let codes: Vec<_> = registry.codes().collect();
        for code in ["au", "au-wa", "aus", "br", "bra", "de", "deu", "hr", "hrv", "is", "isl", "nl", "nld", "prt", "pt", "us", "usa"] {
            assert!(codes.contains(&code), "{code}");
        }
        assert_eq!(codes.len(), 17);
    }
}
