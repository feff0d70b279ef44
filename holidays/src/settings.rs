//! TOML configuration.
//!
//! ```toml
//! default_locale = "de_DE"
//!
//! [default_filters]
//! de = "germany/bavaria"
//!
//! [[filters]]
//! name = "company/berlin"
//! keys = ["newYearsDay", "christmasDay", "boxingDay"]
//!
//! [translations.goodFriday]
//! fr_FR = "Vendredi saint"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use hol_core::errors::{Error, Result};
use hol_rules::{Filter, TranslationCatalog};
use serde::Deserialize;

/// Service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Locale used when a query names none.
    #[serde(default)]
    pub default_locale: Option<String>,

    /// Filter applied when a query for that country (ISO code, any case)
    /// names none.
    #[serde(default)]
    pub default_filters: BTreeMap<String, String>,

    /// Additional filters, registered next to the built-in ones.
    #[serde(default)]
    pub filters: Vec<FilterToml>,

    /// Extra titles merged into every result: key → locale → title.
    #[serde(default)]
    pub translations: TranslationCatalog,
}

/// A filter defined in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterToml {
    /// Filter name used in queries.
    pub name: String,
    /// Holiday keys the filter keeps.
    #[serde(default)]
    pub keys: Vec<String>,
}

impl From<&FilterToml> for Filter {
    fn from(f: &FilterToml) -> Self {
        Filter::new(f.name.clone(), f.keys.iter().cloned())
    }
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// [`Error::Config`] if the text is not valid TOML or does not match
    /// the settings schema (unknown fields are rejected).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a TOML settings file.
    ///
    /// # Errors
    /// [`Error::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Default filter name for `country`, if one is configured.
    pub fn default_filter(&self, country: &str) -> Option<&str> {
        self.default_filters
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(country))
            .map(|(_, name)| name.as_str())
    }
}
