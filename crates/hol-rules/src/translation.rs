//! External translation lookup: `(key, locale) → title`.
//!
//! Rule sets attach the translations they know about directly; a
//! `TranslationCatalog` lets a caller layer further locales on top, e.g.
//! loaded from a configuration file.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Read-only map of holiday key → locale → title.
///
/// Deserialises from the nested-table form
/// `{ "<key>": { "<locale>": "<title>" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationCatalog {
    titles: BTreeMap<String, BTreeMap<String, String>>,
}

impl TranslationCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a title.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        locale: impl Into<String>,
        title: impl Into<String>,
    ) -> &mut Self {
        self.titles
            .entry(key.into())
            .or_default()
            .insert(locale.into(), title.into());
        self
    }

    /// Title for `key` in `locale`, if the catalog has one.
    pub fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        self.titles
            .get(key)
            .and_then(|by_locale| by_locale.get(locale))
            .map(String::as_str)
    }

    /// Every `(locale, title)` known for `key`.
    pub fn entries_for<'a>(&'a self, key: &str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.titles
            .get(key)
            .into_iter()
            .flat_map(|by_locale| by_locale.iter().map(|(l, t)| (l.as_str(), t.as_str())))
    }

    /// `true` if the catalog holds no titles.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
