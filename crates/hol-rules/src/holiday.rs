//! `HolidayRecord`: one holiday of one year.

use std::collections::BTreeMap;

use hol_time::Date;
use serde::Serialize;

/// A single holiday: stable key, date, default title and translations.
///
/// The key identifies "the same" holiday across years (e.g. `goodFriday`),
/// so results for different years can be compared and filtered by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    key: String,
    date: Date,
    title: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    translations: BTreeMap<String, String>,
    substitute: bool,
}

impl HolidayRecord {
    /// Create a record with no translations.
    pub fn new(key: impl Into<String>, date: Date, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            date,
            title: title.into(),
            translations: BTreeMap::new(),
            substitute: false,
        }
    }

    /// Mark the record as a substitute (observed) entry.
    pub fn as_substitute(mut self, substitute: bool) -> Self {
        self.substitute = substitute;
        self
    }

    /// Stable key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Date the holiday is observed on.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Default (untranslated) title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `true` if this entry replaces a nominal date that fell on a weekend.
    pub fn is_substitute(&self) -> bool {
        self.substitute
    }

    /// All translations, keyed by locale tag.
    pub fn translations(&self) -> &BTreeMap<String, String> {
        &self.translations
    }

    /// Title in `locale`, falling back to the default title.
    pub fn title_for(&self, locale: &str) -> &str {
        self.translations
            .get(locale)
            .map(String::as_str)
            .unwrap_or(&self.title)
    }

    /// Attach (or replace) the translation for `locale`.
    pub fn add_translation(&mut self, locale: impl Into<String>, title: impl Into<String>) {
        self.translations.insert(locale.into(), title.into());
    }
}
