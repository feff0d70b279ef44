//! `HolidaySet`: the holidays of one rule set for one year.

use std::collections::HashMap;

use hol_core::errors::{Error, Result};
use hol_time::{Date, ObservancePolicy};
use serde::{Serialize, Serializer};

use crate::holiday::HolidayRecord;
use crate::translation::TranslationCatalog;

/// Ordered, key-unique collection of [`HolidayRecord`]s.
///
/// Iteration follows first-insertion order, so holidays contributed by a
/// base rule set come before the ones a country adds.  Inserting a key that
/// already exists **replaces** the record in place; country rule sets use
/// this to override a base holiday or a placeholder date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    name: String,
    year: i32,
    records: Vec<HolidayRecord>,
    index: HashMap<String, usize>,
}

impl HolidaySet {
    /// Empty set for `year`, labelled with the producing rule set's name.
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            year,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Name of the rule set that produced the set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Year the set was computed for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if the set holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Insert `record`, replacing any record with the same key.
    ///
    /// A replaced record keeps its position; the previous record is
    /// returned.
    pub fn insert(&mut self, record: HolidayRecord) -> Option<HolidayRecord> {
        if let Some(&i) = self.index.get(record.key()) {
            return Some(std::mem::replace(&mut self.records[i], record));
        }
        self.index.insert(record.key().to_owned(), self.records.len());
        self.records.push(record);
        None
    }

    /// Insert a plain holiday; shorthand for [`HolidaySet::insert`].
    pub fn add(&mut self, key: impl Into<String>, date: Date, title: impl Into<String>) {
        self.insert(HolidayRecord::new(key, date, title));
    }

    /// Insert the entries `policy` produces for a holiday nominally on
    /// `raw`.  Each entry is keyed `key + suffix` and titled
    /// `prefix + title`.
    pub fn add_observed(
        &mut self,
        key: &str,
        raw: Date,
        title: &str,
        policy: &ObservancePolicy,
    ) -> Result<()> {
        for observed in policy.apply(raw)? {
            self.insert(
                HolidayRecord::new(
                    format!("{key}{}", observed.key_suffix),
                    observed.date,
                    format!("{}{title}", observed.title_prefix),
                )
                .as_substitute(observed.substitute),
            );
        }
        Ok(())
    }

    /// Attach a translation to an existing holiday.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if no holiday has that key.
    pub fn add_translation(&mut self, key: &str, locale: &str, title: &str) -> Result<()> {
        let i = *self.index.get(key).ok_or_else(|| {
            Error::InvalidArgument(format!("no holiday {key:?} in {} {}", self.name, self.year))
        })?;
        self.records[i].add_translation(locale, title);
        Ok(())
    }

    /// Attach `locale` translations for several keys at once.
    pub fn add_translations(&mut self, locale: &str, titles: &[(&str, &str)]) -> Result<()> {
        titles
            .iter()
            .try_for_each(|(key, title)| self.add_translation(key, locale, title))
    }

    /// Merge every translation `catalog` holds for keys in this set.
    pub fn localize(&mut self, catalog: &TranslationCatalog) {
        for record in &mut self.records {
            let extra: Vec<(String, String)> = catalog
                .entries_for(record.key())
                .map(|(l, t)| (l.to_owned(), t.to_owned()))
                .collect();
            for (locale, title) in extra {
                record.add_translation(locale, title);
            }
        }
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    /// Holiday with the given key.
    pub fn get(&self, key: &str) -> Option<&HolidayRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    /// Date of the holiday with the given key.
    pub fn date(&self, key: &str) -> Option<Date> {
        self.get(key).map(HolidayRecord::date)
    }

    /// Date of a holiday the caller relies on being present, e.g. one
    /// contributed by a base rule set.
    pub fn require_date(&self, key: &str) -> Result<Date> {
        self.date(key).ok_or_else(|| {
            Error::InvalidArgument(format!("no holiday {key:?} in {} {}", self.name, self.year))
        })
    }

    /// `true` if a holiday with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(HolidayRecord::key)
    }

    /// Records in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, HolidayRecord> {
        self.records.iter()
    }

    /// Every holiday observed on `date`.
    pub fn on(&self, date: Date) -> impl Iterator<Item = &HolidayRecord> {
        self.records.iter().filter(move |r| r.date() == date)
    }

    /// `true` if any holiday falls on `date`.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.on(date).next().is_some()
    }

    /// A new set with only the records `keep` accepts, order preserved.
    pub fn retain(&self, mut keep: impl FnMut(&HolidayRecord) -> bool) -> HolidaySet {
        let mut out = HolidaySet::new(self.name.clone(), self.year);
        for record in self.records.iter().filter(|r| keep(r)) {
            out.insert(record.clone());
        }
        out
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a HolidayRecord;
    type IntoIter = std::slice::Iter<'a, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for HolidaySet {
    type Item = HolidayRecord;
    type IntoIter = std::vec::IntoIter<HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl Serialize for HolidaySet {
    /// Serialised as the ordered list of records.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_time::{Substitution, SubstitutionTable, Weekday};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut set = HolidaySet::new("Test", 2024);
        set.add("a", date(2024, 1, 1), "A");
        set.add("b", date(2024, 2, 1), "B");
        let old = set.insert(HolidayRecord::new("a", date(2024, 3, 1), "A2"));
        assert_eq!(old.unwrap().date(), date(2024, 1, 1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(set.date("a"), Some(date(2024, 3, 1)));
    }

    #[test]
    fn translation_requires_existing_key() {
        let mut set = HolidaySet::new("Test", 2024);
        set.add("a", date(2024, 1, 1), "A");
        assert!(set.add_translation("a", "de_DE", "Ä").is_ok());
        assert!(matches!(
            set.add_translation("zz", "de_DE", "Z"),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(set.get("a").unwrap().title_for("de_DE"), "Ä");
    }

    #[test]
    fn observed_entries_get_suffixes() {
        const ON_MONDAY: &[Substitution] = &[Substitution::KEEP, Substitution::extra(1, "Substitute")];
        static TABLE: SubstitutionTable = SubstitutionTable::new(&[(Weekday::Monday, ON_MONDAY)]);

        let mut set = HolidaySet::new("Test", 2022);
        let policy = ObservancePolicy::TableDriven(&TABLE);
        set.add_observed("boxingDay", date(2022, 12, 26), "Boxing Day", &policy)
            .unwrap();
        assert_eq!(set.len(), 2);
        let extra = set.get("boxingDaySubstitute").unwrap();
        assert_eq!(extra.date(), date(2022, 12, 27));
        assert!(extra.is_substitute());
        assert_eq!(extra.title(), "Substitute Bank Holiday in lieu of Boxing Day");
        let kept = set.get("boxingDay").unwrap();
        assert!(!kept.is_substitute());
        assert_eq!(kept.title(), "Boxing Day");
    }

    #[test]
    fn localize_merges_catalog() {
        let mut set = HolidaySet::new("Test", 2024);
        set.add("goodFriday", date(2024, 3, 29), "Good Friday");
        let mut catalog = TranslationCatalog::new();
        catalog.insert("goodFriday", "de_DE", "Karfreitag");
        catalog.insert("unrelated", "de_DE", "Egal");
        set.localize(&catalog);
        assert_eq!(set.get("goodFriday").unwrap().title_for("de_DE"), "Karfreitag");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn date_queries() {
        let mut set = HolidaySet::new("Test", 2024);
        set.add("a", date(2024, 5, 1), "A");
        set.add("b", date(2024, 5, 1), "B");
        assert!(set.is_holiday(date(2024, 5, 1)));
        assert!(!set.is_holiday(date(2024, 5, 2)));
        assert_eq!(set.on(date(2024, 5, 1)).count(), 2);
        assert!(set.require_date("c").is_err());
    }
}
