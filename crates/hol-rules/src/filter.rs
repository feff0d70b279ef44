//! Allow-list filters over holiday keys.
//!
//! A [`Filter`] keeps only the holidays whose key it names.  Keys the
//! filter names but the set does not contain are ignored, so one filter can
//! be applied to any year.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::holiday_set::HolidaySet;

/// Named allow-set of holiday keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    name: String,
    allowed: BTreeSet<String>,
}

impl Filter {
    /// Filter called `name` that keeps `keys`.
    pub fn new<I, S>(name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            allowed: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter name, e.g. `"australia/official"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` if `key` passes the filter.
    pub fn allows(&self, key: &str) -> bool {
        self.allowed.contains(key)
    }

    /// Allowed keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// The holidays of `set` this filter allows, in `set`'s order.
    pub fn apply(&self, set: &HolidaySet) -> HolidaySet {
        set.retain(|r| self.allows(r.key()))
    }
}

// ── Built-in filters ──────────────────────────────────────────────────────────

const AUSTRALIA_OFFICIAL: &[&str] = &[
    "australia_newYearsDay",
    "australia_australiaDay",
    "australia_easterTuesday",
    "australia_goodFriday",
    "australia_easterMonday",
    "australia_anzacDay",
    "australia_queensBirthday",
    "australia_christmasDay",
    "australia_boxingDay",
];

/// Public holidays in every German state.
const GERMANY_OFFICIAL: &[&str] = &[
    "newYearsDay",
    "goodFriday",
    "easterMonday",
    "dayOfWork",
    "ascensionDay",
    "whitMonday",
    "germanUnificationDay",
    "christmasDay",
    "boxingDay",
];

/// State holidays on top of [`GERMANY_OFFICIAL`]: filter name, extra keys.
const GERMAN_STATES: &[(&str, &[&str])] = &[
    ("germany/mecklenburg-western-pomerania", &["reformationDay"]),
    (
        "germany/bavaria",
        &["epiphany", "corpusChristi", "mariaAscension", "allSaintsDay"],
    ),
    (
        "germany/baden-wurttemberg",
        &["epiphany", "corpusChristi", "allSaintsDay"],
    ),
    ("germany/brandenburg", &["easter", "whitsun", "reformationDay"]),
    ("germany/saxony", &["reformationDay", "dayOfRepentance"]),
];

/// Every built-in filter.
pub fn builtin_filters() -> Vec<Filter> {
    let mut filters = vec![
        Filter::new("australia/official", AUSTRALIA_OFFICIAL.iter().copied()),
        Filter::new("germany/official", GERMANY_OFFICIAL.iter().copied()),
    ];
    filters.extend(GERMAN_STATES.iter().map(|(name, extra)| {
        Filter::new(*name, GERMANY_OFFICIAL.iter().chain(extra.iter()).copied())
    }));
    filters
}
