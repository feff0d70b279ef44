//! # hol-rules
//!
//! Holiday records and sets, the composable `RuleSet` trait, the built-in
//! country rule sets, allow-list filters, translations and the driver
//! registry.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Built-in country rule sets and the shared Christian / Easter-cycle bases.
pub mod drivers;

/// `Filter` — named allow-set of holiday keys.
pub mod filter;

/// `HolidayRecord` — one holiday of one year.
pub mod holiday;

/// `HolidaySet` — ordered, key-unique holidays of one rule set and year.
pub mod holiday_set;

/// `DriverRegistry` — rule sets by ISO code, filters by name.
pub mod registry;

/// `RuleSet` trait and `YearContext`.
pub mod rule_set;

/// `TranslationCatalog` — external `(key, locale) → title` lookup.
pub mod translation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use filter::Filter;
pub use holiday::HolidayRecord;
pub use holiday_set::HolidaySet;
pub use registry::DriverRegistry;
pub use rule_set::{RuleSet, YearContext};
pub use translation::TranslationCatalog;
