//! # hol-time
//!
//! Calendar dates, the shared calendar arithmetic (Easter, n-th weekday,
//! day offsets, nearest workday) and weekend-observance policies.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Pure date-arithmetic primitives used by every rule set.
pub mod calendar_math;

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// Weekend-substitution policies.
pub mod observance;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar_math::WeekdayOrdinal;
pub use date::Date;
pub use month::Month;
pub use observance::{ObservancePolicy, Observed, Substitution, SubstitutionTable, SundayShift};
pub use weekday::Weekday;
