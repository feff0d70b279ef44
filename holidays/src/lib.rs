//! # holidays
//!
//! Public holidays per country and year.
//!
//! This crate is a **façade** over the workspace crates: it re-exports the
//! date types, the rule sets and filters, and adds the query service and
//! its TOML configuration.  Application code should depend on this crate
//! rather than the individual `hol-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holidays::{HolidayQuery, HolidayService};
//!
//! let service = HolidayService::default();
//! let entries = service.holidays(&HolidayQuery::new("us", 2021))?;
//! let july4 = entries.iter().find(|e| e.key == "usa_independenceDay").unwrap();
//! assert_eq!(july4.date.to_string(), "2021-07-05");
//! # Ok::<(), holidays::Error>(())
//! ```
//!
//! The library emits `tracing` events and spans but never installs a
//! subscriber; that is up to the application.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and `ensure!` macro.
pub use hol_core as core;

/// Dates, weekdays, months, calendar arithmetic and observance policies.
pub use hol_time as time;

/// Holiday sets, rule sets, filters, translations and the registry.
pub use hol_rules as rules;

// ── Modules ───────────────────────────────────────────────────────────────────

/// The query service.
pub mod service;

/// TOML configuration.
pub mod settings;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use hol_core::{Error, Result};
pub use hol_rules::{DriverRegistry, Filter, HolidayRecord, HolidaySet, RuleSet, TranslationCatalog};
pub use hol_time::{Date, Month, Weekday};
pub use service::{HolidayEntry, HolidayQuery, HolidayService};
pub use settings::{FilterToml, Settings};
