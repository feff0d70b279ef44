//! Built-in rule sets.
//!
//! [`EasterCycle`] and [`Christian`] are shared bases; every other type is a
//! country (or region) rule set registered by
//! [`DriverRegistry::builtin`](crate::registry::DriverRegistry::builtin).

mod australia;
mod brazil;
mod christian;
mod croatia;
mod easter_cycle;
mod germany;
mod iceland;
mod netherlands;
mod portugal;
mod usa;

pub use australia::{Australia, AustraliaWa};
pub use brazil::Brazil;
pub use christian::Christian;
pub use croatia::Croatia;
pub use easter_cycle::{EasterCycle, Feast};
pub use germany::Germany;
pub use iceland::Iceland;
pub use netherlands::Netherlands;
pub use portugal::Portugal;
pub use usa::Usa;
