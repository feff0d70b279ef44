//! Error types for holidays-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum defined here.  The
//! [`ensure!`](crate::ensure) macro covers the common "check a condition or
//! bail out with a given variant" pattern.

use thiserror::Error;

/// The top-level error type used throughout holidays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date could not be constructed or date arithmetic left the
    /// supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Malformed request, e.g. an nth-weekday ordinal outside `1..=5`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The year is outside the range a computation guarantees correctness
    /// for.
    #[error("invalid year {year}: {reason}")]
    InvalidYear {
        /// The offending year.
        year: i32,
        /// Why the year was rejected.
        reason: String,
    },

    /// No rule set is registered for the given country code.
    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),

    /// No filter is registered under the given name.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout holidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given [`Error`] variant unless `$cond` holds.
///
/// The variant must be a single-`String` tuple variant; the remaining
/// arguments are passed to `format!`.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn ordinal(n: u8) -> hol_core::errors::Result<u8> {
///     ensure!((1..=5).contains(&n), InvalidArgument, "ordinal {n} out of range [1, 5]");
///     Ok(n)
/// }
/// assert!(ordinal(3).is_ok());
/// assert_eq!(
///     ordinal(6),
///     Err(Error::InvalidArgument("ordinal 6 out of range [1, 5]".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}
