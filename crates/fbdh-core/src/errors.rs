//! Error types for fbdh.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Argument checks use the
//! [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout fbdh.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was rejected before any computation took place
    /// (e.g. a negative working-days limit).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A date string could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A year or date fell outside the representable range.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout fbdh.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject an argument unless `condition` holds.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fbdh_core::{ensure, errors::Error};
/// fn non_negative(n: i32) -> fbdh_core::errors::Result<u32> {
///     ensure!(n >= 0, "limit must be non-negative, got {n}");
///     Ok(n as u32)
/// }
/// assert!(non_negative(1).is_ok());
/// assert!(matches!(non_negative(-1), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
