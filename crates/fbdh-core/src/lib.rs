//! # fbdh-core
//!
//! Core types, error definitions, and boundary helpers for fbdh.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy, the evaluation [`Clock`], and the
//! date parsing / display helpers used by front ends.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Evaluation instant (`Clock`, `SystemClock`, `FixedClock`).
pub mod clock;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Date parsers and display formatters.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year.
pub type Year = i32;

/// Integer type used for working-day counts at the API boundary.
pub type Integer = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
pub use utilities::data_formatters::Locale;
