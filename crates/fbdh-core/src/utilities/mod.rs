//! Utilities sub-module: date parsers and display formatters.

pub mod data_formatters;
pub mod data_parsers;
