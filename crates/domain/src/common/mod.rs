//! Common utility functions shared by the domain records and the engine.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only serde for the lenient deserialisers

pub mod lenient;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use lenient::{
    int_or_zero, number_or_nan, parse_int_or_zero, string_or_empty, truncate_finite,
};
pub use string::{dedupe_case_insensitive, normalize_key, normalize_text, strip_leading_and};
