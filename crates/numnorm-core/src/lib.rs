//! numnorm core - locale-ambiguous numeric string normalization
//!
//! Turns user-entered numerals such as `"1.000.000,12"`, `"1,000,000.12"`
//! or `"$127.00"` into a single canonical integer, rounding any fraction
//! half away from zero.
//!
//! # Architecture
//!
//! ```text
//! RawInput → sanitize → SanitizedString → recognize (RULES, first match wins)
//!                                              ↓
//!                                    Literal | Reconstruct → Option<i64>
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces the same result
//! - **Stateless**: no caches, no globals beyond compiled patterns
//! - **Explicit absence**: unrecognized input is `None`, never `Some(0)`

pub mod error;
pub mod input;
pub mod normalizer;
pub mod rules;
pub mod sanitize;

pub use error::{Error, Result};
pub use input::RawInput;
pub use normalizer::{explain, normalize, normalize_json, normalize_value, Normalization};
pub use rules::{FormatRule, Recognition, Strategy, RULES};
pub use sanitize::{sanitize, SanitizedString};

/// Version of the numnorm-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
