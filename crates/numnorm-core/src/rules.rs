//! Format rules - the ordered recognizer cascade
//!
//! Each rule pairs an anchored pattern with a reconstruction strategy.
//! Rules run from most specific to most general and the first match wins,
//! so `RULES` is an ordered constant, never a set.
//!
//! | # | Rule            | Pattern                               | Example        |
//! |---|-----------------|---------------------------------------|----------------|
//! | 1 | `PlainInteger`  | `^[0-9]+$`                            | `1000031`      |
//! | 2 | `PlainDecimal`  | `^([0-9]+)[.,]([0-9]{2}\|[0-9]{4,})$` | `127.00`       |
//! | 3 | `CommaDecimal`  | `^([0-9\s.]+),([0-9]{2})$`            | `1.000.000,12` |
//! | 4 | `PeriodDecimal` | `^([0-9\s,]+)\.([0-9]{2})$`           | `1,000,000.12` |
//!
//! Rule 2 skips exactly three fractional digits: `1.234` could be a
//! thousands group, so it is left unrecognized instead of guessed.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::sanitize::SanitizedString;

static PLAIN_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

static PLAIN_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)[.,]([0-9]{2}|[0-9]{4,})$").expect("valid regex"));

static COMMA_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9\s.]+),([0-9]{2})$").expect("valid regex"));

static PERIOD_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9\s,]+)\.([0-9]{2})$").expect("valid regex"));

/// How a matched rule turns its captures into an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The matched text already is the numeral; round it directly
    Literal,
    /// Strip grouping from the integral capture, round the fraction, add
    Reconstruct,
}

/// A recognizable number format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatRule {
    /// Digits only, no separators
    PlainInteger,
    /// Digits, one `.` or `,`, then two or four-or-more digits
    PlainDecimal,
    /// `.`/space grouping, `,` decimal, two fractional digits
    CommaDecimal,
    /// `,`/space grouping, `.` decimal, two fractional digits
    PeriodDecimal,
}

/// Evaluation order of the cascade
pub const RULES: [FormatRule; 4] = [
    FormatRule::PlainInteger,
    FormatRule::PlainDecimal,
    FormatRule::CommaDecimal,
    FormatRule::PeriodDecimal,
];

impl FormatRule {
    pub fn strategy(self) -> Strategy {
        match self {
            FormatRule::PlainInteger | FormatRule::PlainDecimal => Strategy::Literal,
            FormatRule::CommaDecimal | FormatRule::PeriodDecimal => Strategy::Reconstruct,
        }
    }

    pub fn pattern(self) -> &'static Regex {
        match self {
            FormatRule::PlainInteger => &*PLAIN_INTEGER,
            FormatRule::PlainDecimal => &*PLAIN_DECIMAL,
            FormatRule::CommaDecimal => &*COMMA_DECIMAL,
            FormatRule::PeriodDecimal => &*PERIOD_DECIMAL,
        }
    }

    /// Short human description, used by the CLI `rules` listing
    pub fn description(self) -> &'static str {
        match self {
            FormatRule::PlainInteger => "digits only",
            FormatRule::PlainDecimal => "single decimal separator, 2 or 4+ fractional digits",
            FormatRule::CommaDecimal => "period/space grouping, comma decimal, 2 fractional digits",
            FormatRule::PeriodDecimal => "comma/space grouping, period decimal, 2 fractional digits",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            FormatRule::PlainInteger => "1000031",
            FormatRule::PlainDecimal => "1000031.69",
            FormatRule::CommaDecimal => "1.000.000,12",
            FormatRule::PeriodDecimal => "1,000,000.12",
        }
    }

    /// Match this rule alone against sanitized text
    pub fn matches<'s>(self, text: &'s str) -> Option<Recognition<'s>> {
        let caps = self.pattern().captures(text)?;
        let recognition = match self {
            FormatRule::PlainInteger => Recognition {
                rule: self,
                integral: caps.get(0)?.as_str(),
                fraction: "",
            },
            _ => Recognition {
                rule: self,
                integral: caps.get(1)?.as_str(),
                fraction: caps.get(2)?.as_str(),
            },
        };
        Some(recognition)
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FormatRule::PlainInteger => "plain_integer",
            FormatRule::PlainDecimal => "plain_decimal",
            FormatRule::CommaDecimal => "comma_decimal",
            FormatRule::PeriodDecimal => "period_decimal",
        };
        f.write_str(name)
    }
}

/// A successful match: the rule and its captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition<'s> {
    pub rule: FormatRule,
    /// Integral part, grouping separators still in place
    pub integral: &'s str,
    /// Fractional digits; empty for `PlainInteger`
    pub fraction: &'s str,
}

/// Run the cascade; the first matching rule is authoritative
pub fn recognize(text: &SanitizedString) -> Option<Recognition<'_>> {
    RULES.iter().find_map(|rule| rule.matches(text.as_str()))
}
