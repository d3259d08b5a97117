//! Raw input values accepted by the normalizer
//!
//! Anything with a canonical decimal string form can be normalized: text
//! as-is, integers and floats through their `Display` output. Values with
//! no such form are rejected here, before the normalizer ever sees them.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::{Error, Result};

/// A value waiting to be normalized, held as its textual form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput<'a> {
    text: Cow<'a, str>,
}

impl<'a> RawInput<'a> {
    /// Borrow the textual form of the value
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take ownership of the textual form
    pub fn into_owned(self) -> RawInput<'static> {
        RawInput {
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl fmt::Display for RawInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(text: &'a str) -> Self {
        RawInput {
            text: Cow::Borrowed(text),
        }
    }
}

impl From<String> for RawInput<'static> {
    fn from(text: String) -> Self {
        RawInput {
            text: Cow::Owned(text),
        }
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(text: &'a String) -> Self {
        RawInput::from(text.as_str())
    }
}

macro_rules! raw_input_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawInput<'static> {
                fn from(value: $ty) -> Self {
                    RawInput {
                        text: Cow::Owned(value.to_string()),
                    }
                }
            }
        )*
    };
}

// Float `Display` never switches to exponent notation, so 1e20 becomes
// "100000000000000000000" rather than something sanitization would mangle.
raw_input_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<'a> TryFrom<&'a Value> for RawInput<'a> {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(RawInput::from(s.as_str())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(RawInput::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(RawInput::from(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(RawInput::from(f))
                } else {
                    Ok(RawInput::from(n.to_string()))
                }
            }
            other => Err(Error::InvalidInput {
                found: json_kind(other).to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
