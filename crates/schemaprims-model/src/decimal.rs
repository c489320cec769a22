use std::fmt;
use std::str::FromStr;

use serde_json::Number;

use crate::error::{Result, SchemaError};

/// A JSON number kept as its exact decimal text.
///
/// Numeric bounds (`minimum`, `multipleOf`, ...) are stored this way so that
/// `0.30000000000000004` or `1e400` survive a round trip untouched. Equality
/// compares the text, so `1` and `1.0` are different values.
#[derive(Clone, PartialEq, Eq)]
pub struct Decimal(Number);

impl Decimal {
    /// Parse a JSON number literal.
    pub fn parse(text: &str) -> Result<Self> {
        Number::from_str(text)
            .map(Self)
            .map_err(|err| SchemaError::malformed("", format!("invalid number '{text}': {err}")))
    }

    /// The underlying JSON number.
    pub fn as_number(&self) -> &Number {
        &self.0
    }

    /// Lossy conversion for callers that need arithmetic.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_u64() || self.0.is_i64()
    }
}

impl From<Number> for Decimal {
    fn from(number: Number) -> Self {
        Self(number)
    }
}

impl From<Decimal> for Number {
    fn from(decimal: Decimal) -> Self {
        decimal.0
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self(Number::from(value))
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self(Number::from(value))
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self(Number::from(value))
    }
}

impl FromStr for Decimal {
    type Err = SchemaError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}
