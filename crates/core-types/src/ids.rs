use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parses a caller-supplied identifier.
///
/// Only plain non-negative integers are accepted: at least one character,
/// every character an ASCII digit, and a value that fits the `INTEGER`
/// column it will be bound to. Signs, whitespace and decimal points are
/// rejected. Leading zeros are allowed.
fn parse_numeric_id(field: &str, raw: &str) -> Result<i32, CoreError> {
    let invalid = |reason: &str| CoreError::InvalidInput(field.to_string(), reason.to_string());

    if raw.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("must contain only the digits 0-9"));
    }
    raw.parse::<i32>().map_err(|_| invalid("is out of range"))
}

/// Primary key of a row in the `product` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

/// Category a product belongs to. No category entity exists; this is only the foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

macro_rules! numeric_id {
    ($ty:ident, $field:literal) => {
        impl $ty {
            /// Returns the raw value to bind as a query parameter.
            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_numeric_id($field, raw).map(Self)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(ProductId, "product id");
numeric_id!(CategoryId, "category id");
