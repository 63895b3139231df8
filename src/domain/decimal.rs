//! Decimal-string serde form for `u128` quantities.
//!
//! Token amounts routinely exceed `2^64`, and generic JSON readers parse
//! numbers as `f64`. Serializing as a string keeps every digit; plain
//! unsigned integers are still accepted on input.

use core::fmt;

use serde::{de, Deserializer, Serializer};

pub(crate) fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    deserializer.deserialize_any(DecimalVisitor)
}

struct DecimalVisitor;

impl de::Visitor<'_> for DecimalVisitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or an unsigned integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
        Ok(u128::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
        Ok(v)
    }
}
