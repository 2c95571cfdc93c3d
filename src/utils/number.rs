//! Serde helpers for the loosely-typed numbers the collector writes.
//!
//! The collector omits fields it has no data for and occasionally writes
//! `null`. Both decode to zero. On the way out, whole numbers are written
//! without a fractional part so `30.0` stays `30` in the dashboard JSON.

use serde::{Deserialize, Deserializer, Serializer};

/// Largest integer an f64 represents exactly (2^53 - 1)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Decode a number, treating `null` as zero
///
/// Pair with `#[serde(default)]` so a missing field is zero too.
/// `-0` decodes to `0`.
pub fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    // -0.0 + 0.0 == +0.0
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0) + 0.0)
}

/// Decode any `Default` value, treating `null` as the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Encode a number as an integer when it has no fractional part
pub fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
