// Lenient decoding of optional monetary amounts
//
// Stored documents come from more than one writer, so amounts may be JSON
// integers, floats or numeric strings. Finite numbers beyond the `Decimal`
// range clamp to `Decimal::MAX`/`Decimal::MIN`, matching the saturating
// sums of the payment aggregation. Anything that is not a number is a
// decode error.

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};

/// Decode `Option<Decimal>`; `null` and absence both become `None`
///
/// Pair with `rust_decimal::serde::float_option::serialize` so amounts are
/// written back as JSON numbers.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionAmountVisitor)
}

/// Nearest `Decimal` to a finite float, clamping at the bounds
pub fn clamp_f64(value: f64) -> Decimal {
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

struct OptionAmountVisitor;

impl<'de> Visitor<'de> for OptionAmountVisitor {
    type Value = Option<Decimal>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor).map(Some)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        if !value.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(value), &self));
        }
        Ok(clamp_f64(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        let trimmed = value.trim();
        if let Ok(decimal) = trimmed.parse::<Decimal>() {
            return Ok(decimal);
        }

        match trimmed.parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(clamp_f64(float)),
            _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}
