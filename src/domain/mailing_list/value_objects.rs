use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// Phone number value object holding the numeric form of a submission's
/// phone number
///
/// # Invariants
/// - Always a finite JSON number
/// - Integral values are held as integers, never as `x.0` floats
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneNumber(Number);

impl PhoneNumber {
    /// Coerces a JSON value into a phone number
    ///
    /// A JSON number is taken as-is. A JSON string is trimmed and parsed as
    /// a decimal number; anything that does not parse to a finite value is
    /// rejected. Any other JSON type is rejected.
    ///
    /// # Returns
    /// * `Ok(PhoneNumber)` - If the value is numeric
    /// * `Err(String)` - If the value cannot be read as a number
    pub fn coerce(value: &Value) -> Result<Self, String> {
        match value {
            Value::Number(n) => Ok(PhoneNumber(n.clone())),
            Value::String(s) => {
                let parsed: f64 = s
                    .trim()
                    .parse()
                    .map_err(|_| format!("Not a numeric phone number: {}", s))?;
                Self::from_f64(parsed).ok_or_else(|| format!("Not a numeric phone number: {}", s))
            }
            other => Err(format!("Not a numeric phone number: {}", other)),
        }
    }

    /// Converts a parsed float, preferring the integer representation when
    /// the value is integral so the store receives `5551234567` rather
    /// than `5551234567.0`
    fn from_f64(value: f64) -> Option<Self> {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
            Some(PhoneNumber(Number::from(value as i64)))
        } else {
            // from_f64 returns None for NaN and infinities
            Number::from_f64(value).map(PhoneNumber)
        }
    }

    /// Returns the underlying JSON number
    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_string() {
        let phone = PhoneNumber::coerce(&json!("5551234567")).unwrap();
        assert_eq!(phone.as_number(), &Number::from(5551234567i64));
    }

    #[test]
    fn numeric_string_with_whitespace() {
        let phone = PhoneNumber::coerce(&json!("  5551234567 ")).unwrap();
        assert_eq!(phone.as_number(), &Number::from(5551234567i64));
    }

    #[test]
    fn json_number_kept_as_is() {
        let phone = PhoneNumber::coerce(&json!(5551234567i64)).unwrap();
        assert_eq!(phone.as_number(), &Number::from(5551234567i64));
    }

    #[test]
    fn fractional_string() {
        let phone = PhoneNumber::coerce(&json!("555.25")).unwrap();
        assert_eq!(phone.as_number(), &Number::from_f64(555.25).unwrap());
    }

    #[test]
    fn negative_string() {
        let phone = PhoneNumber::coerce(&json!("-42")).unwrap();
        assert_eq!(phone.as_number(), &Number::from(-42i64));
    }

    #[test]
    fn alphabetic_string_rejected() {
        assert!(PhoneNumber::coerce(&json!("abc")).is_err());
    }

    #[test]
    fn whitespace_only_string_rejected() {
        assert!(PhoneNumber::coerce(&json!(" ")).is_err());
    }

    #[test]
    fn nan_string_rejected() {
        assert!(PhoneNumber::coerce(&json!("NaN")).is_err());
    }

    #[test]
    fn infinity_string_rejected() {
        assert!(PhoneNumber::coerce(&json!("inf")).is_err());
    }

    #[test]
    fn array_rejected() {
        assert!(PhoneNumber::coerce(&json!(["5551234567"])).is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let phone = PhoneNumber::coerce(&json!("5551234567")).unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "5551234567");
    }
}
