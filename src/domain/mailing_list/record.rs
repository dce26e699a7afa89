use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::mailing_list::value_objects::PhoneNumber;

/// Validation failures for a signup submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,

    #[error("Invalid phone number.")]
    InvalidPhoneNumber,
}

/// A mailing-list signup record, ready for persistence
///
/// Create-only: the record has no identity and no update or delete path.
/// It is built from a request body, handed to the store once, and dropped.
/// `full_name` and `email_address` are kept as raw JSON values because only
/// their presence is validated, not their type or format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailingListRecord {
    pub full_name: Value,
    pub email_address: Value,
    pub phone_number: PhoneNumber,
}

impl MailingListRecord {
    /// Builds a record from a parsed JSON request body
    ///
    /// All three fields must be present and truthy, and `phone_number`
    /// must coerce to a number. Validation runs before any store access.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let full_name = body
            .get("full_name")
            .filter(|v| is_truthy(v))
            .ok_or(ValidationError::MissingField)?;
        let email_address = body
            .get("email_address")
            .filter(|v| is_truthy(v))
            .ok_or(ValidationError::MissingField)?;
        let raw_phone = body
            .get("phone_number")
            .filter(|v| is_truthy(v))
            .ok_or(ValidationError::MissingField)?;

        let phone_number =
            PhoneNumber::coerce(raw_phone).map_err(|_| ValidationError::InvalidPhoneNumber)?;

        Ok(Self {
            full_name: full_name.clone(),
            email_address: email_address.clone(),
            phone_number,
        })
    }
}

/// Presence boundary for submitted fields: `null`, `false`, `0`, and the
/// empty string all count as missing
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
