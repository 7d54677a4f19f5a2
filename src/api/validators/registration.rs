use serde_json::Value;

use super::{DateValidator, EmailValidator, FieldErrors, TextValidator, ValidationError, Validator};
use crate::db::models::registration::NewRegistration;

/// Field that names the request body itself when it is not a JSON object.
pub const BODY_FIELD: &str = "body";

pub fn body_error() -> ValidationError {
    ValidationError::new("R005", BODY_FIELD, "Request body must be a JSON object")
}

enum Raw<'a> {
    Missing,
    Text(&'a str),
    NotText,
}

fn raw<'a>(body: &'a serde_json::Map<String, Value>, key: &str) -> Raw<'a> {
    match body.get(key) {
        None | Some(Value::Null) => Raw::Missing,
        Some(Value::String(s)) => Raw::Text(s),
        Some(_) => Raw::NotText,
    }
}

fn check_text(
    body: &serde_json::Map<String, Value>,
    validator: &TextValidator,
    errors: &mut FieldErrors,
) -> Option<String> {
    let result = match raw(body, validator.field()) {
        Raw::Missing => Err(validator.required_error()),
        Raw::NotText => Err(validator.type_error()),
        Raw::Text(s) => validator.validate(s).map(|_| s.trim().to_string()),
    };
    result.map_err(|e| errors.push(e)).ok()
}

/// Validate a raw submission, collecting every field error rather than
/// stopping at the first one.
pub fn validate_registration(body: &Value) -> Result<NewRegistration, FieldErrors> {
    let Some(body) = body.as_object() else {
        return Err(body_error().into());
    };

    let mut errors = FieldErrors::new();

    let name = check_text(body, &TextValidator::name(), &mut errors);
    let identity_number = check_text(body, &TextValidator::identity_number(), &mut errors);

    let email_validator = EmailValidator::new();
    let email = match raw(body, super::email::FIELD) {
        Raw::Missing => Err(email_validator.required_error()),
        Raw::NotText => Err(email_validator.format_error()),
        Raw::Text(s) => email_validator.validate(s).map(|_| s.trim().to_string()),
    }
    .map_err(|e| errors.push(e))
    .ok();

    let date_validator = DateValidator::new();
    let date_of_birth = match raw(body, super::date::FIELD) {
        Raw::Missing => Err(date_validator.required_error()),
        Raw::NotText => Err(date_validator.format_error()),
        Raw::Text(s) => date_validator.parse(s),
    }
    .map_err(|e| errors.push(e))
    .ok();

    match (name, identity_number, email, date_of_birth) {
        (Some(name), Some(identity_number), Some(email), Some(date_of_birth)) => {
            Ok(NewRegistration {
                name,
                identity_number,
                email,
                date_of_birth,
            })
        }
        _ => Err(errors),
    }
}
