use validator::ValidateEmail;

use super::{ValidationError, Validator};

pub const FIELD: &str = "email";

pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn required_error(&self) -> ValidationError {
        ValidationError::new("R001", FIELD, "Email is required")
    }

    pub fn format_error(&self) -> ValidationError {
        ValidationError::new("R003", FIELD, "Invalid email format")
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let s = input.trim();

        // R001: Missing value
        if s.is_empty() {
            return Err(self.required_error());
        }

        // R003: Not local-part@domain
        if !s.validate_email() {
            return Err(self.format_error());
        }

        // Domain needs at least two labels (user@localhost is not deliverable)
        let domain = s.rsplit_once('@').map(|(_, d)| d).unwrap_or_default();
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(self.format_error());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let v = EmailValidator::new();
        assert!(v.validate("alice@example.com").is_ok());
        assert!(v.validate("first.last+tag@mail.example.co.id").is_ok());
    }

    #[test]
    fn test_empty_email() {
        let err = EmailValidator::new().validate("").unwrap_err();
        assert_eq!(err.code, "R001");
        assert_eq!(err.message, "Email is required");
    }

    #[test]
    fn test_not_an_email_is_format_error() {
        let err = EmailValidator::new().validate("not-an-email").unwrap_err();
        assert_eq!(err.code, "R003");
        assert_eq!(err.message, "Invalid email format");
    }

    #[test]
    fn test_bad_domains() {
        let v = EmailValidator::new();
        assert!(v.validate("alice@").is_err());
        assert!(v.validate("alice@localhost").is_err());
        assert!(v.validate("alice@example..com").is_err());
        assert!(v.validate("@example.com").is_err());
    }
}
