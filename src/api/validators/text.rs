use super::{ValidationError, Validator};

/// Required free-text field with an upper bound on its length in characters.
pub struct TextValidator {
    field: &'static str,
    label: &'static str,
    max_chars: usize,
}

impl TextValidator {
    pub fn new(field: &'static str, label: &'static str, max_chars: usize) -> Self {
        Self { field, label, max_chars }
    }

    pub fn name() -> Self {
        Self::new("name", "Name", 100)
    }

    pub fn identity_number() -> Self {
        Self::new("identityNumber", "Identity number", 20)
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn required_error(&self) -> ValidationError {
        // R001: Missing value
        ValidationError::new("R001", self.field, format!("{} is required", self.label))
    }

    pub fn type_error(&self) -> ValidationError {
        // R004: Not a JSON string
        ValidationError::new("R004", self.field, format!("{} must be a string", self.label))
    }
}

impl Validator for TextValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let s = input.trim();

        if s.is_empty() {
            return Err(self.required_error());
        }

        // R002: Too long
        if s.chars().count() > self.max_chars {
            return Err(ValidationError::new(
                "R002",
                self.field,
                format!("{} must be at most {} characters", self.label, self.max_chars),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_at_limit_is_valid() {
        let name = "a".repeat(100);
        assert!(TextValidator::name().validate(&name).is_ok());
    }

    #[test]
    fn test_name_over_limit() {
        let name = "a".repeat(101);
        let err = TextValidator::name().validate(&name).unwrap_err();
        assert_eq!(err.code, "R002");
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "Name must be at most 100 characters");
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 100 two-byte characters
        let name = "é".repeat(100);
        assert!(TextValidator::name().validate(&name).is_ok());
    }

    #[test]
    fn test_identity_number_limits() {
        let v = TextValidator::identity_number();
        assert!(v.validate(&"9".repeat(20)).is_ok());
        let err = v.validate(&"9".repeat(21)).unwrap_err();
        assert_eq!(err.code, "R002");
        assert_eq!(err.field, "identityNumber");
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let err = TextValidator::name().validate("   ").unwrap_err();
        assert_eq!(err.code, "R001");
        assert_eq!(err.message, "Name is required");
    }
}
