use chrono::NaiveDate;

use super::{ValidationError, Validator};

pub const FIELD: &str = "dateOfBirth";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DateValidator;

impl DateValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn required_error(&self) -> ValidationError {
        ValidationError::new("R001", FIELD, "Date of birth is required")
    }

    pub fn format_error(&self) -> ValidationError {
        ValidationError::new("R003", FIELD, "Invalid date format. Use YYYY-MM-DD")
    }

    /// Parse a strict `YYYY-MM-DD` date. chrono alone would accept `1990-5-1`
    /// and signed years, so the shape is checked before parsing.
    /// Surrounding whitespace is a format error, not trimmed away.
    pub fn parse(&self, input: &str) -> Result<NaiveDate, ValidationError> {
        let s = input;

        // R001: Missing value
        if s.is_empty() {
            return Err(self.required_error());
        }

        let bytes = s.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });

        // R003: Wrong shape or not a calendar date (e.g. 2023-02-30)
        if !shaped {
            return Err(self.format_error());
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| self.format_error())
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for DateValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.parse(input).map(|_| ())
    }
}
