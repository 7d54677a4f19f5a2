use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::validators::date::DATE_FORMAT;

/// A validated submission, ready to be written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewRegistration {
    pub name: String,
    pub identity_number: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

/// A row of the `registrations` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    pub id: i64,
    pub name: String,
    pub identity_number: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Public response body (no id, no created_at)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationView {
    pub name: String,
    pub identity_number: String,
    pub email: String,
    pub date_of_birth: String,
}

impl From<Registration> for RegistrationView {
    fn from(reg: Registration) -> Self {
        Self {
            date_of_birth: reg.date_of_birth.format(DATE_FORMAT).to_string(),
            name: reg.name,
            identity_number: reg.identity_number,
            email: reg.email,
        }
    }
}
