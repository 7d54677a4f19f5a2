use chrono::Utc;
use serde_json::Value;

use crate::api::validators::validate_registration;
use crate::db::models::RegistrationView;
use crate::db::{registrations, DbPool};
use crate::error::{AppError, AppResult};

/// Owns the store handle and runs the registration write path.
#[derive(Clone)]
pub struct RegistrationService {
    db: DbPool,
}

impl RegistrationService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &DbPool {
        &self.db
    }

    /// Validate, check email then identity number for conflicts, and insert.
    ///
    /// Lookups and insert share one write transaction; any early return drops
    /// it, which rolls back. `BEGIN IMMEDIATE` takes the write lock before the
    /// lookups, so concurrent writers wait on the busy timeout rather than
    /// failing when a read snapshot is upgraded at insert time.
    pub async fn register(&self, input: &Value) -> AppResult<RegistrationView> {
        let new = validate_registration(input).map_err(AppError::ValidationFailed)?;

        let mut tx = self.db.begin_with("BEGIN IMMEDIATE").await?;

        // Email is checked first: when both collide, the email conflict wins.
        if registrations::find_by_email(&mut tx, &new.email).await?.is_some() {
            tracing::warn!("Registration rejected: email already registered");
            return Err(AppError::DuplicateEmail);
        }

        if registrations::find_by_identity_number(&mut tx, &new.identity_number)
            .await?
            .is_some()
        {
            tracing::warn!("Registration rejected: identity number already registered");
            return Err(AppError::DuplicateIdentity);
        }

        let stored = registrations::insert(&mut tx, &new, Utc::now()).await?;
        tx.commit().await?;

        tracing::info!("Registration {} created", stored.id);
        Ok(stored.into())
    }
}
