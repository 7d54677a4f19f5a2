use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use crate::db::models::{NewRegistration, Registration};
use crate::db::DbPool;
use crate::error::AppError;

const COLUMNS: &str = "id, name, identity_number, email, date_of_birth, created_at";

pub async fn find_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<Registration>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM registrations WHERE email = ?"))
        .bind(email)
        .fetch_optional(conn)
        .await
}

pub async fn find_by_identity_number(
    conn: &mut SqliteConnection,
    identity_number: &str,
) -> Result<Option<Registration>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM registrations WHERE identity_number = ?"))
        .bind(identity_number)
        .fetch_optional(conn)
        .await
}

/// Insert a record and return the stored row.
///
/// A UNIQUE violation here means another request won the race after our
/// lookups; it is reported as the matching duplicate rather than a 500.
pub async fn insert(
    conn: &mut SqliteConnection,
    new: &NewRegistration,
    created_at: DateTime<Utc>,
) -> Result<Registration, AppError> {
    sqlx::query_as(&format!(
        "INSERT INTO registrations (name, identity_number, email, date_of_birth, created_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING {COLUMNS}"
    ))
    .bind(&new.name)
    .bind(&new.identity_number)
    .bind(&new.email)
    .bind(new.date_of_birth)
    .bind(created_at)
    .fetch_one(conn)
    .await
    .map_err(map_insert_error)
}

pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM registrations")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            // SQLite reports "UNIQUE constraint failed: registrations.<column>"
            let message = db_err.message();
            if message.contains("registrations.email") {
                return AppError::DuplicateEmail;
            }
            if message.contains("registrations.identity_number") {
                return AppError::DuplicateIdentity;
            }
        }
    }
    AppError::Database(e)
}
