//! Storage-layer tests for the registrations table.
//!
//! These bypass the service's lookups to check that the schema itself
//! rejects duplicates and that dropped transactions leave nothing behind.

use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use registration_service::db::{self, models::NewRegistration, registrations};
use registration_service::error::AppError;

// ── Helpers ───────────────────────────────────────────────────────────────────

async fn setup_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");

    db::MIGRATOR.run(&pool).await.expect("Migration failed");
    pool
}

fn new_registration(email: &str, identity_number: &str) -> NewRegistration {
    NewRegistration {
        name: "Alice Tan".to_string(),
        identity_number: identity_number.to_string(),
        email: email.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let pool = setup_db().await;
    let mut conn = pool.acquire().await.unwrap();

    let stored = registrations::insert(&mut conn, &new_registration("a@example.com", "1"), Utc::now())
        .await
        .expect("insert failed");

    assert!(stored.id > 0);
    assert_eq!(stored.email, "a@example.com");
    assert_eq!(stored.date_of_birth, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());

    let found = registrations::find_by_identity_number(&mut conn, "1")
        .await
        .unwrap()
        .expect("row should be found");
    assert_eq!(found.id, stored.id);
}

#[tokio::test]
async fn test_schema_rejects_duplicate_email() {
    let pool = setup_db().await;
    let mut conn = pool.acquire().await.unwrap();

    registrations::insert(&mut conn, &new_registration("a@example.com", "1"), Utc::now())
        .await
        .unwrap();
    let err = registrations::insert(&mut conn, &new_registration("a@example.com", "2"), Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateEmail), "got {err:?}");
    drop(conn);
    assert_eq!(registrations::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_schema_rejects_duplicate_identity_number() {
    let pool = setup_db().await;
    let mut conn = pool.acquire().await.unwrap();

    registrations::insert(&mut conn, &new_registration("a@example.com", "1"), Utc::now())
        .await
        .unwrap();
    let err = registrations::insert(&mut conn, &new_registration("b@example.com", "1"), Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateIdentity), "got {err:?}");
}

#[tokio::test]
async fn test_dropped_transaction_rolls_back() {
    let pool = setup_db().await;

    {
        let mut tx = pool.begin().await.unwrap();
        registrations::insert(&mut tx, &new_registration("a@example.com", "1"), Utc::now())
            .await
            .unwrap();
        // dropped without commit
    }

    assert_eq!(registrations::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_lookup_misses_return_none() {
    let pool = setup_db().await;
    let mut conn = pool.acquire().await.unwrap();

    assert!(registrations::find_by_email(&mut conn, "nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(registrations::find_by_identity_number(&mut conn, "0")
        .await
        .unwrap()
        .is_none());
}
