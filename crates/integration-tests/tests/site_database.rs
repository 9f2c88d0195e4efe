//! Schema-level integration tests against the database.
//!
//! These tests require:
//! - A running `PostgreSQL` database reachable via `DATABASE_URL`
//!
//! Run with: cargo test -p tulsi-integration-tests -- --ignored

use uuid::Uuid;

use tulsi_integration_tests::database_pool;

// ============================================================================
// Migration Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a PostgreSQL database"]
async fn test_migrations_are_idempotent() {
    let pool = database_pool().await;

    // Applying on top of an already-migrated database is a no-op
    sqlx::migrate!("../site/migrations")
        .run(&pool)
        .await
        .expect("Migrations failed to apply");
    sqlx::migrate!("../site/migrations")
        .run(&pool)
        .await
        .expect("Re-applying migrations failed");

    for table in ["admins", "products", "inquiries", "contacts"] {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .expect("Failed to query information_schema");
        assert!(exists, "Table {table} is missing");
    }
}

// ============================================================================
// Constraint Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a PostgreSQL database"]
async fn test_admin_email_is_unique() {
    let pool = database_pool().await;
    let email = format!("constraint-test-{}@example.com", Uuid::new_v4());

    sqlx::query("INSERT INTO admins (email, password_hash) VALUES ($1, $2)")
        .bind(&email)
        .bind("not-a-real-hash")
        .execute(&pool)
        .await
        .expect("First insert failed");

    let duplicate = sqlx::query("INSERT INTO admins (email, password_hash) VALUES ($1, $2)")
        .bind(&email)
        .bind("not-a-real-hash")
        .execute(&pool)
        .await;

    let err = duplicate.expect_err("Duplicate email insert should fail");
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("Expected a database error, got: {other}"),
    }

    // Clean up the throwaway row
    sqlx::query("DELETE FROM admins WHERE email = $1")
        .bind(&email)
        .execute(&pool)
        .await
        .expect("Cleanup failed");
}
