//! Integration tests for account creation.
//!
//! Run with: `cargo test -p lexrisk-api-auth -- --ignored` against a local
//! database.

mod common;

use common::*;
use lexrisk_api_auth::error::ApiAuthError;
use lexrisk_api_auth::models::SignupRequest;
use lexrisk_api_auth::services::AccountService;
use lexrisk_domain::UserRole;

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_create_account_success() {
    let pool = create_test_pool().await;
    let service = AccountService::new(pool.clone());
    let email = unique_email();

    let user = service
        .create_account(&signup_request(&email))
        .await
        .expect("Account creation should succeed");

    assert_eq!(user.email, email);
    assert_eq!(user.role, UserRole::Client);

    cleanup_test_user(&pool, &email).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_password_is_stored_hashed() {
    let pool = create_test_pool().await;
    let service = AccountService::new(pool.clone());
    let email = unique_email();

    service
        .create_account(&signup_request(&email))
        .await
        .expect("Account creation should succeed");

    let (hash,): (String,) = sqlx::query_as("SELECT password_hash FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .expect("User row should exist");

    assert!(hash.starts_with("$argon2id$"));
    assert_ne!(hash, "secret1");

    cleanup_test_user(&pool, &email).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_duplicate_email_rejected() {
    let pool = create_test_pool().await;
    let service = AccountService::new(pool.clone());
    let email = unique_email();

    service
        .create_account(&signup_request(&email))
        .await
        .expect("First signup should succeed");

    let err = service
        .create_account(&signup_request(&email))
        .await
        .expect_err("Second signup with the same email should fail");

    assert!(matches!(err, ApiAuthError::DuplicateEmail));

    cleanup_test_user(&pool, &email).await;
}
