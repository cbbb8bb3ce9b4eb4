//! Integration tests for protocol listing and filtering.
//!
//! Run with: `cargo test -p lexrisk-api-protocols -- --ignored` against a
//! local database.

mod common;

use common::*;
use lexrisk_api_protocols::models::ListProtocolsQuery;
use lexrisk_api_protocols::services::ProtocolService;
use uuid::Uuid;

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_business_type_filter_is_exact() {
    let pool = create_test_pool().await;
    let service = ProtocolService::new(pool.clone());

    let tech = insert_protocol(
        &pool, "Tech protocol", "SYSTEM", true, &["TECHNOLOGY"], &[], None, 5,
    )
    .await;
    let retail = insert_protocol(
        &pool, "Retail protocol", "SYSTEM", true, &["RETAIL"], &[], None, 9,
    )
    .await;

    let query = ListProtocolsQuery {
        business_type: Some("TECHNOLOGY".to_string()),
        ..Default::default()
    };
    let response = service.list_protocols(&query).await.unwrap();

    let ids: Vec<Uuid> = response.protocols.iter().map(|p| p.id).collect();
    assert!(ids.contains(&tech));
    assert!(!ids.contains(&retail));
    assert!(response
        .protocols
        .iter()
        .all(|p| p.business_types.contains(&"TECHNOLOGY".to_string())));

    cleanup_protocols(&pool, &[tech, retail]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_ordering_usage_then_recency() {
    let pool = create_test_pool().await;
    let service = ProtocolService::new(pool.clone());

    let marker = format!("ORDER-{}", Uuid::new_v4());
    let low = insert_protocol(&pool, "Low usage", "SYSTEM", true, &[&marker], &[], None, 1).await;
    let high =
        insert_protocol(&pool, "High usage", "SYSTEM", true, &[&marker], &[], None, 50).await;
    // Same usage as `low`, inserted later, so it wins the tie on created_at
    let newer =
        insert_protocol(&pool, "Newer low usage", "SYSTEM", true, &[&marker], &[], None, 1).await;

    let query = ListProtocolsQuery {
        business_type: Some(marker),
        ..Default::default()
    };
    let response = service.list_protocols(&query).await.unwrap();

    let ids: Vec<Uuid> = response.protocols.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![high, newer, low]);

    cleanup_protocols(&pool, &[low, high, newer]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_private_and_user_authored_excluded() {
    let pool = create_test_pool().await;
    let service = ProtocolService::new(pool.clone());

    let marker = format!("VIS-{}", Uuid::new_v4());
    let public_system =
        insert_protocol(&pool, "Public system", "SYSTEM", true, &[&marker], &[], None, 0).await;
    let private_system =
        insert_protocol(&pool, "Private system", "SYSTEM", false, &[&marker], &[], None, 0).await;
    let public_user =
        insert_protocol(&pool, "Public user", "USER", true, &[&marker], &[], None, 0).await;

    let query = ListProtocolsQuery {
        business_type: Some(marker),
        ..Default::default()
    };
    let response = service.list_protocols(&query).await.unwrap();

    let ids: Vec<Uuid> = response.protocols.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![public_system]);

    cleanup_protocols(&pool, &[public_system, private_system, public_user]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_category_resolved_with_general_default() {
    let pool = create_test_pool().await;
    let service = ProtocolService::new(pool.clone());

    let marker = format!("CAT-{}", Uuid::new_v4());
    let category = insert_category(&pool, &format!("Data Protection {marker}")).await;
    let categorized = insert_protocol(
        &pool, "Categorized", "SYSTEM", true, &[&marker], &[], Some(category), 2,
    )
    .await;
    let uncategorized =
        insert_protocol(&pool, "Uncategorized", "SYSTEM", true, &[&marker], &[], None, 1).await;

    let query = ListProtocolsQuery {
        business_type: Some(marker),
        ..Default::default()
    };
    let response = service.list_protocols(&query).await.unwrap();
    assert_eq!(response.total, 2);

    let by_id = |id: Uuid| response.protocols.iter().find(|p| p.id == id).unwrap();
    assert!(by_id(categorized).category.starts_with("Data Protection"));
    assert_eq!(by_id(uncategorized).category, "General");

    cleanup_protocols(&pool, &[categorized, uncategorized]).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_upvote_increments_and_missing_is_not_found() {
    let pool = create_test_pool().await;
    let service = ProtocolService::new(pool.clone());

    let id = insert_protocol(&pool, "Upvotable", "SYSTEM", true, &[], &[], None, 0).await;

    let first = service.upvote(id).await.unwrap();
    let second = service.upvote(id).await.unwrap();
    assert_eq!(second.upvote_count, first.upvote_count + 1);

    let missing = service.upvote(Uuid::new_v4()).await;
    assert!(missing.is_err());

    cleanup_protocols(&pool, &[id]).await;
}
