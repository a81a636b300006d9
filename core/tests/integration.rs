//! Full lifecycle test against the live mock server.
//!
//! Boots the server on a random port and drives every `CustomerApi`
//! operation over real HTTP, validating that request building, transport,
//! and response parsing agree with the server's wire shapes end-to-end.

use customer_core::{ApiError, CustomerApi, CustomerDraft, Gender, PageQuery};
use tokio::net::TcpListener;

async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

fn draft(name: &str, country: &str, phone: &str, email: &str) -> CustomerDraft {
    CustomerDraft {
        name: name.to_string(),
        country_code: country.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        gender: Some(Gender::Female),
    }
}

#[tokio::test]
async fn crud_lifecycle() {
    let base_url = start_server().await;
    let api = CustomerApi::connect(&base_url).unwrap();

    // Empty collection to start with.
    let page = api.list(PageQuery::default()).await.unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 0);

    // Create, then fetch by the returned id; the editable fields round-trip.
    let ana = draft("Ana Smith", "US", "(555) 123-4567", "ana@x.com");
    let created = api.create(&ana).await.unwrap();
    assert!(created.id > 0);

    let fetched = api.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.draft(), ana);

    // Update the full record; the server echoes the new state.
    let mut edited = fetched.clone();
    edited.name = "Ana Jones".to_string();
    let updated = api.update(edited.id, &edited).await.unwrap();
    assert_eq!(updated.name, "Ana Jones");
    assert_eq!(api.get(created.id).await.unwrap().name, "Ana Jones");

    // Delete, then every lookup reports NotFound.
    api.delete(created.id).await.unwrap();
    assert!(matches!(
        api.get(created.id).await.unwrap_err(),
        ApiError::NotFound
    ));
    assert!(matches!(
        api.delete(created.id).await.unwrap_err(),
        ApiError::NotFound
    ));
}

#[tokio::test]
async fn pagination_and_filters() {
    let base_url = start_server().await;
    let api = CustomerApi::connect(&base_url).unwrap();

    for i in 0..5 {
        let country = if i < 3 { "US" } else { "EG" };
        api.create(&draft(
            &format!("Customer {i}"),
            country,
            &format!("(555) 123-456{i}"),
            &format!("c{i}@x.com"),
        ))
        .await
        .unwrap();
    }

    // Zero-based pages slice the id-ordered collection.
    let page = api.list(PageQuery::new(1, 2)).await.unwrap();
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.content[0].name, "Customer 2");

    // Name filter matches substrings and still paginates.
    let page = api.find_by_name("Customer", PageQuery::new(0, 3)).await.unwrap();
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.content.len(), 3);

    let page = api.find_by_name("Customer 4", PageQuery::default()).await.unwrap();
    assert_eq!(page.total_elements, 1);

    // Country filter is exact.
    let page = api.find_by_country_code("US", PageQuery::default()).await.unwrap();
    assert_eq!(page.total_elements, 3);
    let page = api.find_by_country_code("FR", PageQuery::default()).await.unwrap();
    assert_eq!(page.total_elements, 0);

    // Phone lookup travels percent-encoded and still matches.
    let found = api.find_by_phone("(555) 123-4563").await.unwrap();
    assert_eq!(found.name, "Customer 3");
}

#[tokio::test]
async fn statistics_are_stable_without_mutation() {
    let base_url = start_server().await;
    let api = CustomerApi::connect(&base_url).unwrap();

    api.create(&draft("Ana Smith", "US", "(555) 123-4567", "ana@x.com"))
        .await
        .unwrap();
    api.create(&draft("Bob Jones", "US", "(555) 123-4568", "bob@x.com"))
        .await
        .unwrap();
    api.create(&draft("Eve Adams", "EG", "(20) 100-200-300", "eve@x.com"))
        .await
        .unwrap();

    let first = api.count_by_country_code().await.unwrap();
    let second = api.count_by_country_code().await.unwrap();
    assert_eq!(first, second);

    let us = first.iter().find(|s| s.country_code == "US").unwrap();
    assert_eq!(us.count, 2);
    let eg = first.iter().find(|s| s.country_code == "EG").unwrap();
    assert_eq!(eg.count, 1);
}

#[tokio::test]
async fn create_rejection_carries_field_prefixed_errors() {
    let base_url = start_server().await;
    let api = CustomerApi::connect(&base_url).unwrap();

    let err = api
        .create(&draft("Al", "usa", "123", "not-an-email"))
        .await
        .unwrap_err();
    match err {
        ApiError::Validation { errors } => {
            assert!(errors.iter().any(|e| e.starts_with("name:")));
            assert!(errors.iter().any(|e| e.starts_with("countryCode:")));
            assert!(errors.iter().any(|e| e.starts_with("phone:")));
            assert!(errors.iter().any(|e| e.starts_with("email:")));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn availability_reflects_existing_records() {
    let base_url = start_server().await;
    let api = CustomerApi::connect(&base_url).unwrap();

    assert!(api.phone_available("(555) 123-4567").await.unwrap().available);
    assert!(api.email_available("ana@x.com").await.unwrap().available);

    api.create(&draft("Ana Smith", "US", "(555) 123-4567", "ana@x.com"))
        .await
        .unwrap();

    assert!(!api.phone_available("(555) 123-4567").await.unwrap().available);
    assert!(!api.email_available("ana@x.com").await.unwrap().available);
}
