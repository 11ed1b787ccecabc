//! End-to-end wizard sessions: step gating, draft resume and publishing.

use chrono::NaiveDate;
use mockito::{Matcher, Server};
use registry_core::catalog::CatalogBrowser;
use registry_core::wizard::{
    load_draft, save_draft, submit_list, DraftStore, MemoryDraftStore, WizardState, WizardStep,
};
use registry_core::{
    CatalogItem, EventKind, GiftList, ListStatus, Page, RegistryClient, SubmitError,
    ValidationError,
};
use rust_decimal::Decimal;
use serde_json::json;

fn catalog_page() -> Page<CatalogItem> {
    serde_json::from_value(json!({
        "items": [
            { "id": "p1", "name": "Dutch oven", "price": 150, "category": "Kitchen", "supplier": "Acme" },
            { "id": "p2", "name": "Towels", "price": 40, "category": "Bath", "supplier": "Linens" },
            { "id": "p3", "name": "Lamp", "price": 60, "category": "Home", "supplier": "Lumen" }
        ],
        "currentPage": 1,
        "totalPages": 1,
        "totalItems": 3
    }))
    .unwrap()
}

/// Walk a new-list session to the confirmation step.
fn fill_to_confirmation(state: &mut WizardState, drafts: &MemoryDraftStore) {
    state.event.kind = Some(EventKind::Other);
    state.event.custom = "Housewarming".into();
    assert_eq!(state.next(), Ok(WizardStep::GuestInfo));
    save_draft(drafts, state).unwrap();

    state.set_guest_count(25);
    state.set_min_contribution(Decimal::from(30)).unwrap();
    assert_eq!(state.next(), Ok(WizardStep::GiftSelection));
    save_draft(drafts, state).unwrap();

    let mut browser = CatalogBrowser::new(12);
    browser.apply_result(Ok(catalog_page()));
    let first = browser.visible_items(&state.selection)[0].clone();
    state.selection.add(first);
    state.selection.set_quantity("p1", 2).unwrap();
    assert_eq!(browser.visible_items(&state.selection).len(), 2);
    assert_eq!(state.next(), Ok(WizardStep::ListDetails));

    state.details.name = "New flat".into();
    state.details.event_date = NaiveDate::from_ymd_opt(2026, 12, 12);
    state.details.location.address = "Calle 10 #5-20".into();
    state.details.location.set_point((4.6, -74.08));
    assert_eq!(state.next(), Ok(WizardStep::Confirmation));
    save_draft(drafts, state).unwrap();
}

#[test]
fn removing_a_gift_returns_it_to_the_catalog() {
    let mut state = WizardState::new();
    let mut browser = CatalogBrowser::new(12);
    browser.apply_result(Ok(catalog_page()));

    let lamp = browser
        .visible_items(&state.selection)
        .into_iter()
        .find(|i| i.id == "p3")
        .unwrap();
    assert!(state.selection.add(lamp.clone()));
    assert!(!state.selection.add(lamp));

    let visible: Vec<_> = browser
        .visible_items(&state.selection)
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(visible, vec!["p1", "p2"]);
    assert_eq!(state.selection.len(), 1);

    state.selection.remove("p3").unwrap();
    assert_eq!(browser.visible_items(&state.selection).len(), 3);
    assert!(state.selection.is_empty());
}

#[test]
fn session_resumes_from_draft() {
    let drafts = MemoryDraftStore::default();
    let mut state = WizardState::new();
    fill_to_confirmation(&mut state, &drafts);

    let resumed = load_draft(&drafts).unwrap();

    assert_eq!(resumed.step(), WizardStep::Confirmation);
    assert_eq!(resumed.event.custom, "Housewarming");
    assert_eq!(resumed.selection.items()[0].quantity, Some(2));
    assert_eq!(resumed.suggested_total(), Decimal::from(750));
}

#[tokio::test]
async fn publish_is_blocked_until_terms_accepted() {
    let server = Server::new_async().await;
    let client = RegistryClient::new(server.url()).with_token("tok");
    let drafts = MemoryDraftStore::default();
    let mut state = WizardState::new();
    fill_to_confirmation(&mut state, &drafts);
    state.confirmation.email = "host@example.com".into();
    state.confirmation.phone = "300 123 4567".into();

    let err = submit_list(&client, &state, ListStatus::Publish, &drafts)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Validation(ValidationError::TermsNotAccepted)
    ));
    assert!(drafts.load_raw().unwrap().is_some());
}

#[tokio::test]
async fn publishing_new_list_posts_and_clears_draft() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/list")
        .match_header("authorization", "Bearer tok")
        .match_body(Matcher::PartialJson(json!({
            "name": "New flat",
            "eventType": "Other",
            "customEventType": "Housewarming",
            "status": "publish",
            "guestCount": 25,
            "eventDate": "2026-12-12",
            "contactEmail": "host@example.com"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "55",
                "name": "New flat",
                "eventType": "Other",
                "customEventType": "Housewarming",
                "status": "publish",
                "guestCount": 25,
                "minContribution": 30
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = RegistryClient::new(server.url()).with_token("tok");
    let drafts = MemoryDraftStore::default();
    let mut state = WizardState::new();
    fill_to_confirmation(&mut state, &drafts);
    state.confirmation.email = "host@example.com".into();
    state.confirmation.phone = "300 123 4567".into();
    state.confirmation.terms_accepted = true;

    let saved: GiftList = submit_list(&client, &state, ListStatus::Publish, &drafts)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(saved.id, "55");
    assert!(saved.is_published());
    assert!(drafts.load_raw().unwrap().is_none());
}

#[tokio::test]
async fn editing_puts_existing_list() {
    let mut server = Server::new_async().await;
    let existing: GiftList = serde_json::from_value(json!({
        "id": "8",
        "name": "Baby Leo",
        "eventType": "BabyShower",
        "status": "draft",
        "guestCount": 15,
        "minContribution": 10,
        "eventDate": "2026-11-30",
        "products": [
            { "id": "p2", "name": "Towels", "price": 40, "category": "Bath", "supplier": "Linens" }
        ]
    }))
    .unwrap();

    let mock = server
        .mock("PUT", "/api/list/8")
        .match_body(Matcher::PartialJson(json!({
            "name": "Baby Leo",
            "status": "draft",
            "guestCount": 20
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "8",
                "name": "Baby Leo",
                "eventType": "BabyShower",
                "status": "draft",
                "guestCount": 20
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = RegistryClient::new(server.url()).with_token("tok");
    let drafts = MemoryDraftStore::default();
    drafts.save_raw("{\"untouched\":true}").unwrap();

    let mut state = WizardState::for_edit(&existing);
    state.set_guest_count(20);
    assert_eq!(
        state.set_min_contribution(Decimal::ZERO),
        Err(ValidationError::MinContributionLocked)
    );

    let saved = submit_list(&client, &state, ListStatus::Draft, &drafts)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(saved.guest_count, 20);
    assert_eq!(
        drafts.load_raw().unwrap().as_deref(),
        Some("{\"untouched\":true}")
    );
}

#[tokio::test]
async fn saving_draft_then_publishing_creates_one_list() {
    let mut server = Server::new_async().await;
    let saved_body = |status: &str| {
        json!({
            "id": "61",
            "name": "New flat",
            "eventType": "Other",
            "customEventType": "Housewarming",
            "status": status,
            "guestCount": 25,
            "minContribution": 30,
            "eventDate": "2026-12-12",
            "products": [
                { "id": "p1", "name": "Dutch oven", "price": 150, "category": "Kitchen", "supplier": "Acme", "quantity": 2 }
            ],
            "contactEmail": "host@example.com",
            "contactPhone": "300 123 4567"
        })
        .to_string()
    };
    let create = server
        .mock("POST", "/api/list")
        .match_body(Matcher::PartialJson(json!({ "status": "draft" })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(saved_body("draft"))
        .expect(1)
        .create_async()
        .await;
    let publish = server
        .mock("PUT", "/api/list/61")
        .match_body(Matcher::PartialJson(json!({ "status": "publish" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(saved_body("publish"))
        .expect(1)
        .create_async()
        .await;

    let client = RegistryClient::new(server.url()).with_token("tok");
    let drafts = MemoryDraftStore::default();
    let mut state = WizardState::new();
    fill_to_confirmation(&mut state, &drafts);
    state.confirmation.email = "host@example.com".into();
    state.confirmation.phone = "300 123 4567".into();

    let draft = submit_list(&client, &state, ListStatus::Draft, &drafts)
        .await
        .unwrap();
    assert!(load_draft(&drafts).is_none());

    let mut editing = WizardState::for_edit(&draft);
    assert!(editing.is_editing());
    editing.confirmation.terms_accepted = true;
    let published = submit_list(&client, &editing, ListStatus::Publish, &drafts)
        .await
        .unwrap();

    create.assert_async().await;
    publish.assert_async().await;
    assert_eq!(published.id, "61");
    assert!(published.is_published());
}
