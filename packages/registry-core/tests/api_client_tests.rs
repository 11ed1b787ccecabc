//! REST client behaviour against a mocked registry API.

use mockito::{Matcher, Server};
use registry_core::api::or_empty;
use registry_core::catalog::{AdvancedFilter, CatalogBrowser, CatalogRequest};
use registry_core::dashboard::Dashboard;
use registry_core::progress::ProgressReport;
use registry_core::{ClientError, Credentials, ListStatus, RegistryClient};
use rust_decimal::Decimal;
use serde_json::json;

fn list_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("List {id}"),
        "eventType": "Wedding",
        "status": status,
        "guestCount": 40,
        "minContribution": 20,
        "products": [
            { "id": "p1", "name": "Toaster", "price": 80, "category": "Kitchen", "supplier": "Acme" },
            { "id": "p2", "name": "Blender", "price": 120, "category": "Kitchen", "supplier": "Acme" }
        ]
    })
}

#[tokio::test]
async fn login_returns_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "host@example.com",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": "tok-123",
                "user": { "id": "u1", "email": "host@example.com", "name": "Host" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = RegistryClient::new(server.url());
    let session = client
        .login(&Credentials::new("host@example.com", "hunter2"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(session.token, "tok-123");
    assert_eq!(session.user.display_name(), "Host");
}

#[tokio::test]
async fn bad_credentials_map_to_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let client = RegistryClient::new(server.url());
    let err = client
        .login(&Credentials::new("host@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn lists_send_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/list")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([list_json("1", "draft"), list_json("2", "publish")]).to_string())
        .create_async()
        .await;

    let client = RegistryClient::new(server.url()).with_token("tok-123");
    let dashboard = Dashboard::load(&client).await.unwrap();

    mock.assert_async().await;
    assert_eq!(dashboard.lists().len(), 2);
    assert_eq!(dashboard.published_count(), 1);
    assert_eq!(dashboard.lists()[1].status, ListStatus::Publish);
}

#[tokio::test]
async fn delete_removes_list_after_server_confirms() {
    let mut server = Server::new_async().await;
    let delete = server
        .mock("DELETE", "/api/list/1")
        .with_status(204)
        .create_async()
        .await;

    let client = RegistryClient::new(server.url()).with_token("tok");
    let mut dashboard = Dashboard::new(vec![
        serde_json::from_value(list_json("1", "draft")).unwrap(),
        serde_json::from_value(list_json("2", "publish")).unwrap(),
    ]);

    dashboard.delete(&client, "1").await.unwrap();

    delete.assert_async().await;
    assert!(dashboard.find("1").is_none());
    assert_eq!(dashboard.lists().len(), 1);
}

#[tokio::test]
async fn failed_delete_keeps_list() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/list/1")
        .with_status(500)
        .with_body("database down")
        .create_async()
        .await;

    let client = RegistryClient::new(server.url()).with_token("tok");
    let mut dashboard = Dashboard::new(vec![serde_json::from_value(list_json("1", "draft")).unwrap()]);

    let err = dashboard.delete(&client, "1").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(dashboard.find("1").is_some());
}

#[tokio::test]
async fn missing_list_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/list/99")
        .with_status(404)
        .create_async()
        .await;

    let client = RegistryClient::new(server.url());
    let err = client.list("99").await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(path) if path == "/api/list/99"));
}

#[tokio::test]
async fn paginated_catalog_passes_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/Products/paginated")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("pageSize".into(), "12".into()),
            Matcher::UrlEncoded("search".into(), "lamp".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [
                    { "id": "p9", "name": "Desk lamp", "price": 35.5, "category": "Home", "supplier": "Lumen",
                      "imageUrls": ["https://cdn.example.com/lamp.jpg"] }
                ],
                "currentPage": 1,
                "totalPages": 4,
                "totalItems": 40
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = RegistryClient::new(server.url());
    let mut browser = CatalogBrowser::new(12);
    browser.set_term("lamp");

    let result = browser.request().send(&client).await;
    browser.apply_result(result);

    mock.assert_async().await;
    assert_eq!(browser.results().items.len(), 1);
    assert_eq!(browser.results().items[0].price, Decimal::new(355, 1));
    assert_eq!(
        browser.results().items[0].primary_image(),
        Some("https://cdn.example.com/lamp.jpg")
    );
    assert_eq!(browser.total_pages(), 4);
    assert!(browser.next_page());
}

#[tokio::test]
async fn advanced_filter_posts_search_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/products/search")
        .match_body(Matcher::PartialJson(json!({
            "categories": ["kitchen"],
            "suppliers": ["acme"],
            "page": 1,
            "pageSize": 12
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "items": [], "currentPage": 1, "totalPages": 0, "totalItems": 0 }).to_string())
        .create_async()
        .await;

    let client = RegistryClient::new(server.url());
    let mut browser = CatalogBrowser::new(12);
    let mut filter = AdvancedFilter::default();
    filter.toggle_category("kitchen");
    filter.toggle_supplier("acme");
    browser.apply_filter(filter).unwrap();

    let request = browser.request();
    assert!(matches!(request, CatalogRequest::Search(_)));
    let result = request.send(&client).await;
    browser.apply_result(result);

    mock.assert_async().await;
    assert!(browser.results().items.is_empty());
    assert!(browser.error().is_none());
}

#[tokio::test]
async fn vocabularies_fall_back_to_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/suppliers")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"s1","name":"Acme"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/categories")
        .with_status(503)
        .create_async()
        .await;

    let client = RegistryClient::new(server.url());

    let suppliers = or_empty(client.suppliers().await, "suppliers");
    let categories = or_empty(client.categories().await, "categories");

    assert_eq!(suppliers.len(), 1);
    assert!(categories.is_empty());
}

#[tokio::test]
async fn progress_report_loads_list_and_contributions() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/list/2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(list_json("2", "publish").to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/api/list/2/contributions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "id": "c1", "productId": "p1", "contributorName": "Ana", "amount": 40,
                  "createdAt": "2026-10-01T10:00:00Z" },
                { "id": "c2", "productId": "p2", "contributorName": "Luis", "amount": 60,
                  "message": "Congrats!", "createdAt": "2026-10-02T10:00:00Z" }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = RegistryClient::new(server.url()).with_token("tok");
    let (list, report) = ProgressReport::load(&client, "2").await.unwrap();

    assert!(ProgressReport::is_eligible(&list));
    assert_eq!(report.total_goal, Decimal::from(200));
    assert_eq!(report.total_contributed, Decimal::from(100));
    assert_eq!(report.percent_rounded(), 50);
    assert_eq!(report.contributor_count, 2);
    assert_eq!(report.contributions[0].message.as_deref(), Some("Congrats!"));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/notifications")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"unexpected\": true}")
        .create_async()
        .await;

    let client = RegistryClient::new(server.url());
    let err = client.notifications().await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}
