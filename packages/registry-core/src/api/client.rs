//! HTTP client for the registry API

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::endpoints;
use crate::auth::{AuthSession, Credentials};
use crate::catalog::{CatalogQuery, ProductSearch};
use crate::error::{ClientError, Result};
use crate::types::{
    CatalogItem, Category, Contribution, GiftList, GiftListPayload, LoginResponse, Notification,
    Page, Supplier,
};

/// Registry API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct RegistryClient {
    http_client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RegistryClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    /// Create a client that sends `Authorization: Bearer <token>`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.auth_token.is_some()
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        let response: LoginResponse = self
            .send(self.request(Method::POST, endpoints::LOGIN).json(credentials))
            .await?;
        Ok(response.into())
    }

    // ------------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------------

    /// All registries owned by the signed-in user.
    pub async fn lists(&self) -> Result<Vec<GiftList>> {
        self.send(self.request(Method::GET, endpoints::LISTS)).await
    }

    pub async fn list(&self, id: &str) -> Result<GiftList> {
        self.send(self.request(Method::GET, &endpoints::list(id))).await
    }

    pub async fn create_list(&self, payload: &GiftListPayload) -> Result<GiftList> {
        self.send(self.request(Method::POST, endpoints::LISTS).json(payload))
            .await
    }

    pub async fn update_list(&self, id: &str, payload: &GiftListPayload) -> Result<GiftList> {
        self.send(self.request(Method::PUT, &endpoints::list(id)).json(payload))
            .await
    }

    pub async fn delete_list(&self, id: &str) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, &endpoints::list(id)))
            .await
    }

    pub async fn contributions(&self, list_id: &str) -> Result<Vec<Contribution>> {
        self.send(self.request(Method::GET, &endpoints::list_contributions(list_id)))
            .await
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    /// One page of the product catalog, optionally narrowed by a search term.
    pub async fn products_page(&self, query: &CatalogQuery) -> Result<Page<CatalogItem>> {
        self.send(
            self.request(Method::GET, endpoints::PRODUCTS_PAGINATED)
                .query(query),
        )
        .await
    }

    /// Advanced search by categories, suppliers and price range.
    pub async fn search_products(&self, search: &ProductSearch) -> Result<Page<CatalogItem>> {
        self.send(
            self.request(Method::POST, endpoints::PRODUCTS_SEARCH)
                .json(search),
        )
        .await
    }

    pub async fn suppliers(&self) -> Result<Vec<Supplier>> {
        self.send(self.request(Method::GET, endpoints::SUPPLIERS))
            .await
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.send(self.request(Method::GET, endpoints::CATEGORIES))
            .await
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        self.send(self.request(Method::GET, endpoints::NOTIFICATIONS))
            .await
    }

    // ------------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------------

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        req
    }

    async fn send<R: DeserializeOwned>(&self, req: RequestBuilder) -> Result<R> {
        let response = self.execute(req).await?;
        response
            .json::<R>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn send_empty(&self, req: RequestBuilder) -> Result<()> {
        self.execute(req).await.map(|_| ())
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Response> {
        let response = req.send().await.map_err(|e| {
            warn!(error = %e, "Registry API request failed");
            ClientError::Network(e.to_string())
        })?;

        let status = response.status();
        debug!(status = %status, url = %response.url(), "Registry API response");

        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, path = %path, error = %body, "Registry API error");

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized,
            StatusCode::NOT_FOUND => ClientError::NotFound(path),
            _ => ClientError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            },
        })
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pull a readable message out of an error body.
///
/// Accepts `{"message": ...}`, `{"error": ...}` or plain text.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Used by callers that fall back to an empty value on failure.
pub fn or_empty<T: Default>(result: Result<T>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, what, "Falling back to empty result");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = RegistryClient::new("https://api.example.com/").with_token("tok");

        assert_eq!(client.base_url(), "https://api.example.com");
        assert!(client.has_token());
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message":"Name taken"}"#),
            "Name taken"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error":"bad"}"#),
            "bad"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "  upstream  "), "upstream");
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Internal Server Error"
        );
    }
}
