//! Authentication context provider

use dioxus::prelude::*;
use registry_core::{AuthSession, AuthUser, ClientError, Credentials, RegistryClient};
use tracing::{info, warn};

use crate::browser;
use crate::state::use_app_state;

/// Authentication context that provides the session to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session (if signed in)
    pub session: Signal<Option<AuthSession>>,
    /// API client carrying the session token
    client: Signal<RegistryClient>,
    api_url: Signal<String>,
}

impl AuthContext {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    /// Client for API calls, with the bearer token when signed in
    pub fn client(&self) -> RegistryClient {
        self.client.peek().clone()
    }

    /// Exchange credentials for a session and remember it.
    pub async fn login(mut self, credentials: Credentials) -> Result<(), ClientError> {
        let session = self.client().login(&credentials).await?;
        info!(user_id = %session.user.id, "Signed in");

        browser::save_session(&session);
        self.client.set(client_for(&self.api_url.peek(), Some(&session)));
        self.session.set(Some(session));
        Ok(())
    }

    /// Clear the auth state (logout)
    pub fn logout(mut self) {
        browser::clear_session();
        self.client.set(client_for(&self.api_url.peek(), None));
        self.session.set(None);
    }

    /// An expired token ends the session so the layout sends the user back
    /// to the login screen.
    pub fn handle_error(self, error: &ClientError) {
        if error.is_unauthorized() && self.session.peek().is_some() {
            warn!("Session rejected by the API, signing out");
            self.logout();
        }
    }
}

fn client_for(api_url: &str, session: Option<&AuthSession>) -> RegistryClient {
    let client = RegistryClient::new(api_url);
    match session {
        Some(session) => client.with_token(&session.token),
        None => client,
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let app = use_app_state();

    use_context_provider(|| {
        let api_url = app.api_url();
        let session = browser::load_session();
        let client = client_for(&api_url, session.as_ref());
        AuthContext {
            session: Signal::new(session),
            client: Signal::new(client),
            api_url: Signal::new(api_url),
        }
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
