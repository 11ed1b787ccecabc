//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;
use crate::state::{load_config, AppState};

/// Root application component
#[component]
pub fn App() -> Element {
    use_context_provider(|| AppState::new(load_config()));

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Auth context provider wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }
    }
}
