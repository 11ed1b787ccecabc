//! Signed-in layout wrapper with auth protection

use dioxus::prelude::*;

use super::AppNav;
use crate::auth::use_auth;
use crate::routes::Route;

/// Layout component that provides navigation and auth protection
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();

    // Redirect if not authenticated
    if !auth.is_authenticated() {
        return rsx! {
            RedirectTo { to: Route::Login {} }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-rose-50/40",

            // Navigation
            AppNav {}

            // Main content
            main {
                class: "max-w-6xl mx-auto p-6",
                Outlet::<Route> {}
            }
        }
    }
}

/// Replace the current history entry with `to` once mounted
#[component]
pub fn RedirectTo(to: Route) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(to.clone());
    });

    rsx! {}
}
