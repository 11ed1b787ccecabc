//! Login page

use dioxus::prelude::*;
use registry_core::Credentials;

use crate::auth::use_auth;
use crate::components::{ErrorBanner, RedirectTo};
use crate::routes::Route;

/// Email/password sign-in
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() {
        return rsx! {
            RedirectTo { to: Route::Dashboard {} }
        };
    }

    let handle_login = move |e: FormEvent| {
        e.prevent_default();

        // Blank fields never reach the API
        let credentials = match Credentials::new(email(), password()).validated() {
            Ok(credentials) => credentials,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match auth.login(credentials).await {
                Ok(()) => {
                    navigator.push(Route::Dashboard {});
                }
                Err(e) if e.is_unauthorized() => {
                    error.set(Some("Invalid email or password".to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-rose-50 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    div { class: "text-4xl mb-2", "\u{1F381}" }
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Sign in" }
                    p { class: "text-gray-600 text-sm", "Manage your gift registries" }
                }

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                form {
                    onsubmit: handle_login,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email"
                        }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "you@example.com",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-rose-700 text-white py-2 px-4 rounded-md hover:bg-rose-800 focus:outline-none focus:ring-2 focus:ring-rose-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
