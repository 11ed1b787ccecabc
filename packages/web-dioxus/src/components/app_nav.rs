//! Top navigation component

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Navigation bar for signed-in screens
#[component]
pub fn AppNav() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let handle_logout = move |_| {
        auth.logout();
        navigator.push(Route::Login {});
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "max-w-6xl mx-auto flex items-center justify-between",

                // Logo / Brand
                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Dashboard {},
                        class: "text-xl font-bold text-rose-700",
                        "\u{1F381} Gift Registry"
                    }

                    // Nav links
                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::Dashboard {}, label: "My registries" }
                        NavLink { to: Route::NewList {}, label: "New registry" }
                        NavLink { to: Route::Notifications {}, label: "Notifications" }
                    }
                }

                // User menu
                div {
                    class: "flex items-center gap-4",
                    if let Some(user) = auth.user() {
                        span {
                            class: "text-sm text-gray-600",
                            "{user.display_name()}"
                        }
                    }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-rose-100 text-rose-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
