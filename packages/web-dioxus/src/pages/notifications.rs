use dioxus::prelude::*;
use registry_core::notifications::NotificationFeed;
use tracing::warn;

use crate::auth::use_auth;
use crate::components::{EmptyState, ErrorBanner, LoadingSpinner};
use crate::format;

/// Notification feed, newest first. Read state is kept on this screen only.
#[component]
pub fn Notifications() -> Element {
    let auth = use_auth();

    let mut feed = use_signal(NotificationFeed::default);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_hook(move || {
        spawn(async move {
            match auth.client().notifications().await {
                Ok(entries) => feed.set(NotificationFeed::new(entries)),
                Err(e) => {
                    warn!(error = %e, "Failed to load notifications");
                    auth.handle_error(&e);
                    error.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        })
    });

    let entries = feed.read().entries().to_vec();
    let unread = feed.read().unread_count();

    rsx! {
        div {
            class: "max-w-3xl",
            div {
                class: "flex items-center justify-between mb-6",
                h1 {
                    class: "text-2xl font-bold text-gray-900",
                    "Notifications"
                    if unread > 0 {
                        span {
                            class: "ml-2 align-middle px-2 py-0.5 rounded-full text-xs font-semibold bg-rose-600 text-white",
                            "{unread}"
                        }
                    }
                }
                if unread > 0 {
                    button {
                        class: "text-sm text-rose-700 hover:underline",
                        onclick: move |_| feed.write().mark_all_read(),
                        "Mark all as read"
                    }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            if is_loading() {
                LoadingSpinner {}
            } else if entries.is_empty() {
                EmptyState {
                    icon: "\u{1F514}",
                    title: "You're all caught up",
                    p { class: "text-sm text-gray-500", "New contributions will show up here." }
                }
            } else {
                ul {
                    class: "bg-white rounded-xl border border-gray-200 divide-y divide-gray-100",
                    for entry in entries {
                        li {
                            key: "{entry.id}",
                            class: if entry.read { "p-4" } else { "p-4 bg-rose-50/60" },
                            div {
                                class: "flex items-start justify-between gap-4",
                                div {
                                    p { class: "font-medium text-gray-900", "{entry.title}" }
                                    p { class: "text-sm text-gray-600", "{entry.message}" }
                                    p { class: "mt-1 text-xs text-gray-400", "{format::timestamp(&entry.created_at)}" }
                                }
                                if !entry.read {
                                    button {
                                        class: "shrink-0 text-xs text-gray-500 hover:text-gray-800",
                                        onclick: {
                                            let id = entry.id.clone();
                                            move |_| {
                                                feed.write().mark_read(&id);
                                            }
                                        },
                                        "Mark read"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
