//! Dashboard page: the signed-in user's registries

use dioxus::prelude::*;
use registry_core::dashboard::{Dashboard as RegistryDashboard, DashboardLayout, RowActions};
use registry_core::GiftList;
use tracing::warn;

use crate::auth::use_auth;
use crate::components::{
    EmptyState, ErrorBanner, LoadingSpinner, Modal, ProgressBar, QrModal,
};
use crate::format;
use crate::routes::Route;
use crate::state::use_app_state;

/// Lists every registry with edit, delete, share and progress actions
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let app = use_app_state();

    let mut dashboard = use_signal(RegistryDashboard::default);
    let mut is_loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut layout = use_signal(DashboardLayout::default);
    let mut sharing = use_signal(|| None::<GiftList>);
    let mut pending_delete = use_signal(|| None::<GiftList>);
    let mut is_deleting = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            match RegistryDashboard::load(&auth.client()).await {
                Ok(loaded) => dashboard.set(loaded),
                Err(e) => {
                    warn!(error = %e, "Failed to load registries");
                    auth.handle_error(&e);
                    error.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        })
    });

    let confirm_delete = move |_| {
        let Some(list) = pending_delete() else {
            return;
        };

        spawn(async move {
            is_deleting.set(true);

            let mut updated = dashboard();
            match updated.delete(&auth.client(), &list.id).await {
                Ok(()) => {
                    dashboard.set(updated);
                    error.set(None);
                }
                Err(e) => {
                    warn!(error = %e, list_id = %list.id, "Failed to delete registry");
                    auth.handle_error(&e);
                    error.set(Some(format!("Could not delete \u{201C}{}\u{201D}: {e}", list.name)));
                }
            }

            is_deleting.set(false);
            pending_delete.set(None);
        });
    };

    let lists = dashboard.read().lists().to_vec();
    let published = dashboard.read().published_count();
    let current_layout = layout();
    let (toggle_label, rows_class) = match current_layout {
        DashboardLayout::List => ("\u{25A6} Grid", "space-y-3"),
        DashboardLayout::Grid => (
            "\u{2630} List",
            "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
        ),
    };

    rsx! {
        div {
            // Header
            div {
                class: "flex flex-wrap items-center justify-between gap-4 mb-6",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "My registries" }
                    if !lists.is_empty() {
                        p { class: "text-sm text-gray-500", "{lists.len()} registries \u{00B7} {published} published" }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "px-3 py-2 text-sm rounded-lg border border-gray-300 bg-white hover:bg-gray-50",
                        onclick: move |_| layout.set(current_layout.toggled()),
                        "{toggle_label}"
                    }
                    Link {
                        to: Route::NewList {},
                        class: "px-4 py-2 text-sm rounded-lg bg-rose-600 text-white hover:bg-rose-700",
                        "+ New registry"
                    }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            if is_loading() {
                LoadingSpinner { label: "Loading registries..." }
            } else if lists.is_empty() {
                EmptyState {
                    icon: "\u{1F381}",
                    title: "You have no registries yet",
                    Link {
                        to: Route::NewList {},
                        class: "text-rose-700 font-medium hover:underline",
                        "Create your first registry"
                    }
                }
            } else {
                div {
                    class: "{rows_class}",
                    for list in lists {
                        RegistryRow {
                            key: "{list.id}",
                            list: list.clone(),
                            layout: current_layout,
                            on_share: move |list| sharing.set(Some(list)),
                            on_delete: move |list| pending_delete.set(Some(list)),
                        }
                    }
                }
            }

            if let Some(list) = sharing() {
                QrModal {
                    list_id: list.id.clone(),
                    list_name: list.name.clone(),
                    share_base_url: app.share_base_url(),
                    on_close: move |_| sharing.set(None),
                }
            }

            if let Some(list) = pending_delete() {
                Modal {
                    title: "Delete registry",
                    on_close: move |_| pending_delete.set(None),
                    p {
                        class: "text-gray-700 mb-6",
                        "Delete \u{201C}{list.name}\u{201D}? Guests will no longer be able to open it."
                    }
                    div {
                        class: "flex justify-end gap-2",
                        button {
                            class: "px-4 py-2 text-sm rounded-lg bg-gray-100 hover:bg-gray-200",
                            onclick: move |_| pending_delete.set(None),
                            "Cancel"
                        }
                        button {
                            class: "px-4 py-2 text-sm rounded-lg bg-red-600 text-white hover:bg-red-700 disabled:opacity-50",
                            disabled: is_deleting(),
                            onclick: confirm_delete,
                            if is_deleting() { "Deleting..." } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RegistryRowProps {
    list: GiftList,
    layout: DashboardLayout,
    on_share: EventHandler<GiftList>,
    on_delete: EventHandler<GiftList>,
}

#[component]
fn RegistryRow(props: RegistryRowProps) -> Element {
    let list = props.list.clone();
    let actions = RowActions::for_list(&list);
    let funded = RegistryDashboard::funded_percent(&list);
    let container = match props.layout {
        DashboardLayout::List => "bg-white rounded-xl border border-gray-200 p-4 flex flex-col md:flex-row md:items-center gap-4",
        DashboardLayout::Grid => "bg-white rounded-xl border border-gray-200 p-4 flex flex-col gap-3",
    };
    let status_class = if list.is_published() {
        "bg-emerald-100 text-emerald-800"
    } else {
        "bg-gray-100 text-gray-700"
    };

    let share_list = list.clone();
    let delete_list = list.clone();

    rsx! {
        div {
            class: "{container}",

            div {
                class: "flex-1 min-w-0",
                div {
                    class: "flex items-center gap-2 mb-1",
                    span { class: "text-xl", "{list.event_type.icon()}" }
                    h3 { class: "font-semibold text-gray-900 truncate", "{list.name}" }
                    span { class: "px-2 py-0.5 rounded-full text-xs font-medium {status_class}", "{list.status.label()}" }
                }
                p {
                    class: "text-sm text-gray-500",
                    "{list.event_label()} \u{00B7} {format::date(list.event_date)} \u{00B7} {list.products.len()} gifts"
                }
                if actions.progress {
                    div { class: "mt-2 max-w-xs", ProgressBar { percent: funded, show_label: true } }
                }
            }

            div {
                class: "flex flex-wrap items-center gap-2",
                if actions.edit {
                    Link {
                        to: Route::EditList { id: list.id.clone() },
                        class: "px-3 py-1.5 text-sm rounded-lg bg-gray-100 hover:bg-gray-200",
                        "Edit"
                    }
                }
                if actions.qr {
                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg bg-gray-100 hover:bg-gray-200",
                        onclick: move |_| props.on_share.call(share_list.clone()),
                        "QR"
                    }
                }
                if actions.progress {
                    Link {
                        to: Route::Progress { id: list.id.clone() },
                        class: "px-3 py-1.5 text-sm rounded-lg bg-gray-100 hover:bg-gray-200",
                        "Progress"
                    }
                }
                if actions.delete {
                    button {
                        class: "px-3 py-1.5 text-sm rounded-lg text-red-700 hover:bg-red-50",
                        onclick: move |_| props.on_delete.call(delete_list.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
