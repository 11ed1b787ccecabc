//! Public registry page guests open from the share link

use dioxus::prelude::*;
use registry_core::progress::{percent_u8, progress_percent};
use registry_core::published::{PublishedRegistry, Rsvp};
use registry_core::{CatalogItem, ClientError};
use rust_decimal::Decimal;
use tracing::warn;

use crate::auth::use_auth;
use crate::components::{ErrorBanner, LoadingSpinner, Modal, ProductCard, ProgressBar};
use crate::format;

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Ready,
    Unpublished,
    Failed(String),
}

/// Published registry: gifts with funding progress, contributions and RSVP
#[component]
pub fn Published(id: String) -> Element {
    let auth = use_auth();

    let mut registry = use_signal(|| None::<PublishedRegistry>);
    let mut page = use_signal(|| PageState::Loading);
    let mut contributing = use_signal(|| None::<CatalogItem>);
    let mut thanks = use_signal(|| None::<String>);

    use_hook(move || {
        spawn(async move {
            match auth.client().list(&id).await {
                Ok(list) => match PublishedRegistry::new(list) {
                    Some(loaded) => {
                        registry.set(Some(loaded));
                        page.set(PageState::Ready);
                    }
                    None => page.set(PageState::Unpublished),
                },
                Err(ClientError::NotFound(_)) => page.set(PageState::Unpublished),
                Err(e) => {
                    warn!(error = %e, list_id = %id, "Failed to load published registry");
                    page.set(PageState::Failed(e.to_string()));
                }
            }
        })
    });

    let content = match (page(), registry()) {
        (PageState::Loading, _) => rsx! { LoadingSpinner {} },
        (PageState::Failed(err), _) => rsx! { ErrorBanner { message: err } },
        (PageState::Ready, Some(current)) => {
            let list = current.list().clone();
            let overall = current.overall();
            let minimum = current.min_contribution();
            let items = current.items().to_vec();

            rsx! {
                header {
                    class: "text-center mb-10",
                    div { class: "text-5xl mb-3", "{list.event_type.icon()}" }
                    h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{list.name}" }
                    p {
                        class: "text-gray-600",
                        "{list.event_label()} \u{00B7} {format::date(list.event_date)}"
                    }
                    if let Some(location) = list.location.as_ref().filter(|l| !l.address.is_empty()) {
                        p { class: "text-sm text-gray-500 mt-1", "\u{1F4CD} {location.address}" }
                    }
                    div {
                        class: "max-w-md mx-auto mt-6",
                        ProgressBar { percent: overall.percent_rounded(), show_label: true }
                        p {
                            class: "mt-1 text-sm text-gray-500",
                            "{format::money(overall.total_contributed)} of {format::money(overall.total_goal)} raised"
                        }
                    }
                }

                if let Some(message) = thanks() {
                    div {
                        class: "mb-6 p-3 bg-emerald-50 border border-emerald-200 text-emerald-800 rounded-lg text-sm",
                        "{message}"
                    }
                }

                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 mb-12",
                    for item in items {
                        ProductCard {
                            key: "{item.id}",
                            item: item.clone(),
                            action_label: "Contribute",
                            on_action: move |item| contributing.set(Some(item)),
                            GiftFunding { item: item.clone() }
                        }
                    }
                }

                RsvpForm { list_id: list.id.clone() }

                if let Some(item) = contributing() {
                    ContributionModal {
                        item: item,
                        minimum: minimum,
                        on_close: move |_| contributing.set(None),
                        on_contribute: move |(item, amount): (CatalogItem, Decimal)| {
                            let mut guard = registry.write();
                            let Some(current) = guard.as_mut() else {
                                return Err("This registry is no longer available".to_string());
                            };
                            current.contribute(&item.id, amount).map_err(|e| e.to_string())?;
                            thanks.set(Some(format!(
                                "Thank you! Your {} contribution toward {} was recorded.",
                                format::money(amount),
                                item.name
                            )));
                            contributing.set(None);
                            Ok(())
                        },
                    }
                }
            }
        }
        _ => rsx! {
            div {
                class: "text-center py-16",
                div { class: "text-4xl mb-3", "\u{1F512}" }
                p { class: "text-gray-700 font-medium", "This registry is not available." }
                p { class: "text-sm text-gray-500", "It may still be a draft or it was removed." }
            }
        },
    };

    rsx! {
        div {
            class: "min-h-screen bg-rose-50/40",
            main {
                class: "max-w-5xl mx-auto px-4 py-10",
                {content}
            }
        }
    }
}

#[component]
fn GiftFunding(item: CatalogItem) -> Element {
    let percent = percent_u8(progress_percent(item.contributed(), item.goal()));

    rsx! {
        ProgressBar { percent: percent }
        p {
            class: "mt-1 text-xs text-gray-500",
            "{format::money(item.contributed())} of {format::money(item.goal())}"
        }
    }
}

/// Validated pledge; returns the error text to show in the dialog
type ContributeResult = Result<(), String>;

#[component]
fn ContributionModal(
    item: CatalogItem,
    minimum: Decimal,
    on_close: EventHandler<()>,
    on_contribute: Callback<(CatalogItem, Decimal), ContributeResult>,
) -> Element {
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit_item = item.clone();
    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let parsed = match PublishedRegistry::parse_amount(&amount()) {
            Ok(parsed) => parsed,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        if let Err(message) = on_contribute.call((submit_item.clone(), parsed)) {
            error.set(Some(message));
        }
    };

    rsx! {
        Modal {
            title: "Contribute to {item.name}",
            on_close: move |_| on_close.call(()),
            form {
                onsubmit: handle_submit,
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                p {
                    class: "text-sm text-gray-600 mb-4",
                    "{format::money(item.contributed())} of {format::money(item.goal())} raised so far."
                    if minimum > Decimal::ZERO {
                        " Minimum contribution: {format::money(minimum)}."
                    }
                }
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Amount" }
                input {
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    value: "{amount}",
                    oninput: move |e| amount.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500 mb-4",
                }
                button {
                    r#type: "submit",
                    class: "w-full bg-rose-700 text-white py-2 px-4 rounded-md hover:bg-rose-800",
                    "Contribute"
                }
            }
        }
    }
}

#[component]
fn RsvpForm(list_id: String) -> Element {
    let mut rsvp = use_signal(|| Rsvp {
        attending: true,
        ..Rsvp::default()
    });
    let mut error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        match rsvp.read().submit(&list_id) {
            Ok(()) => {
                error.set(None);
                sent.set(true);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    if sent() {
        return rsx! {
            div {
                class: "bg-white rounded-xl border border-gray-200 p-6 text-center",
                p { class: "text-lg font-semibold text-gray-900", "Thanks, {rsvp.read().name.trim()}!" }
                p { class: "text-sm text-gray-500", "Your RSVP was received." }
            }
        };
    }

    let current = rsvp();

    rsx! {
        form {
            class: "bg-white rounded-xl border border-gray-200 p-6 max-w-xl mx-auto",
            onsubmit: handle_submit,
            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "RSVP" }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            label { class: "block text-sm font-medium text-gray-700 mb-1", "Your name" }
            input {
                r#type: "text",
                value: "{current.name}",
                oninput: move |e| rsvp.write().name = e.value(),
                class: "w-full px-3 py-2 border border-gray-300 rounded-md mb-4",
            }

            div {
                class: "flex gap-4 mb-4",
                label {
                    class: "inline-flex items-center gap-2 text-sm",
                    input {
                        r#type: "radio",
                        name: "attending",
                        checked: current.attending,
                        onchange: move |_| rsvp.write().attending = true,
                    }
                    "I'll be there"
                }
                label {
                    class: "inline-flex items-center gap-2 text-sm",
                    input {
                        r#type: "radio",
                        name: "attending",
                        checked: !current.attending,
                        onchange: move |_| rsvp.write().attending = false,
                    }
                    "Can't make it"
                }
            }

            if current.attending {
                label { class: "block text-sm font-medium text-gray-700 mb-1", "Companions" }
                input {
                    r#type: "number",
                    min: "0",
                    value: "{current.companions}",
                    oninput: move |e| rsvp.write().companions = e.value().trim().parse().unwrap_or(0),
                    class: "w-32 px-3 py-2 border border-gray-300 rounded-md mb-4",
                }
            }

            label { class: "block text-sm font-medium text-gray-700 mb-1", "Message (optional)" }
            textarea {
                value: "{current.message}",
                oninput: move |e| rsvp.write().message = e.value(),
                rows: "3",
                class: "w-full px-3 py-2 border border-gray-300 rounded-md mb-4",
            }

            button {
                r#type: "submit",
                class: "px-6 py-2 bg-rose-700 text-white rounded-md hover:bg-rose-800",
                "Send RSVP"
            }
        }
    }
}
