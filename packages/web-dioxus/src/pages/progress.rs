//! Progress report page

use dioxus::prelude::*;
use registry_core::progress::ProgressReport;
use registry_core::GiftList;
use tracing::warn;

use crate::auth::use_auth;
use crate::components::{ErrorBanner, LoadingSpinner, ProgressBar};
use crate::format;
use crate::routes::Route;

/// Contributions received by a published registry
#[component]
pub fn Progress(id: String) -> Element {
    let auth = use_auth();

    let mut loaded = use_signal(|| None::<(GiftList, ProgressReport)>);
    let mut error = use_signal(|| None::<String>);

    use_hook(move || {
        spawn(async move {
            match ProgressReport::load(&auth.client(), &id).await {
                Ok(result) => loaded.set(Some(result)),
                Err(e) => {
                    warn!(error = %e, list_id = %id, "Failed to load progress report");
                    auth.handle_error(&e);
                    error.set(Some(e.to_string()));
                }
            }
        })
    });

    let body = match (loaded(), error()) {
        (_, Some(err)) => rsx! { ErrorBanner { message: err } },
        (None, None) => rsx! { LoadingSpinner { label: "Loading report..." } },
        (Some((list, _)), None) if !ProgressReport::is_eligible(&list) => rsx! {
            div {
                class: "bg-amber-50 border border-amber-200 text-amber-800 p-4 rounded-lg",
                "Progress reports are available once \u{201C}{list.name}\u{201D} is published."
            }
        },
        (Some((list, report)), None) => rsx! { ReportBody { list: list, report: report } },
    };

    rsx! {
        div {
            Link {
                to: Route::Dashboard {},
                class: "text-rose-700 hover:text-rose-800 text-sm mb-4 inline-block",
                "\u{2190} Back to registries"
            }
            {body}
        }
    }
}

#[component]
fn ReportBody(list: GiftList, report: ProgressReport) -> Element {
    let funded_items = report.funded_items();
    let item_count = report.items.len();

    rsx! {
        h1 { class: "text-2xl font-bold text-gray-900 mb-1", "{list.name}" }
        p { class: "text-sm text-gray-500 mb-6", "{list.event_label()} \u{00B7} {format::date(list.event_date)}" }

        // Totals
        div {
            class: "grid grid-cols-1 md:grid-cols-4 gap-4 mb-8",
            StatCard { title: "Goal", value: format::money(report.total_goal) }
            StatCard { title: "Contributed", value: format::money(report.total_contributed) }
            StatCard { title: "Remaining", value: format::money(report.remaining()) }
            StatCard { title: "Contributors", value: report.contributor_count.to_string() }
        }

        div {
            class: "bg-white rounded-xl border border-gray-200 p-6 mb-8",
            div {
                class: "flex items-center justify-between mb-2",
                h2 { class: "font-semibold text-gray-900", "Overall" }
                span { class: "text-sm text-gray-500", "{funded_items} of {item_count} gifts fully funded" }
            }
            ProgressBar { percent: report.percent_rounded(), show_label: true }
        }

        // Per item
        div {
            class: "bg-white rounded-xl border border-gray-200 mb-8",
            h2 { class: "font-semibold text-gray-900 px-6 pt-5 pb-3", "Gifts" }
            ul {
                class: "divide-y divide-gray-100",
                for item in report.items.iter() {
                    li {
                        key: "{item.product_id}",
                        class: "px-6 py-4",
                        div {
                            class: "flex items-center justify-between mb-2",
                            span { class: "text-gray-900", "{item.name}" }
                            span {
                                class: "text-sm text-gray-500",
                                "{format::money(item.contributed)} of {format::money(item.goal)}"
                            }
                        }
                        ProgressBar { percent: item.percent_rounded() }
                    }
                }
            }
        }

        // Contributor roll
        div {
            class: "bg-white rounded-xl border border-gray-200",
            h2 { class: "font-semibold text-gray-900 px-6 pt-5 pb-3", "Contributions" }
            if report.contributions.is_empty() {
                p { class: "px-6 pb-5 text-sm text-gray-500", "No contributions yet." }
            } else {
                table {
                    class: "w-full text-sm",
                    thead {
                        tr {
                            class: "text-left text-gray-500 border-b border-gray-100",
                            th { class: "px-6 py-2 font-medium", "Guest" }
                            th { class: "px-6 py-2 font-medium", "Gift" }
                            th { class: "px-6 py-2 font-medium text-right", "Amount" }
                            th { class: "px-6 py-2 font-medium", "Date" }
                        }
                    }
                    tbody {
                        for contribution in report.contributions.iter() {
                            tr {
                                key: "{contribution.id}",
                                class: "border-b border-gray-50 align-top",
                                td {
                                    class: "px-6 py-3",
                                    p { class: "text-gray-900", "{contribution.contributor_name}" }
                                    if let Some(message) = contribution.message.as_ref() {
                                        p { class: "text-xs text-gray-500 italic", "\u{201C}{message}\u{201D}" }
                                    }
                                }
                                td { class: "px-6 py-3 text-gray-700", "{product_name(&list, &contribution.product_id)}" }
                                td { class: "px-6 py-3 text-right text-gray-900", "{format::money(contribution.amount)}" }
                                td { class: "px-6 py-3 text-gray-500", "{format::timestamp(&contribution.created_at)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn product_name(list: &GiftList, product_id: &str) -> String {
    list.find_product(product_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| product_id.to_string())
}

#[component]
fn StatCard(title: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 p-5",
            p { class: "text-sm text-gray-500", "{title}" }
            p { class: "text-2xl font-bold text-gray-900 mt-1", "{value}" }
        }
    }
}
