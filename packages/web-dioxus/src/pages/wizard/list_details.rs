use dioxus::prelude::*;
use registry_core::location::MapBounds;
use registry_core::wizard::{ListDetailsForm, WizardState};
use tracing::debug;

use crate::format;

/// Degrees of latitude/longitude shown around an existing pin
const PIN_SPAN: f64 = 0.05;

/// Step 4: name, dates and where the event happens
#[component]
pub fn ListDetailsStep(mut state: Signal<WizardState>) -> Element {
    let details = state.read().details.clone();

    rsx! {
        h2 { class: "text-lg font-semibold text-gray-900 mb-1", "Registry details" }
        p { class: "text-sm text-gray-500 mb-6", "Guests see these on the published page." }

        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6",
            div {
                class: "md:col-span-2",
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Registry name" }
                input {
                    r#type: "text",
                    value: "{details.name}",
                    placeholder: "Ana & Luis' wedding",
                    oninput: move |e| state.write().details.name = e.value(),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                }
            }

            DateField {
                label: "Event date",
                value: format::date_input(details.event_date),
                on_change: move |value: String| {
                    state.write().details.event_date = ListDetailsForm::parse_date(&value);
                },
            }
            div {}
            DateField {
                label: "Campaign starts",
                value: format::date_input(details.campaign_start),
                on_change: move |value: String| {
                    state.write().details.campaign_start = ListDetailsForm::parse_date(&value);
                },
            }
            DateField {
                label: "Campaign ends",
                value: format::date_input(details.campaign_end),
                on_change: move |value: String| {
                    state.write().details.campaign_end = ListDetailsForm::parse_date(&value);
                },
            }

            div {
                class: "md:col-span-2",
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Address" }
                input {
                    r#type: "text",
                    value: "{details.location.address}",
                    placeholder: "Venue or street address",
                    oninput: move |e| state.write().details.location.address = e.value(),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                }
            }

            div {
                class: "md:col-span-2",
                MapPicker { state: state }
            }
        }
    }
}

#[component]
fn DateField(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-2", "{label}" }
            input {
                r#type: "date",
                value: "{value}",
                oninput: move |e| on_change.call(e.value()),
                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
            }
        }
    }
}

/// Embedded map; clicking it drops the event pin
#[component]
fn MapPicker(mut state: Signal<WizardState>) -> Element {
    let location = state.read().details.location.clone();
    let marker = location.lat.zip(location.lng);

    let bounds = use_signal(|| match marker {
        Some((lat, lng)) => MapBounds::around(lat, lng, PIN_SPAN),
        None => MapBounds::default(),
    });
    let mut size = use_signal(|| (0.0_f64, 0.0_f64));
    let mut error = use_signal(|| None::<String>);

    let embed_url = bounds.read().embed_url(marker);

    rsx! {
        label { class: "block text-sm font-medium text-gray-700 mb-2", "Pin the location" }
        div {
            class: "relative h-72 rounded-lg overflow-hidden border border-gray-300",
            iframe {
                class: "absolute inset-0 w-full h-full",
                src: "{embed_url}",
                title: "Event location",
            }
            // The iframe swallows clicks, so an overlay captures them.
            div {
                class: "absolute inset-0 cursor-crosshair",
                onmounted: move |e| async move {
                    if let Ok(rect) = e.get_client_rect().await {
                        size.set((rect.size.width, rect.size.height));
                    }
                },
                onclick: move |e| {
                    let point = e.element_coordinates();
                    let (width, height) = size();
                    match bounds.read().point_at(point.x, point.y, width, height) {
                        Ok(coords) => {
                            debug!(lat = coords.0, lng = coords.1, "Location picked");
                            state.write().details.location.set_point(coords);
                            error.set(None);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                },
            }
        }
        if let Some((lat, lng)) = marker {
            p { class: "mt-2 text-xs text-gray-500", "Pinned at {lat:.5}, {lng:.5}" }
        } else {
            p { class: "mt-2 text-xs text-gray-500", "Click the map to place a pin." }
        }
        if let Some(err) = error() {
            p { class: "mt-1 text-xs text-red-600", "{err}" }
        }
    }
}
