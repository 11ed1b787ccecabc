use dioxus::prelude::*;
use registry_core::wizard::{GuestInfoForm, WizardState};

use crate::format;

/// Step 2: guest count and minimum contribution
#[component]
pub fn GuestInfoStep(mut state: Signal<WizardState>) -> Element {
    // Raw text so half-typed values survive re-renders
    let mut guests_text = use_signal(|| match state.peek().guests().guest_count {
        0 => String::new(),
        count => count.to_string(),
    });
    let mut min_text = use_signal(|| state.peek().guests().min_contribution.to_string());
    let mut guests_error = use_signal(|| None::<String>);
    let mut min_error = use_signal(|| None::<String>);

    let locked = state.read().is_min_contribution_locked();
    let suggested = format::money(state.read().suggested_total());

    rsx! {
        h2 { class: "text-lg font-semibold text-gray-900 mb-1", "Guests" }
        p { class: "text-sm text-gray-500 mb-6", "We use these to suggest a funding goal." }

        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6 max-w-2xl",
            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Number of guests" }
                input {
                    r#type: "number",
                    min: "1",
                    value: "{guests_text}",
                    oninput: move |e| {
                        let value = e.value();
                        match GuestInfoForm::parse_guest_count(&value) {
                            Ok(count) => {
                                state.write().set_guest_count(count);
                                guests_error.set(None);
                            }
                            Err(err) => {
                                state.write().set_guest_count(0);
                                guests_error.set(Some(err.to_string()));
                            }
                        }
                        guests_text.set(value);
                    },
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                }
                if let Some(err) = guests_error() {
                    p { class: "mt-1 text-xs text-red-600", "{err}" }
                }
            }

            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Minimum contribution per guest" }
                div {
                    class: "flex items-center gap-2",
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{min_text}",
                        disabled: locked,
                        oninput: move |e| {
                            let value = e.value();
                            let result = state.write().set_min_contribution_text(&value);
                            min_error.set(result.err().map(|err| err.to_string()));
                            min_text.set(value);
                        },
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500 disabled:bg-gray-100 disabled:text-gray-500",
                    }
                    if locked {
                        button {
                            class: "shrink-0 px-3 py-2 text-sm rounded-md bg-gray-100 hover:bg-gray-200",
                            title: "Guests may already have contributed under the current minimum",
                            onclick: move |_| state.write().unlock_min_contribution(),
                            "\u{1F512} Unlock"
                        }
                    }
                }
                if let Some(err) = min_error() {
                    p { class: "mt-1 text-xs text-red-600", "{err}" }
                }
            }
        }

        div {
            class: "mt-6 p-4 rounded-lg bg-rose-50 text-rose-900 max-w-2xl",
            p { class: "text-sm", "Suggested total" }
            p { class: "text-2xl font-bold", "{suggested}" }
        }
    }
}
