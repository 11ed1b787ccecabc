use dioxus::prelude::*;
use registry_core::confirmation::{is_valid_email, is_valid_phone, TermsGate};
use registry_core::wizard::WizardState;

use crate::browser::scroll_metrics;
use crate::components::Modal;
use crate::format;

const TERMS_BODY_ID: &str = "terms-body";

const TERMS: &[(&str, &str)] = &[
    (
        "1. The service",
        "The registry lets you publish a list of gifts and collect money contributions from your guests toward each gift. Contributions are held until the campaign ends and are then paid out to the account holder.",
    ),
    (
        "2. Your responsibilities",
        "You confirm that the event is real, that the contact details you provide are your own, and that you will keep them up to date while the registry is published.",
    ),
    (
        "3. Minimum contributions",
        "If you set a minimum contribution, guests cannot give less than that amount toward a gift. Once guests have contributed you can only change the minimum after explicitly unlocking it.",
    ),
    (
        "4. Campaign dates",
        "Contributions are accepted between the campaign start and end dates. The campaign must end on or before the event date.",
    ),
    (
        "5. Fees and payouts",
        "A processing fee is deducted from each contribution. Payouts are made within ten business days of the campaign end to the account registered on your profile.",
    ),
    (
        "6. Cancellation",
        "You may unpublish a registry at any time. Contributions already received are refunded to the guests who made them, minus processing fees.",
    ),
    (
        "7. Privacy",
        "Guest names and contribution amounts are visible to you. Your email and phone are never shown on the published page.",
    ),
];

/// Step 5: contact details and terms
#[component]
pub fn ConfirmationStep(mut state: Signal<WizardState>) -> Element {
    let mut gate = use_signal(TermsGate::default);
    let mut terms_error = use_signal(|| None::<String>);

    let confirmation = state.read().confirmation.clone();
    let min_contribution = state.read().guests().min_contribution;
    let suggested = format::money(state.read().suggested_total());
    let effective_min = format::money(confirmation.effective_min_contribution(min_contribution));

    let email_invalid = !confirmation.email.is_empty() && !is_valid_email(&confirmation.email);
    let phone_invalid = !confirmation.phone.is_empty() && !is_valid_phone(&confirmation.phone);

    let mut track_scroll = move || {
        if let Some((top, client_height, scroll_height)) = scroll_metrics(TERMS_BODY_ID) {
            gate.write().on_scroll(top, client_height, scroll_height);
        }
    };

    rsx! {
        h2 { class: "text-lg font-semibold text-gray-900 mb-1", "Confirm and publish" }
        p { class: "text-sm text-gray-500 mb-6", "We contact you about contributions and payouts here." }

        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6 max-w-3xl",
            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Email" }
                input {
                    r#type: "email",
                    value: "{confirmation.email}",
                    oninput: move |e| state.write().confirmation.email = e.value(),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                }
                if email_invalid {
                    p { class: "mt-1 text-xs text-red-600", "Enter a valid email address" }
                }
            }
            div {
                label { class: "block text-sm font-medium text-gray-700 mb-2", "Phone" }
                input {
                    r#type: "tel",
                    value: "{confirmation.phone}",
                    oninput: move |e| state.write().confirmation.phone = e.value(),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                }
                if phone_invalid {
                    p { class: "mt-1 text-xs text-red-600", "Enter a valid phone number" }
                }
            }
        }

        div {
            class: "mt-6 p-4 rounded-lg bg-rose-50 text-rose-900 max-w-3xl space-y-3",
            div {
                class: "flex items-center justify-between",
                span { class: "text-sm", "Suggested total" }
                span { class: "text-xl font-bold", "{suggested}" }
            }
            label {
                class: "flex items-center gap-2 text-sm",
                input {
                    r#type: "checkbox",
                    checked: confirmation.use_min_contribution,
                    onchange: move |e| state.write().confirmation.use_min_contribution = e.checked(),
                }
                "Require a minimum contribution of {effective_min} per guest"
            }
        }

        div {
            class: "mt-6 flex items-center gap-3",
            if confirmation.terms_accepted {
                span { class: "text-sm text-green-700", "\u{2713} Terms accepted" }
            } else {
                span { class: "text-sm text-gray-600", "You must accept the terms to publish." }
            }
            button {
                class: "text-sm text-rose-700 hover:underline",
                onclick: move |_| {
                    terms_error.set(None);
                    gate.write().open();
                },
                "Read terms and conditions"
            }
        }

        if gate.read().is_open() {
            Modal {
                title: "Terms and conditions".to_string(),
                width: "max-w-2xl",
                on_close: move |_| gate.write().close(),
                div {
                    id: TERMS_BODY_ID,
                    class: "px-5 py-4 overflow-y-auto max-h-[50vh] space-y-4 text-sm text-gray-700",
                    onscroll: move |_| track_scroll(),
                    // Short terms may not scroll at all.
                    onmounted: move |_| track_scroll(),
                    for (heading, body) in TERMS.iter().copied() {
                        div {
                            key: "{heading}",
                            h3 { class: "font-semibold text-gray-900 mb-1", "{heading}" }
                            p { "{body}" }
                        }
                    }
                }
                div {
                    class: "px-5 py-4 border-t border-gray-100 flex items-center justify-between gap-4",
                    if let Some(err) = terms_error() {
                        p { class: "text-xs text-red-600", "{err}" }
                    } else if !gate.read().read_to_end() {
                        p { class: "text-xs text-gray-500", "Scroll to the end to accept." }
                    } else {
                        span {}
                    }
                    button {
                        class: "px-4 py-2 rounded-lg bg-rose-600 text-white hover:bg-rose-700 disabled:opacity-40 disabled:cursor-not-allowed",
                        disabled: !gate.read().read_to_end(),
                        onclick: move |_| {
                            let result = gate.write().accept(&mut state.write().confirmation);
                            terms_error.set(result.err().map(|e| e.to_string()));
                        },
                        "I accept"
                    }
                }
            }
        }
    }
}
