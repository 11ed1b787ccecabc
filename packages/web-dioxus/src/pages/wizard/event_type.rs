use dioxus::prelude::*;
use registry_core::wizard::WizardState;
use registry_core::EventKind;

/// Step 1: what is being celebrated
#[component]
pub fn EventTypeStep(mut state: Signal<WizardState>) -> Element {
    let event = state.read().event.clone();

    rsx! {
        h2 { class: "text-lg font-semibold text-gray-900 mb-1", "What are you celebrating?" }
        p { class: "text-sm text-gray-500 mb-6", "Pick the event this registry is for." }

        div {
            class: "grid grid-cols-2 md:grid-cols-4 gap-3 mb-6",
            for kind in EventKind::variants().iter().copied() {
                label {
                    key: "{kind.label()}",
                    class: if event.kind == Some(kind) {
                        "flex flex-col items-center gap-2 p-4 rounded-xl border-2 border-rose-500 bg-rose-50 cursor-pointer"
                    } else {
                        "flex flex-col items-center gap-2 p-4 rounded-xl border-2 border-gray-200 hover:border-rose-300 cursor-pointer"
                    },
                    input {
                        r#type: "radio",
                        name: "event-type",
                        class: "sr-only",
                        checked: event.kind == Some(kind),
                        onchange: move |_| state.write().event.kind = Some(kind),
                    }
                    span { class: "text-3xl", "{kind.icon()}" }
                    span { class: "text-sm font-medium text-gray-800", "{kind.label()}" }
                }
            }
        }

        if event.kind == Some(EventKind::Other) {
            label { class: "block text-sm font-medium text-gray-700 mb-2", "Describe your event" }
            input {
                r#type: "text",
                value: "{event.custom}",
                placeholder: "e.g. Housewarming, Graduation",
                oninput: move |e| state.write().event.custom = e.value(),
                class: "w-full max-w-md px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
            }
        }
    }
}
