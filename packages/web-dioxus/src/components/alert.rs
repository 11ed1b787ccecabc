use dioxus::prelude::*;

/// Red banner for a failed request or a rejected form
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded-lg text-sm",
            role: "alert",
            "{message}"
        }
    }
}

#[component]
pub fn EmptyState(icon: &'static str, title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "text-center py-16 bg-white rounded-xl border border-dashed border-gray-300",
            div { class: "text-4xl mb-3", "{icon}" }
            p { class: "text-gray-700 font-medium mb-4", "{title}" }
            {children}
        }
    }
}
