//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...")] label: &'static str) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-12",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-rose-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-rose-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-rose-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "{label}" }
        }
    }
}

/// Inline indicator shown beside buttons while a request is in flight
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        span {
            class: "inline-flex items-center gap-1",
            role: "status",
            for delay in ["0s", "0.15s", "0.3s"] {
                span {
                    key: "{delay}",
                    class: "w-1.5 h-1.5 bg-rose-400 rounded-full animate-bounce",
                    style: "animation-delay: {delay}",
                }
            }
            span { class: "sr-only", "Saving" }
        }
    }
}

/// Card-shaped placeholder while a grid loads
#[component]
pub fn CardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-4 animate-pulse",
            div { class: "h-32 w-full bg-gray-200 rounded-lg mb-3" }
            div { class: "h-5 w-3/4 bg-gray-200 rounded mb-2" }
            div { class: "h-4 w-1/2 bg-gray-200 rounded mb-3" }
            div { class: "h-8 w-24 bg-gray-200 rounded-lg" }
        }
    }
}
