use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center text-center px-4",
            h1 { class: "text-4xl font-bold text-gray-900 mb-2", "404" }
            p { class: "text-gray-600 mb-6", "Nothing lives at /{path}." }
            Link {
                to: Route::Dashboard {},
                class: "text-rose-700 hover:underline",
                "Go to my registries"
            }
        }
    }
}
