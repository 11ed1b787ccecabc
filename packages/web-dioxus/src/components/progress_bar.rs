//! Funding progress bar

use dioxus::prelude::*;

/// Horizontal bar filled to `percent` (0-100)
#[component]
pub fn ProgressBar(percent: u8, #[props(default = false)] show_label: bool) -> Element {
    let percent = percent.min(100);
    let fill = if percent >= 100 {
        "bg-emerald-500"
    } else {
        "bg-rose-500"
    };

    rsx! {
        div {
            class: "w-full",
            div {
                class: "w-full h-2 bg-gray-200 rounded-full overflow-hidden",
                div {
                    class: "h-full {fill} transition-all duration-300",
                    style: "width: {percent}%",
                }
            }
            if show_label {
                p { class: "mt-1 text-xs text-gray-500 text-right", "{percent}% funded" }
            }
        }
    }
}
