//! Modal dialog shell

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: EventHandler<()>,
    #[props(default = "max-w-md")]
    pub width: &'static str,
    pub children: Element,
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center px-4",
            div {
                class: "absolute inset-0 bg-black/40",
                onclick: move |_| on_close.call(()),
            }
            div {
                class: "relative bg-white rounded-xl shadow-xl w-full {props.width} max-h-[90vh] flex flex-col",
                div {
                    class: "flex items-center justify-between px-5 py-4 border-b border-gray-100",
                    h2 { class: "text-lg font-semibold text-gray-900", "{props.title}" }
                    button {
                        class: "text-gray-400 hover:text-gray-600 text-xl leading-none",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }
                div {
                    class: "px-5 py-4 overflow-y-auto",
                    {props.children}
                }
            }
        }
    }
}
