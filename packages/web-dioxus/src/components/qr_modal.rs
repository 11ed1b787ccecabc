use dioxus::prelude::*;
use registry_core::dashboard::{share_qr_svg, share_url};

use super::Modal;

/// QR code and link guests use to open a published registry
#[component]
pub fn QrModal(
    list_id: String,
    list_name: String,
    share_base_url: String,
    on_close: EventHandler<()>,
) -> Element {
    let url = share_url(&share_base_url, &list_id);
    let svg = share_qr_svg(&share_base_url, &list_id);

    rsx! {
        Modal {
            title: "Share \u{201C}{list_name}\u{201D}",
            on_close: move |_| on_close.call(()),
            div {
                class: "flex flex-col items-center gap-4",
                match svg {
                    Some(svg) => rsx! {
                        div { class: "w-52 h-52", dangerous_inner_html: "{svg}" }
                    },
                    None => rsx! {
                        p { class: "text-sm text-gray-500", "QR code unavailable for this link." }
                    },
                }
                a {
                    class: "text-sm text-rose-700 break-all hover:underline",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{url}"
                }
            }
        }
    }
}
