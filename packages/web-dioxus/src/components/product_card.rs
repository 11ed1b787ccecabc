//! Catalog item card

use dioxus::prelude::*;
use registry_core::CatalogItem;

use crate::format;

/// Props for ProductCard
#[derive(Props, Clone, PartialEq)]
pub struct ProductCardProps {
    pub item: CatalogItem,
    /// Button text; no button is rendered without a handler
    #[props(default = "Add")]
    pub action_label: &'static str,
    #[props(optional)]
    pub on_action: Option<EventHandler<CatalogItem>>,
    /// Extra content between the price and the button
    pub children: Element,
}

/// Card showing a catalog item's image, price and vendor
#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let item = &props.item;
    let price = format::money(item.price);

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-4 hover:shadow-md transition-shadow flex flex-col h-full",

            // Image
            div {
                class: "h-32 mb-3 rounded-lg bg-gray-100 overflow-hidden flex items-center justify-center",
                if let Some(url) = item.primary_image() {
                    img { class: "h-full w-full object-cover", src: "{url}", alt: "{item.name}" }
                } else {
                    span { class: "text-3xl", "\u{1F381}" }
                }
            }

            h3 { class: "font-semibold text-gray-900 line-clamp-2", "{item.name}" }
            p { class: "text-sm text-gray-500 mb-2", "{item.category} \u{00B7} {item.supplier}" }
            p { class: "text-lg font-bold text-rose-700 mb-3", "{price}" }

            div { class: "mb-3", {props.children} }

            if let Some(handler) = props.on_action {
                button {
                    class: "mt-auto px-3 py-1.5 bg-rose-600 text-white text-sm rounded-lg hover:bg-rose-700 transition-colors",
                    onclick: {
                        let item = props.item.clone();
                        move |_| handler.call(item.clone())
                    },
                    "{props.action_label}"
                }
            }
        }
    }
}
