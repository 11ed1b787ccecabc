//! Step 3: browse the catalog and build the selection

use dioxus::prelude::*;
use registry_core::api::or_empty;
use registry_core::catalog::{AdvancedFilter, CatalogBrowser, SearchDebouncer};
use registry_core::wizard::WizardState;
use registry_core::{CatalogItem, Category, Supplier};
use tracing::debug;

use crate::auth::{use_auth, AuthContext};
use crate::browser::sleep;
use crate::components::{CardSkeleton, ErrorBanner, ProductCard};
use crate::format;
use crate::state::use_app_state;

/// Issue the browser's current request and store the result unless a newer
/// fetch has started meanwhile.
fn load_catalog(
    auth: AuthContext,
    mut catalog: Signal<CatalogBrowser>,
    mut is_loading: Signal<bool>,
) {
    spawn(async move {
        let (ticket, request) = catalog.write().begin_fetch();
        is_loading.set(true);
        let result = request.send(&auth.client()).await;
        if let Err(e) = &result {
            auth.handle_error(e);
        }
        // A newer fetch owns the spinner until it lands.
        if catalog.write().apply_fetch(ticket, result) {
            is_loading.set(false);
        }
    });
}

#[component]
pub fn GiftSelectionStep(mut state: Signal<WizardState>) -> Element {
    let auth = use_auth();
    let app = use_app_state();

    let catalog = use_signal(|| CatalogBrowser::new(app.page_size()));
    let is_loading = use_signal(|| true);
    let mut term = use_signal(|| catalog.peek().term().to_string());
    let mut show_filter = use_signal(|| false);
    let debouncer = use_hook(SearchDebouncer::new);

    let vocabularies = use_resource(move || async move {
        let client = auth.client();
        let suppliers = or_empty(client.suppliers().await, "suppliers");
        let categories = or_empty(client.categories().await, "categories");
        (suppliers, categories)
    });

    use_hook(move || load_catalog(auth, catalog, is_loading));

    let delay = app.search_debounce();
    let handle_search = move |e: FormEvent| {
        let value = e.value();
        term.set(value.clone());

        let generation = debouncer.bump();
        let debouncer = debouncer.clone();
        spawn(async move {
            sleep(delay).await;
            if !debouncer.is_current(generation) {
                debug!(generation, "Dropping superseded catalog search");
                return;
            }
            let mut catalog = catalog;
            if catalog.write().set_term(&value) {
                load_catalog(auth, catalog, is_loading);
            }
        });
    };

    let go_to_page = move |forward: bool| {
        let mut catalog = catalog;
        let moved = if forward {
            catalog.write().next_page()
        } else {
            catalog.write().previous_page()
        };
        if moved {
            load_catalog(auth, catalog, is_loading);
        }
    };

    let selection = state.read().selection.clone();
    let visible = catalog.read().visible_items(&selection);
    let page = catalog.read().page();
    let total_pages = catalog.read().total_pages();
    let catalog_error = catalog.read().error().map(str::to_string);
    let filter_active = catalog.read().filter().is_some();
    let (suppliers, categories) = vocabularies.read().clone().unwrap_or_default();

    rsx! {
        h2 { class: "text-lg font-semibold text-gray-900 mb-1", "Choose gifts" }
        p { class: "text-sm text-gray-500 mb-6", "Add items from the catalog. You can set quantities on the right." }

        div {
            class: "grid grid-cols-1 lg:grid-cols-3 gap-6",

            // Catalog
            div {
                class: "lg:col-span-2",
                div {
                    class: "flex gap-2 mb-4",
                    input {
                        r#type: "search",
                        value: "{term}",
                        oninput: handle_search,
                        placeholder: "Search gifts...",
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-rose-500",
                    }
                    button {
                        class: if filter_active {
                            "px-3 py-2 text-sm rounded-md bg-rose-100 text-rose-800"
                        } else {
                            "px-3 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50"
                        },
                        onclick: move |_| show_filter.set(!show_filter()),
                        "Filters"
                    }
                }

                if show_filter() {
                    FilterPanel {
                        suppliers: suppliers,
                        categories: categories,
                        initial: catalog.read().filter().cloned().unwrap_or_default(),
                        on_apply: move |filter: AdvancedFilter| {
                            let mut catalog = catalog;
                            let result = catalog.write().apply_filter(filter);
                            match result {
                                Ok(()) => {
                                    load_catalog(auth, catalog, is_loading);
                                    show_filter.set(false);
                                    Ok(())
                                }
                                Err(e) => Err(e.to_string()),
                            }
                        },
                        on_clear: move |_| {
                            let mut catalog = catalog;
                            catalog.write().clear_filter();
                            load_catalog(auth, catalog, is_loading);
                        },
                    }
                }

                if let Some(err) = catalog_error {
                    ErrorBanner { message: err }
                }

                if is_loading() {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-4",
                        CardSkeleton {}
                        CardSkeleton {}
                        CardSkeleton {}
                    }
                } else if visible.is_empty() {
                    p { class: "text-center text-gray-500 py-12", "No gifts match your search." }
                } else {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-4",
                        for item in visible {
                            ProductCard {
                                key: "{item.id}",
                                item: item.clone(),
                                on_action: move |item: CatalogItem| {
                                    state.write().selection.add(item);
                                },
                                span { class: "text-xs text-gray-400", "{item.category}" }
                            }
                        }
                    }
                }

                div {
                    class: "flex items-center justify-between mt-4 text-sm",
                    button {
                        class: "px-3 py-1.5 rounded-md border border-gray-300 disabled:opacity-40",
                        disabled: page <= 1 || is_loading(),
                        onclick: move |_| go_to_page(false),
                        "\u{2190} Previous"
                    }
                    span { class: "text-gray-500", "Page {page} of {total_pages.max(1)}" }
                    button {
                        class: "px-3 py-1.5 rounded-md border border-gray-300 disabled:opacity-40",
                        disabled: page >= total_pages || is_loading(),
                        onclick: move |_| go_to_page(true),
                        "Next \u{2192}"
                    }
                }
            }

            // Selection
            aside {
                class: "bg-gray-50 rounded-xl p-4 h-fit",
                h3 {
                    class: "font-semibold text-gray-900 mb-3",
                    "Selected gifts ({selection.len()})"
                }
                if selection.is_empty() {
                    p { class: "text-sm text-gray-500", "Nothing selected yet." }
                } else {
                    ul {
                        class: "space-y-3 mb-4",
                        for item in selection.items().iter().cloned() {
                            SelectedRow { key: "{item.id}", state: state, item: item }
                        }
                    }
                    div {
                        class: "flex items-center justify-between border-t border-gray-200 pt-3 text-sm",
                        span { class: "text-gray-600", "Total" }
                        span { class: "font-semibold text-gray-900", "{format::money(selection.total())}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SelectedRow(mut state: Signal<WizardState>, item: CatalogItem) -> Element {
    let mut quantity_error = use_signal(|| None::<String>);

    let quantity_id = item.id.clone();
    let remove_id = item.id.clone();

    rsx! {
        li {
            class: "bg-white rounded-lg border border-gray-200 p-3",
            div {
                class: "flex items-start justify-between gap-2",
                div {
                    p { class: "text-sm font-medium text-gray-900", "{item.name}" }
                    p { class: "text-xs text-gray-500", "{format::money(item.price)}" }
                }
                button {
                    class: "text-xs text-red-600 hover:underline",
                    onclick: move |_| {
                        state.write().selection.remove(&remove_id);
                    },
                    "Remove"
                }
            }
            div {
                class: "mt-2 flex items-center gap-2",
                label { class: "text-xs text-gray-500", "Qty" }
                input {
                    r#type: "number",
                    min: "1",
                    value: "{item.quantity()}",
                    oninput: move |e| {
                        let result = e
                            .value()
                            .trim()
                            .parse::<u32>()
                            .map_err(|_| registry_core::ValidationError::InvalidQuantity)
                            .and_then(|quantity| state.write().selection.set_quantity(&quantity_id, quantity));
                        quantity_error.set(result.err().map(|err| err.to_string()));
                    },
                    class: "w-20 px-2 py-1 border border-gray-300 rounded-md text-sm",
                }
            }
            if let Some(err) = quantity_error() {
                p { class: "mt-1 text-xs text-red-600", "{err}" }
            }
        }
    }
}

/// Result of applying a filter; the error text is shown in the panel
type ApplyResult = Result<(), String>;

#[component]
fn FilterPanel(
    suppliers: Vec<Supplier>,
    categories: Vec<Category>,
    initial: AdvancedFilter,
    on_apply: Callback<AdvancedFilter, ApplyResult>,
    on_clear: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut min_price = use_signal(|| initial.min_price.map(|p| p.to_string()).unwrap_or_default());
    let mut max_price = use_signal(|| initial.max_price.map(|p| p.to_string()).unwrap_or_default());
    let mut error = use_signal(|| None::<String>);

    let handle_apply = move |_| {
        let prices = AdvancedFilter::parse_price(&min_price())
            .and_then(|min| AdvancedFilter::parse_price(&max_price()).map(|max| (min, max)));
        let (min, max) = match prices {
            Ok(prices) => prices,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let mut filter = draft();
        filter.min_price = min;
        filter.max_price = max;
        error.set(on_apply.call(filter).err());
    };

    let current = draft();

    rsx! {
        div {
            class: "mb-4 p-4 rounded-lg border border-gray-200 bg-gray-50",

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div {
                    p { class: "text-sm font-medium text-gray-700 mb-2", "Categories" }
                    for category in categories {
                        label {
                            key: "{category.id}",
                            class: "flex items-center gap-2 text-sm text-gray-700",
                            input {
                                r#type: "checkbox",
                                checked: current.categories.contains(&category.id),
                                onchange: {
                                    let id = category.id.clone();
                                    move |_| draft.write().toggle_category(&id)
                                },
                            }
                            "{category.name}"
                        }
                    }
                }
                div {
                    p { class: "text-sm font-medium text-gray-700 mb-2", "Vendors" }
                    for supplier in suppliers {
                        label {
                            key: "{supplier.id}",
                            class: "flex items-center gap-2 text-sm text-gray-700",
                            input {
                                r#type: "checkbox",
                                checked: current.suppliers.contains(&supplier.id),
                                onchange: {
                                    let id = supplier.id.clone();
                                    move |_| draft.write().toggle_supplier(&id)
                                },
                            }
                            "{supplier.name}"
                        }
                    }
                }
                div {
                    p { class: "text-sm font-medium text-gray-700 mb-2", "Price range" }
                    div {
                        class: "flex items-center gap-2",
                        input {
                            r#type: "number",
                            min: "0",
                            placeholder: "Min",
                            value: "{min_price}",
                            oninput: move |e| min_price.set(e.value()),
                            class: "w-24 px-2 py-1 border border-gray-300 rounded-md text-sm",
                        }
                        span { class: "text-gray-400", "\u{2013}" }
                        input {
                            r#type: "number",
                            min: "0",
                            placeholder: "Max",
                            value: "{max_price}",
                            oninput: move |e| max_price.set(e.value()),
                            class: "w-24 px-2 py-1 border border-gray-300 rounded-md text-sm",
                        }
                    }
                }
            }

            div {
                class: "flex justify-end gap-2 mt-4",
                button {
                    class: "px-3 py-1.5 text-sm rounded-md bg-white border border-gray-300 hover:bg-gray-50",
                    onclick: move |_| {
                        draft.set(AdvancedFilter::default());
                        min_price.set(String::new());
                        max_price.set(String::new());
                        error.set(None);
                        on_clear.call(());
                    },
                    "Clear"
                }
                button {
                    class: "px-3 py-1.5 text-sm rounded-md bg-rose-600 text-white hover:bg-rose-700",
                    onclick: handle_apply,
                    "Apply"
                }
            }
        }
    }
}
