//! List-creation wizard
//!
//! `NewList` resumes the stored draft (or starts fresh) and saves it on every
//! transition. `EditList` pre-fills the steps from an existing registry and
//! never touches the draft.

mod confirmation;
mod event_type;
mod gift_selection;
mod guest_info;
mod list_details;

use dioxus::prelude::*;
use registry_core::wizard::{load_draft, save_draft, submit_list, WizardState, WizardStep};
use registry_core::{ListStatus, SubmitError};
use tracing::{info, warn};

use crate::auth::use_auth;
use crate::components::{ErrorBanner, LoadingDots, LoadingSpinner};
use crate::routes::Route;
use crate::state::use_app_state;

use confirmation::ConfirmationStep;
use event_type::EventTypeStep;
use gift_selection::GiftSelectionStep;
use guest_info::GuestInfoStep;
use list_details::ListDetailsStep;

/// Start or resume a new registry
#[component]
pub fn NewList() -> Element {
    let app = use_app_state();

    let initial = use_hook(|| match load_draft(app.drafts().as_ref()) {
        Some(draft) => {
            info!(draft_id = %draft.draft_id, step = ?draft.step(), "Resuming wizard draft");
            draft
        }
        None => WizardState::new(),
    });

    rsx! {
        WizardShell { initial: initial }
    }
}

/// Edit an existing registry
#[component]
pub fn EditList(id: String) -> Element {
    let auth = use_auth();

    let mut initial = use_signal(|| None::<WizardState>);
    let mut error = use_signal(|| None::<String>);

    use_hook(move || {
        spawn(async move {
            match auth.client().list(&id).await {
                Ok(list) => initial.set(Some(WizardState::for_edit(&list))),
                Err(e) => {
                    warn!(error = %e, list_id = %id, "Failed to load registry for editing");
                    auth.handle_error(&e);
                    error.set(Some(e.to_string()));
                }
            }
        })
    });

    match (initial(), error()) {
        (_, Some(err)) => rsx! { ErrorBanner { message: err } },
        (Some(state), None) => rsx! { WizardShell { initial: state } },
        (None, None) => rsx! { LoadingSpinner { label: "Loading registry..." } },
    }
}

/// Step header, the current step's form and the navigation buttons
#[component]
fn WizardShell(initial: WizardState) -> Element {
    let auth = use_auth();
    let app = use_app_state();
    let navigator = use_navigator();

    let mut state = use_signal(|| initial.clone());
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    // Edit sessions are skipped by `save_draft`.
    let persist = move |mut state: Signal<WizardState>| {
        if let Err(e) = save_draft(app.drafts().as_ref(), &mut state.write()) {
            warn!(error = %e, "Could not save wizard draft");
        }
    };

    let handle_next = move |_| {
        let result = state.write().next();
        match result {
            Ok(step) => {
                error.set(None);
                persist(state);
                info!(step = ?step, "Wizard advanced");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let handle_back = move |_| {
        state.write().back();
        error.set(None);
        persist(state);
    };

    let submit = move |status: ListStatus| {
        spawn(async move {
            is_saving.set(true);
            error.set(None);

            let snapshot = state();
            let drafts = app.drafts();
            match submit_list(&auth.client(), &snapshot, status, drafts.as_ref()).await {
                Ok(_) => {
                    navigator.push(Route::Dashboard {});
                }
                Err(SubmitError::Client(e)) => {
                    warn!(error = %e, "Failed to save registry");
                    auth.handle_error(&e);
                    error.set(Some(e.to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_saving.set(false);
        });
    };

    let current = state.read().step();
    let is_editing = state.read().is_editing();
    let can_publish = state.read().confirmation.can_publish();

    rsx! {
        div {
            class: "max-w-5xl",
            div {
                class: "flex items-center justify-between mb-4",
                h1 {
                    class: "text-2xl font-bold text-gray-900",
                    if is_editing { "Edit registry" } else { "New registry" }
                }
                Link {
                    to: Route::Dashboard {},
                    class: "text-sm text-gray-500 hover:text-gray-800",
                    "Exit"
                }
            }

            StepHeader {
                current: current,
                on_select: move |step| {
                    if state.write().go_to(step) {
                        error.set(None);
                    }
                },
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            div {
                class: "bg-white rounded-xl border border-gray-200 p-6 mb-6",
                match current {
                    WizardStep::EventType => rsx! { EventTypeStep { state: state } },
                    WizardStep::GuestInfo => rsx! { GuestInfoStep { state: state } },
                    WizardStep::GiftSelection => rsx! { GiftSelectionStep { state: state } },
                    WizardStep::ListDetails => rsx! { ListDetailsStep { state: state } },
                    WizardStep::Confirmation => rsx! { ConfirmationStep { state: state } },
                }
            }

            div {
                class: "flex items-center justify-between",
                button {
                    class: "px-4 py-2 rounded-lg border border-gray-300 bg-white hover:bg-gray-50 disabled:opacity-40",
                    disabled: current.is_first() || is_saving(),
                    onclick: handle_back,
                    "\u{2190} Back"
                }

                div {
                    class: "flex items-center gap-2",
                    if is_saving() {
                        LoadingDots {}
                    }
                    if current.is_last() {
                        button {
                            class: "px-4 py-2 rounded-lg border border-gray-300 bg-white hover:bg-gray-50 disabled:opacity-40",
                            disabled: is_saving(),
                            onclick: move |_| submit(ListStatus::Draft),
                            "Save as draft"
                        }
                        button {
                            class: "px-4 py-2 rounded-lg bg-rose-600 text-white hover:bg-rose-700 disabled:opacity-40 disabled:cursor-not-allowed",
                            disabled: !can_publish || is_saving(),
                            onclick: move |_| submit(ListStatus::Publish),
                            if is_editing { "Save and publish" } else { "Publish" }
                        }
                    } else {
                        button {
                            class: "px-4 py-2 rounded-lg bg-rose-600 text-white hover:bg-rose-700",
                            onclick: handle_next,
                            "Next \u{2192}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StepHeader(current: WizardStep, on_select: EventHandler<WizardStep>) -> Element {
    rsx! {
        ol {
            class: "flex flex-wrap items-center gap-2 mb-6",
            for step in WizardStep::ALL {
                li {
                    key: "{step.index()}",
                    button {
                        class: step_class(step, current),
                        disabled: step.index() > current.index(),
                        onclick: move |_| on_select.call(step),
                        "{step_title(step)}"
                    }
                }
            }
        }
    }
}

fn step_class(step: WizardStep, current: WizardStep) -> &'static str {
    if step == current {
        "px-3 py-1.5 rounded-full text-sm font-medium bg-rose-600 text-white"
    } else if step.index() < current.index() {
        "px-3 py-1.5 rounded-full text-sm font-medium bg-rose-100 text-rose-800 hover:bg-rose-200"
    } else {
        "px-3 py-1.5 rounded-full text-sm font-medium bg-gray-100 text-gray-400 cursor-default"
    }
}

fn step_title(step: WizardStep) -> String {
    format!("{}. {}", step.index() + 1, step.label())
}
