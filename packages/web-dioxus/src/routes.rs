//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AppLayout;
use crate::pages::{
    Dashboard, EditList, Login, NewList, NotFound, Notifications, Progress, Published,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/login")]
    Login {},

    #[route("/registry/:id")]
    Published { id: String },

    // Signed-in routes
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},

        #[route("/wizard")]
        NewList {},

        #[route("/wizard/:id")]
        EditList { id: String },

        #[route("/dashboard/:id/progress")]
        Progress { id: String },

        #[route("/notifications")]
        Notifications {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
