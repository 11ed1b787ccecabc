//! Reusable UI components

mod alert;
mod app_layout;
mod app_nav;
mod loading;
mod modal;
mod product_card;
mod progress_bar;
mod qr_modal;

pub use alert::*;
pub use app_layout::*;
pub use app_nav::*;
pub use loading::*;
pub use modal::*;
pub use product_card::*;
pub use progress_bar::*;
pub use qr_modal::*;
