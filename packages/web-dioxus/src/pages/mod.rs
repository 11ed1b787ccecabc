//! Page components, one per route

mod dashboard;
mod login;
mod not_found;
mod notifications;
mod progress;
mod published;
mod wizard;

pub use dashboard::*;
pub use login::*;
pub use not_found::*;
pub use notifications::*;
pub use progress::*;
pub use published::*;
pub use wizard::{EditList, NewList};
