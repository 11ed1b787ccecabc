//! List-creation wizard: step forms, the orchestrating state machine and
//! the locally persisted draft.

mod draft;
mod state;
mod steps;
mod submit;

pub use draft::*;
pub use state::*;
pub use steps::*;
pub use submit::*;
