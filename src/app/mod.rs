mod actions;
mod state;

pub use actions::{Action, Outcome};
pub use state::Session;
