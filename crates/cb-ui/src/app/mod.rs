//! Application shell

mod state;

pub use state::{App, AppMode, AppState};
