// App module for food_map_tui
// Terminal session state and key handling on top of the shared core

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, Focus};
