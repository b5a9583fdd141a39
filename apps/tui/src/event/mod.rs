mod headless;
mod loader;
mod loop_handler;

pub use headless::{build_summary, run_headless, CitySummary};
pub use loader::{spawn_loads, LoadMessage};
pub use loop_handler::run;
