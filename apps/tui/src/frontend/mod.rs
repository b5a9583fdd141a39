// In-memory implementations of the core capabilities. The terminal renders
// straight from these after every event.

pub mod map;
pub mod scheduler;
pub mod view;

pub use map::TerminalMap;
pub use scheduler::DeadlineScheduler;
pub use view::{Slot, TerminalView};

pub type FoodMap = food_map_core::App<TerminalMap, TerminalView, DeadlineScheduler>;
