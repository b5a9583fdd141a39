// Shared core of the food map: everything the terminal and web front ends
// have in common lives here, behind the capability traits in `map`, `view`,
// `loader` and `app`.
pub mod app;
pub mod cities;
pub mod config;
pub mod error;
pub mod language;
pub mod loader;
pub mod locale;
pub mod map;
pub mod model;
pub mod panel;
pub mod search;
pub mod view;

#[cfg(test)]
mod testing;

pub use app::{App, DeferredTask, Scheduler, UiEvent};
pub use cities::{City, CITIES};
pub use config::MapConfig;
pub use error::LoadError;
pub use loader::DataSource;
pub use locale::{Language, UiKey};
pub use map::MapWidget;
pub use model::{CityFoods, Dish, FoodCollection, LocalizedText};
pub use panel::PanelState;
pub use search::{SearchHit, SearchOutcome};
pub use view::{BoundProperty, PanelContent, ResultsContent, TranslationBinding, ViewTree};
