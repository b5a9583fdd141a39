use crate::frontend::{DeadlineScheduler, FoodMap, TerminalMap, TerminalView};
use food_map_core::{City, CityFoods, LoadError, MapConfig, UiEvent, CITIES};
use std::time::Instant;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Map,
    Panel,
    Search,
}

pub struct App {
    pub running: bool,
    pub focus: Focus,
    /// Index into the city registry of the marker under the cursor.
    pub city_cursor: usize,
    pub status_message: String,
    pub settled: usize,
    pub failed: Vec<&'static str>,
    pub map: FoodMap,
}

impl App {
    pub fn new(config: MapConfig) -> Self {
        Self {
            running: true,
            focus: Focus::Map,
            city_cursor: 0,
            status_message: String::new(),
            settled: 0,
            failed: Vec::new(),
            map: FoodMap::new(
                config,
                TerminalMap::default(),
                TerminalView::default(),
                DeadlineScheduler::default(),
            ),
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        self.map.handle(event);
    }

    pub fn on_city_loaded(&mut self, city_key: &str, result: Result<CityFoods, LoadError>) {
        self.settled += 1;
        if let Err(err) = &result {
            if let Some(city) = food_map_core::cities::find(city_key) {
                self.failed.push(city.key);
            }
            self.status_message = format!("{city_key}: {err}");
        }
        self.map.on_city_loaded(city_key, result);
    }

    /// Feeds every deferred task that is due back into the core.
    pub fn run_due_tasks(&mut self, now: Instant) {
        let due = self.map.scheduler_mut().take_due(now);
        for task in due {
            self.map.run_deferred(task);
        }
    }

    pub fn cursor_city(&self) -> &'static City {
        &CITIES[self.city_cursor % CITIES.len()]
    }

    pub const fn is_loading(&self) -> bool {
        self.settled < CITIES.len()
    }

    pub const fn view(&self) -> &TerminalView {
        self.map.view()
    }

    pub fn view_mut(&mut self) -> &mut TerminalView {
        self.map.view_mut()
    }

    pub const fn terminal_map(&self) -> &TerminalMap {
        self.map.markers().map()
    }
}
