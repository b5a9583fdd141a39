mod helpers;
mod map;
mod panel;
mod search;

use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;
use food_map_core::UiEvent;

pub fn handle_input(app: &mut App, key: KeyCode) {
    match app.focus {
        Focus::Search => search::handle_search_input(app, key),
        Focus::Panel => {
            if !handle_global_keys(app, key) {
                panel::handle_panel_input(app, key);
            }
        }
        Focus::Map => {
            if !handle_global_keys(app, key) {
                map::handle_map_input(app, key);
            }
        }
    }
}

/// Keys that work everywhere except while typing a query.
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('l') => {
            let next = app.map.language().toggled();
            app.dispatch(UiEvent::LanguageSelected(next));
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            app.dispatch(UiEvent::SearchFocused);
        }
        KeyCode::Char('c') => {
            app.dispatch(UiEvent::ClosePanel);
            app.focus = Focus::Map;
        }
        _ => return false,
    }
    true
}
