use super::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;
use food_map_core::{UiEvent, CITIES};

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Up => {
            app.city_cursor = wrap_decrement(app.city_cursor, CITIES.len());
        }
        KeyCode::Right | KeyCode::Down => {
            app.city_cursor = wrap_increment(app.city_cursor, CITIES.len());
        }
        KeyCode::Enter => {
            let city = app.cursor_city();
            app.dispatch(UiEvent::MarkerClicked(city.key.to_string()));
            app.focus = Focus::Panel;
        }
        KeyCode::Tab => {
            app.focus = Focus::Panel;
        }
        _ => {}
    }
}
