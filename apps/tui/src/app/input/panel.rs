use super::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;
use food_map_core::{PanelContent, UiEvent};

pub fn handle_panel_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            let view = app.view_mut();
            view.dish_cursor = wrap_decrement(view.dish_cursor, view.dish_count());
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let view = app.view_mut();
            view.dish_cursor = wrap_increment(view.dish_cursor, view.dish_count());
        }
        KeyCode::Enter => {
            let view = app.view();
            if let PanelContent::CityList { city, dishes } = &view.panel {
                if let Some(dish) = dishes.get(view.dish_cursor) {
                    let event = UiEvent::DishClicked {
                        city: (*city).to_string(),
                        dish: dish.id.clone(),
                    };
                    app.dispatch(event);
                }
            }
        }
        KeyCode::Backspace | KeyCode::Char('b') => {
            if let PanelContent::Detail { city, .. } = &app.view().panel {
                let event = UiEvent::BackClicked((*city).to_string());
                app.dispatch(event);
            }
        }
        KeyCode::Tab | KeyCode::Esc => {
            app.focus = Focus::Map;
        }
        _ => {}
    }
}
