use super::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;
use food_map_core::{ResultsContent, UiEvent};

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(ch) => {
            app.view_mut().search_input.push(ch);
            query_changed(app);
        }
        KeyCode::Backspace => {
            app.view_mut().search_input.pop();
            query_changed(app);
        }
        KeyCode::Up => {
            let view = app.view_mut();
            view.result_cursor = wrap_decrement(view.result_cursor, view.result_count());
        }
        KeyCode::Down => {
            let view = app.view_mut();
            view.result_cursor = wrap_increment(view.result_cursor, view.result_count());
        }
        KeyCode::Enter => {
            let view = app.view();
            let selected = match &view.results {
                Some(ResultsContent::Hits(hits)) if view.results_visible => {
                    hits.get(view.result_cursor).cloned()
                }
                _ => None,
            };
            if let Some(hit) = selected {
                app.dispatch(UiEvent::ResultSelected {
                    city: hit.city.to_string(),
                    dish: hit.dish_id,
                });
                app.focus = Focus::Panel;
            }
        }
        KeyCode::Esc => {
            app.dispatch(UiEvent::OutsideClick);
            app.focus = Focus::Map;
        }
        _ => {}
    }
}

fn query_changed(app: &mut App) {
    let query = app.view().search_input.clone();
    app.dispatch(UiEvent::SearchInput(query));
}
