// UI module for food_map_tui
// Draws the retained terminal view every frame

pub mod header;
pub mod panel;
pub mod results;
pub mod widgets;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    header::render_title_bar(app, f, rows[0]);
    header::render_search_box(app, f, rows[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    widgets::map::render_food_map(app, f, body[0]);
    panel::render_panel(app, f, body[1]);
    header::render_footer(app, f, rows[3]);

    // results drop down over the map, right under the search box
    if app.view().results_visible {
        results::render_results(app, f, body[0]);
    }
}
