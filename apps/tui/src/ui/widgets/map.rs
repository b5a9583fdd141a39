use crate::app::{App, Focus};
use crate::frontend::Slot;
use food_map_core::BoundProperty;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

pub fn marker_color(highlighted: bool, under_cursor: bool, loaded: bool) -> Color {
    if highlighted {
        Color::LightRed
    } else if under_cursor {
        Color::Yellow
    } else if loaded {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

pub fn render_food_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let map = app.terminal_map();
    let (x_bounds, y_bounds) = map.bounds();
    let radius = (x_bounds[1] - x_bounds[0]) / 120.0;
    let cursor = app.cursor_city().key;
    let foods = app.map.foods();

    let border = if app.focus == Focus::Map {
        Color::Cyan
    } else {
        Color::Gray
    };
    let mut block = Block::default()
        .title(app.view().text(Slot::MapBlock, BoundProperty::Title).to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(attribution) = &map.attribution {
        block = block.title_bottom(Span::styled(
            attribution.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::Gray,
            });
            ctx.layer();

            for marker in &map.markers {
                let city = marker.city;
                let under_cursor = city.key == cursor;
                let color =
                    marker_color(marker.highlighted, under_cursor, foods.is_loaded(city.key));
                ctx.draw(&Circle {
                    x: city.lng,
                    y: city.lat,
                    radius,
                    color,
                });

                if under_cursor || marker.highlighted {
                    ctx.print(
                        city.lng + radius * 2.0,
                        city.lat,
                        Span::styled(
                            marker.popup.clone(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::marker_color;
    use ratatui::style::Color;

    #[test]
    fn highlight_wins_over_cursor_and_load_state() {
        assert_eq!(marker_color(true, true, false), Color::LightRed);
        assert_eq!(marker_color(false, true, true), Color::Yellow);
        assert_eq!(marker_color(false, false, true), Color::Cyan);
        assert_eq!(marker_color(false, false, false), Color::DarkGray);
    }
}
