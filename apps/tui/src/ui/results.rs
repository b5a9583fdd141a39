use super::widgets::popup::dropdown_rect;
use crate::app::App;
use food_map_core::ResultsContent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const MAX_VISIBLE_RESULTS: u16 = 8;

pub fn render_results(app: &App, f: &mut Frame<'_>, area: Rect) {
    let view = app.view();
    let Some(results) = &view.results else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    match results {
        ResultsContent::Empty { message } => {
            let popup = dropdown_rect(3, area);
            f.render_widget(Clear, popup);
            f.render_widget(Paragraph::new(*message).block(block), popup);
        }
        ResultsContent::Hits(hits) => {
            let rows = u16::try_from(hits.len())
                .unwrap_or(MAX_VISIBLE_RESULTS)
                .min(MAX_VISIBLE_RESULTS);
            let popup = dropdown_rect(rows + 2, area);

            let items = hits
                .iter()
                .map(|hit| {
                    ListItem::new(TextLine::from(vec![
                        Span::styled(
                            hit.dish_name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" - "),
                        Span::raw(hit.city_name),
                    ]))
                })
                .collect::<Vec<_>>();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            let mut state = ListState::default().with_selected(Some(view.result_cursor));

            f.render_widget(Clear, popup);
            f.render_stateful_widget(list, popup, &mut state);
        }
    }
}
