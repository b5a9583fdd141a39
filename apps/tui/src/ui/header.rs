use crate::app::{App, Focus};
use crate::frontend::Slot;
use food_map_core::{BoundProperty, Language, CITIES};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_title_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let view = app.view();
    let mut spans = vec![
        Span::styled(
            view.text(Slot::TitleBar, BoundProperty::Text).to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for lang in Language::ALL {
        let style = if lang == view.active_language {
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", lang.label()), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        format!("  {}", view.text(Slot::AboutTab, BoundProperty::Text)),
        Style::default().fg(Color::Gray),
    ));

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

pub fn render_search_box(app: &App, f: &mut Frame<'_>, area: Rect) {
    let view = app.view();
    let focused = app.focus == Focus::Search;

    let line = if view.search_input.is_empty() {
        TextLine::from(Span::styled(
            view.text(Slot::SearchBox, BoundProperty::Placeholder).to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(view.search_input.clone())];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        TextLine::from(spans)
    };

    let block = Block::default()
        .title("/")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::Gray }));

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let keys = match app.focus {
        Focus::Map => "←/→ city  Enter open  Tab panel  / search  l language  c close  q quit",
        Focus::Panel => "j/k dish  Enter detail  b back  Tab map  / search  l language  c close  q quit",
        Focus::Search => "type to search  ↑/↓ result  Enter select  Esc dismiss",
    };

    let loading = if app.is_loading() {
        format!("Loading {}/{}", app.settled, CITIES.len())
    } else {
        format!(
            "Loaded {}/{}",
            app.map.foods().loaded_cities(),
            CITIES.len()
        )
    };

    let mut status = loading;
    if !app.failed.is_empty() {
        status.push_str(&format!("  •  unavailable: {}", app.failed.join(", ")));
    }
    if !app.status_message.is_empty() {
        status.push_str(&format!("  •  {}", app.status_message));
    }

    let text = Text::from(vec![
        TextLine::from(Span::styled(keys, Style::default().fg(Color::Gray))),
        TextLine::from(Span::styled(status, Style::default().fg(Color::DarkGray))),
    ]);

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
