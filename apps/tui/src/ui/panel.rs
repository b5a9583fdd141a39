use crate::app::{App, Focus};
use food_map_core::view::DishEntry;
use food_map_core::PanelContent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let view = app.view();
    let border = if app.focus == Focus::Panel {
        Color::Cyan
    } else {
        Color::Gray
    };
    let block = Block::default()
        .title(view.header.clone())
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    match &view.panel {
        PanelContent::Welcome { message } => {
            let paragraph = Paragraph::new(*message)
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        PanelContent::CityList { dishes, .. } => {
            let items = dishes
                .iter()
                .map(|dish| dish_item(dish, view.emphasized.as_deref() == Some(dish.id.as_str())))
                .collect::<Vec<_>>();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("▶ ");
            let mut state = ListState::default().with_selected(Some(view.dish_cursor));
            f.render_stateful_widget(list, area, &mut state);
        }
        PanelContent::Unavailable {
            loading,
            check_source,
            source_path,
            ..
        } => {
            let text = Text::from(vec![
                TextLine::from(*loading),
                TextLine::from(""),
                TextLine::from(vec![
                    Span::raw(format!("{check_source} ")),
                    Span::styled(source_path.clone(), Style::default().fg(Color::Yellow)),
                ]),
            ]);
            let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        PanelContent::Detail {
            back_label,
            name,
            sections,
            ..
        } => {
            let mut lines = vec![
                TextLine::from(Span::styled(
                    format!("[b] {back_label}"),
                    Style::default().fg(Color::Gray),
                )),
                TextLine::from(""),
                TextLine::from(Span::styled(
                    name.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            for section in sections {
                lines.push(TextLine::from(""));
                lines.push(TextLine::from(Span::styled(
                    section.heading,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(TextLine::from(section.body.clone()));
            }
            let paragraph = Paragraph::new(Text::from(lines))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
    }
}

fn dish_item(dish: &DishEntry, emphasized: bool) -> ListItem<'static> {
    let name_style = if emphasized {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0, 0, 238))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    ListItem::new(Text::from(vec![
        TextLine::from(Span::styled(dish.name.clone(), name_style)),
        TextLine::from(Span::styled(
            dish.summary.clone(),
            Style::default().fg(Color::Gray),
        )),
    ]))
}
