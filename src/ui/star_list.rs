use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let selector = &app.selector;
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Stars ({}/{}) ",
        selector.visible_len(),
        selector.total()
    ));

    if selector.visible_len() == 0 {
        let message = if selector.total() == 0 {
            "No starred repositories"
        } else {
            "No matches"
        };
        let empty = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let active = selector.cursor().map(|c| c - selector.offset());

    let items: Vec<ListItem> = selector
        .window()
        .enumerate()
        .map(|(i, star)| {
            let (prefix, style) = if Some(i) == active {
                (
                    "★ ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::Cyan))
            };

            let mut spans = vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(star.full_name.clone(), style),
            ];
            if !star.language.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", star.language),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(active);

    frame.render_stateful_widget(list, area, &mut state);
}
