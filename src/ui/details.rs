use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::types::StarRecord;

/// Five detail rows plus borders.
pub const HEIGHT: u16 = 7;

fn row<'a>(label: &'static str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<15}", label), Style::default().fg(Color::Yellow)),
        Span::raw(value),
    ])
}

fn lines(star: &StarRecord) -> Vec<Line<'static>> {
    vec![
        row("📒 description", star.description.clone()),
        row("🏠 homepage", star.homepage.clone()),
        row("📝 language", star.language.clone()),
        row("📃 license", star.license.clone().unwrap_or_default()),
        row("🌟 stars", star.stars.to_string()),
    ]
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let body = match app.selector.highlighted() {
        Some(star) => lines(star),
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::Gray),
        ))],
    };

    frame.render_widget(Paragraph::new(body).block(block), area);
}
