mod details;
mod star_list;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::selector::{Mode, WINDOW};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(WINDOW as u16 + 2),
            Constraint::Length(details::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_prompt(frame, app, chunks[1]);
    star_list::render(frame, app, chunks[2]);
    details::render(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[5]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut title = format!("hoshi - {}'s stars - {}", app.user, app.order);
    if app.reverse {
        title.push_str(" (reversed)");
    }

    let header = Paragraph::new(Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let query = app.selector.query();
    let line = match app.selector.mode() {
        Mode::Searching => Line::from(vec![
            Span::styled(
                "Search: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(query.to_string()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]),
        Mode::Browsing => {
            let mut spans = vec![Span::styled(
                "Stars",
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if !query.is_empty() {
                spans.push(Span::styled(
                    format!("  filter: {}", query),
                    Style::default().fg(Color::Gray),
                ));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.selector.mode() {
        Mode::Searching => "type: filter | ↑/↓: nav | ←/→: page | ?: browse | Enter: open | Esc: quit",
        Mode::Browsing => "j/k: nav | ←/→ Ctrl+d/u: page | ?: search | Enter: open | q: quit",
    };
    let status = Line::from(vec![Span::styled(help, Style::default().fg(Color::Gray))]);

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use crate::app::App;

    /// Flatten a buffer into trimmed lines.
    pub fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area();
        let mut lines = Vec::new();

        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }

    pub fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }
}
