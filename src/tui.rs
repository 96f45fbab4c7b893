use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event as CrosstermEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::error::{HoshiError, Result};
use crate::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> io::Result<Tui> {
    undo_on_failure(
        || {
            execute!(io::stdout(), EnterAlternateScreen)?;
            enable_raw_mode()?;
            Terminal::new(CrosstermBackend::new(io::stdout()))
        },
        restore,
    )
}

/// Run `setup`; if it fails part way, run `undo` before returning the error.
fn undo_on_failure<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(undo_err) = undo() {
                tracing::warn!(error = %undo_err, "failed to restore terminal");
            }
            Err(e)
        }
    }
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Current terminal width in columns.
pub fn width() -> Result<u16> {
    match crossterm::terminal::size() {
        Ok((0, _)) => Err(HoshiError::Terminal("terminal reports zero columns".into())),
        Ok((cols, _)) => Ok(cols),
        Err(e) => Err(HoshiError::Terminal(e.to_string())),
    }
}

/// Forwards key presses and render ticks from a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut render_interval = interval(render_rate);

            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    _ = render_interval.tick() => {
                        tx.send(Event::Render).ok();
                    }
                    Some(Ok(evt)) = reader.next() => {
                        if let CrosstermEvent::Key(key) = evt {
                            if key.kind == event::KeyEventKind::Press {
                                tx.send(Event::Key(key)).ok();
                            }
                        }
                    }
                }
            }
        });

        Self { rx, cancel, task }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}
