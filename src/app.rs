use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::error::{HoshiError, Result};
use crate::event::Event;
use crate::selector::{Mode, Outcome, Selector};
use crate::types::{SortKey, StarRecord};

pub struct App {
    pub selector: Selector,
    pub user: String,
    pub order: SortKey,
    pub reverse: bool,
    pub chosen: Option<StarRecord>,
    pub should_quit: bool,
}

impl App {
    pub fn new(stars: Vec<StarRecord>, user: String, order: SortKey, reverse: bool) -> Self {
        Self {
            selector: Selector::new(stars),
            user,
            order,
            reverse,
            chosen: None,
            should_quit: false,
        }
    }

    pub fn handle_event(&self, event: Event) -> Action {
        if event.is_quit() {
            return Action::Quit;
        }
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Render => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => Action::Select,
            KeyCode::Down => Action::ScrollDown,
            KeyCode::Up => Action::ScrollUp,
            KeyCode::Right | KeyCode::PageDown => Action::PageDown,
            KeyCode::Left | KeyCode::PageUp => Action::PageUp,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Char('n') if ctrl => Action::ScrollDown,
            KeyCode::Char('p') if ctrl => Action::ScrollUp,
            KeyCode::Char('d') if ctrl => Action::PageDown,
            KeyCode::Char('u') if ctrl => Action::PageUp,
            KeyCode::Char(_) if ctrl => Action::None,
            KeyCode::Char('?') => Action::ToggleSearch,
            KeyCode::Char(c) => match self.selector.mode() {
                Mode::Searching => Action::SearchInput(c),
                Mode::Browsing => match c {
                    'j' => Action::ScrollDown,
                    'k' => Action::ScrollUp,
                    'q' => Action::Quit,
                    _ => Action::None,
                },
            },
            _ => Action::None,
        }
    }

    /// The chosen star, or `Cancelled` when the user quit without one.
    pub fn finish(self) -> Result<StarRecord> {
        self.chosen.ok_or(HoshiError::Cancelled)
    }

    pub fn update(&mut self, action: Action) {
        match self.selector.update(action) {
            Outcome::Pending => {}
            Outcome::Chosen(star) => {
                tracing::debug!(repo = %star.full_name, "star selected");
                self.chosen = Some(star);
                self.should_quit = true;
            }
            Outcome::Cancelled => {
                self.should_quit = true;
            }
        }
    }
}
