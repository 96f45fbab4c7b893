use crate::action::Action;
use crate::fuzzy::{self, StarMatcher};
use crate::types::StarRecord;

/// Number of rows shown at once.
pub const WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typed characters edit the query.
    Searching,
    /// Typed characters navigate.
    Browsing,
}

/// Result of feeding one action to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Chosen(StarRecord),
    Cancelled,
}

/// Fuzzy-filtered list selection.
///
/// `visible` holds indices into `stars` in their sorted order and `cursor`
/// indexes into `visible`. The cursor is `None` exactly when nothing is
/// visible. `offset` is the first visible row of the window and always keeps
/// the cursor inside `offset..offset + WINDOW`.
pub struct Selector {
    stars: Vec<StarRecord>,
    matcher: StarMatcher,
    visible: Vec<usize>,
    cursor: Option<usize>,
    offset: usize,
    query: String,
    mode: Mode,
}

impl Selector {
    /// Start in search mode with an empty query, everything visible.
    pub fn new(stars: Vec<StarRecord>) -> Self {
        let mut selector = Self {
            stars,
            matcher: StarMatcher::default(),
            visible: Vec::new(),
            cursor: None,
            offset: 0,
            query: String::new(),
            mode: Mode::Searching,
        };
        selector.refilter();
        selector
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total(&self) -> usize {
        self.stars.len()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Position of the highlight within the visible list.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible(&self) -> impl Iterator<Item = &StarRecord> + '_ {
        self.visible.iter().map(|&i| &self.stars[i])
    }

    /// The rows currently on screen.
    pub fn window(&self) -> impl Iterator<Item = &StarRecord> + '_ {
        self.visible().skip(self.offset).take(WINDOW)
    }

    pub fn highlighted(&self) -> Option<&StarRecord> {
        self.cursor.map(|c| &self.stars[self.visible[c]])
    }

    pub fn update(&mut self, action: Action) -> Outcome {
        match action {
            Action::Quit => return Outcome::Cancelled,
            Action::Select => {
                if let Some(star) = self.highlighted() {
                    return Outcome::Chosen(star.clone());
                }
            }
            Action::ScrollDown => self.move_cursor(1),
            Action::ScrollUp => self.move_cursor(-1),
            Action::PageDown => self.move_cursor(WINDOW as isize),
            Action::PageUp => self.move_cursor(-(WINDOW as isize)),
            Action::ToggleSearch => {
                self.mode = match self.mode {
                    Mode::Searching => Mode::Browsing,
                    Mode::Browsing => Mode::Searching,
                };
            }
            Action::SearchInput(c) => {
                if self.mode == Mode::Searching {
                    self.query.push(c);
                    self.refilter();
                }
            }
            Action::SearchBackspace => {
                if self.mode == Mode::Searching && self.query.pop().is_some() {
                    self.refilter();
                }
            }
            Action::None => {}
        }
        Outcome::Pending
    }

    fn refilter(&mut self) {
        let query = fuzzy::normalize(&self.query);
        let matcher = &self.matcher;
        self.visible = self
            .stars
            .iter()
            .enumerate()
            .filter(|(_, star)| matcher.matches(&query, &star.full_name))
            .map(|(i, _)| i)
            .collect();
        self.cursor = if self.visible.is_empty() { None } else { Some(0) };
        self.offset = 0;
    }

    /// Move the highlight by `delta`, stopping at either end.
    fn move_cursor(&mut self, delta: isize) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let last = self.visible.len() - 1;
        let next = cursor.saturating_add_signed(delta).min(last);
        self.cursor = Some(next);

        if next < self.offset {
            self.offset = next;
        } else if next >= self.offset + WINDOW {
            self.offset = next + 1 - WINDOW;
        }
    }
}
