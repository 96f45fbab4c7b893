/// What a key press asks the selector to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Select,

    // Search
    ToggleSearch,
    SearchInput(char),
    SearchBackspace,

    None,
}
