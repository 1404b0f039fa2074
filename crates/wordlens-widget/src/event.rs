//! UI events the controller reacts to.

/// Keys the host reports while the input field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search control was activated.
    SearchActivated,
    /// A key was pressed in the input field. Only [`Key::Enter`] searches.
    KeyPressed(Key),
    /// The clear control was activated.
    ClearActivated,
}
