//! UI-surface seams and their in-memory implementations.
//!
//! Both traits take `&self`: the controller shares its surface with in-flight
//! searches, so implementations guard their content internally. Locks are
//! never held across an await.

use std::sync::{Mutex, MutexGuard, PoisonError};

use wordlens_core::RenderState;
use wordlens_core::render::RenderStyle;

/// The text input the user types a word into.
pub trait InputField: Send + Sync {
    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    /// Give the field input focus.
    fn focus(&self);

    fn is_focused(&self) -> bool;

    fn clear(&self) {
        self.set_value("");
    }
}

/// The region the widget renders into. Every call replaces the whole content.
pub trait OutputRegion: Send + Sync {
    fn replace(&self, state: &RenderState);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── In-memory input ────────────────────────────────────────────────

#[derive(Debug, Default)]
struct InputState {
    value: String,
    focused: bool,
}

/// Input field held in memory. Used by the terminal host and by tests.
#[derive(Debug, Default)]
pub struct MemoryInput {
    state: Mutex<InputState>,
}

impl MemoryInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input that already holds `value`, unfocused.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            state: Mutex::new(InputState {
                value: value.to_string(),
                focused: false,
            }),
        }
    }

    /// Move focus away, as when the user clicks elsewhere.
    pub fn blur(&self) {
        lock(&self.state).focused = false;
    }
}

impl InputField for MemoryInput {
    fn value(&self) -> String {
        lock(&self.state).value.clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut lock(&self.state).value);
    }

    fn focus(&self) {
        lock(&self.state).focused = true;
    }

    fn is_focused(&self) -> bool {
        lock(&self.state).focused
    }
}

// ── In-memory output ───────────────────────────────────────────────

#[derive(Debug, Default)]
struct OutputState {
    current: Option<RenderState>,
    history: Vec<RenderState>,
}

/// Output region held in memory, keeping every state it was given.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    state: Mutex<OutputState>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible state, `None` before the first replace.
    #[must_use]
    pub fn current(&self) -> Option<RenderState> {
        lock(&self.state).current.clone()
    }

    /// Every state written so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<RenderState> {
        lock(&self.state).history.clone()
    }

    /// The visible content rendered in `style`, empty before the first replace.
    #[must_use]
    pub fn rendered(&self, style: RenderStyle) -> String {
        lock(&self.state)
            .current
            .as_ref()
            .map(|state| style.render(state))
            .unwrap_or_default()
    }
}

impl OutputRegion for MemoryOutput {
    fn replace(&self, state: &RenderState) {
        let mut guard = lock(&self.state);
        guard.current = Some(state.clone());
        guard.history.push(state.clone());
    }
}
