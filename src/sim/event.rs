//! Input events as seen by the simulation

/// A classified window/input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close or application quit
    Quit,
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    /// Anything else (resize, motion, focus...). Ignored by the loop.
    Other,
}

impl InputEvent {
    /// Key or mouse button pressed
    pub fn is_press(&self) -> bool {
        matches!(self, InputEvent::KeyDown | InputEvent::MouseDown)
    }

    /// Key or mouse button released
    pub fn is_release(&self) -> bool {
        matches!(self, InputEvent::KeyUp | InputEvent::MouseUp)
    }
}
