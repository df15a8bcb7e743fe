#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event types used throughout sortviz for
//! input handling. All events derive `Clone`, `PartialEq`, and `Eq` for use
//! in tests and pattern matching.
//!
//! The animator is keyboard-driven: mouse, paste, and focus events from the
//! terminal are dropped at the mapping layer rather than carried through the
//! runtime.

use bitflags::bitflags;
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// A tick event from the runtime.
    ///
    /// Fired when the frame clock elapses. The model's `update` receives the
    /// tick and advances any in-flight animation by one step.
    Tick,
}

impl Event {
    /// Convert a Crossterm event into a sortviz [`Event`].
    ///
    /// Returns `None` for event kinds the animator does not handle
    /// (mouse, paste, focus) and for unmapped key codes.
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => map_key_event(key).map(Event::Key),
            cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if this is a press (not a repeat or release).
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Tab key.
    Tab,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

fn map_key_event(event: cte::KeyEvent) -> Option<KeyEvent> {
    let code = map_key_code(event.code)?;
    let modifiers = map_modifiers(event.modifiers);
    let kind = map_key_kind(event.kind);
    Some(KeyEvent {
        code,
        modifiers,
        kind,
    })
}

fn map_key_kind(kind: cte::KeyEventKind) -> KeyEventKind {
    match kind {
        cte::KeyEventKind::Press => KeyEventKind::Press,
        cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
        cte::KeyEventKind::Release => KeyEventKind::Release,
    }
}

fn map_key_code(code: cte::KeyCode) -> Option<KeyCode> {
    match code {
        cte::KeyCode::Char(c) => Some(KeyCode::Char(c)),
        cte::KeyCode::Enter => Some(KeyCode::Enter),
        cte::KeyCode::Esc => Some(KeyCode::Escape),
        cte::KeyCode::Backspace => Some(KeyCode::Backspace),
        cte::KeyCode::Tab => Some(KeyCode::Tab),
        cte::KeyCode::Up => Some(KeyCode::Up),
        cte::KeyCode::Down => Some(KeyCode::Down),
        cte::KeyCode::Left => Some(KeyCode::Left),
        cte::KeyCode::Right => Some(KeyCode::Right),
        cte::KeyCode::F(n) => Some(KeyCode::F(n)),
        _ => None,
    }
}

fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut mapped = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        mapped |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        mapped |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        mapped |= Modifiers::CTRL;
    }
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event as ct_event;

    #[test]
    fn key_event_is_char() {
        let event = KeyEvent::new(KeyCode::Char('q'));
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn key_event_modifiers() {
        let event = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert!(event.ctrl());
        assert!(!event.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn key_event_kind() {
        let press = KeyEvent::new(KeyCode::Enter);
        assert_eq!(press.kind, KeyEventKind::Press);
        assert!(press.is_press());

        let release = press.with_kind(KeyEventKind::Release);
        assert_eq!(release.kind, KeyEventKind::Release);
        assert!(!release.is_press());
    }

    #[test]
    fn modifiers_default() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn event_is_clone_and_eq() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('x')));
        let cloned = event;
        assert_eq!(event, cloned);
    }

    // -- Crossterm mapping tests --

    #[test]
    fn map_modifiers_combined() {
        let combined = ct_event::KeyModifiers::SHIFT | ct_event::KeyModifiers::CONTROL;
        let mapped = map_modifiers(combined);
        assert!(mapped.contains(Modifiers::SHIFT));
        assert!(mapped.contains(Modifiers::CTRL));
        assert!(!mapped.contains(Modifiers::ALT));
    }

    #[test]
    fn map_key_event_char() {
        let ct = ct_event::KeyEvent {
            code: ct_event::KeyCode::Char('x'),
            modifiers: ct_event::KeyModifiers::CONTROL,
            kind: ct_event::KeyEventKind::Press,
            state: ct_event::KeyEventState::NONE,
        };
        let mapped = map_key_event(ct).expect("should map");
        assert_eq!(mapped.code, KeyCode::Char('x'));
        assert!(mapped.modifiers.contains(Modifiers::CTRL));
        assert_eq!(mapped.kind, KeyEventKind::Press);
    }

    #[test]
    fn map_crossterm_event_key() {
        let ct = ct_event::Event::Key(ct_event::KeyEvent {
            code: ct_event::KeyCode::Enter,
            modifiers: ct_event::KeyModifiers::NONE,
            kind: ct_event::KeyEventKind::Press,
            state: ct_event::KeyEventState::NONE,
        });
        let mapped = Event::from_crossterm(ct).expect("should map");
        assert!(matches!(mapped, Event::Key(_)));
    }

    #[test]
    fn map_crossterm_event_resize() {
        let ct = ct_event::Event::Resize(80, 24);
        let mapped = Event::from_crossterm(ct).expect("should map");
        assert!(matches!(
            mapped,
            Event::Resize {
                width: 80,
                height: 24
            }
        ));
    }

    #[test]
    fn map_crossterm_event_drops_focus() {
        assert!(Event::from_crossterm(ct_event::Event::FocusGained).is_none());
        assert!(Event::from_crossterm(ct_event::Event::FocusLost).is_none());
    }

    #[test]
    fn map_crossterm_event_drops_unmapped_keys() {
        let ct = ct_event::Event::Key(ct_event::KeyEvent {
            code: ct_event::KeyCode::CapsLock,
            modifiers: ct_event::KeyModifiers::NONE,
            kind: ct_event::KeyEventKind::Press,
            state: ct_event::KeyEventState::NONE,
        });
        assert!(Event::from_crossterm(ct).is_none());
    }
}
