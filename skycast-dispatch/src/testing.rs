//! Test helpers for components and reducers
//!
//! - [`key`]: build a `KeyEvent` from a string like `"ctrl+t"`
//! - [`RenderHarness`]: render into an in-memory buffer and read it back as text
//! - [`ActionAssertions`]: terse checks over the actions a component emitted
//!
//! ```ignore
//! let actions: Vec<_> = bar
//!     .handle_event(&EventKind::Key(key("enter")), props)
//!     .into_iter()
//!     .collect();
//! actions.assert_first(Action::SearchSubmit);
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Parse `"q"`, `"enter"`, `"ctrl+t"`, `"shift+tab"` and the like
///
/// Returns `None` for an empty or unknown key name.
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }
    if s == "shift+tab" || s == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    let parts: Vec<&str> = s.split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(press(code, modifiers))
}

/// [`parse_key`] that panics on bad input, for tests
pub fn key(s: &str) -> KeyEvent {
    parse_key(s).unwrap_or_else(|| panic!("invalid key string: {:?}", s))
}

/// A character with no modifiers; keeps its case
pub fn char_key(c: char) -> KeyEvent {
    press(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn ctrl_key(c: char) -> KeyEvent {
    press(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Renders into a `TestBackend` of fixed size
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Never in practice; `TestBackend` does no I/O.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        Self { terminal }
    }

    /// Draw one frame and return its text, rows joined by `\n`, trailing
    /// blanks trimmed. Styles are ignored.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render)
            .expect("test backend never fails");

        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut lines = Vec::with_capacity(area.height as usize);
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

/// Assertions over a list of emitted actions
pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, n: usize);
    fn assert_first(&self, expected: A);
    fn assert_contains(&self, expected: A);
}

impl<A: PartialEq + Debug> ActionAssertions<A> for Vec<A> {
    #[track_caller]
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got {:?}", self);
    }

    #[track_caller]
    fn assert_count(&self, n: usize) {
        assert_eq!(self.len(), n, "unexpected action count in {:?}", self);
    }

    #[track_caller]
    fn assert_first(&self, expected: A) {
        assert_eq!(self.first(), Some(&expected), "actions: {:?}", self);
    }

    #[track_caller]
    fn assert_contains(&self, expected: A) {
        assert!(
            self.contains(&expected),
            "expected {:?} in {:?}",
            expected,
            self
        );
    }
}
