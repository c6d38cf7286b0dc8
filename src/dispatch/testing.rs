//! Test helpers: key constructors, render harness, action assertions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Create a `KeyEvent` from a key string such as `"a"`, `"enter"`, or
/// `"ctrl+u"`.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("invalid key string: {s:?}"))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = s;
    loop {
        if let Some(stripped) = rest.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = stripped;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        _ => {
            let mut chars = rest.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Render components into an in-memory terminal and inspect the output.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Run a draw closure and return the buffer contents as plain text,
    /// one line per terminal row with trailing whitespace trimmed.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(draw).expect("draw to test backend");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Flatten a buffer into plain text, ignoring styling.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Assertions over the actions returned by `Component::handle_event`.
pub trait ActionAssertions<A> {
    /// Assert exactly `expected` actions were emitted.
    fn assert_count(&self, expected: usize);
    /// Assert the first emitted action equals `expected`.
    fn assert_first(&self, expected: A);
    /// Assert no actions were emitted.
    fn assert_empty(&self);
}

impl<A> ActionAssertions<A> for Vec<A>
where
    A: std::fmt::Debug + PartialEq,
{
    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {expected} actions, got: {self:?}"
        );
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(
            self.first(),
            Some(&expected),
            "expected first action {expected:?}, got: {self:?}"
        );
    }

    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {self:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn key_with_ctrl() {
        let k = key("ctrl+u");
        assert_eq!(k.code, KeyCode::Char('u'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("backspace").code, KeyCode::Backspace);
    }

    #[test]
    fn harness_captures_text() {
        use ratatui::widgets::Paragraph;

        let mut render = RenderHarness::new(20, 3);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        });

        assert!(output.starts_with("hello"));
    }
}
