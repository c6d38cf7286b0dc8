//! Search form: city input plus submit label.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::dispatch::EventKind;

/// Props for SearchBar - read-only view of state
pub struct SearchBarProps<'a> {
    pub value: &'a str,
    pub loading: bool,
    pub is_focused: bool,
}

/// Single-line city input with a submit label to its right.
///
/// Emits `QueryChange` per edit and `QuerySubmit` on Enter. Submission
/// stays possible while a lookup is in flight; overlapping requests are
/// resolved by sequence number in the reducer.
pub struct SearchBar {
    /// Cursor byte index into the value. Starts past any prefilled
    /// term and is clamped to the value length before use.
    cursor: usize,
}

impl SearchBar {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self { cursor: usize::MAX }
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut pos = self.cursor - 1;
            while pos > 0 && !value.is_char_boundary(pos) {
                pos -= 1;
            }
            self.cursor = pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut pos = self.cursor + 1;
            while pos < value.len() && !value.is_char_boundary(pos) {
                pos += 1;
            }
            self.cursor = pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let char_start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        let after = &value[self.cursor..];
        let (_, c) = after.char_indices().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.clamp_cursor(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(Action::QueryChange(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(Action::QueryChange(self.insert_char(props.value, c))),
            KeyCode::Backspace => self.delete_char_before(props.value).map(Action::QueryChange),
            KeyCode::Delete => self.delete_char_at(props.value).map(Action::QueryChange),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some(Action::QuerySubmit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let chunks =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(18)]).split(area);
        let (input_area, submit_area) = (chunks[0], chunks[1]);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("Enter city name")
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });

        let value_style = if props.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let display = if props.value.is_empty() {
            "e.g. London"
        } else {
            props.value
        };
        frame.render_widget(
            Paragraph::new(display).style(value_style).block(input_block),
            input_area,
        );

        let (label, label_style) = if props.loading {
            ("Searching...", Style::default().fg(Color::DarkGray))
        } else {
            ("Get Weather", Style::default().fg(Color::Cyan).bold())
        };
        let submit_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(Line::styled(label, label_style))
                .alignment(Alignment::Center)
                .block(submit_block),
            submit_area,
        );

        if props.is_focused {
            let column = props.value[..self.cursor].chars().count() as u16;
            let cursor_x = input_area.x + 1 + column;
            if cursor_x < input_area.x + input_area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, input_area.y + 1));
            }
        }
    }
}
