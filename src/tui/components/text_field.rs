//! # TextField Component
//!
//! Single-line labelled input used by both forms.
//!
//! The buffer is internal state; `focused` is a prop set by the owning form.
//! The cursor is a byte offset into the buffer, always on a char boundary.
//! When the text is wider than the field, the view scrolls horizontally so
//! the cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (1 left + 1 right) around the text.
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Rendered height: one line of text plus top and bottom borders.
pub const FIELD_HEIGHT: u16 = 3;

/// Which characters a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Digits, `.` and `-` only.
    Numeric,
}

impl FieldKind {
    fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::Numeric => c.is_ascii_digit() || c == '.' || c == '-',
        }
    }
}

pub struct TextField {
    pub label: String,
    pub buffer: String,
    /// Dim text shown while the buffer is empty
    pub placeholder: String,
    pub focused: bool,
    pub kind: FieldKind,
    cursor: usize,
}

impl TextField {
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            buffer: String::new(),
            placeholder: String::new(),
            focused: false,
            kind,
            cursor: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor = self.buffer.len();
    }

    fn insert_str(&mut self, text: &str) -> bool {
        let accepted: String = text.chars().filter(|c| self.kind.accepts(*c)).collect();
        if accepted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor, &accepted);
        self.cursor += accepted.len();
        true
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Visible slice of the buffer and the cursor column inside it.
    fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        let before = &self.buffer[..self.cursor];
        let mut start = 0;
        // Drop leading chars until the cursor fits (leaving a cell for it)
        while before[start..].width() >= width.max(1) {
            match before[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }

        let mut end = start;
        let mut used = 0;
        for c in self.buffer[start..].chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end += c.len_utf8();
        }

        (&self.buffer[start..end], before[start..].width() as u16)
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let (text, cursor_col) = self.visible_window(inner_width);

        let border_style = if self.focused {
            Style::default().fg(Color::LightYellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(text)
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
        }
    }
}

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Changed,
    Submit,
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp))
                    .then_some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => self.insert_str(text).then_some(FieldEvent::Changed),
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::Changed)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}
