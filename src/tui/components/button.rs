//! # Button Component
//!
//! A clickable label. Stateless: the parent decides what activation means
//! and whether the button currently has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Button<'a> {
    pub label: &'a str,
    pub focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, focused: bool) -> Self {
        Self { label, focused }
    }

    /// Styled `[ label ]` span, for embedding in another component's line.
    pub fn span(&self) -> Span<'a> {
        let style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Span::styled(format!("[ {} ]", self.label), style)
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Line::from(self.span()), area);
    }
}
