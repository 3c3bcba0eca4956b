//! # FriendCard Component
//!
//! One friend row: name, avatar URL, balance status and the
//! "Select" / "Close" toggle button.
//!
//! `FriendCard` is a **transient component**: created fresh each frame with the
//! data it needs. It holds no state; selection and cursor highlight come from
//! the parent `FriendList`.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Clark                     [ Select ] │
//! │ You owe Clark $7                     │
//! │ https://i.pravatar.cc/48?u=118836    │
//! └──────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::friend::{Friend, Standing};
use crate::tui::component::Component;
use crate::tui::components::button::Button;

/// Rendered height of a card: three content lines plus borders.
pub const CARD_HEIGHT: u16 = 5;

pub struct FriendCard<'a> {
    pub friend: &'a Friend,
    pub currency: &'a str,
    /// This friend is the split-bill target
    pub is_selected: bool,
    /// The list cursor is on this row
    pub is_focused: bool,
}

impl<'a> FriendCard<'a> {
    pub fn new(friend: &'a Friend, currency: &'a str, is_selected: bool, is_focused: bool) -> Self {
        Self {
            friend,
            currency,
            is_selected,
            is_focused,
        }
    }

    fn status_style(&self) -> Style {
        match self.friend.standing() {
            Standing::YouOwe(_) => Style::default().fg(Color::Red),
            Standing::OwesYou(_) => Style::default().fg(Color::Green),
            Standing::Even => Style::default(),
        }
    }

    fn button_label(&self) -> &'static str {
        if self.is_selected { "Close" } else { "Select" }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let button = Button::new(self.button_label(), self.is_focused).span();
        let inner = width.saturating_sub(2) as usize;
        let gap = inner
            .saturating_sub(self.friend.name.width())
            .saturating_sub(button.width())
            .max(1);

        vec![
            Line::from(vec![
                Span::styled(
                    self.friend.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(gap)),
                button,
            ]),
            Line::from(Span::styled(
                self.friend.status_text(self.currency),
                self.status_style(),
            )),
            Line::from(Span::styled(
                self.friend.image.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )),
        ]
    }
}

impl Component for FriendCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_selected {
            Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD)
        } else if self.is_focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if self.is_selected {
            block = block.style(Style::default().bg(Color::Rgb(50, 44, 20)));
        }

        let paragraph = Paragraph::new(self.lines(area.width)).block(block);
        frame.render_widget(paragraph, area);
    }
}
