//! # TitleBar Component
//!
//! Top status bar: app name, friend count and the last status message.
//!
//! Purely presentational. It receives all data as props and has no internal
//! state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.friends.len(), &app.status_message);
//! title_bar.render(frame, area);
//! ```
//!
//! The title text changes based on state:
//!
//! 1. **Status message**: `"Eat-'n-Split (3 friends) | Added Jonas"`
//! 2. **Default**: `"Eat-'n-Split (3 friends)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub friend_count: usize,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(friend_count: usize, status_message: &'a str) -> Self {
        Self {
            friend_count,
            status_message,
        }
    }

    fn title(&self) -> String {
        let noun = if self.friend_count == 1 { "friend" } else { "friends" };
        if self.status_message.is_empty() {
            format!("Eat-'n-Split ({} {noun})", self.friend_count)
        } else {
            format!(
                "Eat-'n-Split ({} {noun}) | {}",
                self.friend_count, self.status_message
            )
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title(),
            Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_with_status_message() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| TitleBar::new(3, "Added Jonas").render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Eat-'n-Split (3 friends) | Added Jonas"));
    }

    #[test]
    fn test_title_default_no_status() {
        let title_bar = TitleBar::new(1, "");
        assert_eq!(title_bar.title(), "Eat-'n-Split (1 friend)");
    }
}
