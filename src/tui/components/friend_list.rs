//! # FriendList Component
//!
//! Renders one `FriendCard` per friend, in collection order, and tracks the
//! keyboard cursor.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FriendListState` lives in `TuiState`
//! - `FriendList` is created each frame with borrowed state
//!
//! The cursor has one extra stop past the last friend: the sidebar's
//! "Add friend" / "Close" button.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::friend::{Friend, FriendId};
use crate::tui::component::Component;
use crate::tui::components::friend_card::{CARD_HEIGHT, FriendCard};
use crate::tui::event::TuiEvent;

/// Persistent state for the friend list.
#[derive(Debug, Default)]
pub struct FriendListState {
    /// Row under the cursor; `friends.len()` means the add-friend button
    pub cursor: usize,
    /// First visible row
    pub offset: usize,
    /// Friend count seen by the last `follow_growth`
    known_count: Option<usize>,
}

/// Events emitted by the friend list.
#[derive(Debug, Clone, PartialEq)]
pub enum FriendListEvent {
    ToggleFriend(FriendId),
    ToggleAddFriend,
    /// Move focus into the open form
    EnterForm,
    Quit,
}

impl FriendListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_button(&self, friend_count: usize) -> bool {
        self.cursor == friend_count
    }

    /// Keep the cursor on the button when friends are appended under it.
    pub fn follow_growth(&mut self, friend_count: usize) {
        if let Some(known) = self.known_count
            && friend_count > known
            && self.on_button(known)
        {
            self.cursor = friend_count;
        }
        self.known_count = Some(friend_count);
    }

    /// Handle a key event, returning a FriendListEvent if the app should act.
    pub fn handle_event(&mut self, event: &TuiEvent, friends: &[Friend]) -> Option<FriendListEvent> {
        // Keep the cursor valid if the list changed since the last event
        self.cursor = self.cursor.min(friends.len());

        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.cursor = (self.cursor + 1).min(friends.len());
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = friends.len();
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => match friends.get(self.cursor) {
                Some(friend) => Some(FriendListEvent::ToggleFriend(friend.id.clone())),
                None => Some(FriendListEvent::ToggleAddFriend),
            },
            TuiEvent::InputChar('a') => Some(FriendListEvent::ToggleAddFriend),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(FriendListEvent::Quit),
            TuiEvent::NextField | TuiEvent::CursorRight => Some(FriendListEvent::EnterForm),
            _ => None,
        }
    }

    /// Scroll so the cursor row is inside a window of `visible` rows.
    fn scroll_to_cursor(&mut self, friend_count: usize, visible: usize) {
        let row = self.cursor.min(friend_count.saturating_sub(1));
        if visible == 0 {
            self.offset = row;
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + visible {
            self.offset = row + 1 - visible;
        }
        self.offset = self.offset.min(friend_count.saturating_sub(visible));
    }
}

/// Transient render wrapper for the friend list.
pub struct FriendList<'a> {
    pub state: &'a mut FriendListState,
    pub friends: &'a [Friend],
    pub selected: Option<&'a FriendId>,
    pub currency: &'a str,
    /// The list holds keyboard focus
    pub focused: bool,
}

impl Component for FriendList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.friends.is_empty() {
            let empty = Paragraph::new("No friends yet. Press a to add one.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let visible = (area.height / CARD_HEIGHT) as usize;
        self.state.scroll_to_cursor(self.friends.len(), visible);

        let rows = self.friends.iter().enumerate().skip(self.state.offset).take(visible);
        for (slot, (index, friend)) in rows.enumerate() {
            let card_area = Rect {
                x: area.x,
                y: area.y + slot as u16 * CARD_HEIGHT,
                width: area.width,
                height: CARD_HEIGHT,
            };
            let is_selected = self.selected == Some(&friend.id);
            let is_focused = self.focused && self.state.cursor == index;
            FriendCard::new(friend, self.currency, is_selected, is_focused).render(frame, card_area);
        }
    }
}
