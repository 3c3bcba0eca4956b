//! # AddFriendForm Component
//!
//! Name + image URL inputs and an "Add" button.
//!
//! A fresh `AddFriendFormState` is built every time the form opens, so
//! nothing typed into a closed form survives. Submitting with either field
//! empty does nothing: no event, no message, inputs left as they are.
//!
//! ```text
//! ╭ 👫 Friend name ─────────╮
//! │ Jonas                   │
//! ╰─────────────────────────╯
//! ╭ 🖼 Image URL ───────────╮
//! │ https://i.pravatar.cc/48│
//! ╰─────────────────────────╯
//! [ Add ]
//! ```

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldKind, TextField};
use crate::tui::event::TuiEvent;

/// Rendered height: two fields plus the button row.
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * 2 + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    ImageUrl,
    AddButton,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Name => Field::ImageUrl,
            Field::ImageUrl => Field::AddButton,
            Field::AddButton => Field::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Name => Field::AddButton,
            Field::ImageUrl => Field::Name,
            Field::AddButton => Field::ImageUrl,
        }
    }
}

/// Events emitted by the add-friend form
#[derive(Debug, Clone, PartialEq)]
pub enum AddFriendEvent {
    Submit { name: String, image_url: String },
    /// Hand focus back to the friend list
    Back,
}

pub struct AddFriendFormState {
    name: TextField,
    image_url: TextField,
    default_image_url: String,
    focus: Field,
    /// The form holds keyboard focus (prop)
    pub focused: bool,
}

impl AddFriendFormState {
    pub fn new(default_image_url: impl Into<String>) -> Self {
        let default_image_url = default_image_url.into();
        Self {
            name: TextField::new("👫 Friend name", FieldKind::Text),
            image_url: TextField::new("🖼 Image URL", FieldKind::Text)
                .with_value(default_image_url.clone()),
            default_image_url,
            focus: Field::Name,
            focused: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn image_url(&self) -> &str {
        self.image_url.value()
    }

    fn submit(&mut self) -> Option<AddFriendEvent> {
        if self.name.value().is_empty() || self.image_url.value().is_empty() {
            debug!("Add friend ignored: name or image URL is empty");
            return None;
        }
        let name = std::mem::take(&mut self.name.buffer);
        let image_url = self.image_url.value().to_string();
        self.name.set_value("");
        self.image_url.set_value(self.default_image_url.clone());
        self.focus = Field::Name;
        Some(AddFriendEvent::Submit { name, image_url })
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::ImageUrl => Some(&mut self.image_url),
            Field::AddButton => None,
        }
    }
}

impl EventHandler for AddFriendFormState {
    type Event = AddFriendEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(AddFriendEvent::Back),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::Submit => self.submit(),
            TuiEvent::InputChar(' ') if self.focus == Field::AddButton => self.submit(),
            _ => {
                if let Some(field) = self.focused_field() {
                    field.handle_event(event);
                }
                None
            }
        }
    }
}

impl Component for AddFriendFormState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [name_area, image_area, button_area] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        self.name.focused = self.focused && self.focus == Field::Name;
        self.image_url.focused = self.focused && self.focus == Field::ImageUrl;

        self.name.render(frame, name_area);
        self.image_url.render(frame, image_area);
        Button::new("Add", self.focused && self.focus == Field::AddButton)
            .render(frame, button_area);
    }
}
