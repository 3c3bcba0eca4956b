//! # SplitBillForm Component
//!
//! Bill value, your expense, the friend's (derived) expense and who paid.
//!
//! ## Lifetime
//!
//! The form belongs to exactly one friend. `TuiState::sync` builds a new
//! `SplitBillFormState` whenever the selected friend changes, so values typed
//! for one friend never carry over to another.
//!
//! ## Submission
//!
//! Enter anywhere in the form submits. The values go through
//! [`SplitBill::delta`]; a missing bill or expense is ignored without feedback.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::friend::{Friend, FriendId};
use crate::core::split::{Payer, SplitBill, parse_amount};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldKind, TextField};
use crate::tui::event::TuiEvent;

/// Rendered height: heading, four boxed rows, button.
pub const FORM_HEIGHT: u16 = 1 + FIELD_HEIGHT * 4 + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Bill,
    YourExpense,
    Payer,
    SplitButton,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Bill => Field::YourExpense,
            Field::YourExpense => Field::Payer,
            Field::Payer => Field::SplitButton,
            Field::SplitButton => Field::Bill,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Bill => Field::SplitButton,
            Field::YourExpense => Field::Bill,
            Field::Payer => Field::YourExpense,
            Field::SplitButton => Field::Payer,
        }
    }
}

/// Events emitted by the split-bill form
#[derive(Debug, Clone, PartialEq)]
pub enum SplitBillEvent {
    /// Balance change for the selected friend
    Submit(f64),
    /// Hand focus back to the friend list
    Back,
}

pub struct SplitBillFormState {
    friend_id: FriendId,
    friend_name: String,
    bill: TextField,
    your_expense: TextField,
    payer: Payer,
    focus: Field,
    /// The form holds keyboard focus (prop)
    pub focused: bool,
}

impl SplitBillFormState {
    pub fn new(friend: &Friend) -> Self {
        Self {
            friend_id: friend.id.clone(),
            friend_name: friend.name.clone(),
            bill: TextField::new("💸 Bill value", FieldKind::Numeric).with_placeholder("0"),
            your_expense: TextField::new("🧍 Your expense", FieldKind::Numeric)
                .with_placeholder("0"),
            payer: Payer::default(),
            focus: Field::Bill,
            focused: false,
        }
    }

    pub fn friend_id(&self) -> &FriendId {
        &self.friend_id
    }

    /// Current input as numbers.
    pub fn draft(&self) -> SplitBill {
        SplitBill {
            bill_total: parse_amount(self.bill.value()),
            your_expense: parse_amount(self.your_expense.value()),
            payer: self.payer,
        }
    }

    fn submit(&self) -> Option<SplitBillEvent> {
        let draft = self.draft();
        match draft.delta() {
            Some(delta) => Some(SplitBillEvent::Submit(delta)),
            None => {
                debug!("Split ignored: bill or expense is zero ({:?})", draft);
                None
            }
        }
    }

    fn payer_line(&self) -> Line<'_> {
        let arrow_style = if self.focused && self.focus == Field::Payer {
            Style::default().fg(Color::LightYellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(
                self.payer.label(&self.friend_name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", arrow_style),
        ])
    }
}

impl EventHandler for SplitBillFormState {
    type Event = SplitBillEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(SplitBillEvent::Back),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::Submit => self.submit(),
            _ => match self.focus {
                Field::Bill => {
                    self.bill.handle_event(event);
                    None
                }
                Field::YourExpense => {
                    self.your_expense.handle_event(event);
                    None
                }
                Field::Payer => {
                    if matches!(
                        event,
                        TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::InputChar(' ')
                    ) {
                        self.payer = self.payer.toggle();
                    }
                    None
                }
                Field::SplitButton => match event {
                    TuiEvent::InputChar(' ') => self.submit(),
                    _ => None,
                },
            },
        }
    }
}

impl Component for SplitBillFormState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, bill_area, yours_area, theirs_area, payer_area, button_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
            ])
            .areas(area);

        let heading = Line::from(Span::styled(
            format!("SPLIT A BILL WITH {}", self.friend_name.to_uppercase()),
            Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(heading, heading_area);

        self.bill.focused = self.focused && self.focus == Field::Bill;
        self.your_expense.focused = self.focused && self.focus == Field::YourExpense;
        self.bill.render(frame, bill_area);
        self.your_expense.render(frame, yours_area);

        // Derived value, shown read-only
        let friend_expense = Paragraph::new(self.draft().friend_expense().to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!("👫 {}'s expense", self.friend_name)),
            );
        frame.render_widget(friend_expense, theirs_area);

        let payer_border = if self.focused && self.focus == Field::Payer {
            Style::default().fg(Color::LightYellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let payer = Paragraph::new(self.payer_line()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(payer_border)
                .title("🤑 Who is paying the bill"),
        );
        frame.render_widget(payer, payer_area);

        Button::new("Split bill", self.focused && self.focus == Field::SplitButton)
            .render(frame, button_area);
    }
}
