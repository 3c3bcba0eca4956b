//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Exactly one pane receives key events at a time: the friend list, the
//! add-friend form or the split-bill form. Opening a form moves focus into
//! it; when the focused form goes away, focus falls back to the list.
//!
//! ## Form Lifetime
//!
//! Form states are owned here, not in `App`. After every update,
//! [`TuiState::sync`] reconciles them with the core flags: the add-friend
//! form exists while `is_add_friend_form_open` holds, and the split-bill form
//! is rebuilt from scratch whenever `selected_friend_id` changes.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and only
//! redraws after an event (including terminal resize).

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AddFriendEvent, AddFriendFormState, FriendListEvent, FriendListState, SplitBillEvent,
    SplitBillFormState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FriendList,
    AddFriendForm,
    SplitBillForm,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub friend_list: FriendListState,
    /// Present while the add-friend form is open
    pub add_friend_form: Option<AddFriendFormState>,
    /// Present while a friend is selected; keyed by that friend's id
    pub split_bill_form: Option<SplitBillFormState>,
    /// Placeholder image URL for new add-friend forms
    pub avatar_url: String,
}

impl TuiState {
    pub fn new(avatar_url: impl Into<String>) -> Self {
        Self {
            focus: Focus::FriendList,
            friend_list: FriendListState::new(),
            add_friend_form: None,
            split_bill_form: None,
            avatar_url: avatar_url.into(),
        }
    }

    /// Bring form states in line with the core flags after an update.
    pub fn sync(&mut self, app: &App) {
        self.friend_list.follow_growth(app.friends.len());

        match (app.is_add_friend_form_open, self.add_friend_form.is_some()) {
            (true, false) => {
                self.add_friend_form = Some(AddFriendFormState::new(self.avatar_url.clone()));
                self.focus = Focus::AddFriendForm;
            }
            (false, true) => self.add_friend_form = None,
            _ => {}
        }

        match app.selected_friend() {
            Some(friend) => {
                let current = self.split_bill_form.as_ref().map(|form| form.friend_id());
                if current != Some(&friend.id) {
                    debug!("Fresh split form for {}", friend.name);
                    self.split_bill_form = Some(SplitBillFormState::new(friend));
                    self.focus = Focus::SplitBillForm;
                }
            }
            None => self.split_bill_form = None,
        }

        let focus_lost = match self.focus {
            Focus::FriendList => false,
            Focus::AddFriendForm => self.add_friend_form.is_none(),
            Focus::SplitBillForm => self.split_bill_form.is_none(),
        };
        if focus_lost {
            self.focus = Focus::FriendList;
        }
        self.update_focus_props();
    }

    fn update_focus_props(&mut self) {
        if let Some(form) = self.add_friend_form.as_mut() {
            form.focused = self.focus == Focus::AddFriendForm;
        }
        if let Some(form) = self.split_bill_form.as_mut() {
            form.focused = self.focus == Focus::SplitBillForm;
        }
    }

    /// Route one event to the focused pane and apply whatever it asks for.
    pub fn handle_event(&mut self, app: &mut App, event: &TuiEvent) -> Effect {
        // Ctrl+C always quits regardless of focus
        if matches!(event, TuiEvent::ForceQuit) {
            return update(app, Action::Quit);
        }

        let action = match self.focus {
            Focus::FriendList => match self.friend_list.handle_event(event, &app.friends) {
                Some(FriendListEvent::ToggleFriend(id)) => Some(Action::ToggleFriendSelection(id)),
                Some(FriendListEvent::ToggleAddFriend) => Some(Action::ToggleAddFriendForm),
                Some(FriendListEvent::EnterForm) => {
                    if self.split_bill_form.is_some() {
                        self.focus = Focus::SplitBillForm;
                    } else if self.add_friend_form.is_some() {
                        self.focus = Focus::AddFriendForm;
                    }
                    None
                }
                Some(FriendListEvent::Quit) => Some(Action::Quit),
                None => None,
            },
            Focus::AddFriendForm => {
                match self.add_friend_form.as_mut().and_then(|f| f.handle_event(event)) {
                    Some(AddFriendEvent::Submit { name, image_url }) => {
                        Some(Action::RequestAddFriend { name, image_url })
                    }
                    Some(AddFriendEvent::Back) => {
                        self.focus = Focus::FriendList;
                        None
                    }
                    None => None,
                }
            }
            Focus::SplitBillForm => {
                match self.split_bill_form.as_mut().and_then(|f| f.handle_event(event)) {
                    Some(SplitBillEvent::Submit(delta)) => Some(Action::RequestSplitBill(delta)),
                    Some(SplitBillEvent::Back) => {
                        self.focus = Focus::FriendList;
                        None
                    }
                    None => None,
                }
            }
        };

        let effect = match action {
            Some(action) => {
                debug!("Dispatching {:?}", action);
                update(app, action)
            }
            None => Effect::None,
        };
        self.sync(app);
        effect
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.avatar_url.clone());
    tui.sync(&app);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();

    info!("Eat-'n-Split shutting down");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if !matches!(event, TuiEvent::Resize) && tui.handle_event(app, &event) == Effect::Quit
            {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    const AVATAR: &str = "https://i.pravatar.cc/48";

    fn setup() -> (App, TuiState) {
        (test_app(), TuiState::new(AVATAR))
    }

    fn send(tui: &mut TuiState, app: &mut App, events: &[TuiEvent]) {
        for event in events {
            tui.handle_event(app, event);
        }
    }

    fn type_str(tui: &mut TuiState, app: &mut App, text: &str) {
        for c in text.chars() {
            tui.handle_event(app, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_selecting_friend_opens_split_form_with_focus() {
        let (mut app, mut tui) = setup();
        send(&mut tui, &mut app, &[TuiEvent::Submit]);

        assert_eq!(app.selected_friend_id, Some(app.friends[0].id.clone()));
        assert_eq!(tui.focus, Focus::SplitBillForm);
        assert!(tui.split_bill_form.as_ref().is_some_and(|f| f.focused));
    }

    #[test]
    fn test_full_split_flow_you_pay() {
        let (mut app, mut tui) = setup();
        // Cursor to Sarah, select
        send(&mut tui, &mut app, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        type_str(&mut tui, &mut app, "100");
        send(&mut tui, &mut app, &[TuiEvent::NextField]);
        type_str(&mut tui, &mut app, "30");
        send(&mut tui, &mut app, &[TuiEvent::Submit]);

        assert_eq!(app.friends[1].balance, 90.0);
        assert!(app.selected_friend_id.is_none());
        assert!(tui.split_bill_form.is_none());
        assert_eq!(tui.focus, Focus::FriendList);
    }

    #[test]
    fn test_incomplete_split_keeps_form_and_input() {
        let (mut app, mut tui) = setup();
        send(&mut tui, &mut app, &[TuiEvent::Submit]);
        type_str(&mut tui, &mut app, "100");
        send(&mut tui, &mut app, &[TuiEvent::Submit]);

        assert_eq!(app.friends[0].balance, -7.0);
        assert!(app.selected_friend_id.is_some());
        let draft = tui.split_bill_form.as_ref().map(|f| f.draft());
        assert_eq!(draft.map(|d| d.bill_total), Some(100.0));
    }

    #[test]
    fn test_switching_friend_resets_split_form() {
        let (mut app, mut tui) = setup();
        send(&mut tui, &mut app, &[TuiEvent::Submit]);
        type_str(&mut tui, &mut app, "100");

        // Back to the list, move to Sarah, select her
        send(
            &mut tui,
            &mut app,
            &[TuiEvent::Escape, TuiEvent::CursorDown, TuiEvent::Submit],
        );

        let form = tui.split_bill_form.as_ref().map(|f| (f.friend_id().clone(), f.draft()));
        let (id, draft) = form.unwrap();
        assert_eq!(id, app.friends[1].id);
        assert_eq!(draft.bill_total, 0.0);
        assert_eq!(draft.your_expense, 0.0);
    }

    #[test]
    fn test_deselect_closes_split_form() {
        let (mut app, mut tui) = setup();
        send(
            &mut tui,
            &mut app,
            &[TuiEvent::Submit, TuiEvent::Escape, TuiEvent::Submit],
        );
        assert!(app.selected_friend_id.is_none());
        assert!(tui.split_bill_form.is_none());
        assert_eq!(tui.focus, Focus::FriendList);
    }

    #[test]
    fn test_add_friend_flow() {
        let (mut app, mut tui) = setup();
        send(&mut tui, &mut app, &[TuiEvent::InputChar('a')]);
        assert!(app.is_add_friend_form_open);
        assert_eq!(tui.focus, Focus::AddFriendForm);

        type_str(&mut tui, &mut app, "Jonas");
        send(&mut tui, &mut app, &[TuiEvent::Submit]);

        assert_eq!(app.friends.len(), 4);
        assert_eq!(app.friends[3].name, "Jonas");
        assert_eq!(app.friends[3].balance, 0.0);
        // Form stays open and is reset
        let form = tui.add_friend_form.as_ref().unwrap();
        assert_eq!(form.name(), "");
        assert_eq!(form.image_url(), AVATAR);
    }

    #[test]
    fn test_add_friend_from_button_keeps_cursor_on_button() {
        let (mut app, mut tui) = setup();
        send(
            &mut tui,
            &mut app,
            &[
                TuiEvent::CursorDown,
                TuiEvent::CursorDown,
                TuiEvent::CursorDown,
                TuiEvent::Submit,
            ],
        );
        assert!(app.is_add_friend_form_open);

        type_str(&mut tui, &mut app, "Jonas");
        send(&mut tui, &mut app, &[TuiEvent::Submit, TuiEvent::Escape]);
        assert_eq!(app.friends.len(), 4);
        assert_eq!(tui.focus, Focus::FriendList);
        assert!(tui.friend_list.on_button(app.friends.len()));

        // Enter hits "Close", not the new friend's row
        send(&mut tui, &mut app, &[TuiEvent::Submit]);
        assert!(!app.is_add_friend_form_open);
        assert!(app.selected_friend_id.is_none());
    }

    #[test]
    fn test_add_friend_from_shortcut_leaves_row_cursor_alone() {
        let (mut app, mut tui) = setup();
        send(&mut tui, &mut app, &[TuiEvent::CursorDown, TuiEvent::InputChar('a')]);
        type_str(&mut tui, &mut app, "Jonas");
        send(&mut tui, &mut app, &[TuiEvent::Submit, TuiEvent::Escape]);

        assert_eq!(tui.friend_list.cursor, 1);
    }

    #[test]
    fn test_add_friend_with_empty_name_is_noop() {
        let (mut app, mut tui) = setup();
        send(
            &mut tui,
            &mut app,
            &[TuiEvent::InputChar('a'), TuiEvent::Submit, TuiEvent::Submit],
        );
        assert_eq!(app.friends.len(), 3);
        assert!(app.is_add_friend_form_open);
    }

    #[test]
    fn test_selecting_friend_closes_add_form() {
        let (mut app, mut tui) = setup();
        send(
            &mut tui,
            &mut app,
            &[TuiEvent::InputChar('a'), TuiEvent::Escape, TuiEvent::Submit],
        );
        assert!(!app.is_add_friend_form_open);
        assert!(tui.add_friend_form.is_none());
        assert_eq!(tui.focus, Focus::SplitBillForm);
    }

    #[test]
    fn test_opening_add_form_clears_selection() {
        let (mut app, mut tui) = setup();
        send(
            &mut tui,
            &mut app,
            &[TuiEvent::Submit, TuiEvent::Escape, TuiEvent::InputChar('a')],
        );
        assert!(app.selected_friend_id.is_none());
        assert!(tui.split_bill_form.is_none());
        assert_eq!(tui.focus, Focus::AddFriendForm);
    }

    #[test]
    fn test_reopened_add_form_is_fresh() {
        let (mut app, mut tui) = setup();
        send(&mut tui, &mut app, &[TuiEvent::InputChar('a')]);
        type_str(&mut tui, &mut app, "Half");
        send(
            &mut tui,
            &mut app,
            &[TuiEvent::Escape, TuiEvent::InputChar('a'), TuiEvent::InputChar('a')],
        );
        assert_eq!(tui.add_friend_form.as_ref().map(|f| f.name()), Some(""));
    }

    #[test]
    fn test_tab_from_list_enters_open_form() {
        let (mut app, mut tui) = setup();
        send(
            &mut tui,
            &mut app,
            &[TuiEvent::Submit, TuiEvent::Escape, TuiEvent::NextField],
        );
        assert_eq!(tui.focus, Focus::SplitBillForm);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, mut tui) = setup();
        assert_eq!(tui.handle_event(&mut app, &TuiEvent::InputChar('q')), Effect::Quit);

        // Typing q into a form is text, but Ctrl+C still quits
        tui.handle_event(&mut app, &TuiEvent::InputChar('a'));
        assert_eq!(tui.handle_event(&mut app, &TuiEvent::InputChar('q')), Effect::None);
        assert_eq!(tui.handle_event(&mut app, &TuiEvent::ForceQuit), Effect::Quit);
    }
}
