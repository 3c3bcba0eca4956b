//! # Application State
//!
//! Core business state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── friends: Vec<Friend>                  // display order = insertion order
//! ├── is_add_friend_form_open: bool         // add-friend form visible
//! ├── selected_friend_id: Option<FriendId>  // split-bill target
//! ├── status_message: String                // status bar text
//! └── currency: String                      // symbol used in status lines
//! ```
//!
//! State changes only happen through the methods below, called by
//! `update(state, action)` in action.rs.

use log::debug;

use crate::core::config::ResolvedConfig;
use crate::core::friend::{Friend, FriendId};

pub struct App {
    pub friends: Vec<Friend>,
    pub is_add_friend_form_open: bool,
    pub selected_friend_id: Option<FriendId>,
    pub status_message: String,
    pub currency: String,
}

impl App {
    pub fn new(friends: Vec<Friend>, currency: String) -> Self {
        Self {
            friends,
            is_add_friend_form_open: false,
            selected_friend_id: None,
            status_message: String::from("Welcome to Eat-'n-Split!"),
            currency,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.friends.clone(), config.currency.clone())
    }

    /// Open or close the add-friend form. Always drops the current selection.
    pub fn toggle_add_friend_form(&mut self) {
        self.is_add_friend_form_open = !self.is_add_friend_form_open;
        self.selected_friend_id = None;
    }

    /// Select `id`, or deselect it if it is already selected.
    /// Either way the add-friend form closes.
    pub fn toggle_friend_selection(&mut self, id: &FriendId) {
        if self.selected_friend_id.as_ref() == Some(id) {
            self.selected_friend_id = None;
        } else {
            self.selected_friend_id = Some(id.clone());
        }
        self.is_add_friend_form_open = false;
        debug!("Selection is now {:?}", self.selected_friend_id);
    }

    pub fn add_friend(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Add `delta` to the selected friend's balance, then clear the selection.
    ///
    /// Returns the updated friend, or `None` if nothing was selected.
    pub fn apply_split_bill(&mut self, delta: f64) -> Option<&Friend> {
        let selected = self.selected_friend_id.take()?;
        let friend = self.friends.iter_mut().find(|f| f.id == selected)?;
        friend.balance += delta;
        Some(&*friend)
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        let id = self.selected_friend_id.as_ref()?;
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected_friend_id.as_ref() == Some(id)
    }
}
