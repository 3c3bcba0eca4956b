//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User submits the add-friend form? That's `Action::RequestAddFriend`.
//! User submits a split? That's `Action::RequestSplitBill(delta)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No I/O here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::info;

use crate::core::friend::{Friend, FriendId};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// "Add friend" / "Close" button.
    ToggleAddFriendForm,
    /// "Select" / "Close" on a friend row.
    ToggleFriendSelection(FriendId),
    /// Validated add-friend form contents.
    RequestAddFriend { name: String, image_url: String },
    /// Balance change for the selected friend.
    RequestSplitBill(f64),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ToggleAddFriendForm => {
            app.toggle_add_friend_form();
            Effect::None
        }
        Action::ToggleFriendSelection(id) => {
            app.toggle_friend_selection(&id);
            Effect::None
        }
        Action::RequestAddFriend { name, image_url } => {
            let friend = Friend::create(name, &image_url);
            info!("Adding friend {} (id={})", friend.name, friend.id);
            app.status_message = format!("Added {}", friend.name);
            app.add_friend(friend);
            Effect::None
        }
        Action::RequestSplitBill(delta) => {
            let currency = app.currency.clone();
            let message = app.apply_split_bill(delta).map(|friend| {
                info!(
                    "Split bill with {} (delta={}, balance={})",
                    friend.name, delta, friend.balance
                );
                friend.status_text(&currency)
            });
            if let Some(message) = message {
                app.status_message = message;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
