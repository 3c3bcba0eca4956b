//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing friend count and status
//! - `Button`: A clickable label
//! - `FriendCard`: One friend row
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: Single-line input used inside the forms
//! - `FriendList`: Friend rows with a keyboard cursor
//! - `AddFriendForm`: Name + image URL, emits an add request
//! - `SplitBillForm`: Bill inputs, emits a balance delta
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. Forms never touch `App` directly; they emit events that
//! the event loop turns into `core::action::Action` values.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── button.rs           (Clickable label)
//! ├── text_field.rs       (Single-line input)
//! ├── friend_card.rs      (One friend row)
//! ├── friend_list.rs      (Rows + cursor)
//! ├── add_friend_form.rs  (New friend form)
//! └── split_bill_form.rs  (Bill splitting form)
//! ```

pub mod add_friend_form;
pub mod button;
pub mod friend_card;
pub mod friend_list;
pub mod split_bill_form;
pub mod text_field;
mod title_bar;

pub use add_friend_form::{AddFriendEvent, AddFriendFormState};
pub use button::Button;
pub use friend_list::{FriendList, FriendListEvent, FriendListState};
pub use split_bill_form::{SplitBillEvent, SplitBillFormState};
pub use title_bar::TitleBar;
