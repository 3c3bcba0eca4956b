use eat_n_split::core::action::{Action, Effect, update};
use eat_n_split::core::friend::{FriendId, seed_friends};
use eat_n_split::core::split::{Payer, SplitBill};
use eat_n_split::core::state::App;
use eat_n_split::tui::event::TuiEvent;
use eat_n_split::tui::{Focus, TuiState};

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded_app() -> App {
    App::new(seed_friends(), "$".to_string())
}

fn select(app: &mut App, index: usize) -> FriendId {
    let id = app.friends[index].id.clone();
    update(app, Action::ToggleFriendSelection(id.clone()));
    id
}

fn add(app: &mut App, name: &str) -> Effect {
    update(
        app,
        Action::RequestAddFriend {
            name: name.to_string(),
            image_url: "https://i.pravatar.cc/48".to_string(),
        },
    )
}

// ============================================================================
// Core Flows
// ============================================================================

#[test]
fn test_added_friends_get_unique_ids_and_zero_balance() {
    let mut app = seeded_app();
    for name in ["Jonas", "Jonas", "Mia"] {
        let before: Vec<FriendId> = app.friends.iter().map(|f| f.id.clone()).collect();
        assert_eq!(add(&mut app, name), Effect::None);

        assert_eq!(app.friends.len(), before.len() + 1);
        let added = app.friends.last().unwrap();
        assert_eq!(added.balance, 0.0);
        assert!(!before.contains(&added.id));
        assert!(added.image.ends_with(added.id.as_str()));
    }
    let names: Vec<&str> = app.friends.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Clark", "Sarah", "Anthony", "Jonas", "Jonas", "Mia"]);
}

#[test]
fn test_split_you_pay_then_friend_pays() {
    let mut app = seeded_app();

    select(&mut app, 2);
    let delta = SplitBill {
        bill_total: 100.0,
        your_expense: 30.0,
        payer: Payer::You,
    }
    .delta()
    .unwrap();
    update(&mut app, Action::RequestSplitBill(delta));
    assert_eq!(app.friends[2].balance, 70.0);
    assert_eq!(app.friends[2].status_text("$"), "Anthony owes you $70");

    select(&mut app, 2);
    let delta = SplitBill {
        bill_total: 100.0,
        your_expense: 30.0,
        payer: Payer::Friend,
    }
    .delta()
    .unwrap();
    update(&mut app, Action::RequestSplitBill(delta));
    assert_eq!(app.friends[2].balance, 40.0);
}

#[test]
fn test_split_leaves_other_friends_untouched() {
    let mut app = seeded_app();
    let before: Vec<u64> = app.friends.iter().map(|f| f.balance.to_bits()).collect();

    select(&mut app, 0);
    update(&mut app, Action::RequestSplitBill(-12.25));

    assert_eq!(app.friends[0].balance, -19.25);
    assert_eq!(app.friends[1].balance.to_bits(), before[1]);
    assert_eq!(app.friends[2].balance.to_bits(), before[2]);
    assert!(app.selected_friend_id.is_none());
}

#[test]
fn test_selection_and_add_form_are_exclusive() {
    let mut app = seeded_app();
    select(&mut app, 1);
    update(&mut app, Action::ToggleAddFriendForm);
    assert!(app.is_add_friend_form_open);
    assert!(app.selected_friend_id.is_none());

    select(&mut app, 0);
    assert!(!app.is_add_friend_form_open);
    assert!(app.selected_friend_id.is_some());
}

// ============================================================================
// Terminal Flows
// ============================================================================

fn press(tui: &mut TuiState, app: &mut App, keys: &str) {
    for c in keys.chars() {
        tui.handle_event(app, &TuiEvent::InputChar(c));
    }
}

#[test]
fn test_keyboard_add_then_split_with_new_friend() {
    let mut app = seeded_app();
    let mut tui = TuiState::new("https://i.pravatar.cc/48");

    press(&mut tui, &mut app, "a");
    press(&mut tui, &mut app, "Jonas");
    tui.handle_event(&mut app, &TuiEvent::Submit);
    assert_eq!(app.friends.len(), 4);

    // Back to the list, jump to the new friend and select them
    tui.handle_event(&mut app, &TuiEvent::Escape);
    tui.handle_event(&mut app, &TuiEvent::CursorEnd);
    tui.handle_event(&mut app, &TuiEvent::CursorUp);
    tui.handle_event(&mut app, &TuiEvent::Submit);
    assert_eq!(tui.focus, Focus::SplitBillForm);
    assert!(!app.is_add_friend_form_open);

    press(&mut tui, &mut app, "60");
    tui.handle_event(&mut app, &TuiEvent::NextField);
    press(&mut tui, &mut app, "20");
    tui.handle_event(&mut app, &TuiEvent::NextField);
    tui.handle_event(&mut app, &TuiEvent::CursorRight);
    tui.handle_event(&mut app, &TuiEvent::Submit);

    assert_eq!(app.friends[3].balance, -20.0);
    assert_eq!(app.friends[3].status_text("$"), "You owe Jonas $20");
    assert_eq!(tui.focus, Focus::FriendList);
}

#[test]
fn test_split_form_never_carries_values_across_friends() {
    let mut app = seeded_app();
    let mut tui = TuiState::new("https://i.pravatar.cc/48");

    tui.handle_event(&mut app, &TuiEvent::Submit);
    press(&mut tui, &mut app, "100");
    tui.handle_event(&mut app, &TuiEvent::NextField);
    press(&mut tui, &mut app, "30");

    tui.handle_event(&mut app, &TuiEvent::Escape);
    tui.handle_event(&mut app, &TuiEvent::CursorDown);
    tui.handle_event(&mut app, &TuiEvent::Submit);

    let draft = tui.split_bill_form.as_ref().map(|f| f.draft()).unwrap();
    assert_eq!(draft, SplitBill::default());
    // Nothing was applied to Clark
    assert_eq!(app.friends[0].balance, -7.0);
}
