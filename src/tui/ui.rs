use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Button, FriendList, TitleBar, add_friend_form, split_bill_form};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};

/// Sidebar width as a share of the screen.
const SIDEBAR_PERCENT: u16 = 50;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, main_area] =
        Layout::horizontal([Percentage(SIDEBAR_PERCENT), Percentage(100 - SIDEBAR_PERCENT)])
            .spacing(2)
            .areas(body_area);

    TitleBar::new(app.friends.len(), &app.status_message).render(frame, title_area);

    draw_sidebar(frame, sidebar_area, app, tui);
    draw_main(frame, main_area, tui);

    let help = Paragraph::new(help_text(tui.focus))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let form_height = if tui.add_friend_form.is_some() {
        add_friend_form::FORM_HEIGHT + 1
    } else {
        0
    };
    let [list_area, form_area, button_area] =
        Layout::vertical([Min(0), Length(form_height), Length(1)]).areas(area);

    let list_focused = tui.focus == Focus::FriendList;
    FriendList {
        state: &mut tui.friend_list,
        friends: &app.friends,
        selected: app.selected_friend_id.as_ref(),
        currency: &app.currency,
        focused: list_focused,
    }
    .render(frame, list_area);

    if let Some(form) = tui.add_friend_form.as_mut() {
        let [_, inner] = Layout::vertical([Length(1), Min(0)]).areas(form_area);
        form.render(frame, inner);
    }

    let label = if app.is_add_friend_form_open { "Close" } else { "Add friend" };
    let on_button = list_focused && tui.friend_list.on_button(app.friends.len());
    Button::new(label, on_button).render(frame, button_area);
}

fn draw_main(frame: &mut Frame, area: Rect, tui: &mut TuiState) {
    match tui.split_bill_form.as_mut() {
        Some(form) => {
            let block = Block::default().padding(Padding::horizontal(1));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let height = split_bill_form::FORM_HEIGHT.min(inner.height);
            form.render(frame, Rect { height, ..inner });
        }
        None => {
            let hint = Paragraph::new(Line::from("Select a friend to split a bill."))
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
        }
    }
}

fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::FriendList => "↑↓ Move  Enter Select  a Add friend  Tab Form  q Quit",
        Focus::AddFriendForm => "Tab Next field  Enter Add  Esc Back  Ctrl+C Quit",
        Focus::SplitBillForm => "Tab Next field  ←→ Payer  Enter Split  Esc Back  Ctrl+C Quit",
    }
}
