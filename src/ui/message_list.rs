use std::collections::HashSet;

use cosmic::iced::{Alignment, Length};
use cosmic::widget;
use cosmic::Element;

use crate::app::{Message, RowAction};
use crate::core::models::Email;
use crate::core::selection::{CheckState, Selection};
use crate::core::threads::Thread;

/// Render the threaded message list with its toolbar and footer.
pub fn view<'a>(
    threads: &'a [Thread],
    selection: &'a Selection,
    expanded: &'a HashSet<String>,
    displayed_len: usize,
    unread_count: usize,
) -> Element<'a, Message> {
    let mut col = widget::column().spacing(2).padding(8);

    col = col.push(toolbar(selection, displayed_len));

    if threads.is_empty() {
        col = col.push(widget::text::body("No messages found."));
    } else {
        for thread in threads {
            if thread.is_conversation() {
                col = col.push(thread_header(thread, selection, expanded));
                if expanded.contains(&thread.id) {
                    for msg in &thread.messages {
                        col = col.push(message_row(msg, selection, true));
                    }
                }
            } else if let Some(msg) = thread.latest() {
                col = col.push(message_row(msg, selection, false));
            }
        }
    }

    col = col.push(widget::vertical_space().height(8));
    col = col.push(widget::text::caption(format!(
        "You have {unread_count} unread messages."
    )));

    widget::scrollable(col)
        .height(Length::Fill)
        .width(Length::Fill)
        .into()
}

fn toolbar<'a>(selection: &'a Selection, displayed_len: usize) -> Element<'a, Message> {
    let glyph = match selection.check_state(displayed_len) {
        CheckState::Checked => "☑",
        CheckState::Indeterminate => "▣",
        CheckState::Unchecked => "☐",
    };

    let mut row = widget::row()
        .spacing(4)
        .align_y(Alignment::Center)
        .push(
            widget::button::text(glyph)
                .on_press(Message::SelectAllToggled)
                .padding(4),
        )
        .push(
            widget::button::icon(widget::icon::from_name("view-refresh-symbolic"))
                .on_press(Message::Refresh)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        )
        .push(
            widget::button::icon(widget::icon::from_name("view-more-symbolic"))
                .on_press(Message::Noop)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        );

    if !selection.is_empty() {
        for (icon, action) in [
            ("mail-archive-symbolic", RowAction::Archive),
            ("user-trash-symbolic", RowAction::Delete),
            ("mail-unread-symbolic", RowAction::MarkUnread),
            ("alarm-symbolic", RowAction::Snooze),
        ] {
            row = row.push(
                widget::button::icon(widget::icon::from_name(icon))
                    .on_press(Message::BulkAction(action))
                    .padding(4)
                    .class(cosmic::theme::Button::Text),
            );
        }
        row = row.push(widget::text::caption(format!(
            "{} selected",
            selection.len()
        )));
    }

    row.into()
}

/// Collapsed conversation header: expand toggle, whole-thread checkbox,
/// participant names, message count, and the newest message's subject,
/// snippet, star and timestamp.
fn thread_header<'a>(
    thread: &'a Thread,
    selection: &'a Selection,
    expanded: &'a HashSet<String>,
) -> Element<'a, Message> {
    let ids = thread.message_ids();
    let check = if selection.thread_fully_selected(&ids) {
        "☑"
    } else if ids.iter().any(|id| selection.contains(id)) {
        "▣"
    } else {
        "☐"
    };
    let expand_glyph = if expanded.contains(&thread.id) {
        "▼"
    } else {
        "▶"
    };

    let mut row = widget::row()
        .spacing(4)
        .align_y(Alignment::Center)
        .push(
            widget::button::text(check)
                .on_press(Message::ToggleThreadSelect(thread.id.clone()))
                .padding(4),
        )
        .push(
            widget::button::text(expand_glyph)
                .on_press(Message::ToggleThreadExpand(thread.id.clone()))
                .padding(4),
        );

    if let Some(latest) = thread.latest() {
        let star = if latest.is_starred { "★" } else { "☆" };
        let unread = if thread.is_unread() { "● " } else { "" };
        let senders = format!("{unread}{} ({})", thread.unique_senders(), thread.len());

        let summary = widget::column()
            .spacing(2)
            .push(widget::text::body(senders))
            .push(widget::text::caption(format!(
                "{} — {}",
                latest.subject, latest.snippet
            )));

        row = row
            .push(
                widget::button::text(star)
                    .on_press(Message::ToggleStar(latest.id.clone()))
                    .padding(4),
            )
            .push(
                widget::button::custom(summary)
                    .on_press(Message::ToggleThreadExpand(thread.id.clone()))
                    .class(cosmic::theme::Button::Text)
                    .width(Length::Fill),
            )
            .push(widget::text::caption(&latest.timestamp));
    }

    row.into()
}

fn message_row<'a>(msg: &'a Email, selection: &'a Selection, indented: bool) -> Element<'a, Message> {
    let check = if selection.contains(&msg.id) {
        "☑"
    } else {
        "☐"
    };
    let star = if msg.is_starred { "★" } else { "☆" };
    let unread = if !msg.is_read { "● " } else { "" };

    let summary = widget::column()
        .spacing(2)
        .push(widget::text::body(format!("{unread}{}", msg.sender)))
        .push(widget::text::caption(format!(
            "{} — {}",
            msg.subject, msg.snippet
        )));

    let indent: u16 = if indented { 24 } else { 0 };
    let row = widget::row()
        .spacing(4)
        .padding([0, 0, 0, indent])
        .align_y(Alignment::Center)
        .push(
            widget::button::text(check)
                .on_press(Message::ToggleSelect(msg.id.clone()))
                .padding(4),
        )
        .push(
            widget::button::text(star)
                .on_press(Message::ToggleStar(msg.id.clone()))
                .padding(4),
        )
        .push(widget::container(summary).width(Length::Fill))
        .push(widget::text::caption(&msg.timestamp))
        .push(row_action_button(
            "mail-archive-symbolic",
            RowAction::Archive,
            msg,
        ))
        .push(row_action_button(
            "user-trash-symbolic",
            RowAction::Delete,
            msg,
        ))
        .push(row_action_button(
            "mail-unread-symbolic",
            RowAction::MarkUnread,
            msg,
        ))
        .push(row_action_button(
            "alarm-symbolic",
            RowAction::Snooze,
            msg,
        ));

    row.into()
}

fn row_action_button<'a>(icon: &'static str, action: RowAction, msg: &Email) -> Element<'a, Message> {
    widget::button::icon(widget::icon::from_name(icon))
        .on_press(Message::RowAction(action, msg.id.clone()))
        .padding(4)
        .class(cosmic::theme::Button::Text)
        .into()
}
