use cosmic::iced::Length;
use cosmic::widget;
use cosmic::Element;

use crate::app::{Message, View};

const FULL_WIDTH: f32 = 220.0;
const COMPACT_WIDTH: f32 = 56.0;

struct NavItem {
    label: &'static str,
    icon: &'static str,
    view: View,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Mail",
        icon: "mail-inbox-symbolic",
        view: View::Inbox,
    },
    NavItem {
        label: "Chat",
        icon: "user-available-symbolic",
        view: View::Chat,
    },
    NavItem {
        label: "Spaces",
        icon: "system-users-symbolic",
        view: View::Spaces,
    },
    NavItem {
        label: "Meet",
        icon: "camera-web-symbolic",
        view: View::Meet,
    },
];

/// Left navigation: compose entry point, main views, and two collapsible
/// sections. Compact mode drops to icons only.
pub fn view<'a>(
    active: View,
    compact: bool,
    favorites_open: bool,
    recents_open: bool,
) -> Element<'a, Message> {
    let mut col = widget::column().spacing(4).padding(8);

    if compact {
        col = col.push(
            widget::button::icon(widget::icon::from_name("document-edit-symbolic"))
                .on_press(Message::ComposeOpen)
                .padding(8),
        );
    } else {
        col = col.push(
            widget::button::suggested("Compose")
                .on_press(Message::ComposeOpen)
                .width(Length::Fill),
        );
    }
    col = col.push(widget::vertical_space().height(8));

    for item in NAV_ITEMS {
        col = col.push(nav_button(item.label, item.icon, item.view, active, compact));
    }

    if compact {
        // Sections stay hidden in compact mode; Starred keeps its slot.
        col = col.push(nav_button(
            "Starred",
            "starred-symbolic",
            View::Starred,
            active,
            true,
        ));
    } else {
        col = col.push(widget::vertical_space().height(8));

        let favorites_glyph = if favorites_open { "▼" } else { "▶" };
        col = col.push(
            widget::button::text(format!("{favorites_glyph} Favorites"))
                .on_press(Message::ToggleFavorites)
                .width(Length::Fill),
        );
        if favorites_open {
            col = col.push(nav_button(
                "  Starred",
                "starred-symbolic",
                View::Starred,
                active,
                false,
            ));
        }

        let recents_glyph = if recents_open { "▼" } else { "▶" };
        col = col.push(
            widget::button::text(format!("{recents_glyph} Recents"))
                .on_press(Message::ToggleRecents)
                .width(Length::Fill),
        );
        if recents_open {
            col = col.push(nav_button(
                "  Recent Chats",
                "document-open-recent-symbolic",
                View::Recents,
                active,
                false,
            ));
        }
    }

    let width = if compact { COMPACT_WIDTH } else { FULL_WIDTH };
    widget::container(widget::scrollable(col).height(Length::Fill))
        .width(Length::Fixed(width))
        .into()
}

fn nav_button<'a>(
    label: &'static str,
    icon: &'static str,
    target: View,
    active: View,
    compact: bool,
) -> Element<'a, Message> {
    if compact {
        let mut btn = widget::button::icon(widget::icon::from_name(icon))
            .on_press(Message::Navigate(target))
            .padding(8);
        if active == target {
            btn = btn.class(cosmic::theme::Button::Suggested);
        }
        btn.into()
    } else {
        let mut btn = widget::button::text(label)
            .on_press(Message::Navigate(target))
            .width(Length::Fill);
        if active == target {
            btn = btn.class(cosmic::theme::Button::Suggested);
        }
        btn.into()
    }
}
