use cosmic::iced::{Alignment, Length};
use cosmic::widget;
use cosmic::Element;

use crate::app::Message;
use crate::config::ThemeMode;

pub fn search_input_id() -> widget::Id {
    widget::Id::new("search-input")
}

/// Top chrome: menu toggle, product name, global search, theme toggle
/// and a few inert suite icons.
pub fn view<'a>(search_query: &'a str, theme_mode: ThemeMode) -> Element<'a, Message> {
    let search = widget::text_input("Search mail", search_query)
        .on_input(Message::SearchQueryChanged)
        .id(search_input_id());

    let theme_icon = match theme_mode {
        ThemeMode::Light => "weather-clear-night-symbolic",
        ThemeMode::Dark => "weather-clear-symbolic",
    };

    let row = widget::row()
        .spacing(8)
        .padding([4, 8])
        .align_y(Alignment::Center)
        .push(
            widget::button::icon(widget::icon::from_name("open-menu-symbolic"))
                .on_press(Message::ToggleSidebar)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        )
        .push(widget::text::body("Lumamail"))
        .push(widget::container(search).width(Length::Fill).padding([0, 24]))
        .push(
            widget::button::icon(widget::icon::from_name(theme_icon))
                .on_press(Message::ToggleTheme)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        )
        .push(
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::Noop)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        )
        .push(
            widget::button::icon(widget::icon::from_name("emblem-system-symbolic"))
                .on_press(Message::Noop)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        )
        .push(
            widget::button::icon(widget::icon::from_name("view-app-grid-symbolic"))
                .on_press(Message::Noop)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        )
        .push(
            widget::button::icon(widget::icon::from_name("avatar-default-symbolic"))
                .on_press(Message::Noop)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        );

    widget::container(row).width(Length::Fill).into()
}
