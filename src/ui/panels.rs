use cosmic::iced::{Alignment, Length};
use cosmic::widget;
use cosmic::Element;

use crate::app::{Message, ToolPanel};

const PANELS: &[(ToolPanel, &str)] = &[
    (ToolPanel::Calendar, "x-office-calendar-symbolic"),
    (ToolPanel::Keep, "emblem-documents-symbolic"),
    (ToolPanel::Tasks, "checkbox-checked-symbolic"),
    (ToolPanel::Contacts, "x-office-address-book-symbolic"),
];

/// Right-hand icon rail. The active panel's icon is highlighted;
/// re-pressing it closes the panel.
pub fn rail<'a>(active: Option<ToolPanel>) -> Element<'a, Message> {
    let mut col = widget::column().spacing(4).padding(8);

    for (panel, icon) in PANELS {
        let mut btn = widget::button::icon(widget::icon::from_name(*icon))
            .on_press(Message::TogglePanel(*panel))
            .padding(8);
        if active == Some(*panel) {
            btn = btn.class(cosmic::theme::Button::Suggested);
        }
        col = col.push(btn);
    }

    col = col.push(widget::vertical_space().height(8));
    col = col.push(
        widget::button::text("+")
            .on_press(Message::Noop)
            .padding(8),
    );

    widget::container(col).height(Length::Fill).into()
}

/// Static placeholder content for the opened tool panel.
pub fn view<'a>(panel: ToolPanel) -> Element<'a, Message> {
    let header = widget::row()
        .align_y(Alignment::Center)
        .push(widget::container(widget::text::body(panel.title())).width(Length::Fill))
        .push(
            widget::button::icon(widget::icon::from_name("window-close-symbolic"))
                .on_press(Message::ClosePanel)
                .padding(4)
                .class(cosmic::theme::Button::Text),
        );

    let mut col = widget::column().spacing(8).padding(8).push(header);

    match panel {
        ToolPanel::Calendar => {
            col = col
                .push(widget::text::caption("Today"))
                .push(widget::text::body("No events scheduled"));
        }
        ToolPanel::Keep => {
            col = col
                .push(widget::text::caption("Notes"))
                .push(widget::text::body("Grocery list"))
                .push(widget::text::body("Ideas for Q3"));
        }
        ToolPanel::Tasks => {
            col = col
                .push(widget::text::caption("My Tasks"))
                .push(widget::text::body("☐ Reply to Jane"))
                .push(widget::text::body("☐ Book flights"));
        }
        ToolPanel::Contacts => {
            col = col
                .push(widget::text::caption("Frequently contacted"))
                .push(widget::text::body("Jane Doe"))
                .push(widget::text::caption("jane.doe@example.com"))
                .push(widget::text::body("John Appleseed"))
                .push(widget::text::caption("john.appleseed@example.com"))
                .push(widget::text::body("Figma"))
                .push(widget::text::caption("team@figma.com"));
        }
    }

    widget::container(widget::scrollable(col).height(Length::Fill))
        .width(Length::Fixed(280.0))
        .into()
}
