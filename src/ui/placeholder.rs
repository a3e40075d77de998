use cosmic::iced::{Alignment, Length};
use cosmic::widget;
use cosmic::Element;

use crate::app::Message;

/// Centered stand-in for views that are out of scope for the mail mock.
pub fn view<'a>(title: &'a str, caption: &'a str, icon: &'static str) -> Element<'a, Message> {
    let col = widget::column()
        .spacing(8)
        .align_x(Alignment::Center)
        .push(widget::vertical_space().height(Length::Fill))
        .push(
            widget::button::icon(widget::icon::from_name(icon))
                .padding(8)
                .class(cosmic::theme::Button::Text),
        )
        .push(widget::text::body(title))
        .push(widget::text::caption(caption))
        .push(widget::vertical_space().height(Length::Fill));

    widget::container(col)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
