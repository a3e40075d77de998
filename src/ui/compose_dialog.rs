use cosmic::iced::{Alignment, Length};
use cosmic::widget;
use cosmic::widget::text_editor;
use cosmic::Element;

use crate::app::Message;
use crate::core::draft::{DraftSession, SaveState};
use crate::core::format::{FormatCommand, FONT_CHOICES, FONT_SIZE_LABELS};

pub fn view<'a>(
    draft: &'a DraftSession,
    body: &'a text_editor::Content,
    font_selected: usize,
    size_selected: usize,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut controls = widget::column().spacing(12);

    // Committed recipients render as removable pills above the input.
    if !draft.recipients.is_empty() {
        let mut pills = widget::row().spacing(4).align_y(Alignment::Center);
        for (index, recipient) in draft.recipients.iter().enumerate() {
            pills = pills.push(
                widget::button::text(format!("{recipient} ✕"))
                    .on_press(Message::ComposeRecipientRemove(index))
                    .padding(4),
            );
        }
        controls = controls.push(pills);
    }

    controls = controls
        .push(
            widget::text_input("Add recipients", &draft.recipient_input)
                .label("To")
                .on_input(Message::ComposeRecipientInput)
                .on_submit(|_| Message::ComposeRecipientSubmit),
        )
        .push(
            widget::text_input("Subject", &draft.subject)
                .label("Subject")
                .on_input(Message::ComposeSubjectChanged),
        )
        .push(
            widget::text_editor(body)
                .placeholder("Write your message...")
                .on_action(Message::ComposeBodyAction)
                .height(Length::Fixed(260.0)),
        )
        .push(format_toolbar(font_selected, size_selected));

    if let Some(status) = save_status(draft.state()) {
        controls = controls.push(widget::text::caption(status));
    }

    let mut dialog = widget::dialog()
        .title("New Message")
        .control(controls)
        .primary_action(widget::button::suggested("Send").on_press(Message::ComposeSend))
        .secondary_action(widget::button::standard("Close").on_press(Message::ComposeClose))
        .tertiary_action(
            widget::button::destructive("Discard draft").on_press(Message::ComposeDiscard),
        );

    if let Some(err) = error {
        dialog = dialog.body(err);
    }

    dialog.into()
}

fn save_status(state: SaveState) -> Option<&'static str> {
    match state {
        SaveState::Idle => None,
        SaveState::Saving => Some("Saving..."),
        SaveState::Saved => Some("Saved"),
    }
}

fn format_toolbar<'a>(font_selected: usize, size_selected: usize) -> Element<'a, Message> {
    widget::row()
        .spacing(4)
        .align_y(Alignment::Center)
        .push(
            widget::button::text("B")
                .on_press(Message::ComposeFormat(FormatCommand::Bold))
                .padding(4),
        )
        .push(
            widget::button::text("I")
                .on_press(Message::ComposeFormat(FormatCommand::Italic))
                .padding(4),
        )
        .push(
            widget::button::text("U")
                .on_press(Message::ComposeFormat(FormatCommand::Underline))
                .padding(4),
        )
        .push(
            widget::button::text("• List")
                .on_press(Message::ComposeFormat(FormatCommand::UnorderedList))
                .padding(4),
        )
        .push(
            widget::button::text("1. List")
                .on_press(Message::ComposeFormat(FormatCommand::OrderedList))
                .padding(4),
        )
        .push(widget::dropdown(
            FONT_CHOICES,
            Some(font_selected),
            Message::ComposeFontSelected,
        ))
        .push(widget::dropdown(
            FONT_SIZE_LABELS,
            Some(size_selected),
            Message::ComposeFontSizeSelected,
        ))
        .into()
}
