use cosmic::app::Task;
use cosmic::widget::text_editor;

use crate::core::draft::{
    DraftSession, TimerRequest, LOAD_GRACE, SAVED_LINGER, SAVE_DEBOUNCE,
};
use crate::core::format::{self, FormatCommand, FONT_CHOICES, FONT_SIZE_VALUES};
use crate::core::outbox;

use super::{AppModel, Message};

impl AppModel {
    pub(super) fn handle_compose(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ComposeOpen => {
                if self.show_compose_dialog {
                    return Task::none();
                }
                let (draft, timers) = DraftSession::open(&self.storage);
                self.compose_body = text_editor::Content::with_text(&draft.body);
                self.draft = Some(draft);
                self.show_compose_dialog = true;
                self.compose_error = None;
                return schedule_all(timers);
            }

            Message::ComposeClose => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.close();
                }
                self.reset_compose();
            }

            Message::ComposeDiscard => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.discard(&self.storage);
                }
                self.reset_compose();
                self.status_message = "Draft discarded".into();
            }

            Message::ComposeSend => {
                let Some(draft) = self.draft.as_mut() else {
                    return Task::none();
                };
                if draft.recipients.is_empty() {
                    self.compose_error = Some("Add at least one recipient".into());
                    return Task::none();
                }
                let outgoing = draft.send(&self.storage);
                self.reset_compose();
                self.status_message = "Message sent".into();
                return cosmic::task::future(async move {
                    outbox::deliver(&outgoing);
                    Message::Noop
                });
            }

            Message::ComposeRecipientInput(value) => {
                if let Some(draft) = self.draft.as_mut() {
                    return schedule_opt(draft.recipient_input_changed(value, &self.storage));
                }
            }
            Message::ComposeRecipientSubmit => {
                if let Some(draft) = self.draft.as_mut() {
                    self.compose_error = None;
                    return schedule_opt(draft.commit_recipient(&self.storage));
                }
            }
            Message::ComposeRecipientBackspace => {
                if let Some(draft) = self.draft.as_mut() {
                    return schedule_opt(draft.backspace_recipient(&self.storage));
                }
            }
            Message::ComposeRecipientRemove(index) => {
                if let Some(draft) = self.draft.as_mut() {
                    return schedule_opt(draft.remove_recipient(index, &self.storage));
                }
            }

            Message::ComposeSubjectChanged(subject) => {
                if let Some(draft) = self.draft.as_mut() {
                    return schedule_opt(draft.set_subject(subject, &self.storage));
                }
            }
            Message::ComposeBodyAction(action) => {
                self.compose_body.perform(action);
                if let Some(draft) = self.draft.as_mut() {
                    // Content::text() appends a final newline the draft
                    // never contained; strip it so an untouched body does
                    // not register as an edit.
                    let text = self.compose_body.text();
                    let text = text.strip_suffix('\n').unwrap_or(&text).to_string();
                    return schedule_opt(draft.set_body(text, &self.storage));
                }
            }

            Message::ComposeFontSelected(index) => {
                self.compose_font = index;
                if let Some(font) = FONT_CHOICES.get(index) {
                    format::apply(&FormatCommand::FontName((*font).into()));
                }
            }
            Message::ComposeFontSizeSelected(index) => {
                self.compose_font_size = index;
                if let Some(size) = FONT_SIZE_VALUES.get(index) {
                    format::apply(&FormatCommand::FontSize((*size).into()));
                }
            }
            Message::ComposeFormat(command) => {
                format::apply(&command);
            }

            Message::DraftGraceElapsed => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.grace_elapsed();
                }
            }
            Message::DraftDebounceElapsed(token) => {
                if let Some(draft) = self.draft.as_mut() {
                    return schedule_opt(draft.debounce_elapsed(token, &self.storage));
                }
            }
            Message::DraftStatusExpired(token) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.hide_elapsed(token);
                }
            }

            _ => {}
        }
        Task::none()
    }

    fn reset_compose(&mut self) {
        self.show_compose_dialog = false;
        self.draft = None;
        self.compose_body = text_editor::Content::new();
        self.compose_font = 0;
        self.compose_font_size = 1;
        self.compose_error = None;
    }
}

/// Turn a timer request from the draft session into a delayed message.
fn schedule(request: TimerRequest) -> Task<Message> {
    cosmic::task::future(async move {
        match request {
            TimerRequest::GraceEnd => {
                tokio::time::sleep(LOAD_GRACE).await;
                Message::DraftGraceElapsed
            }
            TimerRequest::Debounce { token } => {
                tokio::time::sleep(SAVE_DEBOUNCE).await;
                Message::DraftDebounceElapsed(token)
            }
            TimerRequest::HideStatus { token } => {
                tokio::time::sleep(SAVED_LINGER).await;
                Message::DraftStatusExpired(token)
            }
        }
    })
}

fn schedule_opt(request: Option<TimerRequest>) -> Task<Message> {
    match request {
        Some(request) => schedule(request),
        None => Task::none(),
    }
}

fn schedule_all(requests: Vec<TimerRequest>) -> Task<Message> {
    cosmic::task::batch(requests.into_iter().map(schedule).collect::<Vec<_>>())
}
