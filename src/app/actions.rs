use cosmic::app::Task;

use crate::core::selection::CheckState;

use super::{AppModel, Message};

impl AppModel {
    pub(super) fn handle_actions(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleStar(id) => {
                self.store.toggle_star(&id);
                self.recompute_threads();
            }

            Message::RowAction(action, id) => {
                // Delegated to the mail backend in a full client.
                log::info!("{} requested for message {id}", action.as_str());
                self.status_message = format!("{}: not available in this preview", action.as_str());
            }

            Message::BulkAction(action) => {
                log::info!(
                    "{} requested for {} selected messages",
                    action.as_str(),
                    self.selection.len()
                );
                self.status_message = format!("{}: not available in this preview", action.as_str());
            }

            Message::Refresh => {
                log::info!("refresh requested");
                self.status_message = "Mailbox is up to date".into();
            }

            Message::SelectAllToggled => {
                // A fully-checked box clears; indeterminate or empty selects
                // every displayed message.
                match self.selection.check_state(self.displayed_ids.len()) {
                    CheckState::Checked => self.selection.reset(),
                    _ => self.selection.select_all(self.displayed_ids.iter().cloned()),
                }
            }
            Message::ToggleSelect(id) => {
                self.selection.toggle_one(&id);
            }
            Message::ToggleThreadSelect(thread_id) => {
                if let Some(thread) = self.threads.iter().find(|t| t.id == thread_id) {
                    self.selection.toggle_thread(&thread.message_ids());
                }
            }

            _ => {}
        }
        Task::none()
    }
}
