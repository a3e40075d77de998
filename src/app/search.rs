use cosmic::app::Task;

use super::{AppModel, Message};

impl AppModel {
    pub(super) fn handle_search(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchQueryChanged(query) => {
                if self.search_query != query {
                    self.search_query = query;
                    // Narrowing or widening the filter changes the
                    // displayed set, which drops any selection.
                    self.recompute_threads();
                }
            }
            _ => {}
        }
        Task::none()
    }
}
