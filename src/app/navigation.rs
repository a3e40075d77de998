use cosmic::app::Task;

use crate::core::models::Email;
use crate::core::threads;

use super::{AppModel, Message, View};

impl AppModel {
    pub(super) fn handle_navigation(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(view) => {
                if self.active_view != view {
                    self.active_view = view;
                    self.recompute_threads();
                }
            }

            Message::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
            }
            Message::ToggleFavorites => {
                self.favorites_open = !self.favorites_open;
            }
            Message::ToggleRecents => {
                self.recents_open = !self.recents_open;
            }

            Message::TogglePanel(panel) => {
                // Re-activating the open panel closes it.
                self.active_panel = if self.active_panel == Some(panel) {
                    None
                } else {
                    Some(panel)
                };
            }
            Message::ClosePanel => {
                self.active_panel = None;
            }

            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.theme_mode.save(&self.storage);
                self.status_message = format!(
                    "Theme preference saved: {} (applies at next launch)",
                    self.theme_mode.as_str()
                );
            }

            Message::ToggleThreadExpand(thread_id) => {
                if !self.expanded_threads.remove(&thread_id) {
                    self.expanded_threads.insert(thread_id);
                }
            }

            _ => {}
        }
        Task::none()
    }

    /// Rebuild the derived thread list from the store, the search query
    /// and the active view, then carry the pass into selection and
    /// expansion state via [`threads::apply_regroup`].
    pub(super) fn recompute_threads(&mut self) {
        let filtered = self.store.filter(&self.search_query);
        let displayed: Vec<Email> = match self.active_view {
            View::Starred => filtered.into_iter().filter(|e| e.is_starred).collect(),
            _ => filtered,
        };

        let ids: Vec<String> = displayed.iter().map(|e| e.id.clone()).collect();
        let threads = threads::group(&displayed);

        threads::apply_regroup(
            &threads,
            ids,
            &mut self.displayed_ids,
            &mut self.selection,
            &mut self.expanded_threads,
        );
        self.threads = threads;
    }
}
