mod actions;
mod compose;
mod navigation;
mod search;

use std::collections::HashSet;

use cosmic::app::{Core, Task};
use cosmic::iced::keyboard;
use cosmic::iced::{Event, Length, Subscription};
use cosmic::widget;
use cosmic::widget::text_editor;
use cosmic::Element;

use crate::config::ThemeMode;
use crate::core::draft::DraftSession;
use crate::core::format::FormatCommand;
use crate::core::models::MessageStore;
use crate::core::selection::Selection;
use crate::core::storage::FileStore;
use crate::core::threads::Thread;

const APP_ID: &str = "com.lumamail.suite";

/// Main content views reachable from the left sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Inbox,
    Starred,
    Chat,
    Spaces,
    Meet,
    Recents,
}

/// Tool panels behind the right-hand rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPanel {
    Calendar,
    Keep,
    Tasks,
    Contacts,
}

impl ToolPanel {
    pub fn title(self) -> &'static str {
        match self {
            ToolPanel::Calendar => "Calendar",
            ToolPanel::Keep => "Keep",
            ToolPanel::Tasks => "Tasks",
            ToolPanel::Contacts => "Contacts",
        }
    }
}

/// Per-row actions that only call out to an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Archive,
    Delete,
    MarkUnread,
    Snooze,
}

impl RowAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RowAction::Archive => "archive",
            RowAction::Delete => "delete",
            RowAction::MarkUnread => "mark-unread",
            RowAction::Snooze => "snooze",
        }
    }
}

pub struct AppModel {
    core: Core,
    pub(super) storage: FileStore,

    pub(super) store: MessageStore,
    pub(super) active_view: View,
    pub(super) search_query: String,

    /// Threads derived from the current filter; rebuilt by
    /// `recompute_threads` after every change to messages, query or view.
    pub(super) threads: Vec<Thread>,
    /// Ids of the displayed messages, in display order. Compared against
    /// the previous pass to detect structural changes.
    pub(super) displayed_ids: Vec<String>,
    /// Thread ids currently expanded. Re-initialized from unread state
    /// whenever the displayed set changes.
    pub(super) expanded_threads: HashSet<String>,
    pub(super) selection: Selection,

    // Chrome state
    pub(super) sidebar_open: bool,
    pub(super) favorites_open: bool,
    pub(super) recents_open: bool,
    pub(super) active_panel: Option<ToolPanel>,
    pub(super) theme_mode: ThemeMode,
    pub(super) status_message: String,

    // Compose dialog state
    pub(super) show_compose_dialog: bool,
    pub(super) draft: Option<DraftSession>,
    pub(super) compose_body: text_editor::Content,
    pub(super) compose_font: usize,
    pub(super) compose_font_size: usize,
    pub(super) compose_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation / chrome
    Navigate(View),
    ToggleSidebar,
    ToggleFavorites,
    ToggleRecents,
    TogglePanel(ToolPanel),
    ClosePanel,
    ToggleTheme,
    ToggleThreadExpand(String),

    // Search
    SearchQueryChanged(String),

    // Message actions
    ToggleStar(String),
    RowAction(RowAction, String),
    BulkAction(RowAction),
    Refresh,

    // Selection
    SelectAllToggled,
    ToggleSelect(String),
    ToggleThreadSelect(String),

    // Compose dialog
    ComposeOpen,
    ComposeClose,
    ComposeDiscard,
    ComposeSend,
    ComposeRecipientInput(String),
    ComposeRecipientSubmit,
    ComposeRecipientBackspace,
    ComposeRecipientRemove(usize),
    ComposeSubjectChanged(String),
    ComposeBodyAction(text_editor::Action),
    ComposeFontSelected(usize),
    ComposeFontSizeSelected(usize),
    ComposeFormat(FormatCommand),

    // Draft timers
    DraftGraceElapsed,
    DraftDebounceElapsed(u64),
    DraftStatusExpired(u64),

    Noop,
}

impl cosmic::Application for AppModel {
    type Executor = cosmic::executor::Default;
    type Flags = ();
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, _flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let storage = FileStore::open();
        let theme_mode = ThemeMode::load(&storage).unwrap_or_default();

        let mut app = AppModel {
            core,
            storage,
            store: MessageStore::seeded(),
            active_view: View::Inbox,
            search_query: String::new(),
            threads: Vec::new(),
            displayed_ids: Vec::new(),
            expanded_threads: HashSet::new(),
            selection: Selection::default(),
            sidebar_open: true,
            favorites_open: true,
            recents_open: true,
            active_panel: None,
            theme_mode,
            status_message: "Welcome back".into(),
            show_compose_dialog: false,
            draft: None,
            compose_body: text_editor::Content::new(),
            compose_font: 0,
            compose_font_size: 1,
            compose_error: None,
        };
        app.recompute_threads();

        let title_task = app.set_window_title("Lumamail".into());
        (app, title_task)
    }

    fn dialog(&self) -> Option<Element<'_, Self::Message>> {
        if !self.show_compose_dialog {
            return None;
        }
        let draft = self.draft.as_ref()?;
        Some(crate::ui::compose_dialog::view(
            draft,
            &self.compose_body,
            self.compose_font,
            self.compose_font_size,
            self.compose_error.as_deref(),
        ))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        if !self.show_compose_dialog {
            return Subscription::none();
        }
        // While composing: Escape closes (keeping the stored draft), Tab
        // commits the pending recipient token, and a Backspace that no
        // widget consumed pops the last recipient pill.
        cosmic::iced_futures::event::listen_raw(|event, status, _| {
            if cosmic::iced_core::event::Status::Ignored != status {
                return None;
            }
            match event {
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::ComposeClose),
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Tab),
                    ..
                }) => Some(Message::ComposeRecipientSubmit),
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Backspace),
                    ..
                }) => Some(Message::ComposeRecipientBackspace),
                _ => None,
            }
        })
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let header = crate::ui::header::view(&self.search_query, self.theme_mode);

        let content: Element<'_, Self::Message> = match self.active_view {
            View::Inbox | View::Starred => crate::ui::message_list::view(
                &self.threads,
                &self.selection,
                &self.expanded_threads,
                self.displayed_ids.len(),
                self.store.unread_count(),
            ),
            View::Chat => crate::ui::placeholder::view(
                "Chat",
                "Chat functionality will be implemented here.",
                "user-available-symbolic",
            ),
            View::Spaces => crate::ui::placeholder::view(
                "Spaces",
                "Spaces functionality will be implemented here.",
                "system-users-symbolic",
            ),
            View::Meet => crate::ui::placeholder::view(
                "Meet",
                "Meet functionality will be implemented here.",
                "camera-web-symbolic",
            ),
            View::Recents => crate::ui::placeholder::view(
                "Recent Chats",
                "A list of recent chats will be displayed here.",
                "document-open-recent-symbolic",
            ),
        };

        let mut body = widget::row()
            .push(crate::ui::sidebar::view(
                self.active_view,
                !self.sidebar_open,
                self.favorites_open,
                self.recents_open,
            ))
            .push(content);

        if let Some(panel) = self.active_panel {
            body = body.push(crate::ui::panels::view(panel));
        }
        body = body.push(crate::ui::panels::rail(self.active_panel));

        let status_bar = widget::container(widget::text::caption(&self.status_message))
            .padding([4, 8])
            .width(Length::Fill);

        widget::column()
            .push(header)
            .push(body.height(Length::Fill))
            .push(status_bar)
            .height(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            // Navigation / chrome
            Message::Navigate(_)
            | Message::ToggleSidebar
            | Message::ToggleFavorites
            | Message::ToggleRecents
            | Message::TogglePanel(_)
            | Message::ClosePanel
            | Message::ToggleTheme
            | Message::ToggleThreadExpand(_) => self.handle_navigation(message),

            // Search
            Message::SearchQueryChanged(_) => self.handle_search(message),

            // Star / stubs / selection
            Message::ToggleStar(_)
            | Message::RowAction(..)
            | Message::BulkAction(_)
            | Message::Refresh
            | Message::SelectAllToggled
            | Message::ToggleSelect(_)
            | Message::ToggleThreadSelect(_) => self.handle_actions(message),

            // Compose + draft timers
            Message::ComposeOpen
            | Message::ComposeClose
            | Message::ComposeDiscard
            | Message::ComposeSend
            | Message::ComposeRecipientInput(_)
            | Message::ComposeRecipientSubmit
            | Message::ComposeRecipientBackspace
            | Message::ComposeRecipientRemove(_)
            | Message::ComposeSubjectChanged(_)
            | Message::ComposeBodyAction(_)
            | Message::ComposeFontSelected(_)
            | Message::ComposeFontSizeSelected(_)
            | Message::ComposeFormat(_)
            | Message::DraftGraceElapsed
            | Message::DraftDebounceElapsed(_)
            | Message::DraftStatusExpired(_) => self.handle_compose(message),

            Message::Noop => Task::none(),
        }
    }
}

impl AppModel {
    fn set_window_title(&self, title: String) -> Task<Message> {
        self.core.set_title(self.core.main_window_id(), title)
    }
}
