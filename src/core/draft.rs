use std::time::Duration;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::storage::KeyValueStore;

/// Storage key owned by the compose surface for its lifetime.
pub const DRAFT_KEY: &str = "compose-draft";

/// Quiescence period before an edited draft is persisted.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(1500);
/// How long the "Saved" indicator lingers before returning to idle.
pub const SAVED_LINGER: Duration = Duration::from_secs(2);
/// Window after open during which edits do not trigger the save effect,
/// so loading an existing draft does not immediately re-save it.
pub const LOAD_GRACE: Duration = Duration::from_millis(100);

/// Observable auto-save status, shown next to the Send button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved,
}

/// Timers the caller must schedule. Tokens are generation counters: a
/// newer edit bumps the live token, so an earlier timer firing with a
/// stale token is ignored. That is the whole cancellation story — late
/// callbacks become no-ops instead of needing real timer handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    GraceEnd,
    Debounce { token: u64 },
    HideStatus { token: u64 },
}

/// On-disk shape of the draft slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredDraft {
    recipients: Vec<String>,
    subject: String,
    body: String,
}

/// Payload handed to the send sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Compose-draft lifecycle: loaded once at open, mutated on every edit,
/// persisted after debounce quiescence, cleared on send or discard.
/// Owns the `compose-draft` storage key while the dialog is open.
#[derive(Debug)]
pub struct DraftSession {
    pub recipients: IndexSet<String>,
    pub recipient_input: String,
    pub subject: String,
    pub body: String,
    state: SaveState,
    in_grace: bool,
    debounce_token: u64,
    hide_token: u64,
}

impl DraftSession {
    /// Load (or recover) the stored draft. A corrupt entry is logged,
    /// deleted and treated as "no draft". Returns the timers to schedule:
    /// always the grace window, plus the status-hide timer when an
    /// existing draft was restored.
    pub fn open(store: &dyn KeyValueStore) -> (Self, Vec<TimerRequest>) {
        let mut session = Self {
            recipients: IndexSet::new(),
            recipient_input: String::new(),
            subject: String::new(),
            body: String::new(),
            state: SaveState::Idle,
            in_grace: true,
            debounce_token: 0,
            hide_token: 0,
        };
        let mut timers = vec![TimerRequest::GraceEnd];

        if let Some(raw) = store.get(DRAFT_KEY) {
            match serde_json::from_str::<StoredDraft>(&raw) {
                Ok(stored) => {
                    session.recipients = stored.recipients.into_iter().collect();
                    session.subject = stored.subject;
                    session.body = stored.body;
                    session.state = SaveState::Saved;
                    session.hide_token += 1;
                    timers.push(TimerRequest::HideStatus {
                        token: session.hide_token,
                    });
                }
                Err(e) => {
                    log::warn!("discarding corrupt stored draft: {e}");
                    store.delete(DRAFT_KEY);
                }
            }
        }

        (session, timers)
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    pub fn grace_elapsed(&mut self) {
        self.in_grace = false;
    }

    pub fn set_subject(
        &mut self,
        subject: String,
        store: &dyn KeyValueStore,
    ) -> Option<TimerRequest> {
        if subject == self.subject {
            return None;
        }
        self.subject = subject;
        self.after_edit(store)
    }

    pub fn set_body(&mut self, body: String, store: &dyn KeyValueStore) -> Option<TimerRequest> {
        if body == self.body {
            return None;
        }
        self.body = body;
        self.after_edit(store)
    }

    /// Live recipient input. A trailing comma or space acts as an entry
    /// terminator and commits the token; otherwise the text just sits in
    /// the input without touching the draft.
    pub fn recipient_input_changed(
        &mut self,
        value: String,
        store: &dyn KeyValueStore,
    ) -> Option<TimerRequest> {
        let terminated = value.ends_with(',') || value.ends_with(' ');
        self.recipient_input = value;
        if terminated {
            self.commit_recipient(store)
        } else {
            None
        }
    }

    /// Commit the current input as a recipient. Enter and Tab both land
    /// here. Blank tokens and duplicates are silently dropped; the input
    /// is cleared either way.
    pub fn commit_recipient(&mut self, store: &dyn KeyValueStore) -> Option<TimerRequest> {
        let token = self.recipient_input.trim();
        let token = token.strip_suffix(',').unwrap_or(token).trim();
        let token = token.to_string();
        self.recipient_input.clear();
        if token.is_empty() || !self.recipients.insert(token) {
            return None;
        }
        self.after_edit(store)
    }

    /// Backspace on an empty input pops the most-recently-added
    /// recipient. With text in the input, the widget owns the keystroke.
    pub fn backspace_recipient(&mut self, store: &dyn KeyValueStore) -> Option<TimerRequest> {
        if !self.recipient_input.is_empty() {
            return None;
        }
        match self.recipients.pop() {
            Some(_) => self.after_edit(store),
            None => None,
        }
    }

    pub fn remove_recipient(
        &mut self,
        index: usize,
        store: &dyn KeyValueStore,
    ) -> Option<TimerRequest> {
        match self.recipients.shift_remove_index(index) {
            Some(_) => self.after_edit(store),
            None => None,
        }
    }

    /// Debounce timer fired. Persists and reports Saved only when the
    /// token is still current and no newer edit superseded it.
    pub fn debounce_elapsed(
        &mut self,
        token: u64,
        store: &dyn KeyValueStore,
    ) -> Option<TimerRequest> {
        if token != self.debounce_token || self.state != SaveState::Saving {
            return None;
        }
        self.persist(store);
        self.state = SaveState::Saved;
        self.hide_token += 1;
        Some(TimerRequest::HideStatus {
            token: self.hide_token,
        })
    }

    /// Status-hide timer fired: Saved fades back to Idle.
    pub fn hide_elapsed(&mut self, token: u64) {
        if token == self.hide_token && self.state == SaveState::Saved {
            self.state = SaveState::Idle;
        }
    }

    /// Hand the draft off for delivery and release the storage slot.
    pub fn send(&mut self, store: &dyn KeyValueStore) -> Outgoing {
        self.cancel_timers();
        store.delete(DRAFT_KEY);
        Outgoing {
            recipients: self.recipients.iter().cloned().collect(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }

    /// Drop the draft entirely, storage entry included.
    pub fn discard(&mut self, store: &dyn KeyValueStore) {
        self.cancel_timers();
        store.delete(DRAFT_KEY);
    }

    /// Close without discarding: the last persisted snapshot stays in
    /// storage, pending timers are cancelled.
    pub fn close(&mut self) {
        self.cancel_timers();
    }

    pub fn is_blank(&self) -> bool {
        self.recipients.is_empty()
            && self.subject.trim().is_empty()
            && self.body.trim().is_empty()
    }

    /// Shared post-edit step: cancel the pending status-hide, then either
    /// drop the stored entry (draft emptied out) or restart the debounce.
    fn after_edit(&mut self, store: &dyn KeyValueStore) -> Option<TimerRequest> {
        if self.in_grace {
            return None;
        }
        self.hide_token += 1;
        if self.is_blank() {
            self.debounce_token += 1;
            store.delete(DRAFT_KEY);
            self.state = SaveState::Idle;
            None
        } else {
            self.state = SaveState::Saving;
            self.debounce_token += 1;
            Some(TimerRequest::Debounce {
                token: self.debounce_token,
            })
        }
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        let stored = StoredDraft {
            recipients: self.recipients.iter().cloned().collect(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        };
        match serde_json::to_string(&stored) {
            Ok(json) => store.set(DRAFT_KEY, &json),
            Err(e) => log::error!("failed to serialize draft: {e}"),
        }
    }

    fn cancel_timers(&mut self) {
        self.debounce_token += 1;
        self.hide_token += 1;
        self.state = SaveState::Idle;
    }
}
