use serde::{Deserialize, Serialize};

/// A single message record as shown in the list view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    pub id: String,
    pub thread_id: String,
    pub sender: String,
    pub sender_photo: String,
    pub subject: String,
    pub snippet: String,
    pub timestamp: String,
    pub is_read: bool,
    pub is_starred: bool,
}

/// In-memory collection of messages. Seeded once at startup; messages are
/// never removed, and the only mutation is the star toggle.
#[derive(Debug, Clone)]
pub struct MessageStore {
    emails: Vec<Email>,
}

impl MessageStore {
    pub fn new(emails: Vec<Email>) -> Self {
        Self { emails }
    }

    /// The mock seed data the client starts with.
    pub fn seeded() -> Self {
        Self::new(mock_emails())
    }

    pub fn all(&self) -> &[Email] {
        &self.emails
    }

    /// Flip the starred flag on one message. Returns false if the id is
    /// unknown.
    pub fn toggle_star(&mut self, id: &str) -> bool {
        match self.emails.iter_mut().find(|e| e.id == id) {
            Some(email) => {
                email.is_starred = !email.is_starred;
                true
            }
            None => {
                log::warn!("toggle_star: unknown message id {id}");
                false
            }
        }
    }

    /// Case-insensitive substring filter over sender, subject and snippet.
    /// An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<Email> {
        let needle = query.to_lowercase();
        self.emails
            .iter()
            .filter(|e| {
                e.sender.to_lowercase().contains(&needle)
                    || e.subject.to_lowercase().contains(&needle)
                    || e.snippet.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.emails.iter().filter(|e| !e.is_read).count()
    }
}

#[allow(clippy::too_many_arguments)]
fn email(
    id: &str,
    thread_id: &str,
    sender: &str,
    photo_seed: &str,
    subject: &str,
    snippet: &str,
    timestamp: &str,
    is_read: bool,
    is_starred: bool,
) -> Email {
    Email {
        id: id.into(),
        thread_id: thread_id.into(),
        sender: sender.into(),
        sender_photo: format!("https://picsum.photos/seed/{photo_seed}/40/40"),
        subject: subject.into(),
        snippet: snippet.into(),
        timestamp: timestamp.into(),
        is_read,
        is_starred,
    }
}

/// Seed inbox. `thread-5` is a four-message conversation; everything else
/// is a singleton thread.
pub fn mock_emails() -> Vec<Email> {
    vec![
        email(
            "1",
            "thread-1",
            "Google",
            "google",
            "Security alert",
            "A new sign-in to your account was detected.",
            "11:42 AM",
            false,
            true,
        ),
        email(
            "2",
            "thread-2",
            "Figma",
            "figma",
            "Your weekly updates",
            "Here are the latest updates from your teams on Figma...",
            "9:30 AM",
            false,
            false,
        ),
        email(
            "5",
            "thread-5",
            "Jane Doe",
            "jane",
            "Project Proposal",
            "Hi team, please find attached the proposal for Q3...",
            "Yesterday",
            true,
            false,
        ),
        email(
            "8",
            "thread-5",
            "John Appleseed",
            "john",
            "Re: Project Proposal",
            "This looks great, Jane! One question about the timeline...",
            "10:15 AM",
            true,
            true,
        ),
        email(
            "9",
            "thread-5",
            "You",
            "user",
            "Re: Project Proposal",
            "Thanks John! Good question, let me clarify...",
            "10:50 AM",
            true,
            false,
        ),
        email(
            "10",
            "thread-5",
            "Jane Doe",
            "jane",
            "Re: Project Proposal",
            "Perfect, that makes sense. Let's proceed.",
            "11:20 AM",
            false,
            false,
        ),
        email(
            "3",
            "thread-3",
            "GitHub",
            "github",
            "[github/react] A new issue was created",
            "Issue #28405: Bug in new component...",
            "8:15 AM",
            true,
            false,
        ),
        email(
            "4",
            "thread-4",
            "Vercel",
            "vercel",
            "Deployment Successful",
            "Your project `my-app` has been deployed successfully.",
            "Yesterday",
            true,
            true,
        ),
        email(
            "6",
            "thread-6",
            "Linear",
            "linear",
            "New comment on PRJ-123",
            "John Smith mentioned you in a comment.",
            "2 days ago",
            true,
            false,
        ),
        email(
            "7",
            "thread-7",
            "Stripe",
            "stripe",
            "Your monthly invoice",
            "Your invoice for May 2024 is now available.",
            "3 days ago",
            true,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let store = MessageStore::seeded();
        let mut ids: Vec<&str> = store.all().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.all().len());
    }

    #[test]
    fn toggle_star_flips_only_the_target() {
        let mut store = MessageStore::seeded();
        assert!(!store.all()[1].is_starred);
        assert!(store.toggle_star("2"));
        assert!(store.all()[1].is_starred);
        assert!(store.toggle_star("2"));
        assert!(!store.all()[1].is_starred);
        // Untouched neighbor keeps its flag
        assert!(store.all()[0].is_starred);
    }

    #[test]
    fn toggle_star_unknown_id_is_a_noop() {
        let mut store = MessageStore::seeded();
        let before = store.all().to_vec();
        assert!(!store.toggle_star("no-such-id"));
        assert_eq!(store.all(), &before[..]);
    }

    #[test]
    fn filter_matches_sender_subject_and_snippet() {
        let store = MessageStore::seeded();
        assert_eq!(store.filter("figma").len(), 1);
        assert_eq!(store.filter("Security alert").len(), 1);
        assert_eq!(store.filter("timeline").len(), 1);
        // Case-insensitive
        assert_eq!(store.filter("FIGMA").len(), 1);
    }

    #[test]
    fn empty_query_matches_everything() {
        let store = MessageStore::seeded();
        assert_eq!(store.filter("").len(), store.all().len());
    }

    #[test]
    fn filter_preserves_source_order() {
        let store = MessageStore::seeded();
        let hits = store.filter("proposal");
        let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "8", "9", "10"]);
    }

    #[test]
    fn unread_count_matches_seed() {
        let store = MessageStore::seeded();
        assert_eq!(store.unread_count(), 3);
    }
}
