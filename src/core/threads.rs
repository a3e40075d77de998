use std::collections::HashSet;

use indexmap::IndexMap;

use crate::core::models::Email;
use crate::core::selection::Selection;

/// An ordered group of messages sharing a conversation id. Derived on each
/// pass over the displayed messages, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: String,
    pub messages: Vec<Email>,
}

impl Thread {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Single-message threads render as a flat row instead of a
    /// collapsible conversation.
    pub fn is_conversation(&self) -> bool {
        self.messages.len() > 1
    }

    pub fn is_unread(&self) -> bool {
        self.messages.iter().any(|m| !m.is_read)
    }

    pub fn any_starred(&self) -> bool {
        self.messages.iter().any(|m| m.is_starred)
    }

    /// The newest message; source of the collapsed header's subject,
    /// snippet and timestamp, and the target of its star toggle. Threads
    /// always hold at least one message, so this is None only for a
    /// hand-built empty thread.
    pub fn latest(&self) -> Option<&Email> {
        self.messages.last()
    }

    /// Distinct first-name tokens of the senders, in first-appearance
    /// order, joined with ", ".
    pub fn unique_senders(&self) -> String {
        let mut seen: Vec<&str> = Vec::new();
        for msg in &self.messages {
            let first = msg.sender.split_whitespace().next().unwrap_or("");
            if !first.is_empty() && !seen.contains(&first) {
                seen.push(first);
            }
        }
        seen.join(", ")
    }

    /// Threads open expanded when they still hold unread mail.
    pub fn default_expanded(&self) -> bool {
        self.is_unread()
    }

    pub fn message_ids(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.id.clone()).collect()
    }
}

/// Partition a flat message sequence into threads. Single pass; thread
/// order is the first-occurrence order of each `thread_id`, and messages
/// keep their relative order inside a thread. Flattening the output
/// yields exactly the input.
pub fn group(messages: &[Email]) -> Vec<Thread> {
    let mut buckets: IndexMap<String, Vec<Email>> = IndexMap::new();
    for msg in messages {
        buckets
            .entry(msg.thread_id.clone())
            .or_default()
            .push(msg.clone());
    }
    buckets
        .into_iter()
        .map(|(id, messages)| Thread { id, messages })
        .collect()
}

/// Carry a regrouping pass over into the list-view state. A changed
/// displayed id sequence means the list was structurally rebuilt:
/// selection resets and expansion re-seeds from unread state. An
/// unchanged sequence (a star toggle, say) leaves both alone.
pub fn apply_regroup(
    threads: &[Thread],
    new_ids: Vec<String>,
    displayed_ids: &mut Vec<String>,
    selection: &mut Selection,
    expanded: &mut HashSet<String>,
) {
    if new_ids != *displayed_ids {
        selection.reset();
        *expanded = threads
            .iter()
            .filter(|t| t.is_conversation() && t.default_expanded())
            .map(|t| t.id.clone())
            .collect();
        *displayed_ids = new_ids;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::mock_emails;

    fn msg(id: &str, thread_id: &str, sender: &str, is_read: bool) -> Email {
        Email {
            id: id.into(),
            thread_id: thread_id.into(),
            sender: sender.into(),
            sender_photo: String::new(),
            subject: format!("subject {id}"),
            snippet: format!("snippet {id}"),
            timestamp: "now".into(),
            is_read,
            is_starred: false,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(group(&[]).is_empty());
    }

    #[test]
    fn grouping_is_an_exact_cover_of_the_input() {
        let emails = mock_emails();
        let threads = group(&emails);

        let flattened: Vec<Email> = threads
            .iter()
            .flat_map(|t| t.messages.iter().cloned())
            .collect();
        assert_eq!(flattened.len(), emails.len());
        for email in &emails {
            assert_eq!(
                flattened.iter().filter(|e| e.id == email.id).count(),
                1,
                "message {} must appear exactly once",
                email.id
            );
        }
    }

    #[test]
    fn threads_are_ordered_by_first_occurrence() {
        let input = vec![
            msg("a", "t1", "Ann", true),
            msg("b", "t2", "Bob", true),
            msg("c", "t1", "Cal", true),
            msg("d", "t3", "Dee", true),
        ];
        let threads = group(&input);
        let order: Vec<&str> = threads.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["t1", "t2", "t3"]);
        // Interleaved messages stay in relative order within their thread
        let t1: Vec<&str> = threads[0].messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(t1, vec!["a", "c"]);
    }

    #[test]
    fn grouping_is_idempotent() {
        let emails = mock_emails();
        let first = group(&emails);
        let second = group(&emails);
        assert_eq!(first, second);
    }

    #[test]
    fn singleton_threads_are_not_conversations() {
        let threads = group(&mock_emails());
        let t1 = threads.iter().find(|t| t.id == "thread-1").unwrap();
        let t5 = threads.iter().find(|t| t.id == "thread-5").unwrap();
        assert!(!t1.is_conversation());
        assert!(!t1.is_empty());
        assert!(t5.is_conversation());
        assert_eq!(t5.len(), 4);
    }

    #[test]
    fn unique_senders_dedups_first_name_tokens() {
        let threads = group(&mock_emails());
        let t5 = threads.iter().find(|t| t.id == "thread-5").unwrap();
        // Jane Doe, John Appleseed, You, Jane Doe → Jane listed once
        assert_eq!(t5.unique_senders(), "Jane, John, You");
    }

    #[test]
    fn latest_is_the_last_message() {
        let threads = group(&mock_emails());
        let t5 = threads.iter().find(|t| t.id == "thread-5").unwrap();
        assert_eq!(t5.latest().map(|m| m.id.as_str()), Some("10"));
    }

    #[test]
    fn default_expansion_follows_unread_state() {
        let read = group(&[msg("a", "t1", "Ann", true), msg("b", "t1", "Bob", true)]);
        let unread = group(&[msg("c", "t2", "Cal", true), msg("d", "t2", "Dee", false)]);
        assert!(!read[0].default_expanded());
        assert!(unread[0].default_expanded());
    }

    #[test]
    fn filter_change_resets_selection_and_reseeds_expansion() {
        let mut displayed_ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut selection = Selection::default();
        selection.toggle_one("a");
        selection.toggle_one("b");
        let mut expanded = HashSet::new();
        expanded.insert("t2".to_string());

        // Narrowed filter: only t2 survives
        let narrowed = vec![msg("b", "t2", "Bob", true), msg("c", "t2", "Cal", false)];
        let new_threads = group(&narrowed);
        let new_ids = vec!["b".to_string(), "c".to_string()];
        apply_regroup(
            &new_threads,
            new_ids.clone(),
            &mut displayed_ids,
            &mut selection,
            &mut expanded,
        );

        assert!(selection.is_empty());
        assert_eq!(displayed_ids, new_ids);
        // t2 still holds unread mail, so it re-seeds expanded
        assert!(expanded.contains("t2"));
    }

    #[test]
    fn unchanged_displayed_ids_keep_selection_and_expansion() {
        let mut input = vec![
            msg("a", "t1", "Ann", true),
            msg("b", "t1", "Bob", false),
        ];
        let mut displayed_ids = vec!["a".to_string(), "b".to_string()];
        let mut selection = Selection::default();
        selection.toggle_one("a");
        let mut expanded = HashSet::new();
        expanded.insert("t1".to_string());

        // A star toggle changes message state but not the id sequence
        input[0].is_starred = true;
        let threads = group(&input);
        apply_regroup(
            &threads,
            vec!["a".to_string(), "b".to_string()],
            &mut displayed_ids,
            &mut selection,
            &mut expanded,
        );

        assert!(selection.contains("a"));
        assert!(expanded.contains("t1"));
    }

    #[test]
    fn expansion_reseed_skips_read_conversations_and_singletons() {
        let input = vec![
            msg("a", "t1", "Ann", false),
            msg("b", "t2", "Bob", true),
            msg("c", "t2", "Cal", true),
            msg("d", "t3", "Dee", true),
            msg("e", "t3", "Eve", false),
        ];
        let threads = group(&input);
        let mut displayed_ids = Vec::new();
        let mut selection = Selection::default();
        let mut expanded = HashSet::new();

        apply_regroup(
            &threads,
            input.iter().map(|m| m.id.clone()).collect(),
            &mut displayed_ids,
            &mut selection,
            &mut expanded,
        );

        // t1 is an unread singleton, t2 a fully read conversation; only
        // t3 opens expanded.
        assert_eq!(expanded.len(), 1);
        assert!(expanded.contains("t3"));
    }

    #[test]
    fn derived_flags_recompute_from_the_snapshot() {
        let mut emails = vec![msg("a", "t1", "Ann", false), msg("b", "t1", "Bob", true)];
        assert!(group(&emails)[0].is_unread());
        emails[0].is_read = true;
        let threads = group(&emails);
        assert!(!threads[0].is_unread());
        assert!(!threads[0].any_starred());
    }
}
