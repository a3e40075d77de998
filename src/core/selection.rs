use std::collections::HashSet;

/// What the select-all checkbox should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Indeterminate,
    Unchecked,
}

/// Set of currently selected message ids. Always a subset of the
/// displayed list; any structural change to that list must go through
/// [`Selection::reset`] so stale ids never linger off-screen.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }

    /// Selection becomes exactly the displayed set.
    pub fn select_all<I, S>(&mut self, displayed: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = displayed.into_iter().map(Into::into).collect();
    }

    pub fn toggle_one(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Atomic whole-thread toggle. Partial selection counts as "not fully
    /// selected", so the first activation always completes the thread;
    /// only a fully selected thread gets deselected.
    pub fn toggle_thread(&mut self, ids: &[String]) {
        if ids.is_empty() {
            return;
        }
        if self.thread_fully_selected(ids) {
            for id in ids {
                self.ids.remove(id);
            }
        } else {
            for id in ids {
                self.ids.insert(id.clone());
            }
        }
    }

    pub fn thread_fully_selected(&self, ids: &[String]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.ids.contains(id))
    }

    /// Tri-state for the select-all control over `displayed_len` rows.
    pub fn check_state(&self, displayed_len: usize) -> CheckState {
        let selected = self.ids.len();
        if displayed_len > 0 && selected == displayed_len {
            CheckState::Checked
        } else if selected > 0 {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_one_adds_then_removes() {
        let mut sel = Selection::default();
        sel.toggle_one("a");
        assert!(sel.contains("a"));
        sel.toggle_one("a");
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_matches_displayed_set() {
        let mut sel = Selection::default();
        sel.select_all(ids(&["a", "b", "c"]));
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.check_state(3), CheckState::Checked);
    }

    #[test]
    fn thread_toggle_moves_toward_full_selection_first() {
        let mut sel = Selection::default();
        let thread = ids(&["a", "b", "c"]);
        sel.toggle_one("a");
        sel.toggle_one("b");

        // Two of three selected: the toggle completes the thread rather
        // than clearing the two.
        sel.toggle_thread(&thread);
        assert!(sel.thread_fully_selected(&thread));
        assert_eq!(sel.len(), 3);

        // Fully selected: the same toggle now clears the thread.
        sel.toggle_thread(&thread);
        assert!(sel.is_empty());
    }

    #[test]
    fn thread_toggle_on_empty_thread_is_a_noop() {
        let mut sel = Selection::default();
        sel.toggle_thread(&[]);
        assert!(sel.is_empty());
        assert!(!sel.thread_fully_selected(&[]));
    }

    #[test]
    fn check_state_tristate() {
        let mut sel = Selection::default();
        assert_eq!(sel.check_state(5), CheckState::Unchecked);

        sel.select_all(ids(&["a", "b", "c"]));
        assert_eq!(sel.check_state(5), CheckState::Indeterminate);

        sel.select_all(ids(&["a", "b", "c", "d", "e"]));
        assert_eq!(sel.check_state(5), CheckState::Checked);

        // An empty displayed list is never "checked"
        sel.reset();
        assert_eq!(sel.check_state(0), CheckState::Unchecked);
    }

    #[test]
    fn reset_clears_everything() {
        let mut sel = Selection::default();
        sel.select_all(ids(&["a", "b"]));
        sel.reset();
        assert!(sel.is_empty());
        assert_eq!(sel.check_state(2), CheckState::Unchecked);
    }
}
