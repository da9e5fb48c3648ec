//! Back/forward navigation history over scene ids.

use prism_api::SceneId;

/// Navigation stack with a cursor.
///
/// Invariant: `cursor` is a valid index into `entries`, and `None` iff
/// `entries` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavHistory {
    entries: Vec<SceneId>,
    cursor: Option<usize>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SceneId] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The entry the cursor sits on.
    pub fn current(&self) -> Option<SceneId> {
        self.cursor.map(|c| self.entries[c])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a navigation to `id`.
    ///
    /// Entries after the cursor (the forward branch) are discarded, then
    /// `id` is appended unless it already sits at the end. The cursor lands
    /// on the last entry either way.
    pub fn push(&mut self, id: SceneId) {
        match self.cursor {
            Some(c) => self.entries.truncate(c + 1),
            None => self.entries.clear(),
        }
        if self.entries.last() != Some(&id) {
            self.entries.push(id);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Remove every occurrence of `id`, re-anchoring the cursor.
    ///
    /// The cursor moves to the last occurrence of `anchor` in the trimmed
    /// entries; when `anchor` is absent, the old cursor is clamped into
    /// range instead.
    pub fn purge(&mut self, id: SceneId, anchor: Option<SceneId>) {
        let old_cursor = self.cursor;
        self.entries.retain(|&e| e != id);
        if self.entries.is_empty() {
            self.cursor = None;
            return;
        }
        let anchored = anchor.and_then(|a| self.entries.iter().rposition(|&e| e == a));
        self.cursor = Some(
            anchored.unwrap_or_else(|| old_cursor.unwrap_or(0).min(self.entries.len() - 1)),
        );
    }

    /// Index of the nearest entry before the cursor satisfying `is_open`.
    pub fn scan_back(&self, is_open: impl Fn(SceneId) -> bool) -> Option<usize> {
        let c = self.cursor?;
        (0..c).rev().find(|&i| is_open(self.entries[i]))
    }

    /// Index of the nearest entry after the cursor satisfying `is_open`.
    pub fn scan_forward(&self, is_open: impl Fn(SceneId) -> bool) -> Option<usize> {
        let c = self.cursor?;
        (c + 1..self.entries.len()).find(|&i| is_open(self.entries[i]))
    }

    /// Move the cursor to `index` (obtained from a scan) and return the
    /// entry there.
    pub fn seek(&mut self, index: usize) -> SceneId {
        debug_assert!(index < self.entries.len());
        self.cursor = Some(index);
        self.entries[index]
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_api::SceneId::{Git, Settings, Team, Terminal};

    #[test]
    fn push_appends_and_advances_cursor() {
        let mut h = NavHistory::new();
        h.push(Git);
        h.push(Settings);
        assert_eq!(h.entries(), &[Git, Settings]);
        assert_eq!(h.cursor(), Some(1));
        assert_eq!(h.current(), Some(Settings));
    }

    #[test]
    fn push_discards_forward_branch() {
        let mut h = NavHistory::new();
        h.push(Git);
        h.push(Settings);
        h.push(Team);
        h.seek(0);
        h.push(Terminal);
        assert_eq!(h.entries(), &[Git, Terminal]);
        assert_eq!(h.cursor(), Some(1));
    }

    #[test]
    fn push_suppresses_consecutive_duplicates() {
        let mut h = NavHistory::new();
        h.push(Git);
        h.push(Git);
        assert_eq!(h.entries(), &[Git]);
        assert_eq!(h.cursor(), Some(0));

        // Same after a truncation leaves the pushed id at the end.
        h.push(Settings);
        h.seek(0);
        h.push(Git);
        assert_eq!(h.entries(), &[Git]);
        assert_eq!(h.cursor(), Some(0));
    }

    #[test]
    fn purge_reanchors_on_last_occurrence() {
        let mut h = NavHistory::new();
        h.push(Git);
        h.push(Settings);
        h.push(Git);
        h.push(Team);
        h.purge(Team, Some(Git));
        assert_eq!(h.entries(), &[Git, Settings, Git]);
        assert_eq!(h.cursor(), Some(2));
    }

    #[test]
    fn purge_clamps_when_anchor_is_missing() {
        let mut h = NavHistory::new();
        h.push(Git);
        h.push(Settings);
        h.push(Team);
        h.purge(Team, None);
        assert_eq!(h.entries(), &[Git, Settings]);
        assert_eq!(h.cursor(), Some(1));
    }

    #[test]
    fn purge_to_empty_clears_cursor() {
        let mut h = NavHistory::new();
        h.push(Git);
        h.purge(Git, None);
        assert!(h.is_empty());
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn scans_respect_the_predicate() {
        let mut h = NavHistory::new();
        h.push(Git);
        h.push(Settings);
        h.push(Team);
        h.seek(1);

        assert_eq!(h.scan_back(|_| true), Some(0));
        assert_eq!(h.scan_back(|id| id != Git), None);
        assert_eq!(h.scan_forward(|_| true), Some(2));
        assert_eq!(h.scan_forward(|id| id != Team), None);
    }

    #[test]
    fn scans_on_empty_history_find_nothing() {
        let h = NavHistory::new();
        assert_eq!(h.scan_back(|_| true), None);
        assert_eq!(h.scan_forward(|_| true), None);
    }
}
