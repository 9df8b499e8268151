//! Bookmarks Module - Ordered path list with a selection cursor
//!
//! The list and its cursor live together so every mutation keeps the cursor
//! valid in the same step. There is no separate "fix the index" pass.
//!
//! # Invariants
//!
//! - No duplicate paths (exact string equality).
//! - Insertion order is display order.
//! - Empty list ⇔ `cursor() == None`.
//! - Non-empty list ⇒ `cursor() < len()`.
//!
//! # API
//!
//! - `insert(path)` - Append unless already present
//! - `select_up` / `select_down` - Move the cursor with wraparound
//! - `remove_selected()` - Delete at cursor and reindex
//! - `selected()` - Path under the cursor

/// Ordered, duplicate-free bookmark list plus cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkList {
    paths: Vec<String>,
    cursor: Option<usize>,
}

impl BookmarkList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from paths in order, dropping repeats.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Self::new();
        for path in paths {
            list.insert(path);
        }
        list
    }

    /// Append a path. Returns false if it was already present.
    ///
    /// The first insertion into an empty list puts the cursor on it.
    pub fn insert(&mut self, path: String) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.paths.push(path);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Path under the cursor.
    pub fn selected(&self) -> Option<&str> {
        self.cursor.and_then(|i| self.paths.get(i)).map(String::as_str)
    }

    /// Move the cursor up one row, wrapping from the top to the bottom.
    pub fn select_up(&mut self) {
        let len = self.paths.len();
        if let Some(cursor) = self.cursor.as_mut() {
            *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
        }
    }

    /// Move the cursor down one row, wrapping from the bottom to the top.
    pub fn select_down(&mut self) {
        let len = self.paths.len();
        if let Some(cursor) = self.cursor.as_mut() {
            *cursor = if *cursor + 1 >= len { 0 } else { *cursor + 1 };
        }
    }

    /// Remove the entry under the cursor and return it.
    ///
    /// The cursor stays on the same slot (now holding the next entry), steps
    /// back one if it was on the last entry, and becomes `None` when the list
    /// empties.
    pub fn remove_selected(&mut self) -> Option<String> {
        let index = self.cursor?;
        if index >= self.paths.len() {
            return None;
        }

        let removed = self.paths.remove(index);
        self.cursor = match self.paths.len() {
            0 => None,
            len if index >= len => Some(len - 1),
            _ => Some(index),
        };
        Some(removed)
    }

    /// Consume the list, yielding paths in display order.
    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn list(paths: &[&str]) -> BookmarkList {
        BookmarkList::from_paths(paths.iter().map(|p| p.to_string()))
    }

    #[test]
    fn test_empty_list_has_no_cursor() {
        let list = BookmarkList::new();
        assert!(list.is_empty());
        assert_eq!(list.cursor(), None);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_first_insert_sets_cursor() {
        let mut list = BookmarkList::new();
        assert!(list.insert("/a".into()));
        assert_eq!(list.cursor(), Some(0));
        assert_eq!(list.selected(), Some("/a"));
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut list = list(&["/a", "/b"]);
        assert!(!list.insert("/a".into()));
        assert_eq!(list.paths(), ["/a", "/b"]);
    }

    #[test]
    fn test_from_paths_drops_repeats_keeping_order() {
        let list = list(&["/b", "/a", "/b", "/c", "/a"]);
        assert_eq!(list.paths(), ["/b", "/a", "/c"]);
    }

    #[test]
    fn test_up_wraps_to_bottom() {
        let mut list = list(&["/a", "/b", "/c"]);
        list.select_up();
        assert_eq!(list.cursor(), Some(2));
        list.select_up();
        assert_eq!(list.cursor(), Some(1));
    }

    #[test]
    fn test_down_wraps_to_top() {
        let mut list = list(&["/a", "/b", "/c"]);
        list.select_down();
        list.select_down();
        assert_eq!(list.cursor(), Some(2));
        list.select_down();
        assert_eq!(list.cursor(), Some(0));
    }

    #[test]
    fn test_single_entry_navigation_stays_put() {
        let mut list = list(&["/a"]);
        list.select_up();
        assert_eq!(list.cursor(), Some(0));
        list.select_down();
        assert_eq!(list.cursor(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut list = BookmarkList::new();
        list.select_up();
        list.select_down();
        assert_eq!(list.cursor(), None);
    }

    #[test]
    fn test_remove_middle_keeps_slot() {
        let mut list = list(&["/a", "/b", "/c"]);
        list.select_down();
        assert_eq!(list.remove_selected().as_deref(), Some("/b"));
        assert_eq!(list.paths(), ["/a", "/c"]);
        assert_eq!(list.cursor(), Some(1));
        assert_eq!(list.selected(), Some("/c"));
    }

    #[test]
    fn test_remove_last_steps_back() {
        let mut list = list(&["/a", "/b", "/c"]);
        list.select_up();
        assert_eq!(list.remove_selected().as_deref(), Some("/c"));
        assert_eq!(list.cursor(), Some(1));
        assert_eq!(list.selected(), Some("/b"));
    }

    #[test]
    fn test_remove_only_entry_clears_cursor() {
        let mut list = list(&["/a"]);
        assert_eq!(list.remove_selected().as_deref(), Some("/a"));
        assert!(list.is_empty());
        assert_eq!(list.cursor(), None);
        assert_eq!(list.remove_selected(), None);
    }

    #[test]
    fn test_remove_all_from_front() {
        let mut list = list(&["/a", "/b", "/c"]);
        for expected in ["/a", "/b", "/c"] {
            assert_eq!(list.remove_selected().as_deref(), Some(expected));
        }
        assert_eq!(list.cursor(), None);
    }

    #[test]
    fn test_insert_after_emptying_restores_cursor() {
        let mut list = list(&["/a"]);
        list.remove_selected();
        list.insert("/b".into());
        assert_eq!(list.cursor(), Some(0));
    }
}
