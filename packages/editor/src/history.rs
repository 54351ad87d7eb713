//! # Undo/Redo History
//!
//! Linear log of full page snapshots with a cursor.
//!
//! ## Design
//!
//! - Each history-affecting command pushes the resulting page
//! - Pushing drops every entry after the cursor (the redo tail)
//! - Undo/redo only move the cursor
//! - The log is never empty and `index < len` always holds
//!
//! ## Example
//!
//! ```rust
//! use sitebuilder_editor::History;
//! use sitebuilder_schema::templates;
//!
//! let page = templates::home_page();
//! let mut history = History::new(page.clone());
//!
//! let mut edited = page.clone();
//! edited.sections.pop();
//! history.push(edited);
//!
//! assert_eq!(history.undo(), Some(&page));
//! assert!(history.can_redo());
//! ```

use sitebuilder_schema::Page;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Snapshots, oldest first
    entries: Vec<Page>,

    /// Position of the visible snapshot
    index: usize,

    /// Maximum number of undo steps kept (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// Single-entry log with no undo limit
    pub fn new(page: Page) -> Self {
        Self::with_max_levels(page, 0)
    }

    pub fn with_max_levels(page: Page, max_levels: usize) -> Self {
        Self {
            entries: vec![page],
            index: 0,
            max_levels,
        }
    }

    /// Record a new snapshot after the cursor, discarding any redo tail
    pub fn push(&mut self, page: Page) {
        self.entries.truncate(self.index + 1);
        self.entries.push(page);
        self.index += 1;

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.entries.len() > self.max_levels + 1 {
            let excess = self.entries.len() - (self.max_levels + 1);
            self.entries.drain(..excess);
            self.index -= excess;
        }
    }

    /// Step back; returns the snapshot now visible, or `None` at the start
    pub fn undo(&mut self) -> Option<&Page> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward; returns the snapshot now visible, or `None` at the end
    pub fn redo(&mut self) -> Option<&Page> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    /// Drop everything and start over from `page`
    pub fn reset(&mut self, page: Page) {
        self.entries.clear();
        self.entries.push(page);
        self.index = 0;
    }

    /// Apply `f` to every snapshot, past and future
    pub fn rewrite(&mut self, mut f: impl FnMut(&mut Page)) {
        self.entries.iter_mut().for_each(|page| f(page));
    }

    pub fn current(&self) -> &Page {
        &self.entries[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Page] {
        &self.entries
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebuilder_schema::templates;

    fn renamed(page: &Page, name: &str) -> Page {
        let mut page = page.clone();
        page.name = name.to_string();
        page
    }

    #[test]
    fn test_history_creation() {
        let history = History::new(templates::home_page());
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_undo_redo() {
        let base = templates::home_page();
        let mut history = History::new(base.clone());
        history.push(renamed(&base, "One"));
        history.push(renamed(&base, "Two"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.current().name, "Two");

        assert_eq!(history.undo().map(|p| p.name.as_str()), Some("One"));
        assert_eq!(history.undo().map(|p| p.name.as_str()), Some("Home"));
        assert!(history.undo().is_none());
        assert_eq!(history.index(), 0);

        assert_eq!(history.redo().map(|p| p.name.as_str()), Some("One"));
        assert_eq!(history.redo().map(|p| p.name.as_str()), Some("Two"));
        assert!(history.redo().is_none());
        assert_eq!(history.index(), 2);
    }

    #[test]
    fn test_new_push_clears_redo() {
        let base = templates::home_page();
        let mut history = History::new(base.clone());
        history.push(renamed(&base, "A"));
        history.push(renamed(&base, "B"));
        history.undo();

        history.push(renamed(&base, "C"));

        assert!(!history.can_redo());
        assert_eq!(history.len(), 3);
        let names: Vec<_> = history.entries().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "A", "C"]);
    }

    #[test]
    fn test_max_levels_enforced() {
        let base = templates::home_page();
        let mut history = History::with_max_levels(base.clone(), 2);

        for i in 0..5 {
            history.push(renamed(&base, &format!("Edit {}", i)));
        }

        // Two undo steps plus the visible snapshot
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.current().name, "Edit 4");
        assert_eq!(history.entries()[0].name, "Edit 2");
    }

    #[test]
    fn test_reset_and_rewrite() {
        let base = templates::home_page();
        let mut history = History::new(base.clone());
        history.push(renamed(&base, "A"));
        history.rewrite(|page| page.meta.title = "Rewritten".to_string());

        assert!(history.entries().iter().all(|p| p.meta.title == "Rewritten"));

        history.reset(renamed(&base, "Fresh"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert_eq!(history.current().name, "Fresh");
    }
}
