//! # Section Drag
//!
//! Drag-and-drop reordering as a value. While a drag is in progress only the
//! drag-local order changes; the page and its history are untouched until
//! the drop, which yields at most one `ReorderSections` mutation.

use crate::mutations::Mutation;
use sitebuilder_schema::Page;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDrag {
    dragged_id: String,
    original: Vec<String>,
    order: Vec<String>,
}

impl SectionDrag {
    /// Start dragging `section_id`; `None` when the page has no such section
    pub fn start(page: &Page, section_id: &str) -> Option<Self> {
        page.section(section_id)?;
        let order = page.section_ids();
        Some(Self {
            dragged_id: section_id.to_string(),
            original: order.clone(),
            order,
        })
    }

    pub fn dragged_id(&self) -> &str {
        &self.dragged_id
    }

    /// Current drag-local order
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Move the dragged section to `index` (clamped)
    pub fn move_to(&mut self, index: usize) {
        let Some(from) = self.order.iter().position(|id| *id == self.dragged_id) else {
            return;
        };
        let id = self.order.remove(from);
        let index = index.min(self.order.len());
        self.order.insert(index, id);
    }

    /// Move the dragged section onto the slot of `over_id`; hovering itself is ignored
    pub fn move_over(&mut self, over_id: &str) {
        if over_id == self.dragged_id {
            return;
        }
        if let Some(index) = self.order.iter().position(|id| id == over_id) {
            self.move_to(index);
        }
    }

    pub fn is_changed(&self) -> bool {
        self.order != self.original
    }

    /// The reorder to commit on drop, if the order actually changed
    pub fn into_mutation(self) -> Option<Mutation> {
        if self.is_changed() {
            Some(Mutation::ReorderSections { ids: self.order })
        } else {
            None
        }
    }
}
