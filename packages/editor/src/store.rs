//! # Builder Store
//!
//! Reducer over the whole editor state. Every change is an [`Action`];
//! [`reduce`] takes the state by value and hands back the next one.
//!
//! ## Action families
//!
//! - **History-affecting** ([`Action::Mutate`]): the mutation runs against a
//!   copy of the current page. On success the copy becomes the current page,
//!   is pushed onto the history log and is written back into `pages`. On
//!   failure nothing changes.
//! - **Navigation** (undo, redo, switch page, add page, rename): moves
//!   between existing snapshots or pages without growing the log.
//! - **UI-only** (selection, modes, zoom, grid, dragging): touch only
//!   [`EditorUiState`].

use crate::config::EditorConfig;
use crate::history::History;
use crate::mutations::Mutation;
use crate::ui_state::{clamp_zoom, EditMode, EditorUiState};
use serde::{Deserialize, Serialize};
use sitebuilder_schema::Page;
use tracing::{debug, info};

/// Complete editor state
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderState {
    /// Page being edited; always equal to `history.current()`
    pub current_page: Page,

    /// Every page of the site, unique by slug
    pub pages: Vec<Page>,

    pub ui: EditorUiState,

    /// Undo log for the current page visit
    pub history: History,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Apply a history-affecting mutation to the current page
    Mutate { mutation: Mutation },

    Undo,

    Redo,

    /// Select a section (or clear with `None`); also clears the component selection
    SelectSection { id: Option<String> },

    SelectComponent { id: Option<String> },

    SetEditMode { mode: EditMode },

    /// Toggle preview; the selection is cleared either way
    SetPreviewMode { enabled: bool },

    SetDragging { dragging: bool },

    /// Set canvas zoom in percent (clamped)
    SetZoom { zoom: u16 },

    /// Set the grid overlay, or flip it when `show` is absent
    ToggleGrid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show: Option<bool>,
    },

    /// Make the page with this slug current; its history starts over
    SwitchPage { slug: String },

    /// Append a page unless its slug is already taken
    AddPage { page: Page },

    /// Rename the page with this slug without recording history
    RenamePage { slug: String, name: String },

    /// Relabel every navbar and footer link to `href`, on every page
    RelabelLinks { href: String, label: String },
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Mutate { mutation } => mutation.kind(),
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::SelectSection { .. } => "selectSection",
            Action::SelectComponent { .. } => "selectComponent",
            Action::SetEditMode { .. } => "setEditMode",
            Action::SetPreviewMode { .. } => "setPreviewMode",
            Action::SetDragging { .. } => "setDragging",
            Action::SetZoom { .. } => "setZoom",
            Action::ToggleGrid { .. } => "toggleGrid",
            Action::SwitchPage { .. } => "switchPage",
            Action::AddPage { .. } => "addPage",
            Action::RenamePage { .. } => "renamePage",
            Action::RelabelLinks { .. } => "relabelLinks",
        }
    }

    /// Whether this action can grow the history log
    pub fn is_history_affecting(&self) -> bool {
        matches!(self, Action::Mutate { .. })
    }
}

impl From<Mutation> for Action {
    fn from(mutation: Mutation) -> Self {
        Action::Mutate { mutation }
    }
}

impl BuilderState {
    /// State editing `initial`, with `pages` as the rest of the site.
    ///
    /// `initial` is placed first; later pages whose slug is already present
    /// are dropped.
    pub fn new(initial: Page, pages: Vec<Page>, config: &EditorConfig) -> Self {
        let mut site: Vec<Page> = Vec::with_capacity(pages.len() + 1);
        for page in std::iter::once(initial.clone()).chain(pages) {
            if site.iter().any(|p| p.slug == page.slug) {
                debug!(slug = %page.slug, "dropping page with duplicate slug");
                continue;
            }
            site.push(page);
        }

        Self {
            history: History::with_max_levels(initial.clone(), config.max_history),
            current_page: initial,
            pages: site,
            ui: config.initial_ui(),
        }
    }

    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Apply an action in place; returns whether anything changed
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::Mutate { mutation } => {
                let mut page = self.current_page.clone();
                match mutation.apply(&mut page) {
                    Ok(()) => {
                        self.commit(page);
                        true
                    }
                    Err(err) => {
                        debug!(mutation = mutation.kind(), %err, "mutation ignored");
                        false
                    }
                }
            }

            Action::Undo => match self.history.undo().cloned() {
                Some(page) => {
                    self.show(page);
                    true
                }
                None => false,
            },

            Action::Redo => match self.history.redo().cloned() {
                Some(page) => {
                    self.show(page);
                    true
                }
                None => false,
            },

            Action::SelectSection { id } => {
                self.ui.selected_section_id = id.clone();
                self.ui.selected_component_id = None;
                true
            }

            Action::SelectComponent { id } => {
                self.ui.selected_component_id = id.clone();
                true
            }

            Action::SetEditMode { mode } => {
                self.ui.edit_mode = *mode;
                true
            }

            Action::SetPreviewMode { enabled } => {
                self.ui.preview_mode = *enabled;
                self.ui.clear_selection();
                true
            }

            Action::SetDragging { dragging } => {
                self.ui.is_dragging = *dragging;
                true
            }

            Action::SetZoom { zoom } => {
                self.ui.zoom = clamp_zoom(*zoom);
                true
            }

            Action::ToggleGrid { show } => {
                self.ui.show_grid = show.unwrap_or(!self.ui.show_grid);
                true
            }

            Action::SwitchPage { slug } => {
                let Some(target) = self.page_by_slug(slug).cloned() else {
                    debug!(%slug, "switch to unknown page ignored");
                    return false;
                };
                info!(%slug, "switching page");
                self.history.reset(target.clone());
                self.current_page = target;
                true
            }

            Action::AddPage { page } => {
                if self.page_by_slug(&page.slug).is_some() {
                    debug!(slug = %page.slug, "page with this slug already exists");
                    return false;
                }
                info!(slug = %page.slug, name = %page.name, "adding page");
                self.pages.push(page.clone());
                true
            }

            Action::RenamePage { slug, name } => {
                let mut found = false;
                for page in self.pages.iter_mut().filter(|p| &p.slug == slug) {
                    page.name = name.clone();
                    found = true;
                }
                if self.current_page.slug == *slug {
                    self.current_page.name = name.clone();
                    self.history.rewrite(|page| {
                        if page.slug == *slug {
                            page.name = name.clone();
                        }
                    });
                    found = true;
                }
                found
            }

            Action::RelabelLinks { href, label } => {
                let mut changed = 0;
                for page in &mut self.pages {
                    changed += page.relabel_links(href, label);
                }
                changed += self.current_page.relabel_links(href, label);
                self.history.rewrite(|page| {
                    page.relabel_links(href, label);
                });
                changed > 0
            }
        }
    }

    /// Record a new snapshot and make it current
    fn commit(&mut self, page: Page) {
        self.history.push(page.clone());
        self.show(page);
    }

    /// Make `page` current and write it back into the page list, keyed by slug
    fn show(&mut self, page: Page) {
        if let Some(slot) = self.pages.iter_mut().find(|p| p.slug == page.slug) {
            *slot = page.clone();
        }
        self.current_page = page;
    }
}

/// Pure reducer: consume a state, return the next one
pub fn reduce(mut state: BuilderState, action: &Action) -> BuilderState {
    state.apply(action);
    state
}
