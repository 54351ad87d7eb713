//! # Edit Session
//!
//! The command surface of the editor. An [`EditSession`] owns one
//! [`BuilderState`] and exposes one method per user command; each method
//! dispatches an [`Action`] through the post-effect engine and returns
//! nothing. Callers observe results by reading the state back.
//!
//! Commands never fail: a stale section or component ID makes the command
//! a no-op.

use crate::config::EditorConfig;
use crate::drag::SectionDrag;
use crate::export::{export_file_name, export_page};
use crate::mutations::Mutation;
use crate::post_effects::PostEffectEngine;
use crate::store::{Action, BuilderState};
use crate::ui_state::{EditMode, EditorUiState};
use crate::EditorError;
use serde_json::{Map, Value};
use sitebuilder_schema::component::find_component;
use sitebuilder_schema::templates;
use sitebuilder_schema::{
    Component, ComponentPatch, ComponentStyles, FooterPatch, NavbarPatch, Page, Section,
    SectionContent, SectionPatch, SectionStyles,
};
use tracing::{debug, info};

/// One editor instance over a site
#[derive(Debug)]
pub struct EditSession {
    state: BuilderState,
    effects: PostEffectEngine,
    drag: Option<SectionDrag>,
}

impl EditSession {
    /// Session editing `initial`, with `pages` as the rest of the site
    pub fn new(initial: Page, pages: Vec<Page>, config: EditorConfig) -> Self {
        Self {
            state: BuilderState::new(initial, pages, &config),
            effects: PostEffectEngine::new(),
            drag: None,
        }
    }

    /// Session over `pages`, editing the first one.
    ///
    /// An empty list starts from the stock home page.
    pub fn from_pages(mut pages: Vec<Page>, config: EditorConfig) -> Self {
        let initial = if pages.is_empty() {
            templates::home_page()
        } else {
            pages.remove(0)
        };
        Self::new(initial, pages, config)
    }

    /// Session over the seeded demo site, starting on the home page
    pub fn with_default_site(config: EditorConfig) -> Self {
        Self::from_pages(templates::default_site(), config)
    }

    /// Replace the post-effect engine
    pub fn with_effects(mut self, effects: PostEffectEngine) -> Self {
        self.effects = effects;
        self
    }

    /// Dispatch an action; returns whether the action itself changed anything
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(action = action.kind(), "dispatch");
        let (changed, _) = self.effects.apply_with_effects(&action, &mut self.state);
        changed
    }

    fn mutate(&mut self, mutation: Mutation) -> bool {
        self.dispatch(Action::Mutate { mutation })
    }

    // ── Readers ──────────────────────────────────────────────────────

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn current_page(&self) -> &Page {
        &self.state.current_page
    }

    pub fn pages(&self) -> &[Page] {
        &self.state.pages
    }

    pub fn ui(&self) -> &EditorUiState {
        &self.state.ui
    }

    pub fn selected_section(&self) -> Option<&Section> {
        let id = self.state.ui.selected_section_id.as_deref()?;
        self.state.current_page.section(id)
    }

    pub fn selected_component(&self) -> Option<&Component> {
        let id = self.state.ui.selected_component_id.as_deref()?;
        self.state
            .current_page
            .sections
            .iter()
            .find_map(|s| find_component(&s.components, id))
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    /// The drag in progress, if any
    pub fn drag(&self) -> Option<&SectionDrag> {
        self.drag.as_ref()
    }

    // ── Sections ─────────────────────────────────────────────────────

    /// Insert at `index`, or append when `None`
    pub fn add_section(&mut self, section: Section, index: Option<usize>) {
        self.mutate(Mutation::AddSection { section, index });
    }

    pub fn update_section(&mut self, id: &str, updates: SectionPatch) {
        self.mutate(Mutation::UpdateSection {
            id: id.to_string(),
            updates,
        });
    }

    pub fn delete_section(&mut self, id: &str) {
        self.mutate(Mutation::DeleteSection { id: id.to_string() });
    }

    pub fn reorder_sections(&mut self, ids: Vec<String>) {
        self.mutate(Mutation::ReorderSections { ids });
    }

    pub fn toggle_section_visibility(&mut self, id: &str) {
        self.mutate(Mutation::ToggleSectionVisibility { id: id.to_string() });
    }

    pub fn duplicate_section(&mut self, id: &str) {
        self.mutate(Mutation::DuplicateSection { id: id.to_string() });
    }

    pub fn update_section_styles(&mut self, id: &str, styles: SectionStyles) {
        self.mutate(Mutation::UpdateSectionStyles {
            id: id.to_string(),
            styles,
        });
    }

    /// Replace the content outright; the caller does any merging
    pub fn update_section_content(&mut self, id: &str, content: SectionContent) {
        self.mutate(Mutation::UpdateSectionContent {
            id: id.to_string(),
            content,
        });
    }

    /// Merge top-level content keys into the existing content
    pub fn patch_section_content(&mut self, id: &str, patch: Map<String, Value>) {
        self.mutate(Mutation::PatchSectionContent {
            id: id.to_string(),
            patch,
        });
    }

    pub fn move_section_up(&mut self, id: &str) {
        self.move_section(id, -1);
    }

    pub fn move_section_down(&mut self, id: &str) {
        self.move_section(id, 1);
    }

    fn move_section(&mut self, id: &str, offset: isize) {
        let mut ids = self.state.current_page.section_ids();
        let Some(from) = ids.iter().position(|s| s == id) else {
            return;
        };
        let Some(to) = from.checked_add_signed(offset).filter(|&to| to < ids.len()) else {
            return;
        };
        ids.swap(from, to);
        self.reorder_sections(ids);
    }

    // ── Components ───────────────────────────────────────────────────

    pub fn add_component(
        &mut self,
        section_id: &str,
        parent_id: Option<&str>,
        component: Component,
        index: Option<usize>,
    ) {
        self.mutate(Mutation::AddComponent {
            section_id: section_id.to_string(),
            parent_id: parent_id.map(str::to_string),
            component,
            index,
        });
    }

    pub fn update_component(&mut self, section_id: &str, component_id: &str, updates: ComponentPatch) {
        self.mutate(Mutation::UpdateComponent {
            section_id: section_id.to_string(),
            component_id: component_id.to_string(),
            updates,
        });
    }

    pub fn delete_component(&mut self, section_id: &str, component_id: &str) {
        self.mutate(Mutation::DeleteComponent {
            section_id: section_id.to_string(),
            component_id: component_id.to_string(),
        });
    }

    pub fn reorder_components(&mut self, section_id: &str, parent_id: Option<&str>, ids: Vec<String>) {
        self.mutate(Mutation::ReorderComponents {
            section_id: section_id.to_string(),
            parent_id: parent_id.map(str::to_string),
            ids,
        });
    }

    pub fn update_component_styles(&mut self, section_id: &str, component_id: &str, styles: ComponentStyles) {
        self.mutate(Mutation::UpdateComponentStyles {
            section_id: section_id.to_string(),
            component_id: component_id.to_string(),
            styles,
        });
    }

    // ── Page chrome ──────────────────────────────────────────────────

    pub fn update_navbar(&mut self, updates: NavbarPatch) {
        self.mutate(Mutation::UpdateNavbar { updates });
    }

    pub fn update_footer(&mut self, updates: FooterPatch) {
        self.mutate(Mutation::UpdateFooter { updates });
    }

    /// Load `page` into the current page, keeping its ID and slug
    pub fn replace_page(&mut self, page: Page) {
        self.mutate(Mutation::ReplacePage { page });
    }

    // ── History ──────────────────────────────────────────────────────

    pub fn undo(&mut self) {
        self.dispatch(Action::Undo);
    }

    pub fn redo(&mut self) {
        self.dispatch(Action::Redo);
    }

    // ── UI ───────────────────────────────────────────────────────────

    pub fn select_section(&mut self, id: Option<&str>) {
        self.dispatch(Action::SelectSection {
            id: id.map(str::to_string),
        });
    }

    pub fn select_component(&mut self, id: Option<&str>) {
        self.dispatch(Action::SelectComponent {
            id: id.map(str::to_string),
        });
    }

    pub fn set_edit_mode(&mut self, mode: EditMode) {
        self.dispatch(Action::SetEditMode { mode });
    }

    pub fn set_preview_mode(&mut self, enabled: bool) {
        self.dispatch(Action::SetPreviewMode { enabled });
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dispatch(Action::SetDragging { dragging });
    }

    pub fn set_zoom(&mut self, zoom: u16) {
        self.dispatch(Action::SetZoom { zoom });
    }

    /// Set the grid overlay, or flip it with `None`
    pub fn toggle_grid(&mut self, show: Option<bool>) {
        self.dispatch(Action::ToggleGrid { show });
    }

    // ── Pages ────────────────────────────────────────────────────────

    pub fn switch_page(&mut self, slug: &str) {
        self.cancel_drag();
        self.dispatch(Action::SwitchPage {
            slug: slug.to_string(),
        });
    }

    /// Add `page` and make it active; a taken slug leaves everything as is
    pub fn create_page(&mut self, page: Page) {
        let slug = page.slug.clone();
        if self.dispatch(Action::AddPage { page }) {
            self.switch_page(&slug);
        }
    }

    /// Rename a page; links to it across the site follow the new name
    pub fn update_page_name(&mut self, slug: &str, name: &str) {
        self.dispatch(Action::RenamePage {
            slug: slug.to_string(),
            name: name.to_string(),
        });
    }

    /// Open the page at `slug`, creating it from the route catalog when unseen
    pub fn navigate(&mut self, slug: &str) {
        if self.state.page_by_slug(slug).is_some() {
            self.switch_page(slug);
        } else {
            info!(%slug, "seeding page for route");
            self.create_page(templates::page_for_route(slug));
        }
    }

    // ── Drag and drop ────────────────────────────────────────────────

    /// Pick up a section; unknown IDs start nothing
    pub fn begin_drag(&mut self, section_id: &str) {
        let Some(drag) = SectionDrag::start(&self.state.current_page, section_id) else {
            debug!(%section_id, "drag of unknown section ignored");
            return;
        };
        self.drag = Some(drag);
        self.set_dragging(true);
    }

    pub fn drag_to(&mut self, index: usize) {
        if let Some(drag) = self.drag.as_mut() {
            drag.move_to(index);
        }
    }

    pub fn drag_over(&mut self, over_id: &str) {
        if let Some(drag) = self.drag.as_mut() {
            drag.move_over(over_id);
        }
    }

    /// Drop: commits one reorder if the order changed
    pub fn finish_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.set_dragging(false);
        if let Some(mutation) = drag.into_mutation() {
            self.mutate(mutation);
        }
    }

    /// Abandon the drag without touching the page
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.set_dragging(false);
        }
    }

    // ── Export ───────────────────────────────────────────────────────

    /// The current page as pretty JSON
    pub fn export_current(&self) -> Result<String, EditorError> {
        export_page(&self.state.current_page)
    }

    pub fn export_file_name(&self) -> String {
        export_file_name(&self.state.current_page)
    }
}
