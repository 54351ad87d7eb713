//! # Post-Effect System
//!
//! Actions trigger follow-up actions that keep the editor consistent.
//!
//! ## Design
//!
//! After an action is reduced, each registered effect inspects the action
//! and the resulting state and may emit secondary actions. For example:
//! - Renaming a page → relabel every link pointing at its slug, site-wide
//! - Deleting or undoing away the selected section → clear the selection
//!
//! Effects run one level deep: secondary actions do not trigger further
//! effects.

use crate::store::{Action, BuilderState};
use sitebuilder_schema::component::find_component;
use tracing::debug;

/// Post-effect that can be triggered by an action
pub trait PostEffect: std::fmt::Debug {
    /// Analyze the action against the state it produced
    fn analyze(&self, action: &Action, state: &BuilderState) -> Vec<Action>;
}

/// Keep navbar and footer labels in step with page names
#[derive(Debug)]
pub struct PropagatePageRename;

impl PostEffect for PropagatePageRename {
    fn analyze(&self, action: &Action, _state: &BuilderState) -> Vec<Action> {
        match action {
            Action::RenamePage { slug, name } => vec![Action::RelabelLinks {
                href: slug.clone(),
                label: name.clone(),
            }],
            _ => vec![],
        }
    }
}

/// Drop selections that point at sections or components no longer on the page
#[derive(Debug)]
pub struct ClearStaleSelection;

impl PostEffect for ClearStaleSelection {
    fn analyze(&self, _action: &Action, state: &BuilderState) -> Vec<Action> {
        let page = &state.current_page;

        if let Some(section_id) = &state.ui.selected_section_id {
            if page.section(section_id).is_none() {
                // Clearing the section also clears the component
                return vec![Action::SelectSection { id: None }];
            }
        }

        if let Some(component_id) = &state.ui.selected_component_id {
            let exists = page
                .sections
                .iter()
                .any(|s| find_component(&s.components, component_id).is_some());
            if !exists {
                return vec![Action::SelectComponent { id: None }];
            }
        }

        vec![]
    }
}

/// Post-effect engine that applies all registered effects
#[derive(Debug)]
pub struct PostEffectEngine {
    effects: Vec<Box<dyn PostEffect>>,
}

impl PostEffectEngine {
    /// Create engine with default effects
    pub fn new() -> Self {
        Self {
            effects: vec![Box::new(PropagatePageRename), Box::new(ClearStaleSelection)],
        }
    }

    /// Engine with no effects; actions are reduced as-is
    pub fn empty() -> Self {
        Self { effects: vec![] }
    }

    pub fn register(&mut self, effect: Box<dyn PostEffect>) {
        self.effects.push(effect);
    }

    /// Analyze an action and generate all secondary actions
    pub fn analyze(&self, action: &Action, state: &BuilderState) -> Vec<Action> {
        let mut secondary_actions = Vec::new();

        for effect in &self.effects {
            let mut effect_actions = effect.analyze(action, state);
            secondary_actions.append(&mut effect_actions);
        }

        secondary_actions
    }

    /// Apply an action with all its post-effects.
    ///
    /// Returns whether the primary action changed the state, plus the
    /// secondary actions that were applied after it.
    pub fn apply_with_effects(
        &self,
        action: &Action,
        state: &mut BuilderState,
    ) -> (bool, Vec<Action>) {
        let changed = state.apply(action);

        let secondary = self.analyze(action, state);
        for secondary_action in &secondary {
            debug!(
                trigger = action.kind(),
                effect = secondary_action.kind(),
                "applying post-effect"
            );
            state.apply(secondary_action);
        }

        (changed, secondary)
    }
}

impl Default for PostEffectEngine {
    fn default() -> Self {
        Self::new()
    }
}
