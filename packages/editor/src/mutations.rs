//! # Page Mutations
//!
//! History-affecting operations on a single page.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation is one user-level command
//! 2. **Validated**: References are checked before anything is touched
//! 3. **Whole-value**: A mutation edits an owned page; the store decides
//!    whether the result becomes a new history entry
//!
//! ## Mutation Semantics
//!
//! ### Reorder
//! - The list is rebuilt from the given IDs
//! - Unknown IDs are skipped, unmentioned entries are dropped
//! - Never fails, so it always records a history entry
//!
//! ### Delete section
//! - Removes the section if present; never fails
//!
//! ### Update content
//! - `UpdateSectionContent` replaces content outright and must keep the type
//! - `PatchSectionContent` shallow-merges keys and re-validates the result
//!
//! ### Everything else
//! - A missing section or component is an error, which the store turns into
//!   a no-op

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sitebuilder_schema::component::{find_component, find_component_mut, remove_component, reorder_by_ids};
use sitebuilder_schema::{
    Component, ComponentPatch, ComponentStyles, FooterPatch, NavbarPatch, Page, SchemaError,
    Section, SectionContent, SectionPatch, SectionStyles, SectionType,
};
use std::collections::HashSet;
use thiserror::Error;

/// History-affecting page mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Insert a section at `index` (end when absent or past the end)
    AddSection {
        section: Section,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    /// Shallow-merge fields into a section
    UpdateSection { id: String, updates: SectionPatch },

    DeleteSection { id: String },

    /// Rebuild the section list in the given order
    ReorderSections { ids: Vec<String> },

    ToggleSectionVisibility { id: String },

    /// Insert a fresh-ID copy right after the original
    DuplicateSection { id: String },

    UpdateSectionStyles { id: String, styles: SectionStyles },

    /// Replace a section's content (same type only)
    UpdateSectionContent { id: String, content: SectionContent },

    /// Merge top-level content keys into a section's content
    PatchSectionContent { id: String, patch: Map<String, Value> },

    /// Insert a component into a section, or into a parent component when `parent_id` is set
    AddComponent {
        section_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent_id: Option<String>,
        component: Component,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    UpdateComponent {
        section_id: String,
        component_id: String,
        updates: ComponentPatch,
    },

    DeleteComponent {
        section_id: String,
        component_id: String,
    },

    ReorderComponents {
        section_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent_id: Option<String>,
        ids: Vec<String>,
    },

    UpdateComponentStyles {
        section_id: String,
        component_id: String,
        styles: ComponentStyles,
    },

    UpdateNavbar { updates: NavbarPatch },

    UpdateFooter { updates: FooterPatch },

    /// Replace the whole page, keeping its ID and slug
    ReplacePage { page: Page },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("ID already in use: {0}")]
    DuplicateId(String),

    #[error("Content type mismatch: section is {expected}, content is {found}")]
    ContentTypeMismatch {
        expected: SectionType,
        found: SectionType,
    },

    #[error("Invalid content: {0}")]
    InvalidContent(#[from] SchemaError),
}

impl Mutation {
    /// Short command name, as used on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::AddSection { .. } => "addSection",
            Mutation::UpdateSection { .. } => "updateSection",
            Mutation::DeleteSection { .. } => "deleteSection",
            Mutation::ReorderSections { .. } => "reorderSections",
            Mutation::ToggleSectionVisibility { .. } => "toggleSectionVisibility",
            Mutation::DuplicateSection { .. } => "duplicateSection",
            Mutation::UpdateSectionStyles { .. } => "updateSectionStyles",
            Mutation::UpdateSectionContent { .. } => "updateSectionContent",
            Mutation::PatchSectionContent { .. } => "patchSectionContent",
            Mutation::AddComponent { .. } => "addComponent",
            Mutation::UpdateComponent { .. } => "updateComponent",
            Mutation::DeleteComponent { .. } => "deleteComponent",
            Mutation::ReorderComponents { .. } => "reorderComponents",
            Mutation::UpdateComponentStyles { .. } => "updateComponentStyles",
            Mutation::UpdateNavbar { .. } => "updateNavbar",
            Mutation::UpdateFooter { .. } => "updateFooter",
            Mutation::ReplacePage { .. } => "replacePage",
        }
    }

    /// Apply mutation to a page with validation
    pub fn apply(&self, page: &mut Page) -> Result<(), MutationError> {
        self.validate(page)?;

        match self {
            Mutation::AddSection { section, index } => {
                insert_at(&mut page.sections, *index, section.clone());
            }

            Mutation::UpdateSection { id, updates } => {
                updates.clone().apply_to(section_mut(page, id)?);
            }

            Mutation::DeleteSection { id } => {
                page.sections.retain(|s| &s.id != id);
            }

            Mutation::ReorderSections { ids } => {
                let sections = std::mem::take(&mut page.sections);
                page.sections = reorder_by_ids(sections, ids, |s| s.id.as_str());
            }

            Mutation::ToggleSectionVisibility { id } => {
                let section = section_mut(page, id)?;
                section.visible = !section.visible;
            }

            Mutation::DuplicateSection { id } => {
                let index = page
                    .section_index(id)
                    .ok_or_else(|| MutationError::SectionNotFound(id.clone()))?;
                let copy = page.sections[index].duplicate();
                page.sections.insert(index + 1, copy);
            }

            Mutation::UpdateSectionStyles { id, styles } => {
                section_mut(page, id)?.styles.merge(styles.clone());
            }

            Mutation::UpdateSectionContent { id, content } => {
                section_mut(page, id)?.content = content.clone();
            }

            Mutation::PatchSectionContent { id, patch } => {
                let section = section_mut(page, id)?;
                section.content = section.content.merge_patch(patch.clone())?;
            }

            Mutation::AddComponent {
                section_id,
                parent_id,
                component,
                index,
            } => {
                let section = section_mut(page, section_id)?;
                let siblings = match parent_id {
                    Some(parent_id) => {
                        &mut find_component_mut(&mut section.components, parent_id)
                            .ok_or_else(|| MutationError::ComponentNotFound(parent_id.clone()))?
                            .children
                    }
                    None => &mut section.components,
                };
                insert_at(siblings, *index, component.clone());
            }

            Mutation::UpdateComponent {
                section_id,
                component_id,
                updates,
            } => {
                updates
                    .clone()
                    .apply_to(component_mut(page, section_id, component_id)?);
            }

            Mutation::DeleteComponent {
                section_id,
                component_id,
            } => {
                let section = section_mut(page, section_id)?;
                remove_component(&mut section.components, component_id)
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))?;
            }

            Mutation::ReorderComponents {
                section_id,
                parent_id,
                ids,
            } => {
                let Some(section) = page.section_mut(section_id) else {
                    return Ok(());
                };
                let siblings = match parent_id {
                    Some(parent_id) => find_component_mut(&mut section.components, parent_id)
                        .map(|parent| &mut parent.children),
                    None => Some(&mut section.components),
                };
                if let Some(siblings) = siblings {
                    let current = std::mem::take(siblings);
                    *siblings = reorder_by_ids(current, ids, |c| c.id.as_str());
                }
            }

            Mutation::UpdateComponentStyles {
                section_id,
                component_id,
                styles,
            } => {
                component_mut(page, section_id, component_id)?
                    .styles
                    .merge(styles.clone());
            }

            Mutation::UpdateNavbar { updates } => {
                updates.clone().apply_to(&mut page.navbar);
            }

            Mutation::UpdateFooter { updates } => {
                updates.clone().apply_to(&mut page.footer);
            }

            Mutation::ReplacePage { page: replacement } => {
                let id = std::mem::take(&mut page.id);
                let slug = std::mem::take(&mut page.slug);
                *page = replacement.clone();
                page.id = id;
                page.slug = slug;
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, page: &Page) -> Result<(), MutationError> {
        match self {
            Mutation::AddSection { section, .. } => {
                ensure_unused(page, std::iter::once(section.id.clone()))?;
                ensure_unused(page, section.component_ids())
            }

            Mutation::UpdateSection { id, updates } => {
                let target = section(page, id)?;
                if let Some(content) = &updates.content {
                    ensure_same_type(target, content)?;
                }
                if let Some(components) = &updates.components {
                    // The section's own components are being replaced, so their IDs may be reused
                    let own: HashSet<String> = target.component_ids().into_iter().collect();
                    let mut ids = Vec::new();
                    for component in components {
                        component.collect_ids(&mut ids);
                    }
                    ensure_distinct(&ids)?;
                    ensure_unused(page, ids.into_iter().filter(|id| !own.contains(id)))?;
                }
                Ok(())
            }

            Mutation::ToggleSectionVisibility { id }
            | Mutation::DuplicateSection { id }
            | Mutation::UpdateSectionStyles { id, .. }
            | Mutation::PatchSectionContent { id, .. } => section(page, id).map(|_| ()),

            Mutation::UpdateSectionContent { id, content } => {
                ensure_same_type(section(page, id)?, content)
            }

            Mutation::AddComponent {
                section_id,
                parent_id,
                component,
                ..
            } => {
                let section = section(page, section_id)?;
                if let Some(parent_id) = parent_id {
                    find_component(&section.components, parent_id)
                        .ok_or_else(|| MutationError::ComponentNotFound(parent_id.clone()))?;
                }
                let mut ids = Vec::new();
                component.collect_ids(&mut ids);
                ensure_unused(page, ids)
            }

            Mutation::UpdateComponent {
                section_id,
                component_id,
                ..
            }
            | Mutation::DeleteComponent {
                section_id,
                component_id,
            }
            | Mutation::UpdateComponentStyles {
                section_id,
                component_id,
                ..
            } => {
                let section = section(page, section_id)?;
                find_component(&section.components, component_id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::ComponentNotFound(component_id.clone()))
            }

            Mutation::DeleteSection { .. }
            | Mutation::ReorderSections { .. }
            | Mutation::ReorderComponents { .. }
            | Mutation::UpdateNavbar { .. }
            | Mutation::UpdateFooter { .. }
            | Mutation::ReplacePage { .. } => Ok(()),
        }
    }
}

fn section<'a>(page: &'a Page, id: &str) -> Result<&'a Section, MutationError> {
    page.section(id)
        .ok_or_else(|| MutationError::SectionNotFound(id.to_string()))
}

fn section_mut<'a>(page: &'a mut Page, id: &str) -> Result<&'a mut Section, MutationError> {
    page.section_mut(id)
        .ok_or_else(|| MutationError::SectionNotFound(id.to_string()))
}

fn component_mut<'a>(
    page: &'a mut Page,
    section_id: &str,
    component_id: &str,
) -> Result<&'a mut Component, MutationError> {
    let section = section_mut(page, section_id)?;
    find_component_mut(&mut section.components, component_id)
        .ok_or_else(|| MutationError::ComponentNotFound(component_id.to_string()))
}

fn ensure_unused(page: &Page, ids: impl IntoIterator<Item = String>) -> Result<(), MutationError> {
    for id in ids {
        if page.contains_id(&id) {
            return Err(MutationError::DuplicateId(id));
        }
    }
    Ok(())
}

fn ensure_same_type(section: &Section, content: &SectionContent) -> Result<(), MutationError> {
    let expected = section.section_type();
    let found = content.section_type();
    if expected != found {
        return Err(MutationError::ContentTypeMismatch { expected, found });
    }
    Ok(())
}

fn ensure_distinct(ids: &[String]) -> Result<(), MutationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(MutationError::DuplicateId(id.clone()));
        }
    }
    Ok(())
}

fn insert_at<T>(items: &mut Vec<T>, index: Option<usize>, item: T) {
    let index = index.unwrap_or(items.len()).min(items.len());
    items.insert(index, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitebuilder_schema::templates;
    use sitebuilder_schema::ComponentType;

    fn page() -> Page {
        templates::home_page()
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::ReorderSections {
            ids: vec!["a".to_string(), "b".to_string()],
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json, json!({ "type": "reorderSections", "ids": ["a", "b"] }));

        let deserialized: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_component_fields_are_camel_case() {
        let json = json!({
            "type": "deleteComponent",
            "sectionId": "s1",
            "componentId": "c1"
        });

        let mutation: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(
            mutation,
            Mutation::DeleteComponent {
                section_id: "s1".to_string(),
                component_id: "c1".to_string(),
            }
        );
        assert_eq!(mutation.kind(), "deleteComponent");
    }

    #[test]
    fn test_add_section_clamps_index() {
        let mut page = page();
        let section = templates::faq_section();
        let id = section.id.clone();

        Mutation::AddSection {
            section,
            index: Some(99),
        }
        .apply(&mut page)
        .unwrap();

        assert_eq!(page.sections.last().map(|s| s.id.as_str()), Some(id.as_str()));
    }

    #[test]
    fn test_add_section_rejects_reused_id() {
        let mut page = page();
        let existing = page.sections[0].clone();

        let err = Mutation::AddSection {
            section: existing.clone(),
            index: None,
        }
        .apply(&mut page)
        .unwrap_err();

        assert_eq!(err, MutationError::DuplicateId(existing.id));
        assert_eq!(page.sections.len(), 4);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let mut page = page();
        let mutation = Mutation::ToggleSectionVisibility {
            id: "missing".to_string(),
        };
        assert_eq!(
            mutation.apply(&mut page),
            Err(MutationError::SectionNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_delete_missing_section_is_ok() {
        let mut page = page();
        let before = page.clone();
        Mutation::DeleteSection {
            id: "missing".to_string(),
        }
        .apply(&mut page)
        .unwrap();
        assert_eq!(page, before);
    }

    #[test]
    fn test_content_type_must_match() {
        let mut page = page();
        let hero_id = page.sections[0].id.clone();

        let err = Mutation::UpdateSectionContent {
            id: hero_id,
            content: SectionContent::empty(SectionType::Faq),
        }
        .apply(&mut page)
        .unwrap_err();

        assert_eq!(
            err,
            MutationError::ContentTypeMismatch {
                expected: SectionType::Hero,
                found: SectionType::Faq,
            }
        );
    }

    #[test]
    fn test_update_section_content_must_keep_type() {
        let mut page = page();
        let hero_id = page.sections[0].id.clone();

        let updates = SectionPatch {
            content: Some(SectionContent::empty(SectionType::Features)),
            ..Default::default()
        };
        let err = Mutation::UpdateSection { id: hero_id.clone(), updates }
            .apply(&mut page)
            .unwrap_err();

        assert!(matches!(err, MutationError::ContentTypeMismatch { expected: SectionType::Hero, .. }));
        assert_eq!(page.section(&hero_id).unwrap().section_type(), SectionType::Hero);
    }

    #[test]
    fn test_update_section_components_reject_ids_in_use() {
        let mut page = page();
        let hero_id = page.sections[0].id.clone();
        let other_id = page.sections[1].id.clone();

        let mut clash = Component::new(ComponentType::Text);
        clash.id = other_id.clone();
        let updates = SectionPatch {
            components: Some(vec![clash]),
            ..Default::default()
        };
        let err = Mutation::UpdateSection { id: hero_id.clone(), updates }
            .apply(&mut page)
            .unwrap_err();
        assert_eq!(err, MutationError::DuplicateId(other_id));

        // Repeating an ID inside the new list is rejected too
        let twin = Component::new(ComponentType::Text);
        let updates = SectionPatch {
            components: Some(vec![twin.clone(), twin.clone()]),
            ..Default::default()
        };
        let err = Mutation::UpdateSection { id: hero_id, updates }
            .apply(&mut page)
            .unwrap_err();
        assert_eq!(err, MutationError::DuplicateId(twin.id));
    }

    #[test]
    fn test_update_section_components_may_keep_own_ids() {
        let mut page = page();
        let hero_id = page.sections[0].id.clone();
        let kept = Component::new(ComponentType::Button);
        Mutation::AddComponent {
            section_id: hero_id.clone(),
            parent_id: None,
            component: kept.clone(),
            index: None,
        }
        .apply(&mut page)
        .unwrap();

        let fresh = Component::new(ComponentType::Text);
        let updates = SectionPatch {
            components: Some(vec![fresh.clone(), kept.clone()]),
            ..Default::default()
        };
        Mutation::UpdateSection { id: hero_id.clone(), updates }
            .apply(&mut page)
            .unwrap();

        assert_eq!(page.section(&hero_id).unwrap().components, vec![fresh, kept]);
    }

    #[test]
    fn test_patch_content_merges() {
        let mut page = page();
        let hero_id = page.sections[0].id.clone();

        let mut patch = Map::new();
        patch.insert("headline".to_string(), json!("Hello"));
        Mutation::PatchSectionContent {
            id: hero_id.clone(),
            patch,
        }
        .apply(&mut page)
        .unwrap();

        let hero = page.section(&hero_id).unwrap();
        assert_eq!(hero.content.headline(), Some("Hello"));
        assert_eq!(hero.content.to_value()["ctaText"], "Get Started Free");
    }

    #[test]
    fn test_nested_component_lifecycle() {
        let mut page = page();
        let section_id = page.sections[1].id.clone();
        let container = Component::new(ComponentType::Container);
        let container_id = container.id.clone();
        let child = Component::new(ComponentType::Text);
        let child_id = child.id.clone();

        Mutation::AddComponent {
            section_id: section_id.clone(),
            parent_id: None,
            component: container,
            index: None,
        }
        .apply(&mut page)
        .unwrap();

        Mutation::AddComponent {
            section_id: section_id.clone(),
            parent_id: Some(container_id.clone()),
            component: child,
            index: None,
        }
        .apply(&mut page)
        .unwrap();

        let section = page.section(&section_id).unwrap();
        assert_eq!(section.components[0].children[0].id, child_id);

        Mutation::DeleteComponent {
            section_id: section_id.clone(),
            component_id: child_id.clone(),
        }
        .apply(&mut page)
        .unwrap();

        let section = page.section(&section_id).unwrap();
        assert!(section.components[0].children.is_empty());
    }

    #[test]
    fn test_add_component_under_missing_parent_fails() {
        let mut page = page();
        let section_id = page.sections[0].id.clone();

        let err = Mutation::AddComponent {
            section_id,
            parent_id: Some("ghost".to_string()),
            component: Component::new(ComponentType::Text),
            index: None,
        }
        .apply(&mut page)
        .unwrap_err();

        assert_eq!(err, MutationError::ComponentNotFound("ghost".to_string()));
    }

    #[test]
    fn test_replace_page_keeps_identity() {
        let mut page = page();
        let (id, slug) = (page.id.clone(), page.slug.clone());
        let replacement = templates::pricing_page();

        Mutation::ReplacePage {
            page: replacement.clone(),
        }
        .apply(&mut page)
        .unwrap();

        assert_eq!(page.id, id);
        assert_eq!(page.slug, slug);
        assert_eq!(page.sections, replacement.sections);
        assert_eq!(page.name, "Pricing");
    }
}
