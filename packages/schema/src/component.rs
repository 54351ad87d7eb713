//! # Components
//!
//! Finer-grained elements inside a section. Components form a tree where a
//! parent owns its children outright: there are no back-references, so a
//! subtree can be cloned, moved or dropped as a plain value.

use crate::ids::new_id;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Text,
    Heading,
    Paragraph,
    Button,
    Image,
    Icon,
    Divider,
    Spacer,
    Container,
    Grid,
    Card,
}

impl ComponentType {
    /// Whether this component kind is expected to hold children
    pub fn is_container(self) -> bool {
        matches!(self, ComponentType::Container | ComponentType::Grid | ComponentType::Card)
    }
}

/// Inline styling for a component. Unset fields fall back to the renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<String>,
}

impl ComponentStyles {
    /// Shallow merge: every field set in `patch` overrides the current value
    pub fn merge(&mut self, patch: ComponentStyles) {
        merge_options!(
            self,
            patch,
            background_color,
            text_color,
            font_size,
            font_weight,
            padding,
            margin,
            border_radius,
            border,
            shadow,
            width,
            height,
            opacity,
            custom_classes
        );
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,

    #[serde(rename = "type")]
    pub component_type: ComponentType,

    #[serde(default)]
    pub content: Map<String, Value>,

    #[serde(default)]
    pub styles: ComponentStyles,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    /// Create an empty component of the given type with a fresh ID
    pub fn new(component_type: ComponentType) -> Self {
        Self {
            id: new_id(),
            component_type,
            content: Map::new(),
            styles: ComponentStyles::default(),
            children: Vec::new(),
        }
    }

    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Deep copy with a fresh ID on this component and every descendant
    pub fn with_fresh_ids(&self) -> Component {
        Component {
            id: new_id(),
            component_type: self.component_type,
            content: self.content.clone(),
            styles: self.styles.clone(),
            children: self.children.iter().map(Component::with_fresh_ids).collect(),
        }
    }

    /// Collect this component's ID and all descendant IDs (pre-order)
    pub fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.id.clone());
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}

/// Shallow update for a component. `id` is deliberately absent: component IDs never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub component_type: Option<ComponentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<ComponentStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
}

impl ComponentPatch {
    pub fn is_empty(&self) -> bool {
        self.component_type.is_none()
            && self.content.is_none()
            && self.styles.is_none()
            && self.children.is_none()
    }

    pub fn apply_to(self, component: &mut Component) {
        if let Some(component_type) = self.component_type {
            component.component_type = component_type;
        }
        if let Some(content) = self.content {
            component.content = content;
        }
        if let Some(styles) = self.styles {
            component.styles = styles;
        }
        if let Some(children) = self.children {
            component.children = children;
        }
    }
}

// Tree helpers over a list of sibling components

/// Depth-first search for a component by ID
pub fn find_component<'a>(components: &'a [Component], id: &str) -> Option<&'a Component> {
    for component in components {
        if component.id == id {
            return Some(component);
        }
        if let Some(found) = find_component(&component.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_component_mut<'a>(
    components: &'a mut [Component],
    id: &str,
) -> Option<&'a mut Component> {
    for component in components {
        if component.id == id {
            return Some(component);
        }
        if let Some(found) = find_component_mut(&mut component.children, id) {
            return Some(found);
        }
    }
    None
}

/// Detach a component (and its subtree) from wherever it sits in the tree
pub fn remove_component(components: &mut Vec<Component>, id: &str) -> Option<Component> {
    if let Some(pos) = components.iter().position(|c| c.id == id) {
        return Some(components.remove(pos));
    }

    for component in components.iter_mut() {
        if let Some(removed) = remove_component(&mut component.children, id) {
            return Some(removed);
        }
    }

    None
}

/// Rebuild a sibling list in the order given by `ids`.
///
/// IDs that are not present are skipped, and siblings not mentioned are
/// dropped, matching the section reorder contract.
pub fn reorder_by_ids<T, F>(items: Vec<T>, ids: &[String], id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(ids.len());

    for id in ids {
        let found = slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|item| id_of(item) == id.as_str()));
        if let Some(pos) = found {
            if let Some(item) = slots[pos].take() {
                ordered.push(item);
            }
        }
    }

    ordered
}
