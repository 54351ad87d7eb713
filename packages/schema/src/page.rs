use crate::chrome::{FooterConfig, NavbarConfig};
use crate::section::Section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Top-level editable document: navbar + ordered sections + footer + metadata.
///
/// `slug` is the route key (`/`, `/pricing`, ...) and is unique across a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub meta: PageMeta,
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub footer: FooterConfig,
    #[serde(default)]
    pub global_styles: GlobalStyles,
}

impl Page {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Relabel every navbar and footer link pointing at `href`; returns how many changed
    pub fn relabel_links(&mut self, href: &str, label: &str) -> usize {
        self.navbar.relabel_links(href, label) + self.footer.relabel_links(href, label)
    }

    /// Whether `id` is used by a section or any component on this page
    pub fn contains_id(&self, id: &str) -> bool {
        self.sections
            .iter()
            .any(|s| s.id == id || s.component_ids().iter().any(|c| c == id))
    }
}
