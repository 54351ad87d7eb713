//! # Sections
//!
//! A section is one visually distinct block of a page. Its position is its
//! index in the page's section list; there is no stored order field.

use crate::component::Component;
use crate::content::SectionContent;
use crate::ids::new_id;
use crate::variants::default_variant;
use crate::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    Features,
    Services,
    Cta,
    Testimonials,
    Gallery,
    Pricing,
    Contact,
    Stats,
    Team,
    Faq,
    #[serde(rename = "logocloud")]
    LogoCloud,
    Blog,
    Content,
    Custom,
}

impl SectionType {
    pub const ALL: [SectionType; 15] = [
        SectionType::Hero,
        SectionType::Features,
        SectionType::Services,
        SectionType::Cta,
        SectionType::Testimonials,
        SectionType::Gallery,
        SectionType::Pricing,
        SectionType::Contact,
        SectionType::Stats,
        SectionType::Team,
        SectionType::Faq,
        SectionType::LogoCloud,
        SectionType::Blog,
        SectionType::Content,
        SectionType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Services => "services",
            SectionType::Cta => "cta",
            SectionType::Testimonials => "testimonials",
            SectionType::Gallery => "gallery",
            SectionType::Pricing => "pricing",
            SectionType::Contact => "contact",
            SectionType::Stats => "stats",
            SectionType::Team => "team",
            SectionType::Faq => "faq",
            SectionType::LogoCloud => "logocloud",
            SectionType::Blog => "blog",
            SectionType::Content => "content",
            SectionType::Custom => "custom",
        }
    }

    /// Display label used for newly created sections of this type
    pub fn default_name(self) -> &'static str {
        match self {
            SectionType::Hero => "Hero Section",
            SectionType::Features => "Features Section",
            SectionType::Services => "Services Section",
            SectionType::Cta => "Call to Action",
            SectionType::Testimonials => "Testimonials",
            SectionType::Gallery => "Gallery",
            SectionType::Pricing => "Pricing",
            SectionType::Contact => "Contact",
            SectionType::Stats => "Stats",
            SectionType::Team => "Team",
            SectionType::Faq => "FAQ",
            SectionType::LogoCloud => "Logo Cloud",
            SectionType::Blog => "Blog",
            SectionType::Content => "Content",
            SectionType::Custom => "Custom Section",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownSectionType(s.to_string()))
    }
}

/// Section-level styling. Unset fields fall back to the renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_gradient: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_primary_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_primary_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_secondary_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_secondary_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<String>,
}

impl SectionStyles {
    /// Shallow merge: every field set in `patch` overrides the current value
    pub fn merge(&mut self, patch: SectionStyles) {
        merge_options!(
            self,
            patch,
            background_color,
            background_image,
            background_gradient,
            use_gradient,
            padding,
            min_height,
            heading_color,
            paragraph_color,
            button_primary_bg,
            button_primary_text,
            button_secondary_bg,
            button_secondary_text,
            custom_classes
        );
    }
}

/// A page section.
///
/// The section type is not stored separately: it is always the type of
/// `content`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSection", into = "RawSection")]
pub struct Section {
    pub id: String,
    pub variant: String,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    pub styles: SectionStyles,
    pub content: SectionContent,
    pub components: Vec<Component>,
}

impl Section {
    /// New visible, unlocked section with the default variant and label for its type
    pub fn new(content: SectionContent) -> Self {
        let section_type = content.section_type();
        Self {
            id: new_id(),
            variant: default_variant(section_type).to_string(),
            name: section_type.default_name().to_string(),
            visible: true,
            locked: false,
            styles: SectionStyles::default(),
            content,
            components: Vec::new(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_styles(mut self, styles: SectionStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn section_type(&self) -> SectionType {
        self.content.section_type()
    }

    /// Copy with fresh IDs on the section, its content items and its whole component tree
    pub fn duplicate(&self) -> Section {
        let mut content = self.content.clone();
        content.regenerate_ids();

        Section {
            id: new_id(),
            variant: self.variant.clone(),
            name: format!("{} (Copy)", self.name),
            visible: self.visible,
            locked: self.locked,
            styles: self.styles.clone(),
            content,
            components: self.components.iter().map(Component::with_fresh_ids).collect(),
        }
    }

    /// Every component ID in this section's tree
    pub fn component_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for component in &self.components {
            component.collect_ids(&mut ids);
        }
        ids
    }
}

/// Wire shape of a section: `type` and `content` side by side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    section_type: SectionType,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    styles: SectionStyles,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    components: Vec<Component>,
}

fn default_true() -> bool {
    true
}

impl TryFrom<RawSection> for Section {
    type Error = SchemaError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let content = SectionContent::from_value(raw.section_type, raw.content)?;
        Ok(Section {
            id: raw.id,
            variant: raw
                .variant
                .unwrap_or_else(|| default_variant(raw.section_type).to_string()),
            name: raw
                .name
                .unwrap_or_else(|| raw.section_type.default_name().to_string()),
            visible: raw.visible,
            locked: raw.locked,
            styles: raw.styles,
            content,
            components: raw.components,
        })
    }
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        RawSection {
            id: section.id,
            section_type: section.content.section_type(),
            variant: Some(section.variant),
            name: Some(section.name),
            visible: section.visible,
            locked: section.locked,
            styles: section.styles,
            content: section.content.to_value(),
            components: section.components,
        }
    }
}

/// Shallow update for a section. `id` is deliberately absent: section IDs never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<SectionStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

impl SectionPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn variant(variant: impl Into<String>) -> Self {
        Self {
            variant: Some(variant.into()),
            ..Default::default()
        }
    }

    /// Apply onto a section; fields left as `None` are untouched
    pub fn apply_to(self, section: &mut Section) {
        if let Some(variant) = self.variant {
            section.variant = variant;
        }
        if let Some(name) = self.name {
            section.name = name;
        }
        if let Some(visible) = self.visible {
            section.visible = visible;
        }
        if let Some(locked) = self.locked {
            section.locked = locked;
        }
        if let Some(styles) = self.styles {
            section.styles = styles;
        }
        if let Some(content) = self.content {
            section.content = content;
        }
        if let Some(components) = self.components {
            section.components = components;
        }
    }
}

// `SectionContent` has no standalone wire form; inside a patch it travels as
// `{ "type": ..., "content": ... }` so the tag is never lost.
impl Serialize for SectionContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TaggedContent {
            section_type: self.section_type(),
            content: self.to_value(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SectionContent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tagged = TaggedContent::deserialize(deserializer)?;
        SectionContent::from_value(tagged.section_type, tagged.content)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct TaggedContent {
    #[serde(rename = "type")]
    section_type: SectionType,
    #[serde(default)]
    content: Value,
}
