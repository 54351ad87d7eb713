//! # Site Builder Schema
//!
//! Data model for the site builder: pages, sections, components, navbar and
//! footer, plus the template factories that seed new sites.
//!
//! ## Shape
//!
//! ```text
//! Page
//!  ├── navbar: NavbarConfig      (logo, links)
//!  ├── sections: Vec<Section>    (order = list position)
//!  │     ├── content: SectionContent   (tagged by section type)
//!  │     └── components: Vec<Component> (recursive tree)
//!  ├── footer: FooterConfig      (columns, social links)
//!  └── meta, global_styles
//! ```
//!
//! Every value here is plain owned data. Cloning a page yields a fully
//! independent copy, which is what the editor's history snapshots rely on.
//!
//! ## Usage
//!
//! ```rust
//! use sitebuilder_schema::{templates, SectionType};
//!
//! let mut page = templates::home_page();
//! page.sections.push(templates::create_section(SectionType::Pricing));
//!
//! let json = serde_json::to_string_pretty(&page).unwrap();
//! assert!(json.contains("\"type\": \"pricing\""));
//! ```

use thiserror::Error;

/// Copy every `Some` field of `$patch` onto `$target`
macro_rules! merge_options {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = Some(value);
            }
        )+
    };
}

pub mod chrome;
pub mod component;
pub mod content;
pub mod ids;
pub mod page;
pub mod section;
pub mod templates;
pub mod variants;

pub use chrome::{
    FooterColumn, FooterConfig, FooterLink, FooterPatch, FooterStyle, FooterStyles, Logo,
    NavLink, NavbarConfig, NavbarPatch, NavbarStyle, NavbarStyles, SocialLink, SocialPlatform,
};
pub use component::{Component, ComponentPatch, ComponentStyles, ComponentType};
pub use content::{Price, SectionContent};
pub use ids::new_id;
pub use page::{GlobalStyles, Page, PageMeta};
pub use section::{Section, SectionPatch, SectionStyles, SectionType};
pub use variants::{default_variant, variants_for, VariantOption};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Invalid {section_type} content: {reason}")]
    InvalidContent {
        section_type: SectionType,
        reason: String,
    },

    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),
}
