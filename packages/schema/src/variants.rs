//! Rendering variants available per section type.
//!
//! A variant is an open string tag; the catalog below lists the ones the
//! stock renderers know about. The first entry of each list is the default.

use crate::section::SectionType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn option(id: &'static str, name: &'static str, description: &'static str) -> VariantOption {
    VariantOption { id, name, description }
}

/// Variant used when a type has no catalog
pub const FALLBACK_VARIANT: &str = "default";

const HERO: &[VariantOption] = &[
    option("split", "Split Layout", "Content on left, image on right"),
    option("centered", "Centered", "Centered content with image below"),
    option("video", "Video Background", "Full-screen video background"),
    option("minimal", "Minimal", "Clean and simple layout"),
    option("gradient", "Bold Gradient", "Animated gradient with large text"),
];

const FEATURES: &[VariantOption] = &[
    option("grid", "Grid Layout", "3-column grid of feature cards"),
    option("list", "List View", "Vertical list with icons"),
    option("cards", "Card Stack", "Stacked cards with shadows"),
    option("icons", "Icon Focus", "Large icons with minimal text"),
];

const CTA: &[VariantOption] = &[
    option("simple", "Simple CTA", "Centered text with buttons"),
    option("split", "Split CTA", "Text on left, form on right"),
    option("banner", "Banner Style", "Horizontal banner layout"),
    option("floating", "Floating Card", "Elevated card with shadow"),
];

const TESTIMONIALS: &[VariantOption] = &[
    option("cards", "Card Grid", "Multiple testimonial cards"),
    option("carousel", "Carousel", "Sliding testimonial carousel"),
    option("quote", "Large Quote", "Single featured testimonial"),
    option("minimal", "Minimal", "Simple text-based layout"),
];

const PRICING: &[VariantOption] = &[
    option("cards", "Pricing Cards", "Side-by-side pricing cards"),
    option("table", "Comparison Table", "Feature comparison table"),
    option("toggle", "Toggle View", "Monthly/yearly toggle"),
];

const GALLERY: &[VariantOption] = &[
    option("grid", "Grid Gallery", "Uniform grid layout"),
    option("masonry", "Masonry", "Pinterest-style masonry"),
    option("carousel", "Carousel", "Horizontal image slider"),
];

const SERVICES: &[VariantOption] = &[
    option("cards", "Service Cards", "Image cards with descriptions"),
    option("list", "Service List", "Vertical list layout"),
    option("grid", "Icon Grid", "Grid with service icons"),
];

const STATS: &[VariantOption] = &[
    option("horizontal", "Horizontal", "Stats in a row"),
    option("cards", "Stat Cards", "Individual stat cards"),
    option("counter", "Animated Counter", "Counting animation"),
];

const TEAM: &[VariantOption] = &[
    option("grid", "Team Grid", "Grid of team cards"),
    option("carousel", "Team Carousel", "Sliding team members"),
    option("list", "Team List", "Vertical team list"),
];

const FAQ: &[VariantOption] = &[
    option("accordion", "Accordion", "Expandable FAQ items"),
    option("grid", "FAQ Grid", "Two-column FAQ grid"),
    option("tabs", "Tabbed FAQ", "Category tabs with FAQs"),
];

const CONTACT: &[VariantOption] = &[
    option("split", "Split Layout", "Form and info side by side"),
    option("centered", "Centered", "Centered contact form"),
    option("map", "With Map", "Form with embedded map"),
];

const LOGO_CLOUD: &[VariantOption] = &[
    option("simple", "Simple Row", "Logos in a single row"),
    option("scroll", "Scrolling", "Infinite scrolling logos"),
    option("grid", "Logo Grid", "Logos in a grid"),
];

pub fn variants_for(section_type: SectionType) -> &'static [VariantOption] {
    match section_type {
        SectionType::Hero => HERO,
        SectionType::Features => FEATURES,
        SectionType::Cta => CTA,
        SectionType::Testimonials => TESTIMONIALS,
        SectionType::Pricing => PRICING,
        SectionType::Gallery => GALLERY,
        SectionType::Services => SERVICES,
        SectionType::Stats => STATS,
        SectionType::Team => TEAM,
        SectionType::Faq => FAQ,
        SectionType::Contact => CONTACT,
        SectionType::LogoCloud => LOGO_CLOUD,
        SectionType::Blog | SectionType::Content | SectionType::Custom => &[],
    }
}

pub fn default_variant(section_type: SectionType) -> &'static str {
    variants_for(section_type)
        .first()
        .map(|v| v.id)
        .unwrap_or(FALLBACK_VARIANT)
}

pub fn is_known_variant(section_type: SectionType, variant: &str) -> bool {
    variants_for(section_type).iter().any(|v| v.id == variant)
}
