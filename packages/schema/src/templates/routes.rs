//! Route-to-page mapping.
//!
//! Each known route has a factory producing its page. Unknown routes get a
//! generic hero + CTA stub named after the last path segment.

use super::pages::*;
use super::sections::{cta_section, hero_section};
use crate::page::Page;

type PageFactory = fn() -> Page;

/// Routes seeded into a fresh site, in navigation order
const SEEDED: &[(&str, PageFactory)] = &[
    ("/", home_page),
    ("/features", features_page),
    ("/services", services_page),
    ("/pricing", pricing_page),
    ("/contact", contact_page),
    ("/start", start_page),
    ("/templates", templates_page),
    ("/about", about_page),
    ("/blog", blog_page),
    ("/careers", careers_page),
    ("/help", help_page),
    ("/status", status_page),
];

/// Known routes that are only created on first visit
const ON_DEMAND: &[(&str, PageFactory)] = &[("/privacy", privacy_page), ("/terms", terms_page)];

fn known_factory(slug: &str) -> Option<PageFactory> {
    SEEDED
        .iter()
        .chain(ON_DEMAND)
        .find(|(route, _)| *route == slug)
        .map(|(_, factory)| *factory)
}

pub fn is_known_route(slug: &str) -> bool {
    known_factory(slug).is_some()
}

/// Every route with a dedicated factory
pub fn known_routes() -> impl Iterator<Item = &'static str> {
    SEEDED.iter().chain(ON_DEMAND).map(|(route, _)| *route)
}

/// Fresh site: one page per seeded route, home first
pub fn default_site() -> Vec<Page> {
    SEEDED.iter().map(|(_, factory)| factory()).collect()
}

/// Page for a route: the dedicated factory if one exists, otherwise a stub
pub fn page_for_route(slug: &str) -> Page {
    match known_factory(slug) {
        Some(factory) => factory(),
        None => page(
            &guess_page_name(slug),
            slug,
            vec![hero_section("split"), cta_section("simple")],
        ),
    }
}

/// Display name from a slug: `/our-team` -> "Our Team", `/` -> "Home"
pub fn guess_page_name(slug: &str) -> String {
    let segment = slug
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    let words: Vec<String> = segment
        .split(|c| c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        "Home".to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
