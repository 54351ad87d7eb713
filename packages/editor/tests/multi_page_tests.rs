//! Multi-page editing tests
//!
//! This tests:
//! - Page creation and slug uniqueness
//! - Switching pages and per-visit history
//! - Rename propagation into every navbar and footer
//! - Route navigation with on-demand page seeding

use sitebuilder_editor::{EditSession, EditorConfig};
use sitebuilder_schema::templates::{self, faq_section};
use sitebuilder_schema::Page;

fn session() -> EditSession {
    EditSession::with_default_site(EditorConfig::default())
}

fn link_labels<'a>(page: &'a Page, href: &str) -> Vec<&'a str> {
    let nav = page.navbar.links.iter().filter(|l| l.href == href).map(|l| l.label.as_str());
    let footer = page
        .footer
        .columns
        .iter()
        .flat_map(|c| c.links.iter())
        .filter(|l| l.href == href)
        .map(|l| l.label.as_str());
    nav.chain(footer).collect()
}

#[test]
fn test_create_page_becomes_active_with_fresh_history() {
    let mut session = session();
    let id = session.current_page().sections[0].id.clone();
    session.delete_section(&id);
    assert!(session.can_undo());

    let privacy = templates::privacy_page();
    session.create_page(privacy.clone());

    assert_eq!(session.current_page(), &privacy);
    assert_eq!(session.pages().last(), Some(&privacy));
    assert!(!session.can_undo());
    assert_eq!(session.state().history.len(), 1);
}

#[test]
fn test_create_page_with_taken_slug_is_ignored() {
    let mut session = session();
    let pages = session.pages().to_vec();
    let active = session.current_page().clone();

    session.create_page(templates::pricing_page());

    assert_eq!(session.pages(), pages.as_slice());
    assert_eq!(session.current_page(), &active);
}

#[test]
fn test_rename_propagates_to_every_page() {
    let mut session = session();

    session.update_page_name("/about", "Our Story");

    let about = session.pages().iter().find(|p| p.slug == "/about").unwrap();
    assert_eq!(about.name, "Our Story");

    for page in session.pages() {
        let labels = link_labels(page, "/about");
        assert!(!labels.is_empty(), "{} should link to /about", page.slug);
        assert!(labels.iter().all(|l| *l == "Our Story"), "{}: {:?}", page.slug, labels);
    }

    // The active page is relabeled too, and the href is untouched
    let home = session.current_page();
    assert!(home.footer.columns.iter().flat_map(|c| &c.links).any(|l| l.href == "/about" && l.label == "Our Story"));
    assert!(!session.can_undo());
}

#[test]
fn test_rename_leaves_other_links_alone() {
    let mut session = session();
    let before: Vec<_> = session.pages().iter().map(|p| link_labels(p, "/pricing").len()).collect();

    session.update_page_name("/about", "Our Story");

    for (page, count) in session.pages().iter().zip(before) {
        let labels = link_labels(page, "/pricing");
        assert_eq!(labels.len(), count);
        assert!(labels.iter().all(|l| *l != "Our Story"));
    }
}

#[test]
fn test_rename_survives_undo() {
    let mut session = session();
    let id = session.current_page().sections[0].id.clone();

    session.delete_section(&id);
    session.update_page_name("/", "Start");
    session.update_page_name("/about", "Our Story");
    session.undo();

    let home = session.current_page();
    assert_eq!(home.name, "Start");
    assert!(home.section(&id).is_some());
    let labels = link_labels(home, "/about");
    assert!(!labels.is_empty());
    assert!(labels.iter().all(|l| *l == "Our Story"));
}

#[test]
fn test_rename_unknown_slug_changes_nothing() {
    let mut session = session();
    let before = session.state().clone();

    session.update_page_name("/nowhere", "Nowhere");

    assert_eq!(session.state(), &before);
}

#[test]
fn test_edits_survive_switching_pages() {
    let mut session = session();
    session.switch_page("/pricing");
    session.add_section(faq_section(), None);
    let edited = session.current_page().clone();

    session.switch_page("/");
    assert_eq!(session.current_page().slug, "/");
    assert!(!session.can_undo());

    session.switch_page("/pricing");
    assert_eq!(session.current_page(), &edited);
    assert!(!session.can_undo());
}

#[test]
fn test_switch_to_unknown_slug_is_ignored() {
    let mut session = session();
    let before = session.state().clone();

    session.switch_page("/nowhere");

    assert_eq!(session.state(), &before);
}

#[test]
fn test_navigate_known_and_stub_routes() {
    let mut session = session();
    let count = session.pages().len();

    session.navigate("/pricing");
    assert_eq!(session.current_page().slug, "/pricing");
    assert_eq!(session.pages().len(), count);

    session.navigate("/terms");
    assert_eq!(session.current_page().name, "Terms of Service");
    assert_eq!(session.pages().len(), count + 1);

    session.navigate("/our-team");
    let stub = session.current_page();
    assert_eq!(stub.slug, "/our-team");
    assert_eq!(stub.name, "Our Team");
    assert_eq!(stub.sections.len(), 2);
    assert_eq!(session.pages().len(), count + 2);
}

#[test]
fn test_injected_pages_are_deduplicated() {
    let home = templates::home_page();
    let mut duplicate = templates::pricing_page();
    duplicate.name = "Pricing again".to_string();

    let session = EditSession::new(
        home,
        vec![templates::pricing_page(), duplicate],
        EditorConfig::default(),
    );

    assert_eq!(session.pages().len(), 2);
    assert_eq!(session.pages()[1].name, "Pricing");
}
