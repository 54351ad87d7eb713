//! Command surface tests
//!
//! This tests:
//! - Pre/postconditions of every editing command
//! - Stale-ID commands as silent no-ops
//! - Component tree commands
//! - UI-only commands leaving history alone

use serde_json::{json, Map};
use sitebuilder_editor::{export_page, import_page, EditMode, EditSession, EditorConfig};
use sitebuilder_schema::content::CtaContent;
use sitebuilder_schema::templates::{self, cta_section, faq_section, hero_section};
use sitebuilder_schema::{
    Component, ComponentPatch, ComponentStyles, ComponentType, NavbarPatch, SectionContent,
    SectionPatch, SectionStyles, SectionType,
};

fn session() -> EditSession {
    EditSession::with_default_site(EditorConfig::default())
}

fn first_id(session: &EditSession) -> String {
    session.current_page().sections[0].id.clone()
}

#[test]
fn test_add_section_defaults_to_end() {
    let mut session = session();
    let section = faq_section();
    let id = section.id.clone();

    session.add_section(section, None);

    let sections = &session.current_page().sections;
    assert_eq!(sections.last().map(|s| s.id.as_str()), Some(id.as_str()));
    assert_eq!(session.state().history.len(), 2);
}

#[test]
fn test_add_section_at_index() {
    let mut session = session();
    let section = cta_section("banner");
    let id = section.id.clone();

    session.add_section(section, Some(1));
    assert_eq!(session.current_page().sections[1].id, id);

    // Past-the-end indices append
    let tail = hero_section("minimal");
    let tail_id = tail.id.clone();
    session.add_section(tail, Some(99));
    assert_eq!(session.current_page().sections.last().unwrap().id, tail_id);
}

#[test]
fn test_adding_same_section_twice_is_rejected() {
    let mut session = session();
    let section = faq_section();

    session.add_section(section.clone(), None);
    let len = session.current_page().sections.len();
    session.add_section(section, None);

    assert_eq!(session.current_page().sections.len(), len);
    assert_eq!(session.state().history.len(), 2);
}

#[test]
fn test_update_section_merges_shallowly() {
    let mut session = session();
    let id = first_id(&session);
    let before = session.current_page().sections[0].clone();

    session.update_section(&id, SectionPatch::name("Top banner"));

    let after = &session.current_page().sections[0];
    assert_eq!(after.name, "Top banner");
    assert_eq!(after.variant, before.variant);
    assert_eq!(after.content, before.content);
    assert_eq!(after.id, id);
}

#[test]
fn test_update_section_swaps_content_of_same_type() {
    let mut session = session();
    let id = first_id(&session);
    let replacement = hero_section("minimal").content;

    session.update_section(
        &id,
        SectionPatch {
            content: Some(replacement.clone()),
            ..Default::default()
        },
    );

    assert_eq!(session.current_page().sections[0].content, replacement);
    assert!(session.can_undo());
}

#[test]
fn test_update_section_with_foreign_content_is_ignored() {
    let mut session = session();
    let id = first_id(&session);
    let before = session.state().clone();

    session.update_section(
        &id,
        SectionPatch {
            name: Some("Renamed".to_string()),
            content: Some(faq_section().content),
            ..Default::default()
        },
    );

    assert_eq!(session.state(), &before);
    assert_eq!(session.current_page().sections[0].section_type(), SectionType::Hero);
}

#[test]
fn test_update_section_components_must_use_fresh_ids() {
    let mut session = session();
    let id = first_id(&session);
    let other = session.current_page().sections[1].id.clone();
    let before = session.state().clone();

    let mut clash = Component::new(ComponentType::Text);
    clash.id = other;
    session.update_section(
        &id,
        SectionPatch {
            components: Some(vec![clash]),
            ..Default::default()
        },
    );
    assert_eq!(session.state(), &before);

    let fresh = Component::new(ComponentType::Text);
    session.update_section(
        &id,
        SectionPatch {
            components: Some(vec![fresh.clone()]),
            ..Default::default()
        },
    );
    assert_eq!(session.current_page().sections[0].components, vec![fresh]);
}

#[test]
fn test_patch_content_keeps_keys_without_a_field() {
    let mut session = session();
    let contact = templates::contact_section();
    let id = contact.id.clone();
    session.add_section(contact, None);
    let entries = session.state().history.len();

    let mut patch = Map::new();
    patch.insert("mapEmbed".to_string(), json!("https://maps.example/embed"));
    patch.insert("badge".to_string(), json!("Open now"));
    session.patch_section_content(&id, patch);

    assert_eq!(session.state().history.len(), entries + 1);
    let content = session.current_page().section(&id).unwrap().content.to_value();
    assert_eq!(content["mapEmbed"], "https://maps.example/embed");
    assert_eq!(content["badge"], "Open now");
    assert_eq!(content["email"], "hello@example.com");

    let json = export_page(session.current_page()).unwrap();
    assert_eq!(&import_page(&json).unwrap(), session.current_page());
    assert!(json.contains("Open now"));
}

#[test]
fn test_delete_section_always_records() {
    let mut session = session();
    let id = first_id(&session);

    session.delete_section(&id);
    assert!(session.current_page().section(&id).is_none());

    // Deletion never fails, so a missing ID still records an entry
    session.delete_section("missing");
    assert_eq!(session.state().history.len(), 3);
}

#[test]
fn test_toggle_visibility() {
    let mut session = session();
    let id = first_id(&session);

    session.toggle_section_visibility(&id);
    assert!(!session.current_page().sections[0].visible);
    session.toggle_section_visibility(&id);
    assert!(session.current_page().sections[0].visible);
    assert_eq!(session.state().history.len(), 3);
}

#[test]
fn test_update_section_styles_merges() {
    let mut session = session();
    let id = first_id(&session);
    let padding = session.current_page().sections[0].styles.padding.clone();

    session.update_section_styles(
        &id,
        SectionStyles {
            background_color: Some("#111827".to_string()),
            ..Default::default()
        },
    );

    let styles = &session.current_page().sections[0].styles;
    assert_eq!(styles.background_color.as_deref(), Some("#111827"));
    assert_eq!(styles.padding, padding);
}

#[test]
fn test_update_section_content_replaces() {
    let mut session = session();
    let cta_id = session.current_page().sections[3].id.clone();

    session.update_section_content(
        &cta_id,
        SectionContent::Cta(CtaContent {
            headline: "Ship it".to_string(),
            ..Default::default()
        }),
    );

    let SectionContent::Cta(content) = &session.current_page().sections[3].content else {
        panic!("expected cta content");
    };
    assert_eq!(content.headline, "Ship it");
    assert!(content.cta_text.is_empty());
}

#[test]
fn test_update_section_content_rejects_other_type() {
    let mut session = session();
    let cta_id = session.current_page().sections[3].id.clone();
    let before = session.state().clone();

    session.update_section_content(&cta_id, faq_section().content);

    assert_eq!(session.state(), &before);
}

#[test]
fn test_patch_section_content_keeps_other_keys() {
    let mut session = session();
    let cta_id = session.current_page().sections[3].id.clone();

    let patch = json!({ "headline": "Ship it" });
    session.patch_section_content(&cta_id, patch.as_object().cloned().unwrap());

    let SectionContent::Cta(content) = &session.current_page().sections[3].content else {
        panic!("expected cta content");
    };
    assert_eq!(content.headline, "Ship it");
    assert!(!content.cta_text.is_empty());
}

#[test]
fn test_component_tree_commands() {
    let mut session = session();
    let section_id = first_id(&session);

    let card = Component::new(ComponentType::Card);
    let card_id = card.id.clone();
    session.add_component(&section_id, None, card, None);

    let heading = Component::new(ComponentType::Heading).with_content("text", "Hello");
    let heading_id = heading.id.clone();
    let button = Component::new(ComponentType::Button).with_content("text", "Go");
    let button_id = button.id.clone();
    session.add_component(&section_id, Some(&card_id), heading, None);
    session.add_component(&section_id, Some(&card_id), button, None);

    session.reorder_components(&section_id, Some(&card_id), vec![button_id.clone(), heading_id.clone()]);
    let children: Vec<_> = session.current_page().sections[0].components[0]
        .children
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(children, vec![button_id.clone(), heading_id.clone()]);

    let mut content = serde_json::Map::new();
    content.insert("text".to_string(), json!("Hi"));
    session.update_component(
        &section_id,
        &heading_id,
        ComponentPatch {
            content: Some(content),
            ..Default::default()
        },
    );
    session.update_component_styles(
        &section_id,
        &heading_id,
        ComponentStyles {
            font_size: Some("2rem".to_string()),
            ..Default::default()
        },
    );

    session.select_component(Some(&heading_id));
    let selected = session.selected_component().unwrap();
    assert_eq!(selected.content["text"], json!("Hi"));
    assert_eq!(selected.styles.font_size.as_deref(), Some("2rem"));

    session.delete_component(&section_id, &card_id);
    assert!(session.current_page().sections[0].components.is_empty());
    assert!(session.selected_component().is_none());
    assert!(session.ui().selected_component_id.is_none());
}

#[test]
fn test_component_commands_on_missing_ids_are_silent() {
    let mut session = session();
    let section_id = first_id(&session);
    let before = session.state().clone();

    session.add_component("missing", None, Component::new(ComponentType::Text), None);
    session.add_component(&section_id, Some("missing"), Component::new(ComponentType::Text), None);
    session.update_component(&section_id, "missing", ComponentPatch::default());
    session.update_component_styles(&section_id, "missing", ComponentStyles::default());
    session.delete_component("missing", "missing");

    assert_eq!(session.current_page(), &before.current_page);
    assert_eq!(session.state().history.len(), before.history.len());
}

#[test]
fn test_update_navbar() {
    let mut session = session();
    let navbar_id = session.current_page().navbar.id.clone();

    session.update_navbar(NavbarPatch {
        links: Some(vec![]),
        ..Default::default()
    });

    assert!(session.current_page().navbar.links.is_empty());
    assert_eq!(session.current_page().navbar.id, navbar_id);
    assert!(session.can_undo());
}

#[test]
fn test_replace_page_keeps_identity() {
    let mut session = session();
    let id = session.current_page().id.clone();

    session.replace_page(templates::pricing_page());

    assert_eq!(session.current_page().id, id);
    assert_eq!(session.current_page().slug, "/");
    assert_eq!(session.pages()[0], *session.current_page());
}

#[test]
fn test_ui_commands_do_not_touch_history() {
    let mut session = session();
    let id = first_id(&session);

    session.select_section(Some(&id));
    session.set_edit_mode(EditMode::Layout);
    session.set_zoom(250);
    session.toggle_grid(None);
    session.set_dragging(true);
    session.set_dragging(false);

    let ui = session.ui();
    assert_eq!(ui.edit_mode, EditMode::Layout);
    assert_eq!(ui.zoom, 250);
    assert!(ui.show_grid);
    assert!(!session.can_undo());

    session.set_preview_mode(true);
    assert!(session.ui().preview_mode);
    assert!(session.selected_section().is_none());
}

#[test]
fn test_selecting_section_clears_component() {
    let mut session = session();
    let id = first_id(&session);

    session.select_component(Some("whatever"));
    session.select_section(Some(&id));

    assert!(session.ui().selected_component_id.is_none());
}
