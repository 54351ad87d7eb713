#![cfg(target_arch = "wasm32")]

use serde_json::Value;
use sitebuilder_schema::templates;
use sitebuilder_wasm::{create_section_js, variants_for_js, WasmEditor};
use wasm_bindgen_test::wasm_bindgen_test;

fn view(editor: &WasmEditor) -> Value {
    serde_json::from_str(&editor.view().expect("view should serialize")).expect("view is JSON")
}

#[wasm_bindgen_test]
fn editor_dispatch_and_undo_through_js_surface() {
    let mut editor = WasmEditor::new(None, None).expect("default editor");
    let state = view(&editor);
    let id = state["currentPage"]["sections"][0]["id"].as_str().unwrap().to_string();

    let action = format!(r#"{{ "type": "mutate", "mutation": {{ "type": "deleteSection", "id": "{}" }} }}"#, id);
    assert!(editor.dispatch(&action).expect("action parses"));
    assert_eq!(view(&editor)["canUndo"], true);

    editor.undo();
    let state = view(&editor);
    assert_eq!(state["currentPage"]["sections"][0]["id"], id.as_str());
    assert_eq!(state["canRedo"], true);

    assert!(editor.dispatch(r#"{ "type": "bogus" }"#).is_err());
}

#[wasm_bindgen_test]
fn editor_pages_and_export() {
    let mut editor = WasmEditor::new(None, Some(r#"{ "initialZoom": 150 }"#.to_string())).expect("editor");
    assert_eq!(view(&editor)["editorUiState"]["zoom"], 150);

    let terms = serde_json::to_string(&templates::terms_page()).unwrap();
    editor.create_page(&terms).expect("page parses");
    assert_eq!(editor.export_file_name(), "terms-page.json");

    editor.update_page_name("/terms", "Legal");
    let exported: Value = serde_json::from_str(&editor.export_page().expect("export")).unwrap();
    assert_eq!(exported["name"], "Legal");

    editor.navigate("/our-team");
    assert_eq!(view(&editor)["currentPage"]["name"], "Our Team");
}

#[wasm_bindgen_test]
fn section_factory_and_catalog() {
    let section: Value = serde_json::from_str(&create_section_js("faq").expect("known type")).unwrap();
    assert_eq!(section["type"], "faq");

    let variants: Value = serde_json::from_str(&variants_for_js("cta").expect("known type")).unwrap();
    assert!(variants.as_array().is_some_and(|v| !v.is_empty()));

    assert!(create_section_js("carousel").is_err());
}
