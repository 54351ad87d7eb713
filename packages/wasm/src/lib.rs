//! Browser bindings: one [`WasmEditor`] per editor instance, JSON in and out.
//!
//! The presentation layer constructs the editor with its pages and config,
//! reads state back as JSON and requests changes by dispatching actions.

use serde::Serialize;
use sitebuilder_editor::{Action, EditSession, EditorConfig, EditorUiState};
use sitebuilder_schema::{templates, variants_for, Page, SectionType};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Read-only view handed to the presentation layer
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditorView<'a> {
    current_page: &'a Page,
    editor_ui_state: &'a EditorUiState,
    can_undo: bool,
    can_redo: bool,
}

#[wasm_bindgen]
pub struct WasmEditor {
    session: EditSession,
}

impl WasmEditor {
    fn build(pages_json: Option<String>, config_json: Option<String>) -> Result<WasmEditor, String> {
        let config: EditorConfig = match config_json {
            Some(json) => serde_json::from_str(&json).map_err(|e| format!("Config error: {}", e))?,
            None => EditorConfig::default(),
        };
        let pages: Vec<Page> = match pages_json {
            Some(json) => serde_json::from_str(&json).map_err(|e| format!("Pages error: {}", e))?,
            None => templates::default_site(),
        };
        Ok(WasmEditor {
            session: EditSession::from_pages(pages, config),
        })
    }

    fn dispatch_json(&mut self, action_json: &str) -> Result<bool, String> {
        let action: Action =
            serde_json::from_str(action_json).map_err(|e| format!("Action error: {}", e))?;
        Ok(self.session.dispatch(action))
    }

    fn view_json(&self) -> Result<String, String> {
        let view = EditorView {
            current_page: self.session.current_page(),
            editor_ui_state: self.session.ui(),
            can_undo: self.session.can_undo(),
            can_redo: self.session.can_redo(),
        };
        serde_json::to_string(&view).map_err(|e| format!("Serialization error: {}", e))
    }

    fn create_page_json(&mut self, page_json: &str) -> Result<(), String> {
        let page: Page = serde_json::from_str(page_json).map_err(|e| format!("Page error: {}", e))?;
        self.session.create_page(page);
        Ok(())
    }
}

#[wasm_bindgen]
impl WasmEditor {
    /// Editor over `pagesJson` (an array of pages, first one active), or the stock site
    #[wasm_bindgen(constructor)]
    pub fn new(pages_json: Option<String>, config_json: Option<String>) -> Result<WasmEditor, JsValue> {
        Self::build(pages_json, config_json).map_err(js_err)
    }

    /// Apply one action; returns whether it changed anything
    pub fn dispatch(&mut self, action_json: &str) -> Result<bool, JsValue> {
        self.dispatch_json(action_json).map_err(js_err)
    }

    /// `{ currentPage, editorUiState, canUndo, canRedo }` as JSON
    pub fn view(&self) -> Result<String, JsValue> {
        self.view_json().map_err(js_err)
    }

    #[wasm_bindgen(js_name = pages)]
    pub fn pages_js(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.pages()).map_err(|e| js_err(e.to_string()))
    }

    pub fn undo(&mut self) {
        self.session.undo();
    }

    pub fn redo(&mut self) {
        self.session.redo();
    }

    #[wasm_bindgen(js_name = createPage)]
    pub fn create_page(&mut self, page_json: &str) -> Result<(), JsValue> {
        self.create_page_json(page_json).map_err(js_err)
    }

    #[wasm_bindgen(js_name = updatePageName)]
    pub fn update_page_name(&mut self, slug: &str, name: &str) {
        self.session.update_page_name(slug, name);
    }

    pub fn navigate(&mut self, slug: &str) {
        self.session.navigate(slug);
    }

    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, section_id: &str) {
        self.session.begin_drag(section_id);
    }

    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&mut self, over_id: &str) {
        self.session.drag_over(over_id);
    }

    #[wasm_bindgen(js_name = finishDrag)]
    pub fn finish_drag(&mut self) {
        self.session.finish_drag();
    }

    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self) {
        self.session.cancel_drag();
    }

    /// Pretty JSON of the current page
    #[wasm_bindgen(js_name = exportPage)]
    pub fn export_page(&self) -> Result<String, JsValue> {
        self.session.export_current().map_err(|e| js_err(e.to_string()))
    }

    #[wasm_bindgen(js_name = exportFileName)]
    pub fn export_file_name(&self) -> String {
        self.session.export_file_name()
    }
}

fn section_json(section_type: &str) -> Result<String, String> {
    let section_type: SectionType = section_type.parse().map_err(|e| format!("{}", e))?;
    serde_json::to_string(&templates::create_section(section_type)).map_err(|e| e.to_string())
}

fn variants_json(section_type: &str) -> Result<String, String> {
    let section_type: SectionType = section_type.parse().map_err(|e| format!("{}", e))?;
    serde_json::to_string(variants_for(section_type)).map_err(|e| e.to_string())
}

/// A new section of the given type, with fresh IDs, as JSON
#[wasm_bindgen(js_name = createSection)]
pub fn create_section_js(section_type: &str) -> Result<String, JsValue> {
    section_json(section_type).map_err(js_err)
}

/// The variant catalog for a section type, as JSON
#[wasm_bindgen(js_name = variantsFor)]
pub fn variants_for_js(section_type: &str) -> Result<String, JsValue> {
    variants_json(section_type).map_err(js_err)
}
