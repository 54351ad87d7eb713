use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: u16 = 25;
pub const MAX_ZOOM: u16 = 400;
pub const DEFAULT_ZOOM: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    Content,
    Layout,
}

/// Editor chrome state. Never recorded in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorUiState {
    pub selected_section_id: Option<String>,
    pub selected_component_id: Option<String>,
    pub edit_mode: EditMode,
    pub is_dragging: bool,
    /// Canvas zoom in percent
    pub zoom: u16,
    pub show_grid: bool,
    pub preview_mode: bool,
}

impl Default for EditorUiState {
    fn default() -> Self {
        Self {
            selected_section_id: None,
            selected_component_id: None,
            edit_mode: EditMode::Content,
            is_dragging: false,
            zoom: DEFAULT_ZOOM,
            show_grid: false,
            preview_mode: false,
        }
    }
}

impl EditorUiState {
    pub fn clear_selection(&mut self) {
        self.selected_section_id = None;
        self.selected_component_id = None;
    }
}

pub fn clamp_zoom(zoom: u16) -> u16 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
