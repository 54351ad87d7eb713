//! Editor configuration

use crate::ui_state::{clamp_zoom, EditMode, EditorUiState, DEFAULT_ZOOM};
use serde::{Deserialize, Serialize};

/// Startup options for an editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum undo steps per page visit (0 = unlimited)
    #[serde(default)]
    pub max_history: usize,

    #[serde(default = "default_zoom")]
    pub initial_zoom: u16,

    #[serde(default)]
    pub show_grid: bool,

    #[serde(default)]
    pub edit_mode: EditMode,
}

fn default_zoom() -> u16 {
    DEFAULT_ZOOM
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: 0,
            initial_zoom: DEFAULT_ZOOM,
            show_grid: false,
            edit_mode: EditMode::Content,
        }
    }
}

impl EditorConfig {
    /// Initial UI state derived from this config
    pub fn initial_ui(&self) -> EditorUiState {
        EditorUiState {
            zoom: clamp_zoom(self.initial_zoom),
            show_grid: self.show_grid,
            edit_mode: self.edit_mode,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_parse_camel_case() {
        let config: EditorConfig = serde_json::from_str(
            r#"{ "maxHistory": 50, "initialZoom": 1000, "showGrid": true, "editMode": "layout" }"#,
        )
        .unwrap();

        assert_eq!(config.max_history, 50);
        assert_eq!(config.edit_mode, EditMode::Layout);

        let ui = config.initial_ui();
        assert_eq!(ui.zoom, 400);
        assert!(ui.show_grid);
        assert!(ui.selected_section_id.is_none());
    }
}
