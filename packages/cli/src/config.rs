use serde::{Deserialize, Serialize};
use sitebuilder_editor::EditorConfig;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "sitebuilder.config.json";

/// SiteBuilder project file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one `<slug>-page.json` per page
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Where `export` writes by default
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Routes to seed on `init`; empty means the stock site
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seed: Vec<String>,

    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_pages_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.pages_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            out_dir: default_out_dir(),
            seed: vec![],
            editor: EditorConfig::default(),
        }
    }
}
