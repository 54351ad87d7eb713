//! JSON export and import of pages.
//!
//! The exported document is exactly the page schema, pretty-printed, so
//! importing an export yields the same page.

use crate::EditorError;
use sitebuilder_schema::Page;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn export_page(page: &Page) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(page)?)
}

pub fn import_page(json: &str) -> Result<Page, EditorError> {
    Ok(serde_json::from_str(json)?)
}

/// Download file name for a page: `home-page.json` for `/`, else `<slug>-page.json`
pub fn export_file_name(page: &Page) -> String {
    let stem = page.slug.trim_matches('/').replace('/', "-");
    if stem.is_empty() {
        "home-page.json".to_string()
    } else {
        format!("{}-page.json", stem)
    }
}

/// Write the export into `dir`; returns the path written
pub fn write_export(page: &Page, dir: &Path) -> Result<PathBuf, EditorError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(page));
    fs::write(&path, export_page(page)?)?;
    info!(path = %path.display(), slug = %page.slug, "exported page");
    Ok(path)
}

pub fn read_page(path: &Path) -> Result<Page, EditorError> {
    let json = fs::read_to_string(path)?;
    import_page(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebuilder_schema::templates;

    #[test]
    fn test_file_names() {
        let mut page = templates::home_page();
        assert_eq!(export_file_name(&page), "home-page.json");

        page.slug = "/pricing".to_string();
        assert_eq!(export_file_name(&page), "pricing-page.json");

        page.slug = "/docs/getting-started".to_string();
        assert_eq!(export_file_name(&page), "docs-getting-started-page.json");
    }

    #[test]
    fn test_export_is_pretty_and_camel_case() {
        let json = export_page(&templates::contact_page()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"globalStyles\""));
        assert!(json.contains("\"type\": \"contact\""));
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(matches!(import_page("{ not json"), Err(EditorError::Json(_))));
    }

    #[test]
    fn test_import_accepts_text_prices() {
        let mut value = serde_json::to_value(templates::pricing_page()).unwrap();
        let pricing = value["sections"]
            .as_array_mut()
            .unwrap()
            .iter_mut()
            .find(|s| s["type"] == "pricing")
            .unwrap();
        pricing["content"]["plans"][0]["price"] = serde_json::json!("29");
        pricing["content"]["plans"][1]["price"] = serde_json::json!("");

        let json = serde_json::to_string(&value).unwrap();
        let page = import_page(&json).unwrap();

        let exported: serde_json::Value = serde_json::from_str(&export_page(&page).unwrap()).unwrap();
        assert_eq!(exported, value);
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let page = templates::help_page();

        let path = write_export(&page, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "help-page.json");
        assert_eq!(read_page(&path).unwrap(), page);
    }
}
