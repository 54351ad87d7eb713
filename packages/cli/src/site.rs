//! Reading and writing a site as a directory of page files

use crate::config::Config;
use anyhow::{anyhow, bail, Context, Result};
use sitebuilder_editor::{export_file_name, read_page, write_export};
use sitebuilder_schema::{templates, Page};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Pages for a fresh project: the configured seed routes, or the stock site
pub fn seed_pages(config: &Config) -> Vec<Page> {
    if config.seed.is_empty() {
        return templates::default_site();
    }
    let mut pages: Vec<Page> = Vec::new();
    for route in &config.seed {
        if pages.iter().any(|p| &p.slug == route) {
            continue;
        }
        pages.push(templates::page_for_route(route));
    }
    pages
}

/// Load every `*.json` page under `dir`, home page first.
///
/// Files that do not parse as pages are skipped with a warning.
pub fn load_site(dir: &Path) -> Result<Vec<Page>> {
    if !dir.exists() {
        return Err(anyhow!("Pages directory does not exist: {}", dir.display()));
    }

    let mut pages = Vec::new();
    for path in find_page_files(dir) {
        match read_page(&path) {
            Ok(page) => {
                debug!(path = %path.display(), slug = %page.slug, "loaded page");
                pages.push(page);
            }
            Err(err) => warn!(path = %path.display(), %err, "skipping unreadable page file"),
        }
    }

    pages.sort_by(|a, b| (a.slug != "/", &a.slug).cmp(&(b.slug != "/", &b.slug)));
    Ok(pages)
}

/// Load the site, or seed it from config when the directory is absent
pub fn load_or_seed(config: &Config, cwd: &str) -> Result<Vec<Page>> {
    let dir = config.get_pages_dir(cwd);
    if dir.exists() {
        load_site(&dir)
    } else {
        Ok(seed_pages(config))
    }
}

/// Write every page into `dir`; returns the written paths.
///
/// Fails before writing anything when two slugs map to the same file name.
pub fn save_site(pages: &[Page], dir: &Path) -> Result<Vec<PathBuf>> {
    let mut names: HashMap<String, &str> = HashMap::new();
    for page in pages {
        let name = export_file_name(page);
        if let Some(other) = names.insert(name.clone(), &page.slug) {
            bail!("Pages {} and {} would both be written to {}", other, page.slug, name);
        }
    }

    pages
        .iter()
        .map(|page| {
            write_export(page, dir).with_context(|| format!("Failed to write page {}", page.slug))
        })
        .collect()
}

fn find_page_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_routes() {
        let config = Config {
            seed: vec!["/pricing".to_string(), "/our-team".to_string(), "/pricing".to_string()],
            ..Default::default()
        };
        let pages = seed_pages(&config);
        let slugs: Vec<_> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/pricing", "/our-team"]);
    }

    #[test]
    fn test_save_and_load_puts_home_first() {
        let dir = tempfile::tempdir().unwrap();
        let site = templates::default_site();

        let written = save_site(&site, dir.path()).unwrap();
        assert_eq!(written.len(), site.len());

        std::fs::write(dir.path().join("notes.json"), "not a page").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "ignored").unwrap();

        let loaded = load_site(dir.path()).unwrap();
        assert_eq!(loaded.len(), site.len());
        assert_eq!(loaded[0].slug, "/");
        assert_eq!(loaded[0], site[0]);
    }

    #[test]
    fn test_save_refuses_colliding_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let nested = templates::page_for_route("/a/b");
        let flat = templates::page_for_route("/a-b");

        let err = save_site(&[nested, flat], dir.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("a-b-page.json"), "{}", message);
        assert!(message.contains("/a/b") && message.contains("/a-b"), "{}", message);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_site(&dir.path().join("nope")).is_err());
    }
}
