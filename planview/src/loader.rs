//! Filesystem side of planview: map logical document roles to files under
//! the project root and list per-section assets.
//!
//! Layout, relative to the root:
//!
//! - `product/` - overview, roadmap, data model, design system, shell spec,
//!   and `sections/<id>/{spec.md,data.json,*.png,...}`
//! - `app/components/sections/<id>/*.vue` - screen designs
//! - `app/components/shell/AppShell.vue` - shell components
//! - `public/product-plan.zip` - export archive

use planview_syntax::correlate::{SectionInputs, SectionInventory};
use planview_syntax::parser::DocumentKind;
use planview_syntax::product::ProductInputs;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Public URL of the export archive.
pub const EXPORT_ZIP_URL: &str = "/product-plan.zip";

static RE_UNSAFE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]").unwrap());

static RE_UNSAFE_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_.-]").unwrap());

pub type Result<T> = std::result::Result<T, AssetError>;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unreadable asset {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// A project root holding a product plan.
#[derive(Debug, Clone)]
pub struct ProductDir {
    root: PathBuf,
}

impl ProductDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProductDir { root: root.into() }
    }

    fn product(&self) -> PathBuf {
        self.root.join("product")
    }

    fn product_sections(&self) -> PathBuf {
        self.product().join("sections")
    }

    fn component_sections(&self) -> PathBuf {
        self.root.join("app/components/sections")
    }

    /// Gather every product-level input. Design-system JSON that does not
    /// decode is logged and treated as missing.
    pub fn product_inputs(&self, force_export: bool) -> Result<ProductInputs> {
        let product = self.product();

        let data_model_file = DocumentKind::DataModel.file_name();
        let data_model = match self.read_text(&product.join("data-model").join(data_model_file))? {
            Some(text) => Some(text),
            None => self.read_text(&product.join(data_model_file))?,
        };

        Ok(ProductInputs {
            overview: self.read_text(&product.join(DocumentKind::Overview.file_name()))?,
            roadmap: self.read_text(&product.join(DocumentKind::Roadmap.file_name()))?,
            data_model,
            shell_spec: self.read_text(&product.join(DocumentKind::Shell.file_name()))?,
            colors: self.read_json_lenient(&product.join("design-system/colors.json")),
            typography: self.read_json_lenient(&product.join("design-system/typography.json")),
            has_shell_components: self.root.join("app/components/shell/AppShell.vue").is_file(),
            inventory: self.inventory()?,
            export_zip_url: self.export_zip_url(force_export),
        })
    }

    /// Gather one section's inputs. A `data.json` that does not decode is
    /// an error.
    pub fn section_inputs(&self, section_id: &str) -> Result<SectionInputs> {
        let product_dir = self.product_sections().join(section_id);
        let component_dir = self.component_sections().join(section_id);

        Ok(SectionInputs {
            spec: self.read_text(&product_dir.join(DocumentKind::Section.file_name()))?,
            data: self.read_json(&product_dir.join("data.json"))?,
            screen_design_files: file_names(&component_dir)?,
            screenshot_files: file_names(&product_dir)?,
        })
    }

    /// Record which specs, data files, screen designs and screenshots
    /// exist, for every section directory on disk.
    pub fn inventory(&self) -> Result<SectionInventory> {
        let mut inventory = SectionInventory::new();

        for path in glob_files(&self.product_sections(), "*/*")? {
            let Some((id, file)) = section_and_file(&path) else {
                continue;
            };
            match file {
                "spec.md" => inventory.add_spec(id),
                "data.json" => inventory.add_data(id),
                _ => inventory.add_screenshot(id, file),
            }
        }

        for path in glob_files(&self.component_sections(), "*/*")? {
            if let Some((id, file)) = section_and_file(&path) {
                inventory.add_screen_design(id, file);
            }
        }

        Ok(inventory)
    }

    /// The export archive URL when the archive exists or `force` is set.
    pub fn export_zip_url(&self, force: bool) -> Option<String> {
        if force || self.root.join("public/product-plan.zip").is_file() {
            Some(EXPORT_ZIP_URL.to_string())
        } else {
            None
        }
    }

    /// Resolve a screenshot path. Both segments are stripped of anything
    /// that could step outside the section directory.
    pub fn resolve_image(&self, section_id: &str, filename: &str) -> Option<PathBuf> {
        let safe_id = RE_UNSAFE_ID.replace_all(section_id, "");
        let safe_file = RE_UNSAFE_FILENAME.replace_all(filename, "");
        if safe_id.is_empty() || safe_file.chars().all(|c| c == '.') {
            return None;
        }

        let path = self.product_sections().join(safe_id.as_ref()).join(safe_file.as_ref());
        path.is_file().then_some(path)
    }

    /// Read a text file; a missing file is `Ok(None)`. Invalid UTF-8 is
    /// replaced with U+FFFD rather than failing the whole product.
    pub fn read_text(&self, path: &Path) -> Result<Option<String>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(decode_lossy(path, bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AssetError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Read and decode a JSON file; a missing or empty file is `Ok(None)`.
    pub fn read_json(&self, path: &Path) -> Result<Option<Value>> {
        let Some(text) = self.read_text(path)? else {
            return Ok(None);
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| AssetError::Unreadable {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read_json_lenient(&self, path: &Path) -> Option<Value> {
        match self.read_json(path) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }
}

/// Sorted names of the regular files directly inside `dir`.
fn file_names(dir: &Path) -> Result<Vec<String>> {
    Ok(glob_files(dir, "*")?
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .collect())
}

/// Regular files under `base` matching `pattern`, sorted. A missing `base`
/// matches nothing.
fn glob_files(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = format!(
        "{}/{}",
        glob::Pattern::escape(&base.to_string_lossy()),
        pattern
    );
    let mut files: Vec<PathBuf> = glob::glob(&full)
        .map_err(|source| AssetError::Pattern {
            pattern: full.clone(),
            source,
        })?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    log::debug!("{} matched {} files", full, files.len());
    Ok(files)
}

/// `<base>/<id>/<file>` → `(id, file)`.
fn section_and_file(path: &Path) -> Option<(&str, &str)> {
    let file = path.file_name()?.to_str()?;
    let id = path.parent()?.file_name()?.to_str()?;
    Some((id, file))
}

/// Decode file bytes as UTF-8, substituting U+FFFD for invalid sequences.
pub fn decode_lossy(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_files_are_none() {
        let dir = TempDir::new().unwrap();
        let product = ProductDir::new(dir.path());
        assert_eq!(product.read_text(&dir.path().join("nope.md")).unwrap(), None);
        assert_eq!(product.read_json(&dir.path().join("nope.json")).unwrap(), None);
    }

    #[test]
    fn malformed_json_is_unreadable() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bad.json", "{ not json");
        let product = ProductDir::new(dir.path());
        let err = product.read_json(&dir.path().join("bad.json")).unwrap_err();
        assert!(matches!(err, AssetError::Unreadable { .. }));
        assert!(err.to_string().starts_with("unreadable asset"));
    }

    #[test]
    fn inventory_from_disk() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "product/sections/inbox/spec.md", "# Inbox\n");
        write(dir.path(), "product/sections/inbox/data.json", "{}");
        write(dir.path(), "product/sections/inbox/list.png", "");
        write(dir.path(), "product/sections/inbox/notes.txt", "");
        write(dir.path(), "app/components/sections/inbox/InboxList.vue", "");
        write(dir.path(), "app/components/sections/inbox/index.ts", "");

        let inventory = ProductDir::new(dir.path()).inventory().unwrap();
        let progress = inventory.progress("inbox");
        assert!(progress.has_spec);
        assert!(progress.has_data);
        assert_eq!(progress.screenshot_count, 1);
        assert_eq!(progress.screen_design_count, 1);
    }

    #[test]
    fn section_inputs_are_sorted() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app/components/sections/inbox/Zeta.vue", "");
        write(dir.path(), "app/components/sections/inbox/Alpha.vue", "");

        let inputs = ProductDir::new(dir.path()).section_inputs("inbox").unwrap();
        assert_eq!(inputs.screen_design_files, vec!["Alpha.vue", "Zeta.vue"]);
        assert!(inputs.screenshot_files.is_empty());
        assert_eq!(inputs.spec, None);
    }

    #[test]
    fn data_model_falls_back_to_product_root() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "product/data-model.md", "## Relationships\n- A has B\n");
        let inputs = ProductDir::new(dir.path()).product_inputs(false).unwrap();
        assert!(inputs.data_model.is_some());
        assert_eq!(inputs.export_zip_url, None);
    }

    #[test]
    fn export_url_when_forced_or_present() {
        let dir = TempDir::new().unwrap();
        let product = ProductDir::new(dir.path());
        assert_eq!(product.export_zip_url(false), None);
        assert_eq!(product.export_zip_url(true).as_deref(), Some(EXPORT_ZIP_URL));
        write(dir.path(), "public/product-plan.zip", "PK");
        assert_eq!(product.export_zip_url(false).as_deref(), Some(EXPORT_ZIP_URL));
    }

    #[test]
    fn image_paths_are_sanitized() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "product/sections/inbox/list.png", "");
        write(dir.path(), "product/secret.png", "");
        let product = ProductDir::new(dir.path());

        assert!(product.resolve_image("inbox", "list.png").is_some());
        assert!(product.resolve_image("in/box", "list.png").is_some());
        assert_eq!(product.resolve_image("inbox", "missing.png"), None);
        assert_eq!(product.resolve_image("..", "secret.png"), None);
        assert_eq!(product.resolve_image("inbox", ".."), None);
    }

    #[test]
    fn invalid_utf8_overview_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let overview = dir.path().join("product/product-overview.md");
        fs::create_dir_all(overview.parent().unwrap()).unwrap();
        fs::write(&overview, b"# Caf\xe9\n\n## Description\nMenu.\n").unwrap();
        write(dir.path(), "product/product-roadmap.md", "### 1. Inbox\nTriage.\n");

        let inputs = ProductDir::new(dir.path()).product_inputs(false).unwrap();
        let text = inputs.overview.unwrap();
        assert!(text.starts_with("# Caf\u{FFFD}"));
        assert!(text.contains("Menu."));
        assert!(inputs.roadmap.is_some());
    }
}
