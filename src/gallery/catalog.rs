/// Gallery catalog
///
/// A catalog is the ordered list of comparison items the viewer shows.
/// It is stored as JSON, built from a folder of paired images, or taken
/// from the built-in showcase set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::item::{validate_items, ComparisonItem};
use crate::error::{GalleryError, Result, Side};

/// Image extensions picked up by folder import
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// Directory the built-in showcase images are expected in
pub const BUILTIN_ASSET_DIR: &str = "assets/gallery";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub items: Vec<ComparisonItem>,
}

impl Catalog {
    /// Build a catalog from items, validating every one
    pub fn new(items: Vec<ComparisonItem>) -> Result<Self> {
        validate_items(&items)?;
        Ok(Self { items })
    }

    /// The clinic's showcase transformations
    pub fn builtin() -> Self {
        let asset = |name: &str| format!("{}/{}", BUILTIN_ASSET_DIR, name);
        Self {
            items: vec![
                ComparisonItem::new(
                    1,
                    "Botox",
                    "Smoother forehead and crow's feet",
                    asset("botox-before.jpg"),
                    asset("botox-after.jpg"),
                ),
                ComparisonItem::new(
                    2,
                    "Dermal Fillers",
                    "Restored cheek volume and enhanced contours",
                    asset("dermal-fillers-before.jpg"),
                    asset("dermal-fillers-after.jpg"),
                ),
                ComparisonItem::new(
                    3,
                    "HydraFacial",
                    "Radiant, glowing complexion",
                    asset("hydrafacial-before.jpg"),
                    asset("hydrafacial-after.jpg"),
                ),
                ComparisonItem::new(
                    4,
                    "Laser Resurfacing",
                    "Improved skin texture and tone",
                    asset("laser-resurfacing-before.jpg"),
                    asset("laser-resurfacing-after.jpg"),
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<ComparisonItem> {
        self.items
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        validate_items(&catalog.items)?;
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a catalog file. Relative image paths are resolved against the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
        let mut catalog = Self::from_json(&json)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for item in &mut catalog.items {
            item.before = resolve_reference(&item.before, base);
            item.after = resolve_reference(&item.after, base);
        }

        tracing::info!("📁 Loaded catalog with {} items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| GalleryError::io(parent, e))?;
            }
        }
        fs::write(path, self.to_json()?).map_err(|e| GalleryError::io(path, e))?;
        tracing::info!("💾 Saved catalog with {} items to {}", self.len(), path.display());
        Ok(())
    }
}

/// Whether a reference points at a remote resource rather than a file
pub fn is_remote(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn resolve_reference(reference: &str, base: &Path) -> String {
    if is_remote(reference) || Path::new(reference).is_absolute() {
        return reference.to_string();
    }
    base.join(reference).to_string_lossy().to_string()
}

/// Result of a folder import operation
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub catalog: Catalog,
    /// Number of complete before/after pairs found
    pub paired_count: usize,
    /// Image files that had no partner (or a duplicate partner)
    pub skipped_count: usize,
}

/// Async wrapper for [`import_folder`]
/// Runs on the blocking pool to avoid stalling the UI
pub async fn import_folder_async(folder: PathBuf) -> std::result::Result<ImportResult, String> {
    tokio::task::spawn_blocking(move || import_folder(&folder).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

#[derive(Default)]
struct PendingPair {
    before: Option<PathBuf>,
    after: Option<PathBuf>,
}

/// Scan `folder` recursively and pair `<name>-before.<ext>` with
/// `<name>-after.<ext>` (underscore separators work too)
pub fn import_folder(folder: &Path) -> Result<ImportResult> {
    if !folder.is_dir() {
        return Err(GalleryError::io(
            folder,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    tracing::info!("🔍 Scanning folder: {}", folder.display());

    // Keyed by (label, parent dir) so identical names in different folders stay apart
    let mut pending: BTreeMap<(String, PathBuf), PendingPair> = BTreeMap::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !has_image_extension(path) {
            continue;
        }

        let stem = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => continue,
        };

        let Some((prefix, side)) = split_side(&stem) else {
            tracing::debug!("Skipping unpaired image {}", path.display());
            skipped_count += 1;
            continue;
        };

        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let slot = pending.entry((title_case(prefix), parent)).or_default();
        let target = match side {
            Side::Before => &mut slot.before,
            Side::After => &mut slot.after,
        };
        if target.is_some() {
            tracing::warn!("⚠️  Duplicate {} image ignored: {}", side, path.display());
            skipped_count += 1;
            continue;
        }
        *target = Some(path.to_path_buf());
    }

    let mut items = Vec::new();
    for ((label, _), pair) in pending {
        match (pair.before, pair.after) {
            (Some(before), Some(after)) => {
                let id = items.len() as u32 + 1;
                items.push(ComparisonItem::new(
                    id,
                    label,
                    "",
                    before.to_string_lossy(),
                    after.to_string_lossy(),
                ));
            }
            (Some(_), None) | (None, Some(_)) => skipped_count += 1,
            (None, None) => {}
        }
    }

    let paired_count = items.len();
    tracing::info!("✅ Import complete: {} pairs, {} skipped", paired_count, skipped_count);

    Ok(ImportResult {
        catalog: Catalog::new(items)?,
        paired_count,
        skipped_count,
    })
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Split "laser-resurfacing_before" into ("laser-resurfacing", Before)
fn split_side(stem: &str) -> Option<(&str, Side)> {
    for (suffix, side) in [("before", Side::Before), ("after", Side::After)] {
        if stem.len() <= suffix.len() + 1 {
            continue;
        }
        let cut = stem.len() - suffix.len();
        if !stem.is_char_boundary(cut) || !stem[cut..].eq_ignore_ascii_case(suffix) {
            continue;
        }
        if let Some(prefix) = stem[..cut].strip_suffix(['-', '_', ' ']) {
            if !prefix.trim().is_empty() {
                return Some((prefix, side));
            }
        }
    }
    None
}

/// "laser-resurfacing" -> "Laser Resurfacing"
fn title_case(prefix: &str) -> String {
    prefix
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
