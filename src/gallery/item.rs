/// Comparison items shown by the gallery
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{GalleryError, Result, Side};

/// One before/after pair of the same subject
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonItem {
    /// Stable identifier, unique within a catalog
    pub id: u32,
    /// Short treatment name (e.g., "Dermal Fillers")
    pub label: String,
    /// Free-text description shown next to the pair
    #[serde(default)]
    pub caption: String,
    /// Reference to the pre-treatment image (path or URL)
    pub before: String,
    /// Reference to the post-treatment image (path or URL)
    pub after: String,
}

impl ComparisonItem {
    pub fn new(
        id: u32,
        label: impl Into<String>,
        caption: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            caption: caption.into(),
            before: before.into(),
            after: after.into(),
        }
    }

    /// Both image references must be present and non-blank
    pub fn validate(&self) -> Result<()> {
        if self.before.trim().is_empty() {
            return Err(GalleryError::MissingImage { id: self.id, side: Side::Before });
        }
        if self.after.trim().is_empty() {
            return Err(GalleryError::MissingImage { id: self.id, side: Side::After });
        }
        Ok(())
    }

    /// Image reference for one side of the pair
    pub fn image_ref(&self, side: Side) -> &str {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }
}

/// Validate a whole list: every item valid, no repeated ids
pub fn validate_items(items: &[ComparisonItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id) {
            return Err(GalleryError::DuplicateId(item.id));
        }
    }
    Ok(())
}
