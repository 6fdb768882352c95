/// Off-thread image loading for comparison pairs
///
/// Decoding full-size JPEGs is CPU-bound, so both halves of a pair are
/// decoded on tokio's blocking pool and handed back to the UI as ready
/// iced image handles.

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

use super::catalog::is_remote;
use super::item::ComparisonItem;
use crate::error::{GalleryError, Result, Side};

/// A decoded image ready for drawing
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Both halves of a comparison item
#[derive(Debug, Clone)]
pub struct LoadedPair {
    pub before: LoadedImage,
    pub after: LoadedImage,
}

/// Load both images of `item`
///
/// # Returns
/// * `Ok(LoadedPair)` - Decoded handles and dimensions
/// * `Err(String)` - Error message if either side fails
pub async fn load_pair(item: ComparisonItem) -> std::result::Result<LoadedPair, String> {
    // Spawn blocking because decoding is CPU-intensive
    tokio::task::spawn_blocking(move || load_pair_blocking(&item).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of pair loading
pub fn load_pair_blocking(item: &ComparisonItem) -> Result<LoadedPair> {
    let before = load_image(item.image_ref(Side::Before))?;
    let after = load_image(item.image_ref(Side::After))?;

    tracing::debug!(
        "📸 Loaded pair {} ({}x{} / {}x{})",
        item.id, before.width, before.height, after.width, after.height
    );

    Ok(LoadedPair { before, after })
}

/// Decode a single image reference into RGBA
pub fn load_image(reference: &str) -> Result<LoadedImage> {
    if is_remote(reference) {
        return Err(GalleryError::RemoteReference(reference.to_string()));
    }

    let path = Path::new(reference);
    if !path.exists() {
        return Err(GalleryError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "image file not found"),
        ));
    }

    let decoded = image::open(path).map_err(|source| GalleryError::Decode {
        path: PathBuf::from(path),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}
