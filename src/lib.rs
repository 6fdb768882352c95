//! Dermabar results gallery
//!
//! The before/after comparison core (pointer tracking, slider state,
//! navigation) plus the catalog, image loading, viewer config and text
//! reveal sequencing used by the desktop viewer.

pub mod config;
pub mod error;
pub mod gallery;
pub mod motion;

pub use error::{GalleryError, Result};
