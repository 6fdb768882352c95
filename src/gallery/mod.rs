/// Gallery module
///
/// This module holds everything behind the before/after viewer:
/// - Comparison items and validation (item.rs)
/// - Pointer-drag tracking (tracker.rs)
/// - The comparison slider state machine (slider.rs)
/// - Catalog load/save and folder import (catalog.rs)
/// - Off-thread image decoding (loader.rs)

pub mod item;
pub mod tracker;
pub mod slider;
pub mod catalog;
pub mod loader;

pub use item::ComparisonItem;
pub use slider::{ComparisonSlider, Phase, PointerEvent, SliderState};
pub use tracker::{Bounds, DragTracker};
