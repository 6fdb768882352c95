/// User interface module
///
/// - The canvas that draws the before/after reveal and turns mouse/touch
///   input into pointer events (comparison.rs)
/// - Composition of the gallery section: stage, navigation, info panel (gallery.rs)

pub mod comparison;
pub mod gallery;
