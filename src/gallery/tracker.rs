/// Pointer-drag tracking
///
/// Converts a horizontal input coordinate (mouse or touch, identical
/// semantics) into a percentage of a container's width. The tracker only
/// produces values while a drag is in progress.

/// Horizontal extent of the container, in the same coordinate space as
/// the input events (viewport / window coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub width: f32,
}

impl Bounds {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// A container that has not been laid out yet (or is hidden)
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.width > 0.0) || !self.left.is_finite()
    }

    /// Whether `x` falls inside the container, edges included
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.left + self.width.max(0.0)
    }
}

/// Map `x` to a clamped percentage of `bounds`.
///
/// Returns `None` for a degenerate container or a non-finite coordinate.
pub fn percent_at(x: f32, bounds: Bounds) -> Option<f32> {
    if bounds.is_degenerate() || !x.is_finite() {
        return None;
    }
    let ratio = (x - bounds.left) / bounds.width;
    Some((ratio * 100.0).clamp(0.0, 100.0))
}

/// Drag gate around [`percent_at`]
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    dragging: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// Ends the drag; release and leave are handled the same way
    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// New divider percentage for a move to `x`, or `None` when idle or
    /// when the layout is degenerate
    pub fn track(&self, x: f32, bounds: Bounds) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        let value = percent_at(x, bounds);
        if value.is_none() {
            tracing::trace!(?bounds, x, "skipping move on degenerate layout");
        }
        value
    }
}
