/// Before/after comparison slider
///
/// Owns the slider state for one widget instance: which item is shown,
/// where the divider sits, and whether a drag is in progress. All
/// mutation happens synchronously on the UI thread in response to
/// discrete input events.

use super::item::ComparisonItem;
use super::tracker::{Bounds, DragTracker};
use crate::error::{GalleryError, Result};

/// Divider position every item starts at
pub const CENTER: f32 = 50.0;

/// Drag phase of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
}

/// Normalized pointer input, already stripped of device specifics
/// (mouse and touch map onto the same variants)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { x: f32 },
    Moved { x: f32 },
    Released,
    Left,
}

/// Snapshot of the transient slider state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub active_index: usize,
    /// Percentage of the width, from the left edge, showing the after layer
    pub divider_position: f32,
    pub is_dragging: bool,
}

#[derive(Debug, Clone)]
pub struct ComparisonSlider {
    items: Vec<ComparisonItem>,
    active_index: usize,
    divider_position: f32,
    tracker: DragTracker,
}

impl ComparisonSlider {
    /// An empty list is accepted; such a slider renders nothing
    pub fn new(items: Vec<ComparisonItem>) -> Self {
        Self {
            items,
            active_index: 0,
            divider_position: CENTER,
            tracker: DragTracker::new(),
        }
    }

    pub fn items(&self) -> &[ComparisonItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item currently displayed, if any
    pub fn current(&self) -> Option<&ComparisonItem> {
        self.items.get(self.active_index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn divider_position(&self) -> f32 {
        self.divider_position
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn phase(&self) -> Phase {
        if self.tracker.is_dragging() {
            Phase::Dragging
        } else {
            Phase::Idle
        }
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            active_index: self.active_index,
            divider_position: self.divider_position,
            is_dragging: self.is_dragging(),
        }
    }

    /// Apply one pointer event. Returns true if the visible state changed.
    pub fn handle(&mut self, event: PointerEvent, bounds: Bounds) -> bool {
        match event {
            PointerEvent::Pressed { x } => self.press(x, bounds),
            PointerEvent::Moved { x } => self.drag_to(x, bounds),
            PointerEvent::Released | PointerEvent::Left => self.release(),
        }
    }

    /// Start a drag if `x` is inside the widget, tracking the press point
    pub fn press(&mut self, x: f32, bounds: Bounds) -> bool {
        if self.is_empty() || !bounds.contains_x(x) {
            return false;
        }
        self.tracker.begin();
        self.apply(x, bounds);
        true
    }

    /// Move the divider while dragging; ignored when idle
    pub fn drag_to(&mut self, x: f32, bounds: Bounds) -> bool {
        self.apply(x, bounds)
    }

    /// End the drag (release, touch end, or leaving the widget)
    pub fn release(&mut self) -> bool {
        let was_dragging = self.tracker.is_dragging();
        self.tracker.end();
        was_dragging
    }

    fn apply(&mut self, x: f32, bounds: Bounds) -> bool {
        match self.tracker.track(x, bounds) {
            Some(position) => {
                self.divider_position = position;
                true
            }
            None => false,
        }
    }

    /// Move the divider directly, e.g. from the keyboard
    pub fn nudge(&mut self, delta: f32) {
        if self.is_empty() || !delta.is_finite() {
            return;
        }
        self.divider_position = (self.divider_position + delta).clamp(0.0, 100.0);
    }

    pub fn next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.show((self.active_index + 1) % len);
    }

    pub fn previous(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.show((self.active_index + len - 1) % len);
    }

    /// Show the item at `index` directly (pagination dots)
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(GalleryError::InvalidIndex { index, len: self.len() });
        }
        self.show(index);
        Ok(())
    }

    /// Swap in a new item list, keeping the position when still valid
    pub fn replace_items(&mut self, items: Vec<ComparisonItem>) {
        self.items = items;
        let index = if self.active_index < self.items.len() { self.active_index } else { 0 };
        self.show(index);
    }

    fn show(&mut self, index: usize) {
        self.active_index = index;
        self.divider_position = CENTER;
        self.tracker.end();
    }
}
