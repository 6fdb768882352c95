use iced::alignment;
use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Frame, Path, Program, Stroke};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme};

use dermabar_gallery::gallery::loader::{LoadedImage, LoadedPair};
use dermabar_gallery::gallery::{Bounds, PointerEvent};

use crate::Message;

const HANDLE_RADIUS: f32 = 18.0;
const BADGE_MARGIN: f32 = 16.0;

/// Before/after reveal drawn on a canvas
///
/// The before layer fills the whole area; the after layer is drawn at the
/// same size but clipped to `[0, position%]` of the width. Input is turned
/// into `PointerEvent`s and sent to the app, which owns the slider state.
pub struct ComparisonCanvas<'a> {
    /// None while the pair is loading (or failed): placeholder panes
    pub pair: Option<&'a LoadedPair>,
    pub position: f32,
    pub dragging: bool,
}

impl<'a> Program<Message> for ComparisonCanvas<'a> {
    type State = TouchState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();

        let size = bounds.size();
        let area = Rectangle::new(Point::ORIGIN, size);
        let reveal = reveal_width(size.width, self.position);
        let revealed = Rectangle::new(Point::ORIGIN, Size::new(reveal, size.height));

        match self.pair {
            Some(pair) => {
                frame.with_clip(area, |frame| draw_layer(frame, &pair.before, size));
                frame.with_clip(revealed, |frame| draw_layer(frame, &pair.after, size));
            }
            None => {
                frame.fill_rectangle(Point::ORIGIN, size, palette.background.strong.color);
                frame.fill_rectangle(Point::ORIGIN, revealed.size(), palette.primary.weak.color);
            }
        }

        // Divider
        let line = Path::line(Point::new(reveal, 0.0), Point::new(reveal, size.height));
        frame.stroke(&line, Stroke::default().with_color(Color::WHITE).with_width(3.0));

        let knob = Path::circle(Point::new(reveal, size.height / 2.0), HANDLE_RADIUS);
        frame.fill(&knob, Color::WHITE);
        frame.stroke(
            &knob,
            Stroke::default()
                .with_color(palette.primary.strong.color)
                .with_width(2.0),
        );

        // After is revealed from the left edge
        badge(&mut frame, "AFTER", Point::new(BADGE_MARGIN, BADGE_MARGIN), alignment::Horizontal::Left);
        badge(
            &mut frame,
            "BEFORE",
            Point::new(size.width - BADGE_MARGIN, BADGE_MARGIN),
            alignment::Horizontal::Right,
        );

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let area = Bounds::new(bounds.x, bounds.width);
        let captured = |event| (canvas::event::Status::Captured, Some(Message::Pointer(event, area)));

        match event {
            // Mouse button press - start dragging
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    return captured(PointerEvent::Pressed { x: position.x });
                }
            }

            // Mouse button release - stop dragging
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.dragging {
                    return captured(PointerEvent::Released);
                }
            }

            // Mouse move - track if dragging, leaving the widget cancels
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.dragging {
                    if bounds.contains(position) {
                        return captured(PointerEvent::Moved { x: position.x });
                    }
                    return captured(PointerEvent::Left);
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                if self.dragging {
                    return captured(PointerEvent::Left);
                }
            }

            // Only the first finger drives the divider
            canvas::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.finger.is_none() && bounds.contains(position) {
                    state.finger = Some(id);
                    return captured(PointerEvent::Pressed { x: position.x });
                }
            }

            canvas::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if state.finger == Some(id) {
                    if bounds.contains(position) {
                        return captured(PointerEvent::Moved { x: position.x });
                    }
                    state.finger = None;
                    return captured(PointerEvent::Left);
                }
            }

            canvas::Event::Touch(touch::Event::FingerLifted { id, .. })
            | canvas::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.finger == Some(id) {
                    state.finger = None;
                    return captured(PointerEvent::Released);
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Finger currently driving the drag, if any
#[derive(Debug, Clone, Default)]
pub struct TouchState {
    pub finger: Option<touch::Finger>,
}

fn draw_layer(frame: &mut Frame, image: &LoadedImage, area: Size) {
    frame.draw_image(
        cover_rect(area, image.width, image.height),
        canvas::Image::new(&image.handle),
    );
}

fn badge(frame: &mut Frame, label: &str, position: Point, align: alignment::Horizontal) {
    frame.fill_text(canvas::Text {
        content: label.to_string(),
        position,
        color: Color::WHITE,
        size: Pixels(18.0),
        horizontal_alignment: align,
        vertical_alignment: alignment::Vertical::Top,
        ..canvas::Text::default()
    });
}

/// Width in pixels of the revealed after layer
pub fn reveal_width(width: f32, position: f32) -> f32 {
    (width.max(0.0) * position.clamp(0.0, 100.0) / 100.0).max(0.0)
}

/// Aspect-preserving rectangle that covers `area`, centered
pub fn cover_rect(area: Size, image_width: u32, image_height: u32) -> Rectangle {
    if image_width == 0 || image_height == 0 || area.width <= 0.0 || area.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, area);
    }
    let (iw, ih) = (image_width as f32, image_height as f32);
    let scale = (area.width / iw).max(area.height / ih);
    let size = Size::new(iw * scale, ih * scale);
    Rectangle::new(
        Point::new((area.width - size.width) / 2.0, (area.height - size.height) / 2.0),
        size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rectangle = Rectangle { x: 100.0, y: 50.0, width: 200.0, height: 100.0 };

    fn canvas_with(dragging: bool) -> ComparisonCanvas<'static> {
        ComparisonCanvas { pair: None, position: 50.0, dragging }
    }

    fn pointer(result: (canvas::event::Status, Option<Message>)) -> Option<PointerEvent> {
        match result {
            (canvas::event::Status::Captured, Some(Message::Pointer(event, bounds))) => {
                assert_eq!(bounds, Bounds::new(100.0, 200.0));
                Some(event)
            }
            (canvas::event::Status::Ignored, None) => None,
            other => panic!("unexpected canvas result: {:?}", other),
        }
    }

    fn mouse_event(event: mouse::Event) -> canvas::Event {
        canvas::Event::Mouse(event)
    }

    fn finger(event: touch::Event) -> canvas::Event {
        canvas::Event::Touch(event)
    }

    #[test]
    fn test_press_inside_starts_drag() {
        let mut state = TouchState::default();
        let cursor = Cursor::Available(Point::new(120.0, 60.0));
        let event = mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            pointer(canvas_with(false).update(&mut state, event, BOUNDS, cursor)),
            Some(PointerEvent::Pressed { x: 120.0 })
        );

        let outside = Cursor::Available(Point::new(20.0, 60.0));
        let event = mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(pointer(canvas_with(false).update(&mut state, event, BOUNDS, outside)), None);
    }

    #[test]
    fn test_move_outside_while_dragging_leaves() {
        let mut state = TouchState::default();
        let position = Point::new(400.0, 60.0);
        let event = mouse_event(mouse::Event::CursorMoved { position });
        assert_eq!(
            pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Available(position))),
            Some(PointerEvent::Left)
        );

        let inside = Point::new(250.0, 60.0);
        let event = mouse_event(mouse::Event::CursorMoved { position: inside });
        assert_eq!(
            pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Available(inside))),
            Some(PointerEvent::Moved { x: 250.0 })
        );
    }

    #[test]
    fn test_cursor_left_window_cancels_drag() {
        let mut state = TouchState::default();
        let event = mouse_event(mouse::Event::CursorLeft);
        assert_eq!(
            pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Unavailable)),
            Some(PointerEvent::Left)
        );
    }

    #[test]
    fn test_idle_moves_and_releases_are_ignored() {
        let mut state = TouchState::default();
        let position = Point::new(150.0, 60.0);
        let cursor = Cursor::Available(position);

        let event = mouse_event(mouse::Event::CursorMoved { position });
        assert_eq!(pointer(canvas_with(false).update(&mut state, event, BOUNDS, cursor)), None);

        let event = mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(pointer(canvas_with(false).update(&mut state, event, BOUNDS, cursor)), None);

        let event = mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            pointer(canvas_with(true).update(&mut state, event, BOUNDS, cursor)),
            Some(PointerEvent::Released)
        );
    }

    #[test]
    fn test_second_finger_is_ignored() {
        let mut state = TouchState::default();
        let first = touch::Finger(1);
        let second = touch::Finger(2);
        let inside = Point::new(150.0, 60.0);

        let event = finger(touch::Event::FingerPressed { id: first, position: inside });
        assert_eq!(
            pointer(canvas_with(false).update(&mut state, event, BOUNDS, Cursor::Unavailable)),
            Some(PointerEvent::Pressed { x: 150.0 })
        );

        let event = finger(touch::Event::FingerPressed { id: second, position: inside });
        assert_eq!(pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Unavailable)), None);

        let event = finger(touch::Event::FingerMoved { id: second, position: Point::new(280.0, 60.0) });
        assert_eq!(pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Unavailable)), None);

        let event = finger(touch::Event::FingerLifted { id: second, position: inside });
        assert_eq!(pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Unavailable)), None);

        let event = finger(touch::Event::FingerMoved { id: first, position: Point::new(200.0, 60.0) });
        assert_eq!(
            pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Unavailable)),
            Some(PointerEvent::Moved { x: 200.0 })
        );
    }

    #[test]
    fn test_finger_lost_releases() {
        let mut state = TouchState::default();
        let id = touch::Finger(7);
        let inside = Point::new(150.0, 60.0);

        let event = finger(touch::Event::FingerPressed { id, position: inside });
        pointer(canvas_with(false).update(&mut state, event, BOUNDS, Cursor::Unavailable));

        let event = finger(touch::Event::FingerLost { id, position: inside });
        assert_eq!(
            pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Unavailable)),
            Some(PointerEvent::Released)
        );
        assert!(state.finger.is_none());
    }

    #[test]
    fn test_finger_dragged_off_widget_leaves() {
        let mut state = TouchState::default();
        let id = touch::Finger(3);

        let event = finger(touch::Event::FingerPressed { id, position: Point::new(150.0, 60.0) });
        pointer(canvas_with(false).update(&mut state, event, BOUNDS, Cursor::Unavailable));

        let event = finger(touch::Event::FingerMoved { id, position: Point::new(150.0, 500.0) });
        assert_eq!(
            pointer(canvas_with(true).update(&mut state, event, BOUNDS, Cursor::Unavailable)),
            Some(PointerEvent::Left)
        );
        assert!(state.finger.is_none());
    }

    #[test]
    fn test_reveal_width() {
        assert_eq!(reveal_width(200.0, 50.0), 100.0);
        assert_eq!(reveal_width(200.0, 0.0), 0.0);
        assert_eq!(reveal_width(200.0, 100.0), 200.0);
        assert_eq!(reveal_width(200.0, 150.0), 200.0);
        assert_eq!(reveal_width(0.0, 70.0), 0.0);
    }

    #[test]
    fn test_cover_wide_image() {
        // 2:1 image in a square: height matches, width overflows both sides
        let rect = cover_rect(Size::new(100.0, 100.0), 200, 100);
        assert_eq!(rect.size(), Size::new(200.0, 100.0));
        assert_eq!(rect.position(), Point::new(-50.0, 0.0));
    }

    #[test]
    fn test_cover_tall_image() {
        let rect = cover_rect(Size::new(400.0, 200.0), 100, 100);
        assert_eq!(rect.size(), Size::new(400.0, 400.0));
        assert_eq!(rect.position(), Point::new(0.0, -100.0));
    }

    #[test]
    fn test_cover_degenerate() {
        let rect = cover_rect(Size::new(300.0, 200.0), 0, 10);
        assert_eq!(rect, Rectangle::new(Point::ORIGIN, Size::new(300.0, 200.0)));
    }
}
