use iced::widget::{
    button, canvas, column, container, horizontal_space, image, row, stack, text, Column, Row, Space,
};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};
use std::time::Instant;

use dermabar_gallery::config::Layout;
use dermabar_gallery::gallery::loader::LoadedImage;
use dermabar_gallery::gallery::ComparisonSlider;
use dermabar_gallery::motion::{Motion, Token};

use super::comparison::ComparisonCanvas;
use crate::{Message, PairSlot};

const STAGE_HEIGHT: f32 = 520.0;

/// Section heading, one text per token so each can fade on its own
pub fn heading<'a>(tokens: &'a [Token], motion: &Motion, now: Instant) -> Element<'a, Message> {
    let words = tokens.iter().map(|token| -> Element<'a, Message> {
        let opacity = motion.opacity(token.index, now);
        text(&token.content)
            .size(40)
            .style(move |theme: &Theme| {
                let color = theme.palette().text;
                text::Style {
                    color: Some(Color { a: color.a * opacity, ..color }),
                }
            })
            .into()
    });

    Row::with_children(words).spacing(12).into()
}

/// The comparison stage with its navigation and info panel.
/// Renders nothing when the slider has no items.
pub fn comparison<'a>(
    slider: &'a ComparisonSlider,
    slot: Option<&'a PairSlot>,
    layout: Layout,
) -> Element<'a, Message> {
    let Some(item) = slider.current() else {
        return Space::new(Length::Fill, Length::Shrink).into();
    };

    let pair = match slot {
        Some(PairSlot::Ready(pair)) => Some(pair),
        _ => None,
    };

    let stage: Element<'a, Message> = match layout {
        Layout::Reveal => canvas(ComparisonCanvas {
            pair,
            position: slider.divider_position(),
            dragging: slider.is_dragging(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(STAGE_HEIGHT))
        .into(),
        Layout::SideBySide => row![
            panel(pair.map(|p| &p.before), "BEFORE"),
            panel(pair.map(|p| &p.after), "AFTER"),
        ]
        .height(Length::Fixed(STAGE_HEIGHT))
        .into(),
    };

    let navigation = row![
        button(text("‹").size(32)).on_press(Message::Previous).padding(12),
        stage,
        button(text("›").size(32)).on_press(Message::Next).padding(12),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let load_note = match slot {
        Some(PairSlot::Loading) | None => text("Loading images...").size(14),
        Some(PairSlot::Failed(reason)) => text(format!("⚠️  {}", reason)).size(14),
        Some(PairSlot::Ready(_)) => text(""),
    };

    let info = row![
        column![text(&item.label).size(24), text(&item.caption).size(16), load_note].spacing(4),
        horizontal_space(),
        column![
            pagination(slider),
            text(format!("{} / {}", slider.active_index() + 1, slider.len())).size(14),
        ]
        .spacing(6)
        .align_x(Alignment::End),
    ]
    .align_y(Alignment::Center)
    .padding(20);

    column![navigation, info].spacing(8).into()
}

/// One dot per item; the active one filled
fn pagination<'a>(slider: &'a ComparisonSlider) -> Element<'a, Message> {
    let dots = (0..slider.len()).map(|index| -> Element<'a, Message> {
        let glyph = if index == slider.active_index() { "●" } else { "○" };
        button(text(glyph).size(14))
            .on_press(Message::JumpTo(index))
            .padding(2)
            .style(button::text)
            .into()
    });
    Row::with_children(dots).spacing(4).into()
}

/// Half of the side-by-side layout
fn panel<'a>(loaded: Option<&'a LoadedImage>, label: &'a str) -> Element<'a, Message> {
    let caption = container(text(label).size(24)).center(Length::Fill);

    let content: Element<'a, Message> = match loaded {
        Some(loaded) => stack![
            image(loaded.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
            caption,
        ]
        .into(),
        None => container(caption)
            .style(container::rounded_box)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    container(content).width(Length::FillPortion(1)).height(Length::Fill).into()
}

/// Footer note under the gallery
pub fn disclaimer<'a>() -> Column<'a, Message> {
    column![text("Individual results may vary. Consultations required.").size(14)]
        .align_x(Alignment::Center)
        .width(Length::Fill)
}
