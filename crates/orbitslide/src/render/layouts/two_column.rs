use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{line_height, rect, rows, text};
use crate::render::{CANVAS_HEIGHT, Element, ElementKind, Field, TextStyle};

/// Title and text on the left half, the slide image on the right.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let column = rect(56.0, 56.0, 528.0, CANVAS_HEIGHT - 112.0);

    let title_height = line_height(48.0, 2.0);
    let item_height = line_height(20.0, 3.0);
    let count = slide.content.len();
    let total = title_height + 40.0 + count as f32 * (item_height + 24.0);
    let top = column.top() + ((column.height() - total) / 2.0).max(0.0);

    let mut elements = vec![
        Element {
            rect: rect(664.0, 24.0, 592.0, CANVAS_HEIGHT - 48.0),
            kind: ElementKind::Image {
                source: slide.image_url(),
                alt: slide.image_keyword.clone().unwrap_or_default(),
                opacity: 0.9,
                shade: false,
                rounding: 16.0,
            },
        },
        text(
            rect(column.left(), top, column.width(), title_height),
            slide,
            Field::Title,
            TextStyle::new(48.0, theme.text_primary, family.clone()).bottom(),
        ),
    ];

    let list = rect(
        column.left(),
        top + title_height + 40.0,
        column.width(),
        column.bottom() - top - title_height - 40.0,
    );
    let style = TextStyle::new(20.0, theme.text_secondary, family);
    for (i, slot) in rows(list, count, item_height, 24.0, false).into_iter().enumerate() {
        elements.push(text(slot, slide, Field::Content(i), style.clone()));
    }
    elements
}
