use eframe::egui::{Color32, Rect};

use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{card, glyph, label, line_height, rect, rows, text};
use crate::render::{CANVAS_WIDTH, Element, Field, TextStyle};

const PROS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
const CONS: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);

/// Two side panels: even content items under "Pros / Before", odd ones under
/// "Cons / After", with a swap marker between them.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let mut elements = vec![text(
        rect(40.0, 40.0, CANVAS_WIDTH - 80.0, 50.0),
        slide,
        Field::Title,
        TextStyle::new(36.0, theme.text_primary, family.clone())
            .centered()
            .middle(),
    )];

    let left = rect(40.0, 130.0, 544.0, 550.0);
    let right = rect(696.0, 130.0, 544.0, 550.0);

    elements.extend(panel(slide, theme, left, "Pros / Before", PROS, "\u{2714}", 0));
    elements.push(card(
        rect(616.0, left.center().y - 24.0, 48.0, 48.0),
        Color32::from_rgb(0x1e, 0x29, 0x3b),
        Some(Color32::from_rgb(0x33, 0x41, 0x55)),
        24.0,
    ));
    elements.push(glyph(
        rect(616.0, left.center().y - 24.0, 48.0, 48.0),
        "\u{2194}",
        24.0,
        Color32::from_rgb(0x94, 0xa3, 0xb8),
    ));
    elements.extend(panel(slide, theme, right, "Cons / After", CONS, "\u{00d7}", 1));
    elements
}

fn panel(
    slide: &Slide,
    theme: &Theme,
    area: Rect,
    heading: &str,
    color: Color32,
    mark: &'static str,
    parity: usize,
) -> Vec<Element> {
    let family = theme.egui_font_family();
    let mut elements = vec![
        card(
            area,
            Theme::with_opacity(color, 0.05),
            Some(Theme::with_opacity(color, 0.3)),
            16.0,
        ),
        label(
            rect(area.left() + 32.0, area.top() + 32.0, area.width() - 64.0, 32.0),
            heading,
            TextStyle::new(24.0, color, family.clone()),
        ),
    ];

    let indices: Vec<usize> = (parity..slide.content.len()).step_by(2).collect();
    let list = rect(
        area.left() + 32.0,
        area.top() + 88.0,
        area.width() - 64.0,
        area.height() - 120.0,
    );
    let style = TextStyle::new(18.0, theme.text_secondary, family);
    for (slot, index) in rows(list, indices.len(), line_height(18.0, 2.0), 16.0, false)
        .into_iter()
        .zip(indices)
    {
        elements.push(glyph(
            rect(slot.left(), slot.top(), 20.0, 24.0),
            mark,
            18.0,
            color,
        ));
        elements.push(text(
            rect(slot.left() + 32.0, slot.top(), slot.width() - 32.0, slot.height()),
            slide,
            Field::Content(index),
            style.clone(),
        ));
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;
    use crate::render::ElementKind;

    #[test]
    fn test_items_alternate_between_panels() {
        let slide = Slide::new("T", Layout::Comparison, &["p0", "c0", "p1", "c1", "p2"]);
        let elements = build(&slide, &Theme::fallback());
        let fields: Vec<(Field, f32)> = elements
            .iter()
            .filter_map(|e| match &e.kind {
                ElementKind::Text {
                    field: Some(f @ Field::Content(_)),
                    ..
                } => Some((*f, e.rect.left())),
                _ => None,
            })
            .collect();
        assert_eq!(fields.len(), 5);
        for (field, x) in fields {
            let Field::Content(i) = field else { unreachable!() };
            assert_eq!(x < 640.0, i % 2 == 0, "item {i}");
        }
    }
}
