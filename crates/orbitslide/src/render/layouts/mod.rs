pub mod big_number;
pub mod bullet_points;
pub mod code_block;
pub mod comparison;
pub mod gallery;
pub mod quote;
pub mod section_header;
pub mod three_column;
pub mod title;
pub mod two_column;

use eframe::egui::{Color32, Pos2, Rect, vec2};

use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::{CANVAS_HEIGHT, CANVAS_WIDTH, Element, ElementKind, Field, TextStyle};

/// Editable text bound to `field`.
pub(crate) fn text(rect: Rect, slide: &Slide, field: Field, style: TextStyle) -> Element {
    placeholder_text(rect, slide, field, style, "")
}

pub(crate) fn placeholder_text(
    rect: Rect,
    slide: &Slide,
    field: Field,
    style: TextStyle,
    placeholder: &'static str,
) -> Element {
    Element {
        rect,
        kind: ElementKind::Text {
            field: Some(field),
            text: field.read(slide),
            style,
            placeholder,
        },
    }
}

/// Fixed, non-editable text.
pub(crate) fn label(rect: Rect, text: impl Into<String>, style: TextStyle) -> Element {
    Element {
        rect,
        kind: ElementKind::Text {
            field: None,
            text: text.into(),
            style,
            placeholder: "",
        },
    }
}

pub(crate) fn bar(rect: Rect, color: Color32) -> Element {
    Element {
        rect,
        kind: ElementKind::Bar { color },
    }
}

pub(crate) fn card(rect: Rect, fill: Color32, stroke: Option<Color32>, rounding: f32) -> Element {
    Element {
        rect,
        kind: ElementKind::Card {
            fill,
            stroke,
            rounding,
        },
    }
}

/// The theme's translucent card with a faint outline.
pub(crate) fn theme_card(rect: Rect, theme: &Theme, rounding: f32) -> Element {
    card(
        rect,
        theme.card_background,
        Some(Theme::with_opacity(theme.text_secondary, 0.125)),
        rounding,
    )
}

pub(crate) fn badge(rect: Rect, label: impl Into<String>, fill: Color32, text_color: Color32) -> Element {
    Element {
        rect,
        kind: ElementKind::Badge {
            label: label.into(),
            fill,
            text_color,
        },
    }
}

pub(crate) fn image(rect: Rect, source: String, alt: &str, opacity: f32, shade: bool) -> Element {
    Element {
        rect,
        kind: ElementKind::Image {
            source,
            alt: alt.to_string(),
            opacity,
            shade,
            rounding: 12.0,
        },
    }
}

pub(crate) fn glyph(rect: Rect, glyph: &'static str, size: f32, color: Color32) -> Element {
    Element {
        rect,
        kind: ElementKind::Glyph { glyph, size, color },
    }
}

/// Solid version of a possibly translucent color.
pub(crate) fn opaque(color: Color32) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgb(r, g, b)
}

/// Rough height of `lines` lines of text at `size`.
pub(crate) fn line_height(size: f32, lines: f32) -> f32 {
    size * 1.35 * lines
}

/// Split `area` into `count` rows of at most `max_height` separated by `gap`,
/// vertically centered when `center` is set (top-aligned otherwise).
pub(crate) fn rows(area: Rect, count: usize, max_height: f32, gap: f32, center: bool) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let gaps = gap * (count - 1) as f32;
    let height = ((area.height() - gaps) / count as f32).clamp(1.0, max_height);
    let total = height * count as f32 + gaps;
    let top = if center {
        area.top() + ((area.height() - total) / 2.0).max(0.0)
    } else {
        area.top()
    };
    (0..count)
        .map(|i| {
            let y = top + i as f32 * (height + gap);
            Rect::from_min_size(Pos2::new(area.left(), y), vec2(area.width(), height))
        })
        .collect()
}

/// Split `area` into `count` equal columns separated by `gap`.
pub(crate) fn columns(area: Rect, count: usize, gap: f32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let width = (area.width() - gap * (count - 1) as f32) / count as f32;
    (0..count)
        .map(|i| {
            let x = area.left() + i as f32 * (width + gap);
            Rect::from_min_size(Pos2::new(x, area.top()), vec2(width, area.height()))
        })
        .collect()
}

pub(crate) fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_min_size(Pos2::new(x, y), vec2(w, h))
}

/// Blurred accent blobs behind every slide.
pub fn decorations(theme: &Theme) -> Vec<Element> {
    vec![
        Element {
            rect: rect(CANVAS_WIDTH - 256.0, -128.0, 384.0, 384.0),
            kind: ElementKind::Glow {
                color: Theme::with_opacity(opaque(theme.accent), 0.2),
            },
        },
        Element {
            rect: rect(-128.0, CANVAS_HEIGHT - 352.0, 480.0, 480.0),
            kind: ElementKind::Glow {
                color: Theme::with_opacity(opaque(theme.text_primary), 0.1),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fit_area() {
        let area = rect(0.0, 100.0, 500.0, 400.0);
        let slots = rows(area, 4, 200.0, 20.0, false);
        assert_eq!(slots.len(), 4);
        assert!(slots[3].bottom() <= area.bottom() + 0.01);
        assert_eq!(slots[0].top(), 100.0);
    }

    #[test]
    fn test_rows_center_short_lists() {
        let area = rect(0.0, 0.0, 100.0, 400.0);
        let slots = rows(area, 1, 50.0, 10.0, true);
        assert_eq!(slots[0].top(), 175.0);
        assert!(rows(area, 0, 50.0, 10.0, true).is_empty());
    }

    #[test]
    fn test_columns() {
        let cols = columns(rect(0.0, 0.0, 320.0, 10.0), 3, 10.0);
        assert_eq!(cols[1].left(), 110.0);
        assert_eq!(cols[2].right(), 320.0);
    }
}
