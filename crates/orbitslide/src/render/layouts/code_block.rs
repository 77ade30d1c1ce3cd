use eframe::egui::{Color32, FontFamily};

use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{bar, card, glyph, rect, text};
use crate::render::{CANVAS_WIDTH, Element, Field, TextStyle};

/// A monospace title and an editor-style window holding all content items
/// joined by blank lines.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let window = rect(48.0, 116.0, CANVAS_WIDTH - 96.0, 556.0);
    let mut elements = vec![
        glyph(
            rect(48.0, 48.0, 40.0, 36.0),
            "</>",
            22.0,
            Color32::from_rgb(0x34, 0xd3, 0x99),
        ),
        text(
            rect(104.0, 48.0, CANVAS_WIDTH - 152.0, 36.0),
            slide,
            Field::Title,
            TextStyle::new(30.0, theme.text_primary, FontFamily::Monospace).middle(),
        ),
        card(
            window,
            Color32::from_rgb(0x1e, 0x1e, 0x1e),
            Some(Color32::from_rgb(0x33, 0x41, 0x55)),
            12.0,
        ),
    ];

    let dots = [
        Color32::from_rgb(0xef, 0x44, 0x44),
        Color32::from_rgb(0xea, 0xb3, 0x08),
        Color32::from_rgb(0x22, 0xc5, 0x5e),
    ];
    for (i, color) in dots.into_iter().enumerate() {
        let x = window.right() - 16.0 - 12.0 - (2 - i) as f32 * 20.0;
        elements.push(bar(rect(x, window.top() + 16.0, 12.0, 12.0), color));
    }

    elements.push(text(
        rect(
            window.left() + 32.0,
            window.top() + 48.0,
            window.width() - 64.0,
            window.height() - 80.0,
        ),
        slide,
        Field::ContentJoined,
        TextStyle::new(14.0, Color32::from_rgb(0xcb, 0xd5, 0xe1), FontFamily::Monospace),
    ));
    elements
}
