use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{glyph, rect, text};
use crate::render::{CANVAS_WIDTH, Element, Field, TextStyle};

/// The first content item as a large italic quote, the title as attribution.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    vec![
        glyph(
            rect(40.0, 40.0, 120.0, 120.0),
            "\u{201C}",
            120.0,
            Theme::with_opacity(theme.text_primary, 0.1),
        ),
        text(
            rect(80.0, 150.0, CANVAS_WIDTH - 160.0, 320.0),
            slide,
            Field::Content(0),
            TextStyle::new(48.0, theme.text_primary, family.clone())
                .centered()
                .bottom()
                .italic(),
        ),
        glyph(rect(430.0, 518.0, 30.0, 36.0), "\u{2014}", 24.0, theme.accent),
        text(
            rect(470.0, 518.0, 380.0, 36.0),
            slide,
            Field::Title,
            TextStyle::new(24.0, theme.accent, family)
                .middle()
                .uppercase(),
        ),
    ]
}
