use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{bar, placeholder_text, rect};
use crate::render::{CANVAS_WIDTH, Element, Field, TextStyle};

/// Centered title, subtitle and a short accent bar.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let subtitle_width = 896.0;

    vec![
        placeholder_text(
            rect(48.0, 150.0, CANVAS_WIDTH - 96.0, 200.0),
            slide,
            Field::Title,
            TextStyle::new(72.0, theme.text_primary, family.clone())
                .centered()
                .bottom(),
            "Click to add title",
        ),
        placeholder_text(
            rect((CANVAS_WIDTH - subtitle_width) / 2.0, 382.0, subtitle_width, 100.0),
            slide,
            Field::Subtitle,
            TextStyle::new(30.0, theme.text_secondary, family).centered(),
            "Add subtitle...",
        ),
        bar(rect(CANVAS_WIDTH / 2.0 - 80.0, 546.0, 160.0, 8.0), theme.accent),
    ]
}
