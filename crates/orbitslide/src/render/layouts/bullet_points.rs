use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{badge, bar, opaque, placeholder_text, rect, rows, text, theme_card};
use crate::render::{CANVAS_WIDTH, Element, Field, TextStyle};

/// Title, accent subtitle, underline and one numbered card per content item.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let width = CANVAS_WIDTH - 112.0;

    let mut elements = vec![
        text(
            rect(56.0, 56.0, width, 60.0),
            slide,
            Field::Title,
            TextStyle::new(48.0, theme.text_primary, family.clone()).bottom(),
        ),
        placeholder_text(
            rect(56.0, 128.0, width, 28.0),
            slide,
            Field::Subtitle,
            TextStyle::new(20.0, Theme::with_opacity(theme.accent, 0.8), family.clone()),
            "Subtitle...",
        ),
        bar(rect(56.0, 180.0, width, 1.0), theme.accent),
    ];

    let list = rect(56.0, 236.0, width, 428.0);
    let style = TextStyle::new(24.0, theme.text_secondary, family).middle();
    for (i, slot) in rows(list, slide.content.len(), 74.0, 24.0, false)
        .into_iter()
        .enumerate()
    {
        elements.push(theme_card(slot, theme, 12.0));
        elements.push(badge(
            rect(slot.left() + 20.0, slot.center().y - 16.0, 32.0, 32.0),
            (i + 1).to_string(),
            theme.accent,
            opaque(theme.card_background),
        ));
        elements.push(text(
            rect(slot.left() + 72.0, slot.top(), slot.width() - 92.0, slot.height()),
            slide,
            Field::Content(i),
            style.clone(),
        ));
    }
    elements
}
