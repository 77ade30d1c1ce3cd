use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{bar, line_height, rect, rows, text};
use crate::render::{CANVAS_HEIGHT, Element, Field, TextStyle};

/// Title on the left half, every content item as a bullet on the right.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let mut elements = vec![
        text(
            rect(64.0, 160.0, 512.0, 300.0),
            slide,
            Field::Title,
            TextStyle::new(60.0, theme.text_primary, family.clone())
                .right()
                .bottom(),
        ),
        bar(rect(496.0, 484.0, 80.0, 4.0), theme.accent),
        bar(
            rect(639.5, 0.0, 1.0, CANVAS_HEIGHT),
            Theme::with_opacity(theme.text_secondary, 0.2),
        ),
    ];

    let list = rect(704.0, 64.0, 512.0, CANVAS_HEIGHT - 128.0);
    let style = TextStyle::new(24.0, theme.text_secondary, family);
    for (i, slot) in rows(list, slide.content.len(), line_height(24.0, 2.0), 24.0, true)
        .into_iter()
        .enumerate()
    {
        elements.push(bar(
            rect(slot.left(), slot.top() + 12.0, 8.0, 8.0),
            theme.accent,
        ));
        elements.push(text(
            rect(slot.left() + 32.0, slot.top(), slot.width() - 32.0, slot.height()),
            slide,
            Field::Content(i),
            style.clone(),
        ));
    }
    elements
}
