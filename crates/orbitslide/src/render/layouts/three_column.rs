use eframe::egui::Color32;

use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{badge, columns, rect, text, theme_card};
use crate::render::{CANVAS_WIDTH, Element, Field, TextStyle};

/// Centered title over up to three numbered cards.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let mut elements = vec![text(
        rect(48.0, 48.0, CANVAS_WIDTH - 96.0, 50.0),
        slide,
        Field::Title,
        TextStyle::new(36.0, theme.text_primary, family.clone())
            .centered()
            .middle(),
    )];

    let count = slide.content.len().min(3);
    if count == 0 {
        return elements;
    }

    // The grid always has three tracks; fewer items leave empty space on the right.
    let grid = rect(48.0, 146.0, CANVAS_WIDTH - 96.0, 526.0);
    let style = TextStyle::new(18.0, theme.text_secondary, family).centered();
    for (i, cell) in columns(grid, 3, 32.0).into_iter().take(count).enumerate() {
        elements.push(theme_card(cell, theme, 16.0));
        elements.push(badge(
            rect(cell.center().x - 24.0, cell.top() + 24.0, 48.0, 48.0),
            (i + 1).to_string(),
            theme.accent,
            Color32::WHITE,
        ));
        elements.push(text(
            rect(
                cell.left() + 24.0,
                cell.top() + 96.0,
                cell.width() - 48.0,
                cell.height() - 120.0,
            ),
            slide,
            Field::Content(i),
            style.clone(),
        ));
    }
    elements
}
