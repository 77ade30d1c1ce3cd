use eframe::egui::Color32;

use crate::catalog::themes::Theme;
use crate::model::Slide;
use crate::render::layouts::{image, rect, text};
use crate::render::{CANVAS_WIDTH, Element, Field, TextStyle};

/// One large image and two smaller ones, captioned by the first three
/// content items.
pub fn build(slide: &Slide, theme: &Theme) -> Vec<Element> {
    let family = theme.egui_font_family();
    let keyword = slide.image_keyword.as_deref().unwrap_or("gallery");

    let main = rect(40.0, 104.0, 592.0, 576.0);
    let second = rect(648.0, 104.0, 592.0, 280.0);
    let third = rect(648.0, 400.0, 592.0, 280.0);
    let caption = TextStyle::new(16.0, Color32::WHITE, family.clone()).bottom();

    vec![
        text(
            rect(40.0, 40.0, CANVAS_WIDTH - 80.0, 40.0),
            slide,
            Field::Title,
            TextStyle::new(30.0, theme.text_primary, family.clone()),
        ),
        image(main, slide.image_url(), keyword, 1.0, true),
        text(
            rect(main.left() + 24.0, main.bottom() - 96.0, main.width() - 48.0, 72.0),
            slide,
            Field::Content(0),
            TextStyle::new(20.0, Color32::WHITE, family).bottom(),
        ),
        image(second, slide.gallery_image_url(2), keyword, 0.8, false),
        text(
            rect(second.left() + 16.0, second.bottom() - 60.0, second.width() - 32.0, 44.0),
            slide,
            Field::Content(1),
            caption.clone(),
        ),
        image(third, slide.gallery_image_url(3), keyword, 0.8, false),
        text(
            rect(third.left() + 16.0, third.bottom() - 60.0, third.width() - 32.0, 44.0),
            slide,
            Field::Content(2),
            caption,
        ),
    ]
}
