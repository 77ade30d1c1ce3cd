use eframe::egui::{self, FontId};

use crate::render::paint::Transform;
use crate::render::{ElementKind, SlideEdit, SlideView};

/// Place a borderless `TextEdit` over every editable text element and return
/// the edits made this frame. Paint the slide with `skip_editable` first.
pub fn edit_overlay(ui: &mut egui::Ui, view: &SlideView, transform: &Transform) -> Vec<SlideEdit> {
    let mut edits = Vec::new();

    for (i, element) in view.elements.iter().enumerate() {
        let ElementKind::Text {
            field: Some(field),
            text,
            style,
            placeholder,
        } = &element.kind
        else {
            continue;
        };

        let rect = transform.rect(element.rect);
        let mut buffer = text.clone();
        let font = FontId::new(transform.size(style.size), style.family.clone());
        let rows = ((rect.height() / font.size.max(1.0)) as usize).max(1);

        let edit = egui::TextEdit::multiline(&mut buffer)
            .id_salt(("slide-text", i))
            .frame(false)
            .font(font)
            .text_color(transform.color(style.color))
            .horizontal_align(style.align)
            .vertical_align(style.valign)
            .desired_width(rect.width())
            .desired_rows(rows)
            .margin(egui::Margin::ZERO)
            .hint_text(*placeholder);

        if ui.put(rect, edit).changed() {
            edits.push(SlideEdit::new(*field, buffer));
        }
    }
    edits
}
