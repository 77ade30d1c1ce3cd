use eframe::egui::{self, Color32, CornerRadius, Rect, Sense, Stroke, StrokeKind};

use crate::catalog::animations::Frame;
use crate::catalog::{AnimationClass, Theme};
use crate::model::Slide;
use crate::render::image_cache::ImageCache;
use crate::render::{self, CANVAS_HEIGHT, CANVAS_WIDTH, editor, paint};
use crate::state::Action;

use super::View;

const SELECTED: Color32 = Color32::from_rgb(37, 99, 235);
const UNSELECTED: Color32 = Color32::from_rgb(30, 41, 59);

/// Paint the current slide centered in `area`. When `editable`, text
/// elements become in-place text fields and edits are pushed as actions.
/// Returns the screen rect of the slide.
pub fn current_slide(
    ui: &mut egui::Ui,
    view: &View,
    area: Rect,
    margin: f32,
    editable: bool,
    actions: &mut Vec<Action>,
) -> Option<Rect> {
    let slide = view.state.store().current()?;
    let animation = view.state.animation_for(slide);
    let slide_view = render::build(slide, view.theme, &animation);
    let rect = paint::fit_canvas(area, margin);

    let painter = ui.painter();
    painter.rect_filled(rect, 8.0, Color32::BLACK);
    paint::paint_slide(painter, &slide_view, rect, view.frame, view.images, editable);
    if editable {
        painter.rect_stroke(
            rect,
            8.0,
            Stroke::new(1.0, Color32::from_white_alpha(26)),
            StrokeKind::Outside,
        );
        let transform = paint::Transform::new(rect, view.frame);
        actions.extend(
            editor::edit_overlay(ui, &slide_view, &transform)
                .into_iter()
                .map(Action::EditSlide),
        );
    }
    Some(rect)
}

/// A clickable, non-animated miniature of `slide`.
pub fn thumbnail(
    ui: &mut egui::Ui,
    slide: &Slide,
    theme: &Theme,
    images: &ImageCache,
    width: f32,
    selected: bool,
) -> egui::Response {
    let size = egui::vec2(width, width * CANVAS_HEIGHT / CANVAS_WIDTH);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let slide_view = render::build(slide, theme, &AnimationClass::default());
    let painter = ui.painter();
    paint::paint_slide(painter, &slide_view, rect, Frame::REST, images, false);

    if !selected {
        let dim = if response.hovered() { 0 } else { 100 };
        painter.rect_filled(rect, 0.0, Color32::from_black_alpha(dim));
    }
    let stroke = if selected {
        Stroke::new(2.0, SELECTED)
    } else {
        Stroke::new(2.0, UNSELECTED)
    };
    painter.rect_stroke(rect, CornerRadius::same(4), stroke, StrokeKind::Outside);
    response
}
