use eframe::egui::{
    self, Align, Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Shape, Stroke, Vec2,
    text::{LayoutJob, TextFormat},
};

use crate::catalog::animations::Frame;
use crate::catalog::themes::{Background, Theme};
use crate::render::image_cache::{ImageCache, ImageState};
use crate::render::{CANVAS_HEIGHT, CANVAS_WIDTH, Element, ElementKind, SlideView, TextStyle};

/// Largest 16:9 rect that fits in `available` after removing `margin` on
/// every side, centered. Never smaller than a tenth of the canvas.
pub fn fit_canvas(available: Rect, margin: f32) -> Rect {
    let inner = available.shrink(margin);
    let scale = (inner.width() / CANVAS_WIDTH)
        .min(inner.height() / CANVAS_HEIGHT)
        .max(0.1);
    Rect::from_center_size(
        available.center(),
        egui::vec2(CANVAS_WIDTH * scale, CANVAS_HEIGHT * scale),
    )
}

/// Maps canvas coordinates into a screen rect, applying an animation frame
/// around the canvas center.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub origin: Pos2,
    pub scale: f32,
    pub frame: Frame,
}

impl Transform {
    pub fn new(slide_rect: Rect, frame: Frame) -> Self {
        Self {
            origin: slide_rect.min,
            scale: slide_rect.width() / CANVAS_WIDTH,
            frame,
        }
    }

    pub fn point(&self, canvas: Pos2) -> Pos2 {
        let center = egui::pos2(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        let d = canvas - center;
        let moved = center
            + Vec2::new(d.x * self.frame.scale.x, d.y * self.frame.scale.y)
            + self.frame.offset;
        self.origin + moved.to_vec2() * self.scale
    }

    pub fn rect(&self, canvas: Rect) -> Rect {
        Rect::from_two_pos(self.point(canvas.min), self.point(canvas.max))
    }

    /// Screen size of a canvas length (fonts, radii).
    pub fn size(&self, canvas: f32) -> f32 {
        canvas * self.scale * self.frame.scale.x.min(self.frame.scale.y)
    }

    pub fn color(&self, color: Color32) -> Color32 {
        Theme::with_opacity(color, self.frame.opacity)
    }
}

/// Paint a whole slide into `slide_rect`. When `skip_editable` is set,
/// editable text is left for the editor overlay.
pub fn paint_slide(
    painter: &Painter,
    view: &SlideView,
    slide_rect: Rect,
    frame: Frame,
    images: &ImageCache,
    skip_editable: bool,
) {
    let painter = painter.with_clip_rect(slide_rect.intersect(painter.clip_rect()));
    paint_background(&painter, &view.background, slide_rect);

    let still = Transform::new(slide_rect, Frame::REST);
    for element in &view.decorations {
        paint_element(&painter, element, &still, images);
    }

    let moving = Transform::new(slide_rect, frame);
    for element in &view.elements {
        if skip_editable && element.is_editable() {
            continue;
        }
        paint_element(&painter, element, &moving, images);
    }
}

/// Fill `rect` with a background by sampling it on a vertex grid.
pub fn paint_background(painter: &Painter, background: &Background, rect: Rect) {
    if let Background::Solid(color) = background {
        painter.rect_filled(rect, 0.0, *color);
        return;
    }

    const COLS: u32 = 32;
    const ROWS: u32 = 18;
    let mut mesh = Mesh::default();
    for row in 0..=ROWS {
        for col in 0..=COLS {
            let u = col as f32 / COLS as f32;
            let v = row as f32 / ROWS as f32;
            let pos = egui::pos2(
                rect.left() + u * rect.width(),
                rect.top() + v * rect.height(),
            );
            mesh.colored_vertex(pos, background.sample(u, v));
        }
    }
    let stride = COLS + 1;
    for row in 0..ROWS {
        for col in 0..COLS {
            let i = row * stride + col;
            mesh.add_triangle(i, i + 1, i + stride);
            mesh.add_triangle(i + 1, i + stride + 1, i + stride);
        }
    }
    painter.add(Shape::mesh(mesh));
}

fn paint_element(painter: &Painter, element: &Element, t: &Transform, images: &ImageCache) {
    let rect = t.rect(element.rect);
    match &element.kind {
        ElementKind::Text { text, style, .. } => {
            if !text.is_empty() {
                paint_text(painter, text, style, rect, t);
            }
        }
        ElementKind::Bar { color } => {
            let radius = rect.width().min(rect.height()) / 2.0;
            painter.rect_filled(rect, radius, t.color(*color));
        }
        ElementKind::Card {
            fill,
            stroke,
            rounding,
        } => {
            let radius = t.size(*rounding);
            painter.rect_filled(rect, radius, t.color(*fill));
            if let Some(stroke) = stroke {
                painter.rect_stroke(
                    rect,
                    radius,
                    Stroke::new(1.0, t.color(*stroke)),
                    egui::StrokeKind::Inside,
                );
            }
        }
        ElementKind::Badge {
            label,
            fill,
            text_color,
        } => {
            let radius = rect.width().min(rect.height()) / 2.0;
            painter.circle_filled(rect.center(), radius, t.color(*fill));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(radius),
                t.color(*text_color),
            );
        }
        ElementKind::Image {
            source,
            alt,
            opacity,
            shade,
            ..
        } => match images.get(painter.ctx(), source) {
            ImageState::Ready(texture) => {
                let tint = t.color(Theme::with_opacity(Color32::WHITE, *opacity));
                painter.image(texture.id(), rect, cover_uv(texture.size_vec2(), rect), tint);
                if *shade {
                    paint_shade(painter, rect, t.color(Color32::from_black_alpha(204)));
                }
            }
            state => {
                paint_image_placeholder(painter, alt, rect, t, matches!(state, ImageState::Loading));
            }
        },
        ElementKind::Glyph { glyph, size, color } => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                *glyph,
                FontId::proportional(t.size(*size)),
                t.color(*color),
            );
        }
        ElementKind::Glow { color } => {
            paint_glow(painter, rect, t.color(*color));
        }
    }
}

fn paint_text(painter: &Painter, text: &str, style: &TextStyle, rect: Rect, t: &Transform) {
    let shown = if style.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };
    let color = t.color(style.color);
    let format = TextFormat {
        font_id: FontId::new(t.size(style.size), style.family.clone()),
        color,
        italics: style.italic,
        ..Default::default()
    };
    let mut job = LayoutJob::single_section(shown, format);
    job.wrap.max_width = rect.width().max(1.0);
    job.halign = style.align;

    let galley = painter.layout_job(job);
    let size = galley.rect.size();
    let x = match style.align {
        Align::Min => rect.left(),
        Align::Center => rect.center().x - size.x / 2.0,
        Align::Max => rect.right() - size.x,
    };
    let y = match style.valign {
        Align::Min => rect.top(),
        Align::Center => rect.center().y - size.y / 2.0,
        Align::Max => rect.bottom() - size.y,
    };
    let origin = egui::pos2(x, y) - galley.rect.min.to_vec2();
    painter.galley(origin, galley, color);
}

/// UV rect that crops a texture to cover `rect` without distortion.
fn cover_uv(texture: Vec2, rect: Rect) -> Rect {
    let full = Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0));
    if texture.x <= 0.0 || texture.y <= 0.0 || rect.height() <= 0.0 {
        return full;
    }
    let tex_aspect = texture.x / texture.y;
    let rect_aspect = rect.width() / rect.height();
    if tex_aspect > rect_aspect {
        let visible = rect_aspect / tex_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(inset, 0.0), egui::pos2(1.0 - inset, 1.0))
    } else {
        let visible = tex_aspect / rect_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(0.0, inset), egui::pos2(1.0, 1.0 - inset))
    }
}

/// Vertical gradient from transparent at the middle to `bottom` at the bottom edge.
fn paint_shade(painter: &Painter, rect: Rect, bottom: Color32) {
    let mut mesh = Mesh::default();
    let mid = rect.center().y;
    mesh.colored_vertex(egui::pos2(rect.left(), mid), Color32::TRANSPARENT);
    mesh.colored_vertex(egui::pos2(rect.right(), mid), Color32::TRANSPARENT);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(Shape::mesh(mesh));
}

fn paint_glow(painter: &Painter, rect: Rect, color: Color32) {
    const SEGMENTS: u32 = 48;
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for i in 0..SEGMENTS {
        let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        let pos = center + Vec2::angled(angle) * radius;
        mesh.colored_vertex(pos, Color32::TRANSPARENT);
    }
    for i in 0..SEGMENTS {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % SEGMENTS);
    }
    painter.add(Shape::mesh(mesh));
}

fn paint_image_placeholder(painter: &Painter, alt: &str, rect: Rect, t: &Transform, loading: bool) {
    let radius = t.size(12.0);
    painter.rect_filled(rect, radius, t.color(Color32::from_black_alpha(77)));
    painter.rect_stroke(
        rect,
        radius,
        Stroke::new(1.0, t.color(Color32::from_white_alpha(40))),
        egui::StrokeKind::Inside,
    );
    let label = match (loading, alt.is_empty()) {
        (true, _) => "Loading image...".to_string(),
        (false, true) => "[Image]".to_string(),
        (false, false) => format!("[Image: {alt}]"),
    };
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(t.size(18.0)),
        t.color(Color32::from_white_alpha(160)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_canvas_keeps_aspect() {
        let available = Rect::from_min_size(Pos2::ZERO, egui::vec2(2000.0, 800.0));
        let fitted = fit_canvas(available, 48.0);
        assert!((fitted.width() / fitted.height() - 16.0 / 9.0).abs() < 0.001);
        assert!((fitted.height() - 704.0).abs() < 0.01);
        assert_eq!(fitted.center(), available.center());
    }

    #[test]
    fn test_fit_canvas_minimum_scale() {
        let tiny = Rect::from_min_size(Pos2::ZERO, egui::vec2(20.0, 20.0));
        let fitted = fit_canvas(tiny, 48.0);
        assert!((fitted.width() - 128.0).abs() < 0.01);
    }

    #[test]
    fn test_transform_at_rest_is_plain_scale() {
        let slide = Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(640.0, 360.0));
        let t = Transform::new(slide, Frame::REST);
        assert_eq!(t.point(Pos2::ZERO), egui::pos2(10.0, 20.0));
        assert_eq!(t.point(egui::pos2(1280.0, 720.0)), egui::pos2(650.0, 380.0));
        assert_eq!(t.size(10.0), 5.0);
    }

    #[test]
    fn test_transform_applies_frame() {
        let slide = Rect::from_min_size(Pos2::ZERO, egui::vec2(1280.0, 720.0));
        let frame = Frame {
            opacity: 0.5,
            offset: egui::vec2(0.0, 100.0),
            scale: Vec2::splat(1.0),
        };
        let t = Transform::new(slide, frame);
        assert_eq!(t.point(egui::pos2(0.0, 0.0)), egui::pos2(0.0, 100.0));
        assert_eq!(t.color(Color32::WHITE).a(), 127);
    }

    #[test]
    fn test_cover_uv_crops_wide_texture() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0));
        let uv = cover_uv(egui::vec2(200.0, 100.0), rect);
        assert!((uv.min.x - 0.25).abs() < 0.001);
        assert!((uv.max.x - 0.75).abs() < 0.001);
        assert_eq!(uv.min.y, 0.0);
    }
}
