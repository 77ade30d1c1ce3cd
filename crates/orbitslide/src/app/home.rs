use eframe::egui::{self, Align, Color32, RichText};

use crate::state::Action;
use crate::templates::{SAMPLE_TOPICS, SUGGESTIONS};

use super::View;

const PAGE_BG: Color32 = Color32::from_rgb(3, 7, 18);
const CARD_BG: Color32 = Color32::from_rgb(15, 23, 42);
const FIELD_BG: Color32 = Color32::from_rgb(11, 18, 33);
const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
const MUTED: Color32 = Color32::from_rgb(148, 163, 184);

const STEPS: [(&str, &str); 4] = [
    ("1. Enter Topic", "Type any subject, or paste your rough notes."),
    ("2. AI Generate", "Our engine structures the narrative & designs slides."),
    ("3. Customize", "Tweak layouts, themes, and content instantly."),
    ("4. Export", "Download as PDF or JSON for your meeting."),
];

pub fn show(ctx: &egui::Context, view: &View, actions: &mut Vec<Action>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(PAGE_BG))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(1100.0);
                        hero(ui, view, actions);
                        ui.add_space(64.0);
                        steps(ui);
                        ui.add_space(64.0);
                        samples(ui, actions);
                        ui.add_space(48.0);
                    });
                });
        });
}

fn hero(ui: &mut egui::Ui, view: &View, actions: &mut Vec<Action>) {
    let state = view.state;
    ui.add_space(72.0);
    ui.label(
        RichText::new("OrbitSlide AI 3.0")
            .color(Color32::from_rgb(219, 234, 254))
            .strong(),
    );
    ui.add_space(16.0);
    ui.label(RichText::new("Roar into").size(64.0).strong().color(Color32::WHITE));
    ui.label(
        RichText::new("Greatness.")
            .size(64.0)
            .strong()
            .color(Color32::from_rgb(34, 211, 238)),
    );
    ui.add_space(12.0);
    ui.label(
        RichText::new("Unleash the power of AI to create professional slide decks instantly.")
            .size(18.0)
            .color(MUTED),
    );
    ui.add_space(32.0);

    egui::Frame::new()
        .fill(FIELD_BG)
        .stroke(egui::Stroke::new(1.0, Color32::from_rgba_unmultiplied(59, 130, 246, 77)))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(640.0);
            ui.horizontal(|ui| {
                let generating = state.is_generating();
                let mut query = state.query().to_string();
                let input = ui.add_enabled(
                    !generating,
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("What do you want to create?")
                        .frame(false)
                        .font(egui::FontId::proportional(18.0))
                        .desired_width(ui.available_width() - 56.0),
                );
                if input.changed() {
                    actions.push(Action::SetQuery(query.clone()));
                }
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(Action::Generate(Some(query.clone())));
                }

                if generating {
                    ui.add(egui::Spinner::new().size(24.0));
                } else {
                    let ready = !query.trim().is_empty();
                    let button = egui::Button::new(RichText::new("→").size(20.0).color(Color32::WHITE))
                        .fill(if ready { ACCENT } else { CARD_BG })
                        .min_size(egui::vec2(44.0, 36.0));
                    if ui.add_enabled(ready, button).clicked() {
                        actions.push(Action::Generate(Some(query)));
                    }
                }
            });
        });

    ui.add_space(24.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        if ui
            .link(RichText::new("New · Start from Scratch").color(MUTED))
            .clicked()
        {
            actions.push(Action::StartFromScratch);
        }
        ui.label(RichText::new("Try:").color(MUTED));
        for suggestion in SUGGESTIONS {
            if ui.link(RichText::new(suggestion).color(MUTED)).clicked() {
                actions.push(Action::SetQuery(suggestion.to_string()));
            }
        }
    });

    if let Some(error) = state.error() {
        ui.add_space(24.0);
        egui::Frame::new()
            .fill(Color32::from_rgba_unmultiplied(239, 68, 68, 26))
            .stroke(egui::Stroke::new(1.0, Color32::from_rgba_unmultiplied(239, 68, 68, 128)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(16, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").clicked() {
                        actions.push(Action::DismissError);
                    }
                    ui.label(RichText::new(error).color(Color32::from_rgb(254, 202, 202)));
                });
            });
    }
}

fn steps(ui: &mut egui::Ui) {
    ui.label(RichText::new("How It Works").size(32.0).strong().color(Color32::WHITE));
    ui.add_space(24.0);
    ui.columns(STEPS.len(), |columns| {
        for (column, (title, desc)) in columns.iter_mut().zip(STEPS) {
            column.vertical_centered(|ui| {
                ui.label(RichText::new(title).size(18.0).strong().color(Color32::WHITE));
                ui.label(RichText::new(desc).color(MUTED));
            });
        }
    });
}

fn samples(ui: &mut egui::Ui, actions: &mut Vec<Action>) {
    ui.label(RichText::new("Explore 50+ Samples").size(32.0).strong().color(Color32::WHITE));
    ui.label(RichText::new("Click any topic to instantly load a presentation.").color(MUTED));
    ui.add_space(24.0);

    const COLUMNS: usize = 5;
    let spacing = 12.0;
    let width = ((ui.available_width() - spacing * (COLUMNS - 1) as f32) / COLUMNS as f32).max(120.0);

    egui::Grid::new("sample_topics")
        .spacing([spacing, spacing])
        .show(ui, |ui| {
            for (i, topic) in SAMPLE_TOPICS.iter().enumerate() {
                if sample_card(ui, i, topic, width).clicked() {
                    actions.push(Action::LoadTemplate(topic.to_string()));
                }
                if (i + 1) % COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}

fn sample_card(ui: &mut egui::Ui, index: usize, topic: &str, width: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 88.0), egui::Sense::click());
    let hovered = response.hovered();
    let painter = ui.painter();
    let border = if hovered {
        Color32::from_rgba_unmultiplied(59, 130, 246, 128)
    } else {
        Color32::from_white_alpha(13)
    };
    painter.rect_filled(rect, 12.0, CARD_BG);
    painter.rect_stroke(rect, 12.0, egui::Stroke::new(1.0, border), egui::StrokeKind::Inside);
    painter.text(
        rect.right_top() + egui::vec2(-12.0, 12.0),
        egui::Align2::RIGHT_TOP,
        format!("#{}", index + 1),
        egui::FontId::monospace(10.0),
        Color32::from_rgb(100, 116, 139),
    );

    let text_rect = rect.shrink2(egui::vec2(14.0, 12.0));
    let mut job = egui::text::LayoutJob::single_section(
        topic.to_string(),
        egui::TextFormat::simple(
            egui::FontId::proportional(14.0),
            if hovered { Color32::WHITE } else { Color32::from_rgb(226, 232, 240) },
        ),
    );
    job.wrap.max_width = text_rect.width();
    job.wrap.max_rows = 2;
    job.halign = Align::LEFT;
    let galley = ui.painter().layout_job(job);
    let pos = egui::pos2(text_rect.left(), text_rect.bottom() - galley.size().y);
    ui.painter().galley(pos, galley, Color32::WHITE);

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
