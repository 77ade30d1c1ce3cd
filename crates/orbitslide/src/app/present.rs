use std::time::Duration;

use eframe::egui::{self, Color32, RichText};

use crate::catalog::animations::AUTO_PLAY_DURATIONS;
use crate::state::Action;

use super::{Inputs, View, canvas};

const BAR_BG: Color32 = Color32::from_rgba_premultiplied(8, 11, 20, 204);
const ACTIVE: Color32 = Color32::from_rgb(59, 130, 246);
const MUTED: Color32 = Color32::from_rgb(148, 163, 184);

const CUSTOM_MIN_SECS: u64 = 1;
const CUSTOM_MAX_SECS: u64 = 60;

/// Fullscreen slide with a floating control bar along the bottom edge.
pub fn show(
    ctx: &egui::Context,
    view: &View,
    inputs: &mut Inputs,
    actions: &mut Vec<Action>,
) -> Option<egui::Rect> {
    let rect = egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(Color32::BLACK))
        .show(ctx, |ui| {
            let area = ui.max_rect();
            canvas::current_slide(ui, view, area, 0.0, false, actions)
        })
        .inner;

    control_bar(ctx, view, inputs, actions);
    rect
}

fn control_bar(ctx: &egui::Context, view: &View, inputs: &mut Inputs, actions: &mut Vec<Action>) {
    let store = view.state.store();
    let presentation = view.state.presentation();

    egui::Area::new(egui::Id::new("presentation_controls"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(BAR_BG)
                .corner_radius(24.0)
                .inner_margin(egui::Margin::symmetric(16, 8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("◀").clicked() {
                            actions.push(Action::PrevSlide);
                        }
                        ui.label(
                            RichText::new(format!("{} / {}", store.current_index() + 1, store.len()))
                                .monospace()
                                .color(MUTED),
                        );
                        if ui.button("▶").clicked() {
                            actions.push(Action::NextSlide);
                        }
                        ui.separator();

                        let auto = presentation.is_auto_play();
                        let label = if auto { "⏸ Auto" } else { "▶ Manual" };
                        let toggle = egui::Button::new(
                            RichText::new(label).color(if auto { Color32::WHITE } else { MUTED }),
                        )
                        .fill(if auto { ACTIVE } else { Color32::TRANSPARENT });
                        if ui.add(toggle).clicked() {
                            actions.push(Action::ToggleAutoPlay);
                        }

                        let current = presentation.duration();
                        for (secs, label) in AUTO_PLAY_DURATIONS {
                            let duration = Duration::from_secs(*secs);
                            if ui.selectable_label(current == duration, *label).clicked() {
                                actions.push(Action::SetDuration(duration));
                            }
                        }

                        let field_id = egui::Id::new("custom_seconds");
                        if !ui.memory(|m| m.has_focus(field_id)) {
                            inputs.custom_seconds = current.as_secs().to_string();
                        }
                        let field = ui.add(
                            egui::TextEdit::singleline(&mut inputs.custom_seconds)
                                .id(field_id)
                                .desired_width(32.0)
                                .hint_text("s"),
                        );
                        ui.label(RichText::new("sec").size(10.0).color(MUTED));
                        if field.lost_focus() {
                            if let Ok(secs) = inputs.custom_seconds.trim().parse::<u64>() {
                                actions.push(Action::SetCustomDuration(
                                    secs.clamp(CUSTOM_MIN_SECS, CUSTOM_MAX_SECS),
                                ));
                            }
                        }
                        ui.separator();

                        if ui
                            .button(RichText::new("✕").color(Color32::from_rgb(248, 113, 113)))
                            .on_hover_text("Exit Presentation (Esc)")
                            .clicked()
                        {
                            actions.push(Action::ExitPresentation);
                        }
                    });
                });
        });
}
