use eframe::egui::{self, Color32, RichText};

use crate::state::{Action, ChatRole};

use super::{Inputs, View};

const USER_BG: Color32 = Color32::from_rgb(147, 51, 234);
const ASSISTANT_BG: Color32 = Color32::from_rgb(30, 41, 59);

/// GeniusBot: natural-language edits of the open deck.
pub fn show(ctx: &egui::Context, view: &View, inputs: &mut Inputs, actions: &mut Vec<Action>) {
    let state = view.state;
    let mut open = true;

    egui::Window::new("GeniusBot")
        .open(&mut open)
        .collapsible(false)
        .default_size([340.0, 460.0])
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -72.0))
        .show(ctx, |ui| {
            let input_height = 40.0;
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - input_height)
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for message in state.chat() {
                        bubble(ui, message.role, &message.content);
                    }
                    if state.is_revising() {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label(RichText::new("Thinking...").italics().color(Color32::GRAY));
                        });
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let busy = state.is_revising();
                let field = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut inputs.chat)
                        .hint_text("e.g. Change the title of slide 2...")
                        .desired_width(ui.available_width() - 40.0),
                );
                let submit = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let ready = !busy && !inputs.chat.trim().is_empty();
                if (ui.add_enabled(ready, egui::Button::new("➤")).clicked() || submit) && ready {
                    actions.push(Action::SendChat(std::mem::take(&mut inputs.chat)));
                }
            });
        });

    if !open {
        actions.push(Action::ToggleChat);
    }
}

fn bubble(ui: &mut egui::Ui, role: ChatRole, text: &str) {
    let (align, fill) = match role {
        ChatRole::User => (egui::Align::Max, USER_BG),
        ChatRole::Assistant => (egui::Align::Min, ASSISTANT_BG),
    };
    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(240.0);
                ui.label(RichText::new(text).color(Color32::WHITE));
            });
    });
    ui.add_space(6.0);
}
