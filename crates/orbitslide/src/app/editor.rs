use std::path::Path;

use eframe::egui::{self, Color32, RichText, Stroke};

use crate::catalog::{Theme, animations};
use crate::export;
use crate::render::{image_cache, paint};
use crate::state::{Action, Tool};

use super::{Inputs, View, canvas};

const PANEL_BG: Color32 = Color32::from_rgb(2, 6, 23);
const DRAWER_BG: Color32 = Color32::from_rgb(15, 23, 42);
const WORKSPACE_BG: Color32 = Color32::from_rgb(3, 7, 18);
const BORDER: Color32 = Color32::from_rgb(30, 41, 59);
const MUTED: Color32 = Color32::from_rgb(100, 116, 139);
const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
const EMERALD: Color32 = Color32::from_rgb(52, 211, 153);
const PURPLE: Color32 = Color32::from_rgb(192, 132, 252);

const TOOLS: [(Tool, &str); 3] = [
    (Tool::Themes, "🎨"),
    (Tool::Animations, "✨"),
    (Tool::Transitions, "▶"),
];

/// The editor screen. Returns the on-screen rect of the slide canvas.
pub fn show(
    ctx: &egui::Context,
    view: &View,
    inputs: &mut Inputs,
    actions: &mut Vec<Action>,
) -> Option<egui::Rect> {
    header(ctx, view, actions);
    tool_rail(ctx, view, actions);
    if view.state.tool() != Tool::None {
        drawer(ctx, view, actions);
    }
    if view.state.is_sidebar_open() {
        slide_list(ctx, view, actions);
    }
    slide_nav(ctx, view, actions);

    let rect = egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(WORKSPACE_BG))
        .show(ctx, |ui| {
            let area = ui.max_rect();
            let rect = canvas::current_slide(ui, view, area, 32.0, true, actions);
            if let Some(rect) = rect {
                canvas_tools(ui, rect, actions);
            }
            rect
        })
        .inner;

    if view.state.is_export_menu_open() {
        export_menu(ctx, view.export_dir, actions);
    }
    if view.state.is_media_dialog_open() {
        media_dialog(ctx, inputs, actions);
    }
    rect
}

fn header(ctx: &egui::Context, view: &View, actions: &mut Vec<Action>) {
    let state = view.state;
    egui::TopBottomPanel::top("editor_header")
        .exact_height(56.0)
        .frame(
            egui::Frame::new()
                .fill(PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 0))
                .stroke(Stroke::new(1.0, BORDER)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                if ui.button("← Back").clicked() {
                    actions.push(Action::GoHome);
                }
                ui.separator();
                ui.label(
                    RichText::new(state.document_title())
                        .strong()
                        .color(Color32::from_rgb(226, 232, 240)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let sidebar = if state.is_sidebar_open() { "▶|" } else { "|◀" };
                    if ui
                        .button(sidebar)
                        .on_hover_text("Toggle slide list")
                        .clicked()
                    {
                        actions.push(Action::ToggleSidebar);
                    }
                    let present = egui::Button::new(RichText::new("▶ Present").color(Color32::WHITE))
                        .fill(ACCENT);
                    if ui.add(present).clicked() {
                        actions.push(Action::EnterPresentation);
                    }
                    if ui
                        .selectable_label(state.is_export_menu_open(), "⬇ Export")
                        .clicked()
                    {
                        actions.push(Action::ToggleExportMenu);
                    }
                    let chat = RichText::new("💬 GeniusBot").color(if state.is_chat_open() {
                        PURPLE
                    } else {
                        Color32::from_rgb(203, 213, 225)
                    });
                    if ui.selectable_label(state.is_chat_open(), chat).clicked() {
                        actions.push(Action::ToggleChat);
                    }
                });
            });
        });
}

fn export_menu(ctx: &egui::Context, export_dir: &Path, actions: &mut Vec<Action>) {
    egui::Area::new(egui::Id::new("export_menu"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-150.0, 60.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(200.0);
                if ui.button("Save Project (JSON)").clicked() {
                    actions.push(Action::ExportJson(export_dir.join(export::DEFAULT_JSON_NAME)));
                }
                if ui.button("Export Slide (PDF)").clicked() {
                    actions.push(Action::ExportPdf(export_dir.join(export::DEFAULT_PDF_NAME)));
                }
            });
        });
}

fn tool_rail(ctx: &egui::Context, view: &View, actions: &mut Vec<Action>) {
    egui::SidePanel::left("tool_rail")
        .exact_width(64.0)
        .resizable(false)
        .frame(egui::Frame::new().fill(PANEL_BG).inner_margin(egui::Margin::symmetric(8, 16)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                for (tool, icon) in TOOLS {
                    let active = view.state.tool() == tool;
                    let button = egui::Button::new(RichText::new(icon).size(20.0))
                        .selected(active)
                        .min_size(egui::vec2(44.0, 44.0));
                    if ui.add(button).on_hover_text(tool.label()).clicked() {
                        actions.push(Action::ToggleTool(tool));
                    }
                    ui.add_space(8.0);
                }
            });
        });
}

fn drawer(ctx: &egui::Context, view: &View, actions: &mut Vec<Action>) {
    let tool = view.state.tool();
    egui::SidePanel::left("tool_drawer")
        .exact_width(288.0)
        .resizable(false)
        .frame(egui::Frame::new().fill(DRAWER_BG).inner_margin(egui::Margin::same(16)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(tool.label()).size(16.0).strong().color(Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        actions.push(Action::ToggleTool(Tool::None));
                    }
                });
            });
            ui.add_space(12.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match tool {
                    Tool::Themes => themes_panel(ui, view, actions),
                    Tool::Animations => animations_panel(ui, view, actions),
                    Tool::Transitions => transitions_panel(ui, view, actions),
                    Tool::None => {}
                });
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text.to_uppercase()).size(10.0).strong().color(MUTED));
    ui.add_space(4.0);
}

fn themes_panel(ui: &mut egui::Ui, view: &View, actions: &mut Vec<Action>) {
    let width = (ui.available_width() - 8.0) / 2.0;
    for category in view.catalog.categories() {
        section_heading(ui, &category.name);
        egui::Grid::new(("theme_grid", &category.name))
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, theme) in category.themes.iter().enumerate() {
                    let selected = theme.id == view.state.theme_id();
                    if theme_card(ui, theme, width, selected).clicked() {
                        actions.push(Action::SetTheme(theme.id.clone()));
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }
}

fn theme_card(ui: &mut egui::Ui, theme: &Theme, width: f32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 84.0), egui::Sense::click());
    let painter = ui.painter();

    let preview = egui::Rect::from_min_size(rect.min, egui::vec2(width, 48.0));
    paint::paint_background(painter, &theme.background, preview);

    let footer = egui::Rect::from_min_max(egui::pos2(rect.left(), preview.bottom()), rect.max);
    painter.rect_filled(footer, 0.0, Color32::from_rgb(2, 6, 23));
    painter.text(
        footer.left_center() + egui::vec2(8.0, 0.0),
        egui::Align2::LEFT_CENTER,
        &theme.name,
        egui::FontId::proportional(11.0),
        Color32::from_rgb(203, 213, 225),
    );
    let dots = footer.right_center();
    painter.circle_filled(dots + egui::vec2(-22.0, 0.0), 4.0, theme.accent);
    painter.circle_filled(dots + egui::vec2(-10.0, 0.0), 4.0, theme.text_primary);

    let stroke = if selected {
        Stroke::new(2.0, ACCENT)
    } else if response.hovered() {
        Stroke::new(1.0, Color32::from_rgb(71, 85, 105))
    } else {
        Stroke::new(1.0, BORDER)
    };
    painter.rect_stroke(rect, 6.0, stroke, egui::StrokeKind::Inside);
    response.on_hover_text(&theme.name)
}

fn animations_panel(ui: &mut egui::Ui, view: &View, actions: &mut Vec<Action>) {
    let Some(slide) = view.state.store().current() else {
        return;
    };
    let current = view.state.animation_for(slide);

    section_heading(ui, "Speed");
    ui.horizontal_wrapped(|ui| {
        for speed in animations::SPEEDS {
            if ui
                .selectable_label(current.speed == speed.id, speed.label)
                .clicked()
            {
                actions.push(Action::SetAnimation {
                    animation: None,
                    speed: Some(speed.id.to_string()),
                });
            }
        }
    });

    for category in animations::CATEGORIES {
        section_heading(ui, category.name);
        for animation in category.items {
            let selected = current.animation == animation.id;
            let text = if selected {
                RichText::new(animation.label).color(EMERALD)
            } else {
                RichText::new(animation.label)
            };
            let button = egui::Button::new(text)
                .selected(selected)
                .min_size(egui::vec2(ui.available_width(), 24.0));
            if ui.add(button).clicked() {
                actions.push(Action::SetAnimation {
                    animation: Some(animation.id.to_string()),
                    speed: None,
                });
            }
        }
    }
}

fn transitions_panel(ui: &mut egui::Ui, view: &View, actions: &mut Vec<Action>) {
    let Some(slide) = view.state.store().current() else {
        return;
    };
    let current = view.state.animation_for(slide);

    ui.label(RichText::new("Select visual effects for slide entry.").size(11.0).color(MUTED));
    let width = (ui.available_width() - 8.0) / 2.0;
    for category in animations::CATEGORIES {
        section_heading(ui, category.name);
        egui::Grid::new(("transition_grid", category.name))
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, animation) in category.items.iter().enumerate() {
                    let selected = current.animation == animation.id;
                    let text = RichText::new(animation.label).size(10.0).color(if selected {
                        EMERALD
                    } else {
                        Color32::from_rgb(148, 163, 184)
                    });
                    let button = egui::Button::new(text)
                        .selected(selected)
                        .min_size(egui::vec2(width, 28.0));
                    if ui.add(button).on_hover_text(animation.label).clicked() {
                        actions.push(Action::SetAnimation {
                            animation: Some(animation.id.to_string()),
                            speed: None,
                        });
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }
}

fn slide_list(ctx: &egui::Context, view: &View, actions: &mut Vec<Action>) {
    let store = view.state.store();
    egui::SidePanel::right("slide_list")
        .exact_width(248.0)
        .resizable(false)
        .frame(egui::Frame::new().fill(PANEL_BG).inner_margin(egui::Margin::same(16)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("SLIDES ({})", store.len()))
                        .size(11.0)
                        .strong()
                        .color(MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("+").on_hover_text("Add Slide").clicked() {
                        actions.push(Action::InsertSlide);
                    }
                });
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let slides = store.slides().unwrap_or_default();
                    for (i, slide) in slides.iter().enumerate() {
                        let selected = i == store.current_index();
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("{}", i + 1))
                                    .monospace()
                                    .size(10.0)
                                    .color(if selected { ACCENT } else { MUTED }),
                            );
                            let width = ui.available_width();
                            let response =
                                canvas::thumbnail(ui, slide, view.theme, view.images, width, selected)
                                    .on_hover_text(slide.layout.display_name());
                            if response.clicked() {
                                actions.push(Action::SelectSlide(i));
                            }
                        });
                        ui.add_space(8.0);
                    }

                    let button = egui::Button::new(RichText::new("+ New Slide").color(MUTED))
                        .stroke(Stroke::new(1.0, BORDER))
                        .min_size(egui::vec2(ui.available_width(), 40.0));
                    if ui.add(button).clicked() {
                        actions.push(Action::InsertSlide);
                    }
                });
        });
}

fn slide_nav(ctx: &egui::Context, view: &View, actions: &mut Vec<Action>) {
    let store = view.state.store();
    egui::TopBottomPanel::bottom("slide_nav")
        .exact_height(48.0)
        .frame(egui::Frame::new().fill(WORKSPACE_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    let total = store.len();
                    let index = store.current_index();
                    ui.add_space((ui.available_width() - 140.0).max(0.0) / 2.0);
                    if ui.add_enabled(index > 0, egui::Button::new("◀")).clicked() {
                        actions.push(Action::PrevSlide);
                    }
                    ui.label(
                        RichText::new(format!("{} / {}", index + 1, total))
                            .monospace()
                            .color(Color32::from_rgb(148, 163, 184)),
                    );
                    if ui
                        .add_enabled(index + 1 < total, egui::Button::new("▶"))
                        .clicked()
                    {
                        actions.push(Action::NextSlide);
                    }
                });
            });
        });
}

/// "Add Text" and "Media" buttons floating above the slide's top edge.
fn canvas_tools(ui: &mut egui::Ui, slide: egui::Rect, actions: &mut Vec<Action>) {
    let bar = egui::Rect::from_min_size(
        egui::pos2(slide.center().x - 110.0, (slide.top() - 30.0).max(ui.max_rect().top())),
        egui::vec2(220.0, 26.0),
    );
    ui.scope_builder(egui::UiBuilder::new().max_rect(bar), |ui| {
        ui.horizontal(|ui| {
            if ui.button("T  Add Text").clicked() {
                actions.push(Action::AddTextBlock);
            }
            if ui.button("🖼  Media").clicked() {
                actions.push(Action::ToggleMediaDialog);
            }
        });
    });
}

fn media_dialog(ctx: &egui::Context, inputs: &mut Inputs, actions: &mut Vec<Action>) {
    let dropped: Vec<_> = ctx.input(|i| {
        i.raw
            .dropped_files
            .iter()
            .filter_map(|file| file.path.clone())
            .collect()
    });
    if let Some(path) = dropped.first() {
        insert_file(path, inputs, actions);
    }

    let mut open = true;
    egui::Window::new("Insert Media")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.label(RichText::new("Image URL").size(11.0).color(MUTED));
            ui.horizontal(|ui| {
                let field = ui.add(
                    egui::TextEdit::singleline(&mut inputs.media_url)
                        .hint_text("https://...")
                        .desired_width(300.0),
                );
                let submit = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let ready = !inputs.media_url.trim().is_empty();
                if (ui.add_enabled(ready, egui::Button::new("Insert")).clicked() || submit) && ready {
                    actions.push(Action::SetCustomImage(inputs.media_url.trim().to_string()));
                    inputs.media_url.clear();
                    inputs.media_error = None;
                }
            });

            ui.add_space(12.0);
            ui.label(RichText::new("Local file").size(11.0).color(MUTED));
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut inputs.media_path)
                        .hint_text("/path/to/image.png")
                        .desired_width(300.0),
                );
                let ready = !inputs.media_path.trim().is_empty();
                if ui.add_enabled(ready, egui::Button::new("Upload")).clicked() {
                    let path = std::path::PathBuf::from(inputs.media_path.trim());
                    insert_file(&path, inputs, actions);
                }
            });
            ui.label(RichText::new("or drop an image onto the window").size(10.0).color(MUTED));

            if let Some(error) = &inputs.media_error {
                ui.add_space(8.0);
                ui.colored_label(Color32::from_rgb(248, 113, 113), error);
            }
        });

    if !open {
        inputs.media_error = None;
        actions.push(Action::ToggleMediaDialog);
    }
}

fn insert_file(path: &Path, inputs: &mut Inputs, actions: &mut Vec<Action>) {
    match image_cache::file_to_data_url(path) {
        Ok(url) => {
            actions.push(Action::SetCustomImage(url));
            inputs.media_path.clear();
            inputs.media_error = None;
        }
        Err(e) => {
            log::warn!("Could not read {}: {e:#}", path.display());
            inputs.media_error = Some(format!("{e:#}"));
        }
    }
}
