use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use colored::Colorize;
use eframe::egui;

use crate::catalog::Theme;
use crate::catalog::animations::Frame;
use crate::config::Config;
use crate::export;
use crate::model::Slide;
use crate::render::{self, image_cache::ImageCache, paint};
use crate::state::AppState;

/// Give up waiting for slide images after this long and capture anyway.
const IMAGE_WAIT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Every slide as `slide-NN.png`.
    Png,
    /// One slide (1-indexed) as `slide.pdf`.
    Pdf { slide: usize },
}

struct ExportApp {
    slides: Vec<Slide>,
    state: AppState,
    theme: Theme,
    image_cache: ImageCache,
    output_dir: PathBuf,
    target: Target,
    current_slide: usize,
    slide_shown: Instant,
    screenshot_requested: bool,
    done: bool,
}

impl ExportApp {
    fn new(slides: Vec<Slide>, base_path: &Path, output_dir: PathBuf, target: Target) -> Self {
        let config = Config::load_or_default();
        let state = AppState::new(config.settings());
        let theme = config.theme_catalog().resolve(state.theme_id());
        let current_slide = match target {
            Target::Png => 0,
            Target::Pdf { slide } => slide - 1,
        };

        Self {
            slides,
            state,
            theme,
            image_cache: ImageCache::new(Some(base_path.to_path_buf())),
            output_dir,
            target,
            current_slide,
            slide_shown: Instant::now(),
            screenshot_requested: false,
            done: false,
        }
    }

    fn save(&self, image: &egui::ColorImage, slide_rect: egui::Rect, pixels_per_point: f32) {
        let result = match self.target {
            Target::Png => {
                let filename = format!("slide-{:02}.png", self.current_slide + 1);
                export::write_png(&self.output_dir.join(&filename), image)
                    .map(|()| filename)
            }
            Target::Pdf { .. } => {
                let region = egui::Rect::from_min_max(
                    (slide_rect.min.to_vec2() * pixels_per_point).to_pos2(),
                    (slide_rect.max.to_vec2() * pixels_per_point).to_pos2(),
                );
                let rgb = export::crop_to_canvas(image, region);
                let path = self.output_dir.join(export::DEFAULT_PDF_NAME);
                export::write_pdf(&path, &rgb).map(|()| export::DEFAULT_PDF_NAME.to_string())
            }
        };
        match result {
            Ok(filename) => eprintln!("  Saved {filename}"),
            Err(e) => eprintln!("{} {e:#}", "Failed:".red()),
        }
    }

    fn advance(&mut self) -> bool {
        match self.target {
            Target::Pdf { .. } => false,
            Target::Png => {
                self.current_slide += 1;
                self.slide_shown = Instant::now();
                self.current_slide < self.slides.len()
            }
        }
    }
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let slide_rect = paint::fit_canvas(ctx.available_rect(), 0.0);
        let pixels_per_point = ctx.pixels_per_point();

        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = screenshot {
            ExportApp::save(self, &image, slide_rect, pixels_per_point);
            self.screenshot_requested = false;
            if !self.advance() {
                self.done = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK).inner_margin(0.0))
            .show(ctx, |ui| {
                if let Some(slide) = self.slides.get(self.current_slide) {
                    let animation = self.state.animation_for(slide);
                    let view = render::build(slide, &self.theme, &animation);
                    paint::paint_slide(
                        ui.painter(),
                        &view,
                        slide_rect,
                        Frame::REST,
                        &self.image_cache,
                        false,
                    );
                }
            });

        let waiting = self.image_cache.is_loading() && self.slide_shown.elapsed() < IMAGE_WAIT;
        if !self.screenshot_requested && !waiting {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

pub fn run(
    file: PathBuf,
    output_dir: PathBuf,
    width: u32,
    height: u32,
    target: Target,
) -> anyhow::Result<()> {
    let slides = export::load_deck(&file)?;
    let base_path = file
        .parent()
        .unwrap_or(std::path::Path::new("."))
        .to_path_buf();

    if let Target::Pdf { slide } = target {
        if slide == 0 || slide > slides.len() {
            anyhow::bail!(
                "Slide {slide} out of range, {} has {} slides",
                file.display(),
                slides.len()
            );
        }
    }

    std::fs::create_dir_all(&output_dir)?;

    match target {
        Target::Png => eprintln!(
            "Exporting {} slides to {} ({}x{})",
            slides.len(),
            output_dir.display(),
            width,
            height,
        ),
        Target::Pdf { slide } => eprintln!(
            "Exporting slide {slide} to {}",
            output_dir.join(export::DEFAULT_PDF_NAME).display()
        ),
    }

    let title = format!("{} export", export::deck_title(&file));
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title(&title)
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let output_dir_clone = output_dir.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ExportApp::new(
                slides,
                &base_path,
                output_dir_clone,
                target,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    eprintln!("{}", "Export complete.".green());
    Ok(())
}
