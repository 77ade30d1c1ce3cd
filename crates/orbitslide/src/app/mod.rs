mod canvas;
mod chat;
mod editor;
mod home;
mod present;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::ai::DeckGenerator;
use crate::catalog::animations::Frame;
use crate::catalog::{Theme, ThemeCatalog};
use crate::config::Config;
use crate::export;
use crate::model::{Presentation, Slide};
use crate::presentation::PresentationKey;
use crate::render::image_cache::ImageCache;
use crate::state::{Action, AppState, Command};

const TOAST_DURATION: f32 = 3.0;

/// How the window starts.
pub enum Launch {
    Editor {
        file: Option<PathBuf>,
    },
    Present {
        file: PathBuf,
        slide: Option<usize>,
        windowed: bool,
    },
}

/// Text typed into the app's input fields. Not part of the deck state.
#[derive(Default)]
pub struct Inputs {
    pub chat: String,
    pub media_url: String,
    pub media_path: String,
    pub media_error: Option<String>,
    pub custom_seconds: String,
}

/// Read-only data the screens draw from.
pub struct View<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
    pub catalog: &'a ThemeCatalog,
    pub images: &'a ImageCache,
    /// Entrance animation frame of the current slide.
    pub frame: Frame,
    pub export_dir: &'a Path,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let fade_start = TOAST_DURATION - 0.5;
        if elapsed < fade_start {
            1.0
        } else {
            (1.0 - (elapsed - fade_start) / 0.5).max(0.0)
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

/// Restarts the entrance animation whenever the slide or its animation changes.
struct SlideClock {
    key: (usize, String),
    start: Instant,
}

struct OrbitSlideApp {
    state: AppState,
    catalog: ThemeCatalog,
    generator: Arc<dyn DeckGenerator>,
    images: ImageCache,
    /// Store revision the image cache was last swept against.
    image_revision: u64,
    inputs: Inputs,
    export_dir: PathBuf,
    windowed: bool,
    seen_fullscreen: bool,
    clock: SlideClock,
    slide_rect: Option<egui::Rect>,
    pending_pdf: Option<PathBuf>,
    toast: Option<Toast>,
}

impl OrbitSlideApp {
    fn new(config: &Config, export_dir: PathBuf, windowed: bool) -> Self {
        Self {
            state: AppState::new(config.settings()),
            catalog: config.theme_catalog(),
            generator: Arc::new(config.gemini_client()),
            images: ImageCache::new(Some(export_dir.clone())),
            image_revision: 0,
            inputs: Inputs::default(),
            export_dir,
            windowed,
            seen_fullscreen: false,
            clock: SlideClock {
                key: (0, String::new()),
                start: Instant::now(),
            },
            slide_rect: None,
            pending_pdf: None,
            toast: None,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        for command in self.state.dispatch(action) {
            self.execute(ctx, command);
        }
    }

    fn execute(&mut self, ctx: &egui::Context, command: Command) {
        match command {
            Command::StartGeneration(topic) => {
                let generator = Arc::clone(&self.generator);
                let ctx = ctx.clone();
                self.state.spawn_generation(move || {
                    let result = generator.generate(&topic);
                    ctx.request_repaint();
                    result
                });
            }
            Command::StartRevision { deck, instruction } => {
                let generator = Arc::clone(&self.generator);
                let ctx = ctx.clone();
                self.state.spawn_revision(move || {
                    let result = generator.revise(&deck, &instruction);
                    ctx.request_repaint();
                    result
                });
            }
            Command::SetFullscreen(on) => {
                if self.windowed {
                    log::debug!("Windowed presentation, ignoring fullscreen={on}");
                } else {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(on));
                }
            }
            Command::WriteJson { path, slides } => {
                self.toast = Some(match export::write_json(&path, &slides) {
                    Ok(()) => Toast::new(format!("Saved {}", path.display())),
                    Err(e) => {
                        log::error!("JSON export failed: {e:#}");
                        Toast::new(format!("Export failed: {e}"))
                    }
                });
            }
            Command::CaptureSlidePdf(path) => {
                self.pending_pdf = Some(path);
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(
                    egui::UserData::default(),
                ));
            }
        }
    }

    /// Release images no slide of the current deck refers to.
    fn sweep_images(&mut self) {
        self.image_revision = self.state.store().revision();
        let sources: Vec<String> = self
            .state
            .store()
            .slides()
            .unwrap_or_default()
            .iter()
            .flat_map(Slide::image_sources)
            .collect();
        self.images.retain(sources.iter().map(String::as_str));
    }

    /// Finish a PDF export once the requested screenshot arrives.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = screenshot else {
            return;
        };
        let Some(path) = self.pending_pdf.take() else {
            return;
        };
        let Some(rect) = self.slide_rect else {
            self.toast = Some(Toast::new("Could not generate PDF. Please try again."));
            return;
        };

        let ppp = ctx.pixels_per_point();
        let region = egui::Rect::from_min_max(
            (rect.min.to_vec2() * ppp).to_pos2(),
            (rect.max.to_vec2() * ppp).to_pos2(),
        );
        let slide = export::crop_to_canvas(&image, region);
        self.toast = Some(match export::write_pdf(&path, &slide) {
            Ok(()) => Toast::new(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("PDF export failed: {e:#}");
                Toast::new("Could not generate PDF. Please try again.")
            }
        });
    }

    /// Leave presentation mode when the platform drops fullscreen on its own
    /// (window manager shortcut, Esc handled by the OS).
    fn watch_fullscreen(&mut self, ctx: &egui::Context) {
        if self.windowed || !self.state.presentation().is_presenting() {
            self.seen_fullscreen = false;
            return;
        }
        match ctx.input(|i| i.viewport().fullscreen) {
            Some(true) => self.seen_fullscreen = true,
            Some(false) if self.seen_fullscreen => {
                self.seen_fullscreen = false;
                self.dispatch(ctx, Action::FullscreenLost);
            }
            _ => {}
        }
    }

    fn presentation_keys(ctx: &egui::Context) -> Vec<PresentationKey> {
        if ctx.memory(|m| m.focused().is_some()) {
            return Vec::new();
        }
        ctx.input(|i| {
            [
                egui::Key::ArrowRight,
                egui::Key::ArrowLeft,
                egui::Key::Space,
                egui::Key::Escape,
            ]
            .into_iter()
            .filter(|key| i.key_pressed(*key))
            .filter_map(PresentationKey::from_key)
            .collect()
        })
    }

    /// Entrance animation frame for the current slide.
    fn slide_frame(&mut self) -> (Frame, bool) {
        let Some(slide) = self.state.store().current() else {
            return (Frame::REST, false);
        };
        let animation = self.state.animation_for(slide);
        let key = (self.state.store().current_index(), animation.class_string());
        if self.clock.key != key {
            self.clock = SlideClock {
                key,
                start: Instant::now(),
            };
        }
        let elapsed = self.clock.start.elapsed();
        (animation.frame_at(elapsed), elapsed < animation.duration())
    }

    fn draw_toast(&mut self, ctx: &egui::Context) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity();
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -80.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(Theme::with_opacity(egui::Color32::from_rgb(15, 23, 42), 0.95 * opacity))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&toast.message)
                                .color(Theme::with_opacity(egui::Color32::WHITE, opacity)),
                        );
                    });
            });
        ctx.request_repaint();
    }
}

impl eframe::App for OrbitSlideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);
        for command in self.state.poll_requests() {
            self.execute(ctx, command);
        }
        self.watch_fullscreen(ctx);

        if self.state.presentation().is_presenting() {
            for key in Self::presentation_keys(ctx) {
                self.dispatch(ctx, Action::PresentationKey(key));
            }
            self.dispatch(ctx, Action::Tick(Instant::now()));
        }

        let (frame, animating) = self.slide_frame();
        let theme = self.catalog.resolve(self.state.theme_id());
        let view = View {
            state: &self.state,
            theme: &theme,
            catalog: &self.catalog,
            images: &self.images,
            frame,
            export_dir: &self.export_dir,
        };

        let mut actions = Vec::new();
        let slide_rect = if !self.state.store().is_loaded() {
            home::show(ctx, &view, &mut actions);
            None
        } else if self.state.presentation().is_presenting() {
            present::show(ctx, &view, &mut self.inputs, &mut actions)
        } else {
            let rect = editor::show(ctx, &view, &mut self.inputs, &mut actions);
            if self.state.is_chat_open() {
                chat::show(ctx, &view, &mut self.inputs, &mut actions);
            }
            rect
        };
        self.slide_rect = slide_rect;

        let mut sweep = false;
        for action in actions {
            sweep |= matches!(action, Action::SetCustomImage(_));
            self.dispatch(ctx, action);
        }
        if sweep || self.state.store().revision() != self.image_revision {
            self.sweep_images();
        }
        self.draw_toast(ctx);

        if animating {
            ctx.request_repaint();
        }
        if let Some(wait) = self.state.presentation().time_until_advance(Instant::now()) {
            ctx.request_repaint_after(wait.max(Duration::from_millis(10)));
        }
    }
}

/// A small blue orbit drawn at startup.
fn app_icon() -> egui::IconData {
    let size = 64u32;
    let image = image::RgbaImage::from_fn(size, size, |x, y| {
        let d = ((x as f32 - 31.5).powi(2) + (y as f32 - 31.5).powi(2)).sqrt();
        if d < 20.0 {
            image::Rgba([59, 130, 246, 255])
        } else if (26.0..29.0).contains(&d) {
            image::Rgba([34, 211, 238, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    egui::IconData {
        rgba: image.into_raw(),
        width: size,
        height: size,
    }
}

pub fn run(launch: Launch) -> anyhow::Result<()> {
    let config = Config::load_or_default();

    let (file, start_slide, present, windowed) = match launch {
        Launch::Editor { file } => (file, None, false, true),
        Launch::Present {
            file,
            slide,
            windowed,
        } => (Some(file), slide, true, windowed),
    };

    let deck = match &file {
        Some(path) => Some(Presentation {
            topic: export::deck_title(path),
            slides: export::load_deck(path)?,
        }),
        None => None,
    };
    let export_dir = file
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let title = match &deck {
        Some(deck) => format!("OrbitSlide - {}", deck.topic),
        None => "OrbitSlide".to_string(),
    };

    let viewport = if present && !windowed {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title(&title)
    };
    let viewport = viewport.with_icon(Arc::new(app_icon()));

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let mut app = OrbitSlideApp::new(&config, export_dir, present && windowed);
            if let Some(deck) = deck {
                app.dispatch(&cc.egui_ctx, Action::OpenDeck(deck));
            }
            if present {
                if let Some(slide) = start_slide {
                    app.dispatch(&cc.egui_ctx, Action::SelectSlide(slide.saturating_sub(1)));
                }
                app.dispatch(&cc.egui_ctx, Action::EnterPresentation);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
