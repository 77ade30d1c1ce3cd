use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::ai::{EditError, GenerationError, RequestSlot};
use crate::catalog::AnimationClass;
use crate::catalog::animations::{DEFAULT_ANIMATION, DEFAULT_SPEED};
use crate::catalog::themes::DEFAULT_THEME_ID;
use crate::model::{Presentation, Slide};
use crate::presentation::{
    DEFAULT_SLIDE_DURATION, Fullscreen, PresentationController, PresentationKey,
};
use crate::render::SlideEdit;
use crate::store::SlideStore;
use crate::templates;

pub const CHAT_GREETING: &str =
    "Hi! I can help you edit this presentation. What would you like to change?";
pub const CHAT_SUCCESS: &str = "Done! I've updated the presentation for you.";
pub const CHAT_FAILURE: &str =
    "Sorry, I encountered an error while updating the slides. Please try again.";
pub const UNTITLED: &str = "Untitled Presentation";

/// User defaults applied to a fresh session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub theme: String,
    pub slide_duration: Duration,
    pub animation: String,
    pub animation_speed: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            slide_duration: DEFAULT_SLIDE_DURATION,
            animation: DEFAULT_ANIMATION.to_string(),
            animation_speed: DEFAULT_SPEED.to_string(),
        }
    }
}

/// Drawer shown next to the tool rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    None,
    Themes,
    Animations,
    Transitions,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Themes => "Themes",
            Self::Animations => "Animations",
            Self::Transitions => "Transitions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Everything the user can do.
#[derive(Debug, Clone)]
pub enum Action {
    SetQuery(String),
    /// Generate a deck for the given topic, or for the query when `None`.
    Generate(Option<String>),
    GenerationFinished(Result<Vec<Slide>, GenerationError>),
    LoadTemplate(String),
    StartFromScratch,
    OpenDeck(Presentation),
    GoHome,
    SelectSlide(usize),
    NextSlide,
    PrevSlide,
    EditSlide(SlideEdit),
    InsertSlide,
    AddTextBlock,
    SetTheme(String),
    SetAnimation {
        animation: Option<String>,
        speed: Option<String>,
    },
    SetCustomImage(String),
    ToggleTool(Tool),
    ToggleSidebar,
    ToggleChat,
    ToggleExportMenu,
    ToggleMediaDialog,
    SendChat(String),
    RevisionFinished(Result<Vec<Slide>, EditError>),
    EnterPresentation,
    ExitPresentation,
    FullscreenLost,
    PresentationKey(PresentationKey),
    ToggleAutoPlay,
    SetDuration(Duration),
    SetCustomDuration(u64),
    Tick(Instant),
    ExportJson(PathBuf),
    ExportPdf(PathBuf),
    DismissError,
}

/// Side effects for the shell to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartGeneration(String),
    StartRevision {
        deck: Vec<Slide>,
        instruction: String,
    },
    SetFullscreen(bool),
    WriteJson {
        path: PathBuf,
        slides: Vec<Slide>,
    },
    CaptureSlidePdf(PathBuf),
}

/// Records fullscreen requests as commands instead of touching the window.
struct CommandFullscreen<'a>(&'a mut Vec<Command>);

impl Fullscreen for CommandFullscreen<'_> {
    fn set_fullscreen(&mut self, on: bool) -> anyhow::Result<()> {
        self.0.push(Command::SetFullscreen(on));
        Ok(())
    }
}

/// The whole application state. Changed only through [`AppState::dispatch`].
#[derive(Debug)]
pub struct AppState {
    settings: Settings,
    store: SlideStore,
    presentation: PresentationController,
    theme_id: String,
    query: String,
    tool: Tool,
    sidebar_open: bool,
    chat_open: bool,
    export_menu_open: bool,
    media_dialog_open: bool,
    error: Option<String>,
    chat: Vec<ChatMessage>,
    generation: RequestSlot<Vec<Slide>, GenerationError>,
    revision: RequestSlot<Vec<Slide>, EditError>,
    /// Store revision the pending chat edit was computed against.
    revision_base: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            presentation: PresentationController::new(settings.slide_duration),
            theme_id: settings.theme.clone(),
            settings,
            store: SlideStore::new(),
            query: String::new(),
            tool: Tool::None,
            sidebar_open: true,
            chat_open: false,
            export_menu_open: false,
            media_dialog_open: false,
            error: None,
            chat: vec![ChatMessage::assistant(CHAT_GREETING)],
            generation: RequestSlot::default(),
            revision: RequestSlot::default(),
            revision_base: None,
        }
    }

    pub fn store(&self) -> &SlideStore {
        &self.store
    }

    pub fn presentation(&self) -> &PresentationController {
        &self.presentation
    }

    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn document_title(&self) -> &str {
        let title = self.query.trim();
        if title.is_empty() { UNTITLED } else { title }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn is_export_menu_open(&self) -> bool {
        self.export_menu_open
    }

    pub fn is_media_dialog_open(&self) -> bool {
        self.media_dialog_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn is_generating(&self) -> bool {
        self.generation.is_pending()
    }

    pub fn is_revising(&self) -> bool {
        self.revision.is_pending()
    }

    /// Entrance animation of `slide`, falling back to the configured defaults.
    pub fn animation_for(&self, slide: &Slide) -> AnimationClass {
        AnimationClass {
            animation: slide
                .animation_type
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| self.settings.animation.clone()),
            speed: slide
                .animation_speed
                .clone()
                .unwrap_or_else(|| self.settings.animation_speed.clone()),
        }
    }

    /// Run the pending generation on a background thread.
    pub fn spawn_generation<F>(&mut self, work: F)
    where
        F: FnOnce() -> Result<Vec<Slide>, GenerationError> + Send + 'static,
    {
        self.generation.spawn(work);
    }

    /// Run the pending revision on a background thread.
    pub fn spawn_revision<F>(&mut self, work: F)
    where
        F: FnOnce() -> Result<Vec<Slide>, EditError> + Send + 'static,
    {
        self.revision.spawn(work);
    }

    /// Feed finished background requests back through the reducer.
    pub fn poll_requests(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        if let Some(result) = self.generation.poll() {
            commands.extend(self.dispatch(Action::GenerationFinished(result)));
        }
        if let Some(result) = self.revision.poll() {
            commands.extend(self.dispatch(Action::RevisionFinished(result)));
        }
        commands
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Command> {
        let mut commands = Vec::new();

        match action {
            Action::SetQuery(query) => self.query = query,
            Action::Generate(topic) => {
                let topic = topic.unwrap_or_else(|| self.query.clone());
                let topic = topic.trim();
                if topic.is_empty() || !self.generation.begin() {
                    return commands;
                }
                log::info!("Generating presentation about {topic:?}");
                self.query = topic.to_string();
                self.error = None;
                commands.push(Command::StartGeneration(topic.to_string()));
            }
            Action::GenerationFinished(result) => {
                let result = result.and_then(|slides| {
                    if slides.is_empty() {
                        Err(GenerationError::EmptyResponse)
                    } else {
                        Ok(slides)
                    }
                });
                self.generation.finish(&result);
                match result {
                    Ok(slides) => {
                        self.store.set_deck(slides);
                        self.tool = Tool::None;
                        self.sidebar_open = true;
                    }
                    Err(e) => {
                        log::error!("Generation failed: {e}");
                        self.error = Some(e.to_string());
                    }
                }
            }
            Action::LoadTemplate(topic) => {
                let (category, slides) = templates::template_for(&topic);
                log::debug!("Loading {} template for {topic:?}", category.name());
                self.store.set_deck(slides);
                self.query = topic;
                self.error = None;
                self.tool = Tool::None;
                self.sidebar_open = true;
            }
            Action::StartFromScratch => {
                self.store.set_deck(vec![Slide::from_scratch()]);
                self.query.clear();
                self.error = None;
                self.tool = Tool::Themes;
                self.sidebar_open = true;
            }
            Action::OpenDeck(presentation) => {
                self.store.set_deck(presentation.slides);
                self.query = presentation.topic;
                self.error = None;
                self.tool = Tool::None;
            }
            Action::GoHome => {
                if self.presentation.is_presenting() {
                    self.presentation.exit(&mut CommandFullscreen(&mut commands));
                }
                self.store.clear();
                self.query.clear();
                self.error = None;
                self.chat_open = false;
                self.export_menu_open = false;
                self.media_dialog_open = false;
                self.tool = Tool::None;
            }
            Action::SelectSlide(index) => self.store.set_index(index as isize),
            Action::NextSlide => self.store.next(),
            Action::PrevSlide => self.store.prev(),
            Action::EditSlide(edit) => {
                let index = self.store.current_index();
                self.store.apply_edit(index, &edit);
            }
            Action::InsertSlide => {
                let index = self.store.current_index();
                self.store.insert_slide(index, Slide::blank());
            }
            Action::AddTextBlock => self.store.add_text_block(),
            Action::SetTheme(id) => self.theme_id = id,
            Action::SetAnimation { animation, speed } => {
                self.store.set_animation(animation, speed);
            }
            Action::SetCustomImage(source) => {
                if source.trim().is_empty() {
                    return commands;
                }
                self.store.set_custom_image(source);
                self.media_dialog_open = false;
            }
            Action::ToggleTool(tool) => {
                self.tool = if self.tool == tool { Tool::None } else { tool };
            }
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::ToggleChat => {
                self.chat_open = !self.chat_open;
                if self.chat_open {
                    self.chat = vec![ChatMessage::assistant(CHAT_GREETING)];
                }
            }
            Action::ToggleExportMenu => self.export_menu_open = !self.export_menu_open,
            Action::ToggleMediaDialog => self.media_dialog_open = !self.media_dialog_open,
            Action::SendChat(text) => {
                let instruction = text.trim();
                if instruction.is_empty() {
                    return commands;
                }
                let Some(deck) = self.store.slides() else {
                    return commands;
                };
                let deck = deck.to_vec();
                if !self.revision.begin() {
                    return commands;
                }
                log::info!("Revising deck: {instruction:?}");
                self.revision_base = Some(self.store.revision());
                self.chat.push(ChatMessage::user(instruction));
                commands.push(Command::StartRevision {
                    deck,
                    instruction: instruction.to_string(),
                });
            }
            Action::RevisionFinished(result) => {
                self.revision.finish(&result);
                let base = self.revision_base.take();
                if !self.store.is_loaded() || base != Some(self.store.revision()) {
                    log::warn!("Discarding revision for a deck that is no longer open");
                    return commands;
                }
                match result {
                    Ok(slides) if !slides.is_empty() => {
                        self.store.replace_deck(slides);
                        self.chat.push(ChatMessage::assistant(CHAT_SUCCESS));
                    }
                    Ok(_) => {
                        log::error!("Revision returned no slides");
                        self.chat.push(ChatMessage::assistant(CHAT_FAILURE));
                    }
                    Err(e) => {
                        log::error!("Revision failed: {e}");
                        self.chat.push(ChatMessage::assistant(CHAT_FAILURE));
                    }
                }
            }
            Action::EnterPresentation => {
                if !self.store.is_empty() {
                    self.export_menu_open = false;
                    self.presentation.enter(&mut CommandFullscreen(&mut commands));
                }
            }
            Action::ExitPresentation => {
                self.presentation.exit(&mut CommandFullscreen(&mut commands));
            }
            Action::FullscreenLost => self.presentation.on_fullscreen_lost(),
            Action::PresentationKey(key) => {
                self.presentation.handle_key(
                    key,
                    &mut self.store,
                    &mut CommandFullscreen(&mut commands),
                );
            }
            Action::ToggleAutoPlay => self.presentation.toggle_auto_play(),
            Action::SetDuration(duration) => self.presentation.set_duration(duration),
            Action::SetCustomDuration(secs) => self.presentation.set_custom_duration_secs(secs),
            Action::Tick(now) => {
                if self
                    .presentation
                    .tick(now, self.store.len(), self.store.revision())
                {
                    self.store.advance_wrapping();
                }
            }
            Action::ExportJson(path) => {
                self.export_menu_open = false;
                if let Some(slides) = self.store.slides() {
                    commands.push(Command::WriteJson {
                        path,
                        slides: slides.to_vec(),
                    });
                }
            }
            Action::ExportPdf(path) => {
                self.export_menu_open = false;
                if self.store.current().is_some() {
                    commands.push(Command::CaptureSlidePdf(path));
                }
            }
            Action::DismissError => self.error = None,
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;
    use crate::render::Field;

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("Slide {i}"), Layout::BulletPoints, &["a"]))
            .collect()
    }

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::default();
        state.dispatch(Action::OpenDeck(Presentation {
            topic: "Deck".into(),
            slides: deck(n),
        }));
        state
    }

    #[test]
    fn test_generate_ignores_blank_topic() {
        let mut state = AppState::default();
        state.dispatch(Action::SetQuery("   ".into()));
        assert!(state.dispatch(Action::Generate(None)).is_empty());
        assert!(!state.is_generating());
    }

    #[test]
    fn test_duplicate_generate_is_ignored_while_pending() {
        let mut state = AppState::default();
        let first = state.dispatch(Action::Generate(Some("Mars".into())));
        assert_eq!(first, vec![Command::StartGeneration("Mars".into())]);
        assert!(state.is_generating());
        assert!(state.dispatch(Action::Generate(Some("Venus".into()))).is_empty());
        assert_eq!(state.query(), "Mars");
    }

    #[test]
    fn test_generation_success_loads_deck() {
        let mut state = AppState::default();
        state.dispatch(Action::Generate(Some("Mars".into())));
        state.dispatch(Action::GenerationFinished(Ok(deck(6))));
        assert!(!state.is_generating());
        assert_eq!(state.store().len(), 6);
        assert_eq!(state.store().current_index(), 0);
        assert_eq!(state.document_title(), "Mars");
        assert_eq!(state.tool(), Tool::None);
    }

    #[test]
    fn test_malformed_generation_keeps_deck() {
        let mut state = loaded(3);
        state.dispatch(Action::NextSlide);
        state.dispatch(Action::Generate(Some("Mars".into())));
        state.dispatch(Action::GenerationFinished(Err(GenerationError::Parse(
            "expected value at line 1".into(),
        ))));
        assert_eq!(state.store().len(), 3);
        assert_eq!(state.store().current_index(), 1);
        assert!(
            state
                .error()
                .is_some_and(|e| e.starts_with("Failed to generate valid presentation data"))
        );
        assert!(!state.is_generating());
    }

    #[test]
    fn test_empty_generation_is_an_error() {
        let mut state = AppState::default();
        state.dispatch(Action::Generate(Some("Mars".into())));
        state.dispatch(Action::GenerationFinished(Ok(Vec::new())));
        assert!(!state.store().is_loaded());
        assert_eq!(state.error(), Some("No content generated."));
    }

    #[test]
    fn test_templates_and_scratch() {
        let mut state = AppState::default();
        state.dispatch(Action::LoadTemplate("AI safety".into()));
        assert_eq!(state.store().len(), 6);
        assert_eq!(state.document_title(), "AI safety");

        state.dispatch(Action::StartFromScratch);
        assert_eq!(state.store().len(), 1);
        assert_eq!(state.tool(), Tool::Themes);
        assert_eq!(state.document_title(), UNTITLED);
    }

    #[test]
    fn test_go_home_resets_session() {
        let mut state = loaded(2);
        state.dispatch(Action::ToggleChat);
        state.dispatch(Action::EnterPresentation);
        let commands = state.dispatch(Action::GoHome);
        assert_eq!(commands, vec![Command::SetFullscreen(false)]);
        assert!(!state.store().is_loaded());
        assert!(!state.is_chat_open());
        assert!(!state.presentation().is_presenting());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_chat_ignores_blank_messages() {
        let mut state = loaded(2);
        assert!(state.dispatch(Action::SendChat("  \n".into())).is_empty());
        assert_eq!(state.chat().len(), 1);
        assert!(!state.is_revising());
    }

    #[test]
    fn test_revision_failure_keeps_deck() {
        let mut state = loaded(3);
        let commands = state.dispatch(Action::SendChat("shorter titles".into()));
        assert!(matches!(
            commands.as_slice(),
            [Command::StartRevision { deck, instruction }] if deck.len() == 3 && instruction == "shorter titles"
        ));
        assert!(state.dispatch(Action::SendChat("again".into())).is_empty());

        state.dispatch(Action::RevisionFinished(Err(EditError::Request(
            "timeout".into(),
        ))));
        assert_eq!(state.store().len(), 3);
        let last = state.chat().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.content, CHAT_FAILURE);
        assert!(!state.is_revising());
    }

    #[test]
    fn test_revision_success_clamps_index() {
        let mut state = loaded(5);
        state.dispatch(Action::SelectSlide(4));
        state.dispatch(Action::SendChat("merge into two slides".into()));
        state.dispatch(Action::RevisionFinished(Ok(deck(2))));
        assert_eq!(state.store().len(), 2);
        assert_eq!(state.store().current_index(), 1);
        assert_eq!(state.chat().last().unwrap().content, CHAT_SUCCESS);
    }

    #[test]
    fn test_stale_revision_does_not_replace_new_deck() {
        let mut state = loaded(3);
        state.dispatch(Action::SendChat("shorter titles".into()));
        state.dispatch(Action::GoHome);
        state.dispatch(Action::LoadTemplate("Yoga basics".into()));
        let template = state.store().slides().unwrap().to_vec();

        assert!(state.dispatch(Action::RevisionFinished(Ok(deck(2)))).is_empty());
        assert_eq!(state.store().slides().unwrap(), template.as_slice());
        assert_eq!(state.document_title(), "Yoga basics");
        assert!(!state.is_revising());
        assert_ne!(state.chat().last().unwrap().content, CHAT_SUCCESS);
    }

    #[test]
    fn test_stale_revision_does_not_reopen_cleared_deck() {
        let mut state = loaded(3);
        state.dispatch(Action::SendChat("shorter titles".into()));
        state.dispatch(Action::GoHome);
        state.dispatch(Action::RevisionFinished(Ok(deck(2))));
        assert!(!state.store().is_loaded());
        assert!(!state.is_revising());

        state.dispatch(Action::LoadTemplate("Yoga basics".into()));
        let commands = state.dispatch(Action::SendChat("more detail".into()));
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_unparseable_generation_output_keeps_deck() {
        let mut state = loaded(3);
        state.dispatch(Action::NextSlide);
        state.dispatch(Action::Generate(Some("Mars".into())));
        let result = crate::ai::parse_slides("not json")
            .map_err(|e| GenerationError::Parse(e.to_string()));
        assert!(result.is_err());

        state.dispatch(Action::GenerationFinished(result));
        assert_eq!(state.store().len(), 3);
        assert_eq!(state.store().slides().unwrap(), deck(3).as_slice());
        assert_eq!(state.store().current_index(), 1);
        assert!(
            state
                .error()
                .is_some_and(|e| e.starts_with("Failed to generate valid presentation data"))
        );
    }

    #[test]
    fn test_autoplay_toggle_ignored_at_rest() {
        let mut state = loaded(2);
        assert!(state.dispatch(Action::ToggleAutoPlay).is_empty());
        assert!(!state.presentation().is_auto_play());
        assert!(!state.presentation().is_presenting());

        state.dispatch(Action::EnterPresentation);
        state.dispatch(Action::ToggleAutoPlay);
        assert!(state.presentation().is_auto_play());
    }

    #[test]
    fn test_reopening_chat_resets_log() {
        let mut state = loaded(1);
        state.dispatch(Action::ToggleChat);
        state.dispatch(Action::SendChat("hi".into()));
        assert_eq!(state.chat().len(), 2);
        state.dispatch(Action::ToggleChat);
        state.dispatch(Action::ToggleChat);
        assert_eq!(state.chat(), &[ChatMessage::assistant(CHAT_GREETING)]);
    }

    #[test]
    fn test_presentation_fullscreen_commands() {
        let mut state = loaded(2);
        assert_eq!(
            state.dispatch(Action::EnterPresentation),
            vec![Command::SetFullscreen(true)]
        );
        state.dispatch(Action::ToggleAutoPlay);
        assert_eq!(
            state.dispatch(Action::PresentationKey(PresentationKey::Escape)),
            vec![Command::SetFullscreen(false)]
        );
        assert!(!state.presentation().is_presenting());
        assert!(!state.presentation().is_auto_play());
    }

    #[test]
    fn test_fullscreen_lost_clears_flags() {
        let mut state = loaded(2);
        state.dispatch(Action::EnterPresentation);
        state.dispatch(Action::ToggleAutoPlay);
        assert!(state.dispatch(Action::FullscreenLost).is_empty());
        assert!(!state.presentation().is_presenting());
        assert!(!state.presentation().is_auto_play());
    }

    #[test]
    fn test_autoplay_tick_wraps() {
        let mut state = loaded(2);
        state.dispatch(Action::SetDuration(Duration::from_millis(3000)));
        state.dispatch(Action::EnterPresentation);
        state.dispatch(Action::ToggleAutoPlay);

        let start = Instant::now();
        state.dispatch(Action::Tick(start));
        let mut seen = Vec::new();
        for i in 1..=3 {
            state.dispatch(Action::Tick(start + Duration::from_millis(3000 * i)));
            seen.push(state.store().current_index());
        }
        assert_eq!(seen, vec![1, 0, 1]);
    }

    #[test]
    fn test_edits_and_inserts_target_current_slide() {
        let mut state = loaded(2);
        state.dispatch(Action::NextSlide);
        state.dispatch(Action::EditSlide(SlideEdit::new(Field::Title, "Renamed")));
        assert_eq!(state.store().current().unwrap().title, "Renamed");

        state.dispatch(Action::InsertSlide);
        assert_eq!(state.store().len(), 3);
        assert_eq!(state.store().current_index(), 2);
        assert_eq!(state.store().current().unwrap(), &Slide::blank());

        state.dispatch(Action::AddTextBlock);
        assert_eq!(
            state.store().current().unwrap().content.last().map(String::as_str),
            Some("New Text Block")
        );
    }

    #[test]
    fn test_custom_image_closes_dialog() {
        let mut state = loaded(1);
        state.dispatch(Action::ToggleMediaDialog);
        state.dispatch(Action::SetCustomImage(" ".into()));
        assert!(state.is_media_dialog_open());
        state.dispatch(Action::SetCustomImage("https://example.com/a.png".into()));
        assert!(!state.is_media_dialog_open());
        assert_eq!(
            state.store().current().unwrap().custom_image.as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn test_toggle_tool() {
        let mut state = loaded(1);
        state.dispatch(Action::ToggleTool(Tool::Animations));
        assert_eq!(state.tool(), Tool::Animations);
        state.dispatch(Action::ToggleTool(Tool::Themes));
        assert_eq!(state.tool(), Tool::Themes);
        state.dispatch(Action::ToggleTool(Tool::Themes));
        assert_eq!(state.tool(), Tool::None);
    }

    #[test]
    fn test_exports_close_menu() {
        let mut state = loaded(2);
        state.dispatch(Action::ToggleExportMenu);
        let commands = state.dispatch(Action::ExportJson("deck.json".into()));
        assert!(matches!(
            commands.as_slice(),
            [Command::WriteJson { slides, .. }] if slides.len() == 2
        ));
        assert!(!state.is_export_menu_open());
        assert_eq!(
            state.dispatch(Action::ExportPdf("slide.pdf".into())),
            vec![Command::CaptureSlidePdf("slide.pdf".into())]
        );

        let mut empty = AppState::default();
        assert!(empty.dispatch(Action::ExportJson("x.json".into())).is_empty());
    }

    #[test]
    fn test_animation_defaults_from_settings() {
        let state = AppState::new(Settings {
            animation: "animate__zoomIn".into(),
            animation_speed: "animate__slow".into(),
            ..Settings::default()
        });
        let plain = Slide::new("x", Layout::Title, &[]);
        let class = state.animation_for(&plain);
        assert_eq!(class.animation, "animate__zoomIn");
        assert_eq!(class.speed, "animate__slow");

        let custom = plain.with_animation("animate__bounceIn").with_speed("");
        let class = state.animation_for(&custom);
        assert_eq!(class.animation, "animate__bounceIn");
        assert_eq!(class.speed, "");
    }
}
