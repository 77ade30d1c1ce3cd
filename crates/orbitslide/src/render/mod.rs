pub mod editor;
pub mod image_cache;
pub mod layouts;
pub mod paint;

use eframe::egui::{Align, Color32, FontFamily, Rect};

use crate::catalog::AnimationClass;
use crate::catalog::themes::{Background, Theme};
use crate::model::{Layout, Slide, clean_text};

/// Slides are laid out on a fixed 16:9 canvas and scaled to fit on screen.
pub const CANVAS_WIDTH: f32 = 1280.0;
pub const CANVAS_HEIGHT: f32 = 720.0;

/// The slide field a piece of text was read from and writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Subtitle,
    Content(usize),
    /// All content items shown as one text, separated by blank lines.
    ContentJoined,
}

impl Field {
    /// Text shown for this field.
    pub fn read(self, slide: &Slide) -> String {
        match self {
            Self::Title => clean_text(&slide.title),
            Self::Subtitle => slide.subtitle.as_deref().map(clean_text).unwrap_or_default(),
            Self::Content(i) => slide.content_at(i),
            Self::ContentJoined => slide.content.join("\n\n"),
        }
    }
}

/// A user edit of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideEdit {
    pub field: Field,
    pub text: String,
}

impl SlideEdit {
    pub fn new(field: Field, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// The slide with this edit applied. Writing past the end of `content`
    /// pads with empty items.
    pub fn apply(&self, slide: &Slide) -> Slide {
        let mut next = slide.clone();
        match self.field {
            Field::Title => next.title = self.text.clone(),
            Field::Subtitle => next.subtitle = Some(self.text.clone()),
            Field::Content(i) => {
                if next.content.len() <= i {
                    next.content.resize(i + 1, String::new());
                }
                next.content[i] = self.text.clone();
            }
            Field::ContentJoined => {
                next.content = self.text.split("\n\n").map(str::to_string).collect();
            }
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color32,
    pub family: FontFamily,
    pub align: Align,
    pub valign: Align,
    pub italic: bool,
    /// Display-only; the edited text keeps its case.
    pub uppercase: bool,
}

impl TextStyle {
    pub fn new(size: f32, color: Color32, family: FontFamily) -> Self {
        Self {
            size,
            color,
            family,
            align: Align::Min,
            valign: Align::Min,
            italic: false,
            uppercase: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Max;
        self
    }

    pub fn middle(mut self) -> Self {
        self.valign = Align::Center;
        self
    }

    pub fn bottom(mut self) -> Self {
        self.valign = Align::Max;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Text; `field` is `None` for labels that are not editable.
    Text {
        field: Option<Field>,
        text: String,
        style: TextStyle,
        placeholder: &'static str,
    },
    /// Fully rounded solid strip.
    Bar { color: Color32 },
    Card {
        fill: Color32,
        stroke: Option<Color32>,
        rounding: f32,
    },
    /// Circle with a short label, e.g. item numbers.
    Badge {
        label: String,
        fill: Color32,
        text_color: Color32,
    },
    Image {
        source: String,
        alt: String,
        opacity: f32,
        /// Darken the lower half so captions stay readable.
        shade: bool,
        rounding: f32,
    },
    Glyph {
        glyph: &'static str,
        size: f32,
        color: Color32,
    },
    /// Soft blurred circle behind the content.
    Glow { color: Color32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Canvas coordinates.
    pub rect: Rect,
    pub kind: ElementKind,
}

impl Element {
    pub fn is_editable(&self) -> bool {
        matches!(self.kind, ElementKind::Text { field: Some(_), .. })
    }
}

/// A slide laid out on the canvas, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub layout: Layout,
    pub animation: AnimationClass,
    pub background: Background,
    /// Background decoration, not affected by the entrance animation.
    pub decorations: Vec<Element>,
    pub elements: Vec<Element>,
}

impl SlideView {
    pub fn text_of(&self, field: Field) -> Option<&str> {
        self.elements.iter().find_map(|element| match &element.kind {
            ElementKind::Text {
                field: Some(f),
                text,
                ..
            } if *f == field => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Lay out `slide` with `theme`. Pure; never fails on short or empty content.
pub fn build(slide: &Slide, theme: &Theme, animation: &AnimationClass) -> SlideView {
    let elements = match slide.layout {
        Layout::Title => layouts::title::build(slide, theme),
        Layout::SectionHeader => layouts::section_header::build(slide, theme),
        Layout::BigNumber => layouts::big_number::build(slide, theme),
        Layout::ThreeColumn => layouts::three_column::build(slide, theme),
        Layout::Comparison => layouts::comparison::build(slide, theme),
        Layout::Quote => layouts::quote::build(slide, theme),
        Layout::Gallery => layouts::gallery::build(slide, theme),
        Layout::TwoColumn => layouts::two_column::build(slide, theme),
        Layout::CodeBlock => layouts::code_block::build(slide, theme),
        Layout::BulletPoints => layouts::bullet_points::build(slide, theme),
    };

    SlideView {
        layout: slide.layout,
        animation: animation.clone(),
        background: theme.background.clone(),
        decorations: layouts::decorations(theme),
        elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(layout: Layout) -> Slide {
        Slide {
            title: String::new(),
            layout,
            ..Default::default()
        }
    }

    #[test]
    fn test_every_layout_builds_with_empty_content() {
        let theme = Theme::fallback();
        for layout in Layout::ALL {
            let view = build(&empty(layout), &theme, &AnimationClass::default());
            assert_eq!(view.layout, layout);
            for element in &view.elements {
                assert!(element.rect.is_finite(), "{layout:?}: {element:?}");
                if let ElementKind::Text { text, field, .. } = &element.kind {
                    if matches!(field, Some(Field::Content(_))) {
                        assert!(text.is_empty(), "{layout:?} invented content");
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_layout_builds_with_long_content() {
        let theme = Theme::fallback();
        let items: Vec<String> = (0..12).map(|i| format!("Point {i}")).collect();
        for layout in Layout::ALL {
            let slide = Slide {
                title: "A title".into(),
                subtitle: Some("Sub".into()),
                content: items.clone(),
                layout,
                ..Default::default()
            };
            let view = build(&slide, &theme, &AnimationClass::default());
            assert!(!view.elements.is_empty());
        }
    }

    #[test]
    fn test_text_is_cleaned() {
        let slide = Slide::new("**Bold** idea", Layout::BulletPoints, &["*one*"]);
        let view = build(&slide, &Theme::fallback(), &AnimationClass::default());
        assert_eq!(view.text_of(Field::Title), Some("Bold idea"));
        assert_eq!(view.text_of(Field::Content(0)), Some("one"));
    }

    #[test]
    fn test_edit_title_and_subtitle() {
        let slide = Slide::new("Old", Layout::Title, &[]);
        let edited = SlideEdit::new(Field::Title, "New").apply(&slide);
        assert_eq!(edited.title, "New");
        let edited = SlideEdit::new(Field::Subtitle, "Sub").apply(&edited);
        assert_eq!(edited.subtitle.as_deref(), Some("Sub"));
        assert_eq!(slide.title, "Old");
    }

    #[test]
    fn test_edit_content_past_end_pads() {
        let slide = Slide::new("T", Layout::Gallery, &["a"]);
        let edited = SlideEdit::new(Field::Content(2), "c").apply(&slide);
        assert_eq!(edited.content, vec!["a", "", "c"]);
    }

    #[test]
    fn test_edit_joined_content_splits_on_blank_lines() {
        let slide = Slide::new("T", Layout::CodeBlock, &["fn a() {}", "fn b() {}"]);
        assert_eq!(Field::ContentJoined.read(&slide), "fn a() {}\n\nfn b() {}");
        let edited =
            SlideEdit::new(Field::ContentJoined, "let x = 1;\nlet y = 2;\n\nx + y").apply(&slide);
        assert_eq!(edited.content, vec!["let x = 1;\nlet y = 2;", "x + y"]);
    }

    #[test]
    fn test_animation_is_carried() {
        let slide = Slide::new("T", Layout::Quote, &[]).with_animation("animate__zoomIn");
        let animation = AnimationClass::for_slide(&slide);
        let view = build(&slide, &Theme::fallback(), &animation);
        assert_eq!(view.animation.animation, "animate__zoomIn");
    }
}
