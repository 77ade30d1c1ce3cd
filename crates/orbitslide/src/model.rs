use serde::{Deserialize, Deserializer, Serialize};

/// The ten fixed slide arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Title,
    #[default]
    BulletPoints,
    TwoColumn,
    ThreeColumn,
    Quote,
    SectionHeader,
    BigNumber,
    Gallery,
    Comparison,
    CodeBlock,
}

impl Layout {
    pub const ALL: [Layout; 10] = [
        Layout::Title,
        Layout::BulletPoints,
        Layout::TwoColumn,
        Layout::ThreeColumn,
        Layout::Quote,
        Layout::SectionHeader,
        Layout::BigNumber,
        Layout::Gallery,
        Layout::Comparison,
        Layout::CodeBlock,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::BulletPoints => "bullet_points",
            Self::TwoColumn => "two_column",
            Self::ThreeColumn => "three_column",
            Self::Quote => "quote",
            Self::SectionHeader => "section_header",
            Self::BigNumber => "big_number",
            Self::Gallery => "gallery",
            Self::Comparison => "comparison",
            Self::CodeBlock => "code_block",
        }
    }

    /// Exact tag match; anything unrecognized renders as bullet points.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|layout| layout.tag() == tag)
            .unwrap_or(Self::BulletPoints)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::BulletPoints => "Bullet Points",
            Self::TwoColumn => "Two Column",
            Self::ThreeColumn => "Three Column",
            Self::Quote => "Quote",
            Self::SectionHeader => "Section Header",
            Self::BigNumber => "Big Number",
            Self::Gallery => "Gallery",
            Self::Comparison => "Comparison",
            Self::CodeBlock => "Code Block",
        }
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub content: Vec<String>,

    pub layout: Layout,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_keyword: Option<String>,

    /// URL or `data:` URL of an image inserted by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, layout: Layout, content: &[&str]) -> Self {
        Self {
            title: title.into(),
            layout,
            content: content.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_image_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.image_keyword = Some(keyword.into());
        self
    }

    pub fn with_animation(mut self, animation: &str) -> Self {
        self.animation_type = Some(animation.to_string());
        self
    }

    pub fn with_speed(mut self, speed: &str) -> Self {
        self.animation_speed = Some(speed.to_string());
        self
    }

    /// The record inserted by "add slide".
    pub fn blank() -> Self {
        Self::new("New Slide", Layout::BulletPoints, &["Add your content here"])
    }

    /// The single slide of a deck started from scratch.
    pub fn from_scratch() -> Self {
        Self::new(
            "Your Title Here",
            Layout::Title,
            &["Click to edit this content", "Add your points here"],
        )
        .with_subtitle("Created from scratch")
    }

    /// Content item at `index`, cleaned, or empty when the layout reads past the end.
    pub fn content_at(&self, index: usize) -> String {
        self.content
            .get(index)
            .map(|s| clean_text(s))
            .unwrap_or_default()
    }

    /// Main image source: the custom image if one was inserted, otherwise a
    /// stock photo seeded by the keyword.
    pub fn image_url(&self) -> String {
        if let Some(custom) = self.custom_image.as_deref().filter(|s| !s.is_empty()) {
            return custom.to_string();
        }
        let seed = self
            .image_keyword
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("abstract");
        format!(
            "https://picsum.photos/seed/{}/1200/800",
            urlencoding::encode(seed)
        )
    }

    /// Secondary gallery images (`n` is 2 or 3).
    pub fn gallery_image_url(&self, n: usize) -> String {
        let keyword = self.image_keyword.as_deref().unwrap_or_default();
        format!(
            "https://picsum.photos/seed/{}{n}/600/400",
            urlencoding::encode(keyword)
        )
    }

    /// Every image source a layout may draw for this slide.
    pub fn image_sources(&self) -> [String; 3] {
        [
            self.image_url(),
            self.gallery_image_url(2),
            self.gallery_image_url(3),
        ]
    }
}

/// A topic paired with its deck, shown as the editor's document title.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Presentation {
    pub topic: String,
    pub slides: Vec<Slide>,
}

/// Strip markdown emphasis markers the model sometimes emits.
pub fn clean_text(text: &str) -> String {
    text.replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_tags() {
        for layout in Layout::ALL {
            assert_eq!(Layout::from_tag(layout.tag()), layout);
        }
        assert_eq!(Layout::from_tag("timeline"), Layout::BulletPoints);
    }

    #[test]
    fn test_slide_json_uses_camel_case() {
        let slide = Slide::new("Market", Layout::BigNumber, &["300%"])
            .with_image_keyword("growth graph")
            .with_animation("animate__zoomIn");
        let json = serde_json::to_string(&slide).unwrap();
        assert!(json.contains("\"imageKeyword\":\"growth graph\""));
        assert!(json.contains("\"animationType\":\"animate__zoomIn\""));
        assert!(json.contains("\"layout\":\"big_number\""));
        assert!(!json.contains("subtitle"));
        assert!(!json.contains("customImage"));
    }

    #[test]
    fn test_unknown_layout_deserializes_to_bullets() {
        let slide: Slide =
            serde_json::from_str(r#"{"title":"T","content":[],"layout":"mystery"}"#).unwrap();
        assert_eq!(slide.layout, Layout::BulletPoints);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result: Result<Slide, _> = serde_json::from_str(r#"{"content":[],"layout":"title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("**Bold** and *it*"), "Bold and it");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_content_at_out_of_range_is_empty() {
        let slide = Slide::new("T", Layout::Gallery, &["*one*"]);
        assert_eq!(slide.content_at(0), "one");
        assert_eq!(slide.content_at(2), "");
    }

    #[test]
    fn test_image_url() {
        let mut slide = Slide::new("T", Layout::TwoColumn, &[]);
        assert_eq!(slide.image_url(), "https://picsum.photos/seed/abstract/1200/800");

        slide.image_keyword = Some("smart city".into());
        assert_eq!(
            slide.image_url(),
            "https://picsum.photos/seed/smart%20city/1200/800"
        );
        assert_eq!(
            slide.gallery_image_url(2),
            "https://picsum.photos/seed/smart%20city2/600/400"
        );

        slide.image_keyword = Some("rock & roll (live)".into());
        assert_eq!(
            slide.image_url(),
            "https://picsum.photos/seed/rock%20%26%20roll%20%28live%29/1200/800"
        );

        slide.custom_image = Some("https://example.com/a.png".into());
        assert_eq!(slide.image_url(), "https://example.com/a.png");
        assert_eq!(
            slide.image_sources()[1..],
            [
                "https://picsum.photos/seed/rock%20%26%20roll%20%28live%292/600/400",
                "https://picsum.photos/seed/rock%20%26%20roll%20%28live%293/600/400",
            ]
        );
    }
}
