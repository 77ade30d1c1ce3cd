pub mod gemini;
pub mod request;

use thiserror::Error;

use crate::model::Slide;

pub use gemini::GeminiClient;
pub use request::RequestSlot;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("No API key configured. Run `orbitslide ai init` or set GEMINI_API_KEY.")]
    MissingApiKey,
    #[error("Generation request failed: {0}")]
    Request(String),
    #[error("No content generated.")]
    EmptyResponse,
    #[error("Failed to generate valid presentation data: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("No API key configured. Run `orbitslide ai init` or set GEMINI_API_KEY.")]
    MissingApiKey,
    #[error("Update request failed: {0}")]
    Request(String),
    #[error("No update generated.")]
    EmptyResponse,
    #[error("Failed to update presentation: {0}")]
    Parse(String),
}

/// Produces whole decks from a topic and rewrites decks from an instruction.
/// A response is accepted or rejected as a whole.
pub trait DeckGenerator: Send + Sync {
    fn generate(&self, topic: &str) -> Result<Vec<Slide>, GenerationError>;

    fn revise(&self, deck: &[Slide], instruction: &str) -> Result<Vec<Slide>, EditError>;
}

/// Parse a model response: a JSON array of slide records, nothing else.
pub fn parse_slides(text: &str) -> Result<Vec<Slide>, serde_json::Error> {
    serde_json::from_str(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;

    #[test]
    fn test_parse_slides() {
        let text = r#"[
            {"title": "Intro", "subtitle": "Why", "content": ["a", "b"], "layout": "title", "imageKeyword": "sky"},
            {"title": "Data", "content": ["42%"], "layout": "big_number", "notes": "say it slowly"}
        ]"#;
        let slides = parse_slides(text).unwrap();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].image_keyword.as_deref(), Some("sky"));
        assert_eq!(slides[1].layout, Layout::BigNumber);
        assert_eq!(slides[1].notes.as_deref(), Some("say it slowly"));
    }

    #[test]
    fn test_parse_rejects_non_arrays() {
        assert!(parse_slides("").is_err());
        assert!(parse_slides("{\"title\": \"x\"}").is_err());
        assert!(parse_slides("Here are your slides: []").is_err());
        assert!(parse_slides("[{\"content\": []}]").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(GenerationError::EmptyResponse.to_string(), "No content generated.");
        assert_eq!(EditError::EmptyResponse.to_string(), "No update generated.");
    }
}
