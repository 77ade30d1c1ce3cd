use serde_json::{Value, json};

use crate::ai::{DeckGenerator, EditError, GenerationError, parse_slides};
use crate::model::{Layout, Slide};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const GENERATE_SYSTEM: &str = "You are a world-class presentation designer. You create engaging, \
structured slide decks with varied visual templates. IMPORTANT: Output CLEAN PLAIN TEXT for titles \
and content. DO NOT use Markdown formatting (like **bold**, *italics*, # headers, or bullets) inside \
the JSON string values. Just plain text.";

const REVISE_SYSTEM: &str =
    "You are an expert presentation editor. Output clean plain text without Markdown characters like * or **.";

/// Blocking client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
}

/// Failure of one model call, before it is mapped to the caller's error type.
#[derive(Debug)]
enum CallError {
    MissingApiKey,
    Request(String),
    Empty,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: if model.trim().is_empty() {
                DEFAULT_MODEL.to_string()
            } else {
                model
            },
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn call(&self, system: &str, prompt: &str) -> Result<String, CallError> {
        let api_key = self.api_key.as_deref().ok_or(CallError::MissingApiKey)?;
        let url = format!("{API_BASE}/{}:generateContent?key={api_key}", self.model);

        log::info!("Calling {} ({} prompt chars)", self.model, prompt.len());
        let response: Value = ureq::post(&url)
            .header("Content-Type", "application/json")
            .send_json(request_body(system, prompt))
            .map_err(|e| CallError::Request(e.to_string()))?
            .body_mut()
            .read_json()
            .map_err(|e| CallError::Request(e.to_string()))?;
        log::debug!("Model response received");

        response_text(&response).ok_or(CallError::Empty)
    }
}

impl DeckGenerator for GeminiClient {
    fn generate(&self, topic: &str) -> Result<Vec<Slide>, GenerationError> {
        let text = self
            .call(GENERATE_SYSTEM, &generation_prompt(topic))
            .map_err(|e| match e {
                CallError::MissingApiKey => GenerationError::MissingApiKey,
                CallError::Request(msg) => GenerationError::Request(msg),
                CallError::Empty => GenerationError::EmptyResponse,
            })?;
        let slides = parse_slides(&text).map_err(|e| {
            log::error!("Failed to parse generated deck: {e}");
            GenerationError::Parse(e.to_string())
        })?;
        if slides.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        log::info!("Generated {} slides", slides.len());
        Ok(slides)
    }

    fn revise(&self, deck: &[Slide], instruction: &str) -> Result<Vec<Slide>, EditError> {
        let prompt = revision_prompt(deck, instruction).map_err(|e| EditError::Parse(e.to_string()))?;
        let text = self.call(REVISE_SYSTEM, &prompt).map_err(|e| match e {
            CallError::MissingApiKey => EditError::MissingApiKey,
            CallError::Request(msg) => EditError::Request(msg),
            CallError::Empty => EditError::EmptyResponse,
        })?;
        let slides = parse_slides(&text).map_err(|e| {
            log::error!("Failed to parse revised deck: {e}");
            EditError::Parse(e.to_string())
        })?;
        if slides.is_empty() {
            return Err(EditError::EmptyResponse);
        }
        Ok(slides)
    }
}

pub fn generation_prompt(topic: &str) -> String {
    format!(
        "Create a professional presentation about: \"{topic}\".\n\
         Generate 6 to 8 slides.\n\
         Ensure variety in layouts (use comparison, big_number, or three_column where appropriate).\n\
         For 'imageKeyword', provide a short, descriptive search term for a stock photo."
    )
}

pub fn revision_prompt(deck: &[Slide], instruction: &str) -> Result<String, serde_json::Error> {
    let current = serde_json::to_string(deck)?;
    Ok(format!(
        "Current Slides JSON: {current}\n\n\
         User Instruction: \"{instruction}\"\n\n\
         Task: Modify the slides based ONLY on the user instruction. Return the full updated array of slides."
    ))
}

/// Structured-output schema: an array of slide objects.
pub fn response_schema() -> Value {
    let layouts: Vec<&str> = Layout::ALL.iter().map(|l| l.tag()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "subtitle": { "type": "STRING" },
                "content": { "type": "ARRAY", "items": { "type": "STRING" } },
                "layout": { "type": "STRING", "enum": layouts },
                "imageKeyword": { "type": "STRING" },
                "notes": { "type": "STRING" }
            },
            "required": ["title", "content", "layout"]
        }
    })
}

fn request_body(system: &str, prompt: &str) -> Value {
    json!({
        "systemInstruction": { "parts": [{ "text": system }] },
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

/// Concatenated text parts of the first candidate, if any.
fn response_text(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();
    (!text.trim().is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_every_layout() {
        let schema = response_schema();
        let layouts = schema["items"]["properties"]["layout"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(layouts.len(), 10);
        assert!(layouts.contains(&json!("code_block")));
        assert_eq!(
            schema["items"]["required"],
            json!(["title", "content", "layout"])
        );
    }

    #[test]
    fn test_request_body() {
        let body = request_body("sys", "make slides");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "make slides");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_response_text() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "[" }, { "text": "]" }] } }]
        });
        assert_eq!(response_text(&response).as_deref(), Some("[]"));
        assert_eq!(response_text(&json!({ "candidates": [] })), None);
        let blank = json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] });
        assert_eq!(response_text(&blank), None);
    }

    #[test]
    fn test_prompts() {
        assert!(generation_prompt("Deep sea life").contains("\"Deep sea life\""));
        let deck = vec![Slide::new("Hello", Layout::Title, &[])];
        let prompt = revision_prompt(&deck, "make it shorter").unwrap();
        assert!(prompt.contains(r#""title":"Hello""#));
        assert!(prompt.contains("\"make it shorter\""));
    }

    #[test]
    fn test_missing_key_fails_without_network() {
        let client = GeminiClient::new(None, "");
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.generate("x"), Err(GenerationError::MissingApiKey));
        assert_eq!(client.revise(&[], "x"), Err(EditError::MissingApiKey));
        assert!(!GeminiClient::new(Some("  ".into()), "m").has_api_key());
    }
}
