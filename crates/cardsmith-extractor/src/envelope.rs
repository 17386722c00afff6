//! Unwrap the assistant text from a provider response envelope

use serde_json::{Map, Value};

/// Single-text fields recognised on an envelope object, in lookup order
const TEXT_FIELDS: [&str; 3] = ["content", "text", "completion"];

/// Response envelope returned by an LLM provider
///
/// The core never retains an envelope; it only reads the assistant text
/// out of it.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    /// Ordered content blocks, each tagged with a kind
    Blocks(Vec<ContentBlock>),

    /// A single text payload
    Text(String),

    /// An envelope of unknown shape, kept for diagnostics
    Unrecognized(Value),
}

/// One content block of a block-form envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Block kind (`text`, `tool_use`, ...)
    pub kind: String,

    /// Text payload, if the block carries one
    pub text: Option<String>,
}

impl ContentBlock {
    /// Create a `text` block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
        }
    }

    fn from_value(value: &Value) -> Self {
        Self {
            kind: value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            text: value.get("text").and_then(Value::as_str).map(str::to_string),
        }
    }

    fn is_text(&self) -> bool {
        self.kind == "text"
    }
}

impl ProviderResponse {
    /// Classify a raw HTTP response body
    ///
    /// Bodies that are not a JSON object or string are the assistant text
    /// itself (plain prose, or a bare JSON array from a provider without an
    /// envelope), so they are kept verbatim.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => Self::from_value(value),
            Ok(Value::String(text)) => ProviderResponse::Text(text),
            _ => ProviderResponse::Text(body.to_string()),
        }
    }

    /// Classify an already-decoded envelope
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ProviderResponse::Text(text),
            Value::Object(ref object) => match classify_object(object) {
                Some(response) => response,
                None => ProviderResponse::Unrecognized(value),
            },
            other => ProviderResponse::Unrecognized(other),
        }
    }

    /// Concatenate the assistant text
    ///
    /// Text blocks are joined in order with no separator. An unrecognized
    /// envelope degrades to its serialized form.
    pub fn raw_text(&self) -> String {
        match self {
            ProviderResponse::Blocks(blocks) => blocks
                .iter()
                .filter(|block| block.is_text())
                .filter_map(|block| block.text.as_deref())
                .collect(),
            ProviderResponse::Text(text) => text.clone(),
            ProviderResponse::Unrecognized(value) => value.to_string(),
        }
    }
}

fn classify_object(object: &Map<String, Value>) -> Option<ProviderResponse> {
    if let Some(Value::Array(blocks)) = object.get("content") {
        return Some(ProviderResponse::Blocks(
            blocks.iter().map(ContentBlock::from_value).collect(),
        ));
    }

    for field in TEXT_FIELDS {
        if let Some(Value::String(text)) = object.get(field) {
            return Some(ProviderResponse::Text(text.clone()));
        }
    }

    // Chat-completions shape: choices[0].message.content
    object
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(|text| ProviderResponse::Text(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_blocks_concatenate_without_separator() {
        let response = ProviderResponse::from_value(json!({
            "content": [
                { "type": "text", "text": "[{\"front\":" },
                { "type": "tool_use", "id": "t1", "input": {} },
                { "type": "text", "text": "\"Q\"}]" }
            ]
        }));
        assert_eq!(response.raw_text(), "[{\"front\":\"Q\"}]");
    }

    #[test]
    fn test_non_text_blocks_ignored_even_with_text_field() {
        let response = ProviderResponse::Blocks(vec![
            ContentBlock {
                kind: "thinking".to_string(),
                text: Some("hidden".to_string()),
            },
            ContentBlock::text("shown"),
        ]);
        assert_eq!(response.raw_text(), "shown");
    }

    #[test]
    fn test_empty_block_list() {
        let response = ProviderResponse::from_value(json!({ "content": [] }));
        assert_eq!(response, ProviderResponse::Blocks(Vec::new()));
        assert_eq!(response.raw_text(), "");
    }

    #[test]
    fn test_single_text_fields() {
        for field in TEXT_FIELDS {
            let response = ProviderResponse::from_value(json!({ field: "hello" }));
            assert_eq!(response, ProviderResponse::Text("hello".to_string()));
        }
    }

    #[test]
    fn test_chat_completion_shape() {
        let response = ProviderResponse::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "[]" } }]
        }));
        assert_eq!(response.raw_text(), "[]");
    }

    #[test]
    fn test_unrecognized_envelope_serializes() {
        let response = ProviderResponse::from_value(json!({ "error": { "type": "overloaded" } }));
        assert!(matches!(response, ProviderResponse::Unrecognized(_)));
        assert!(response.raw_text().contains("overloaded"));
    }

    #[test]
    fn test_body_that_is_not_json_is_text() {
        let body = "Here are your cards:\n1. What?";
        assert_eq!(
            ProviderResponse::from_body(body),
            ProviderResponse::Text(body.to_string())
        );
    }

    #[test]
    fn test_bare_array_body_kept_verbatim() {
        let body = "[ {\"front\": \"Q\", \"back\": \"A\"} ]";
        assert_eq!(ProviderResponse::from_body(body).raw_text(), body);
    }

    #[test]
    fn test_messages_api_body() {
        let body = r#"{"id":"msg_1","type":"message","role":"assistant",
            "content":[{"type":"text","text":"[]"}],"stop_reason":"end_turn"}"#;
        assert_eq!(ProviderResponse::from_body(body).raw_text(), "[]");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(ProviderResponse::from_body("").raw_text(), "");
    }
}
