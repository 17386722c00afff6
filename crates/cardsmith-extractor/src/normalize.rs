//! Turn validated JSON elements into records
//!
//! `ExtractRecord` is the seam that parameterizes the pipeline per record
//! kind: which fields are required, how defaults are filled, and what the
//! terminal stages produce.

use crate::fallback::{fallback_cards, fallback_questions};
use crate::heuristic::reconstruct_questions;
use cardsmith_domain::{Card, Question, RecordKind, DEFAULT_DECK, DEFAULT_TOPIC};
use serde_json::{Map, Value};

/// A record kind the extraction pipeline can produce
pub trait ExtractRecord: Sized {
    /// Which kind this is
    const KIND: RecordKind;

    /// Whether a decoded object exposes the kind's required fields
    fn has_required_fields(object: &Map<String, Value>) -> bool;

    /// Build a record from a decoded object, filling defaults
    ///
    /// Returns `None` when a required field is missing or empty.
    fn from_object(object: &Map<String, Value>) -> Option<Self>;

    /// Rebuild records from unstructured prose when no candidate decodes
    fn reconstruct(_raw: &str) -> Vec<Self> {
        Vec::new()
    }

    /// Records returned when every other stage produced nothing
    fn fallback(raw: &str) -> Vec<Self>;
}

impl ExtractRecord for Card {
    const KIND: RecordKind = RecordKind::Cards;

    fn has_required_fields(object: &Map<String, Value>) -> bool {
        object.contains_key("front") && object.contains_key("back")
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        Some(Card {
            front: required_text(object, "front")?,
            back: required_text(object, "back")?,
            deck: label_or(object, "deck", DEFAULT_DECK),
        })
    }

    fn fallback(raw: &str) -> Vec<Self> {
        fallback_cards(raw)
    }
}

impl ExtractRecord for Question {
    const KIND: RecordKind = RecordKind::Questions;

    fn has_required_fields(object: &Map<String, Value>) -> bool {
        object.contains_key("question")
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        Some(Question {
            question: required_text(object, "question")?,
            topic: label_or(object, "topic", DEFAULT_TOPIC),
        })
    }

    fn reconstruct(raw: &str) -> Vec<Self> {
        reconstruct_questions(raw)
    }

    fn fallback(_raw: &str) -> Vec<Self> {
        fallback_questions()
    }
}

/// Keep the elements that form a valid record, in order
pub fn normalize<T: ExtractRecord>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(T::from_object)
        .collect()
}

/// Coerce a required field to non-empty text.
///
/// Strings, numbers and booleans count as text; null, arrays and objects
/// count as absent.
fn required_text(object: &Map<String, Value>, field: &str) -> Option<String> {
    let text = match object.get(field)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Optional label: a non-blank string, otherwise the default
fn label_or(object: &Map<String, Value>, field: &str, default: &str) -> String {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or(default)
        .to_string()
}
