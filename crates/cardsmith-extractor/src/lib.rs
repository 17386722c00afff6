//! Cardsmith Extractor
//!
//! Recovers flashcards and discussion questions from LLM output.
//!
//! # Overview
//!
//! The model is asked for a strict JSON array, but what comes back may be
//! wrapped in prose or code fences, truncated, or not JSON at all. The
//! extraction pipeline recovers a well-typed, non-empty list of records
//! from any response without ever failing.
//!
//! # Architecture
//!
//! ```text
//! Text → Generator → LLM → ProviderResponse → pipeline → Vec<Card | Question>
//! ```
//!
//! Pipeline stages, each in its own module:
//!
//! - [`envelope`]: unwrap the assistant text from the provider envelope
//! - [`candidates`]: locate substrings that may hold JSON (direct, bracket-matched, fenced)
//! - [`validate`]: decode a candidate and check its shape
//! - [`normalize`]: fill defaults and drop incomplete records
//! - [`heuristic`]: rebuild questions from a prose list
//! - [`fallback`]: synthesize generic records as a last resort
//!
//! # Example Usage
//!
//! ```
//! use cardsmith_extractor::{extract_cards, ProviderResponse};
//!
//! let body = r#"{"content":[{"type":"text","text":"[{\"front\":\"Q\",\"back\":\"A\"}]"}]}"#;
//! let result = extract_cards(&ProviderResponse::from_body(body));
//!
//! assert_eq!(result.records[0].front, "Q");
//! assert_eq!(result.records[0].deck, "General");
//! ```

#![warn(missing_docs)]

pub mod candidates;
mod config;
pub mod envelope;
mod error;
pub mod fallback;
mod generator;
pub mod heuristic;
pub mod normalize;
pub mod pipeline;
mod prompt;
mod types;
pub mod validate;

#[cfg(test)]
mod tests;

pub use candidates::{Candidate, Strategy};
pub use config::ExtractorConfig;
pub use envelope::{ContentBlock, ProviderResponse};
pub use error::ExtractorError;
pub use generator::Generator;
pub use normalize::ExtractRecord;
pub use pipeline::{
    extract, extract_cards, extract_from_text, extract_questions, ExtractionResult,
    ExtractionSource,
};
pub use prompt::PromptBuilder;
pub use types::{Generation, GenerationMetadata, GenerationRequest};
pub use validate::Rejection;
