//! Cardsmith Domain Layer
//!
//! This crate contains the core domain model for Cardsmith: the records a
//! study session produces from a text selection, and the trait interfaces
//! for the remote services that produce and consume them.
//!
//! ## Key Concepts
//!
//! - **Card**: a spaced-repetition flashcard (front, back, deck)
//! - **Question**: a discussion question tagged with a topic
//! - **Record kind**: which of the two a generation request asks for
//! - **Generation**: one LLM call for one text selection, identified by a UUIDv7
//!
//! ## Architecture
//!
//! - Minimal dependencies (`uuid` for identifiers, `serde` for the JSON boundary)
//! - No I/O
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod export;
pub mod generation;
pub mod kind;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use export::{ExportFailure, ExportReport, ExportedCard};
pub use generation::GenerationId;
pub use kind::RecordKind;
pub use record::{Card, Question, DEFAULT_DECK, DEFAULT_TOPIC};
pub use traits::{CardExporter, LlmProvider, Prompt};
