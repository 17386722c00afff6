//! The extraction pipeline
//!
//! ```text
//! ProviderResponse → raw text → candidates → validate + normalize
//!                                   │ (all rejected)
//!                                   └→ heuristic (questions) → fallback
//! ```
//!
//! The first candidate yielding at least one record wins; later candidates
//! are never located. The pipeline is pure and total: it performs no I/O
//! and always returns at least one record.

use crate::candidates::{locate, Strategy};
use crate::envelope::ProviderResponse;
use crate::normalize::ExtractRecord;
use crate::validate::accept;
use cardsmith_domain::{Card, Question};
use std::fmt;
use tracing::{debug, warn};

/// Which stage produced the records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    /// A structured candidate located by the given strategy
    Candidate(Strategy),

    /// Line-oriented reconstruction from prose
    Heuristic,

    /// Generic records synthesized after every other stage failed
    Fallback,
}

impl fmt::Display for ExtractionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionSource::Candidate(strategy) => write!(f, "{}", strategy),
            ExtractionSource::Heuristic => f.write_str("heuristic"),
            ExtractionSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// Records recovered from one response, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult<T> {
    /// The records; never empty
    pub records: Vec<T>,

    /// Stage that produced them
    pub source: ExtractionSource,
}

impl<T> ExtractionResult<T> {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false once the pipeline has run
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the records came from the fallback stage
    pub fn is_fallback(&self) -> bool {
        self.source == ExtractionSource::Fallback
    }

    /// Take the records
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// Extract records of kind `T` from a provider response
pub fn extract<T: ExtractRecord>(response: &ProviderResponse) -> ExtractionResult<T> {
    extract_from_text(&response.raw_text())
}

/// Extract cards from a provider response
pub fn extract_cards(response: &ProviderResponse) -> ExtractionResult<Card> {
    extract(response)
}

/// Extract questions from a provider response
pub fn extract_questions(response: &ProviderResponse) -> ExtractionResult<Question> {
    extract(response)
}

/// Extract records of kind `T` from already-unwrapped text
pub fn extract_from_text<T: ExtractRecord>(raw: &str) -> ExtractionResult<T> {
    for candidate in locate(raw) {
        match accept::<T>(&candidate) {
            Ok(records) => {
                debug!(
                    "{} candidate yielded {} {}",
                    candidate.strategy,
                    records.len(),
                    T::KIND
                );
                return ExtractionResult {
                    records,
                    source: ExtractionSource::Candidate(candidate.strategy),
                };
            }
            Err(rejection) => {
                debug!("{} candidate rejected: {}", candidate.strategy, rejection);
            }
        }
    }

    let records = T::reconstruct(raw);
    if !records.is_empty() {
        warn!(
            "No structured {} in response; reconstructed {} from prose",
            T::KIND,
            records.len()
        );
        return ExtractionResult {
            records,
            source: ExtractionSource::Heuristic,
        };
    }

    warn!(
        "No {} recoverable from {} chars of response; using fallback",
        T::KIND,
        raw.chars().count()
    );
    ExtractionResult {
        records: T::fallback(raw),
        source: ExtractionSource::Fallback,
    }
}
