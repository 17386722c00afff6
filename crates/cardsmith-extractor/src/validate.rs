//! Structural validation of a single candidate
//!
//! A candidate is either accepted whole or rejected whole. Rejections are
//! reported back to the candidate loop, never to the caller.

use crate::candidates::Candidate;
use crate::normalize::{normalize, ExtractRecord};
use serde_json::Value;
use std::fmt;

/// Why a candidate was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Not well-formed JSON
    Decode(String),

    /// Well-formed, but not an array
    NotASequence,

    /// An empty array
    EmptySequence,

    /// No element is an object with the kind's required fields
    NoRecordShape,

    /// Elements had the right shape but none survived normalization
    NoValidRecords,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Decode(e) => write!(f, "decode failed: {}", e),
            Rejection::NotASequence => f.write_str("not an array"),
            Rejection::EmptySequence => f.write_str("empty array"),
            Rejection::NoRecordShape => f.write_str("no element has the required fields"),
            Rejection::NoValidRecords => f.write_str("no element survived normalization"),
        }
    }
}

/// Decode a candidate and check the minimum shape contract for `T`
pub fn validate<T: ExtractRecord>(candidate: &Candidate<'_>) -> Result<Vec<Value>, Rejection> {
    let value: Value =
        serde_json::from_str(candidate.text).map_err(|e| Rejection::Decode(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(Rejection::NotASequence);
    };

    if items.is_empty() {
        return Err(Rejection::EmptySequence);
    }

    let shaped = items
        .iter()
        .filter_map(Value::as_object)
        .any(T::has_required_fields);
    if !shaped {
        return Err(Rejection::NoRecordShape);
    }

    Ok(items)
}

/// Validate then normalize; a candidate yielding zero records is rejected
pub fn accept<T: ExtractRecord>(candidate: &Candidate<'_>) -> Result<Vec<T>, Rejection> {
    let items = validate::<T>(candidate)?;
    let records = normalize::<T>(&items);
    if records.is_empty() {
        return Err(Rejection::NoValidRecords);
    }
    Ok(records)
}
