//! Locate substrings of the model output that may hold the JSON records
//!
//! Strategies run in a fixed order of decreasing confidence. The returned
//! iterator is lazy: a strategy only scans the text when the caller asks
//! for a candidate past the previous strategy's.

use regex::Regex;
use std::fmt;
use std::iter;
use std::sync::LazyLock;

/// A JSON array containing at least one object, embedded in prose.
///
/// Non-greedy and single-match: the first `[` followed by `{` up to the
/// nearest `}` + `]`. Nested arrays of objects inside a record can cut the
/// match short, which then fails to decode and falls through.
static BRACKETED_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*\{[\s\S]*?\}\s*\]").expect("bracketed array pattern is valid")
});

/// A fenced code block with an optional language tag.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```[\w+-]*[ \t]*\r?\n?([\s\S]*?)```").expect("fenced block pattern is valid")
});

/// How a candidate was located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The entire text
    Direct,

    /// First `[ { ... } ]` span in the text
    BracketMatched,

    /// Contents of a fenced code block
    Fenced,
}

impl Strategy {
    /// Strategy name for logs and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::BracketMatched => "bracket-matched",
            Strategy::Fenced => "fenced",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A substring believed to encode structured data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Strategy that produced the candidate
    pub strategy: Strategy,

    /// The candidate text, borrowed from the raw text
    pub text: &'a str,
}

/// Yield candidates in priority order: direct, bracket-matched, then each
/// fenced block in order of appearance.
pub fn locate(raw: &str) -> impl Iterator<Item = Candidate<'_>> {
    let direct = iter::once(Candidate {
        strategy: Strategy::Direct,
        text: raw,
    });

    let bracketed = iter::once_with(move || bracket_matched(raw)).flatten();

    let fenced = FENCED_BLOCK
        .captures_iter(raw)
        .filter_map(|captures| captures.get(1))
        .map(|body| Candidate {
            strategy: Strategy::Fenced,
            text: body.as_str().trim(),
        });

    direct.chain(bracketed).chain(fenced)
}

fn bracket_matched(raw: &str) -> Option<Candidate<'_>> {
    BRACKETED_ARRAY.find(raw).map(|m| Candidate {
        strategy: Strategy::BracketMatched,
        text: m.as_str(),
    })
}
