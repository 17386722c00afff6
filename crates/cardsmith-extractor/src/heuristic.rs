//! Line-oriented reconstruction of questions from prose
//!
//! Models that ignore the JSON instruction usually still answer with a
//! numbered list of questions, optionally grouped under
//! `Topic:` headings. Each line is classified, then applied to a small
//! state machine holding the pending question and the current topic.

use cardsmith_domain::{Question, DEFAULT_TOPIC};
use regex::Regex;
use std::sync::LazyLock;

/// `Topic: X` / `Category: X`, tolerating markdown emphasis and headings
static TOPIC_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[#>*_\s]*(?:topic|category)[*_]*\s*:\s*(.*)$")
        .expect("topic label pattern is valid")
});

/// `12. ` at the start of a line, stripped from question starts
static NUMBERED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\.\s+").expect("numbered marker pattern is valid")
});

/// Classification of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace
    Blank,

    /// A topic label with its (possibly empty) value
    Topic(&'a str),

    /// Starts a new question; numbered marker already stripped
    QuestionStart(&'a str),

    /// Continues the pending question
    Continuation(&'a str),
}

/// Classify a single line. Topic labels win over question marks.
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }

    if let Some(captures) = TOPIC_LABEL.captures(trimmed) {
        let value = captures
            .get(1)
            .map_or("", |m| m.as_str())
            .trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace());
        return Line::Topic(value);
    }

    if trimmed.contains('?') || NUMBERED_MARKER.is_match(trimmed) {
        let stripped = match NUMBERED_MARKER.find(trimmed) {
            Some(marker) => &trimmed[marker.end()..],
            None => trimmed,
        };
        return Line::QuestionStart(stripped.trim());
    }

    Line::Continuation(trimmed)
}

/// State machine rebuilding questions line by line
///
/// A flushed question is paired with the topic current at flush time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReconstructor {
    pending: Option<String>,
    current_topic: String,
    completed: Vec<Question>,
}

impl QuestionReconstructor {
    /// Start with no pending question under the default topic
    pub fn new() -> Self {
        Self {
            pending: None,
            current_topic: DEFAULT_TOPIC.to_string(),
            completed: Vec::new(),
        }
    }

    /// Topic the next flushed question is paired with
    pub fn current_topic(&self) -> &str {
        &self.current_topic
    }

    /// Text of the question being accumulated, if any
    pub fn pending_question(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Apply one line of input
    pub fn feed_line(&mut self, line: &str) {
        match classify(line) {
            Line::Blank => {}
            Line::Topic("") => {}
            Line::Topic(topic) => self.current_topic = topic.to_string(),
            Line::QuestionStart(text) => {
                self.flush();
                self.pending = Some(text.to_string());
            }
            Line::Continuation(text) => match self.pending.as_mut() {
                Some(pending) => {
                    if !pending.is_empty() {
                        pending.push(' ');
                    }
                    pending.push_str(text);
                }
                None => self.pending = Some(text.to_string()),
            },
        }
    }

    /// Flush the pending question and return everything reconstructed
    pub fn finish(mut self) -> Vec<Question> {
        self.flush();
        self.completed
    }

    fn flush(&mut self) {
        if let Some(text) = self.pending.take() {
            if !text.is_empty() {
                self.completed
                    .push(Question::new(text, self.current_topic.clone()));
            }
        }
    }
}

impl Default for QuestionReconstructor {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild questions from the lines of `raw`
pub fn reconstruct_questions(raw: &str) -> Vec<Question> {
    let mut machine = QuestionReconstructor::new();
    for line in raw.lines() {
        machine.feed_line(line);
    }
    machine.finish()
}
