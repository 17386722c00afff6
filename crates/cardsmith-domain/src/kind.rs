//! Kind module - which record type a generation asks for

/// Record kind requested from the model
///
/// Both kinds share the same extraction pipeline; they differ in required
/// fields, defaults and fallback content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Spaced-repetition flashcards
    Cards,

    /// Discussion questions
    Questions,
}

impl RecordKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Cards => "cards",
            RecordKind::Questions => "questions",
        }
    }

    /// Parse a kind from a string, accepting singular and plural forms
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "card" | "cards" | "flashcard" | "flashcards" => Some(RecordKind::Cards),
            "question" | "questions" => Some(RecordKind::Questions),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid record kind: {}", s))
    }
}
