//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use cardsmith_domain::{Card, ExportReport, Question};
use cardsmith_extractor::ExtractionSource;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format cards output.
    pub fn format_cards(&self, cards: &[Card]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(cards)?),
            OutputFormat::Table => Ok(self.format_cards_table(cards)),
            OutputFormat::Quiet => Ok(cards
                .iter()
                .map(|c| format!("{}\t{}", c.front, c.back))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format questions output.
    pub fn format_questions(&self, questions: &[Question]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(questions)?),
            OutputFormat::Table => Ok(self.format_questions_table(questions)),
            OutputFormat::Quiet => Ok(questions
                .iter()
                .map(|q| q.question.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_cards_table(&self, cards: &[Card]) -> String {
        if cards.is_empty() {
            return self.colorize("No cards.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Front", "Back", "Deck"]);
        for (i, card) in cards.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                card.front.clone(),
                card.back.clone(),
                card.deck.clone(),
            ]);
        }
        Self::render(builder)
    }

    fn format_questions_table(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return self.colorize("No questions.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Question", "Topic"]);
        for (i, question) in questions.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                question.question.clone(),
                question.topic.clone(),
            ]);
        }
        Self::render(builder)
    }

    fn render(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Describe where the records came from.
    ///
    /// Heuristic and fallback output is flagged so the user knows the model
    /// did not return the JSON it was asked for.
    pub fn extraction_note(&self, count: usize, source: ExtractionSource) -> String {
        match source {
            ExtractionSource::Candidate(_) => {
                self.info(&format!("{} record(s) extracted ({})", count, source))
            }
            ExtractionSource::Heuristic => self.warning(&format!(
                "{} record(s) rebuilt from prose; the response was not valid JSON",
                count
            )),
            ExtractionSource::Fallback => {
                self.warning("Response could not be parsed; showing generic placeholder records")
            }
        }
    }

    /// Format a Mochi export report.
    pub fn export_report(&self, report: &ExportReport) -> String {
        let mut lines = Vec::new();
        if !report.created.is_empty() {
            lines.push(self.success(&format!("Exported {} card(s) to Mochi", report.created.len())));
        }
        for failure in &report.failures {
            lines.push(self.error(&format!("{}: {}", failure.card.front, failure.reason)));
        }
        if lines.is_empty() {
            lines.push(self.info("Nothing to export"));
        }
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_domain::{ExportFailure, ExportedCard};
    use cardsmith_extractor::Strategy;

    fn cards() -> Vec<Card> {
        vec![
            Card::new("What is ATP?", "Energy currency", "Biology"),
            Card::in_default_deck("What is DNA?", "Genetic material"),
        ]
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_cards(&cards()).unwrap();
        let parsed: Vec<Card> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, cards());
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_questions(&[Question::new("Why?", "General"), Question::new("How?", "Ethics")])
            .unwrap();
        assert_eq!(output, "Why?\nHow?");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_cards(&cards()).unwrap();
        assert!(output.contains("Front"));
        assert!(output.contains("Biology"));
        assert!(output.contains("General"));
    }

    #[test]
    fn test_questions_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_questions(&[Question::new("Is free will real?", "Ethics")])
            .unwrap();
        assert!(output.contains("Topic"));
        assert!(output.contains("Ethics"));
    }

    #[test]
    fn test_empty_cards() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_cards(&[]).unwrap();
        assert!(output.contains("No cards"));
    }

    #[test]
    fn test_extraction_note_flags_degraded_sources() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let direct = formatter.extraction_note(3, ExtractionSource::Candidate(Strategy::Direct));
        assert!(direct.starts_with("ℹ 3 record(s)"));

        let fallback = formatter.extraction_note(1, ExtractionSource::Fallback);
        assert!(fallback.starts_with("⚠"));
    }

    #[test]
    fn test_export_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = ExportReport {
            created: vec![ExportedCard {
                remote_id: "abc".to_string(),
                deck: "Biology".to_string(),
            }],
            failures: vec![ExportFailure {
                card: Card::in_default_deck("Q", "A"),
                reason: "HTTP 500".to_string(),
            }],
        };
        let output = formatter.export_report(&report);
        assert!(output.contains("✓ Exported 1 card(s)"));
        assert!(output.contains("✗ Q: HTTP 500"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
