//! Parse command implementation.

use super::read_input;
use crate::cli::{KindArg, ParseArgs};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use cardsmith_extractor::{extract_cards, extract_questions, ProviderResponse};

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, formatter: &Formatter) -> Result<()> {
    let body = read_input(None, args.file.as_deref(), args.stdin)?;
    let (records, note) = extract_and_format(args.kind, &body, formatter)?;

    if formatter.format() != OutputFormat::Quiet {
        eprintln!("{}", note);
    }
    println!("{}", records);

    Ok(())
}

/// Run the extraction pipeline on a response body.
///
/// Returns the formatted records and a note naming the stage that produced them.
fn extract_and_format(kind: KindArg, body: &str, formatter: &Formatter) -> Result<(String, String)> {
    let response = ProviderResponse::from_body(body);

    match kind {
        KindArg::Cards => {
            let result = extract_cards(&response);
            let note = formatter.extraction_note(result.len(), result.source);
            Ok((formatter.format_cards(&result.records)?, note))
        }
        KindArg::Questions => {
            let result = extract_questions(&response);
            let note = formatter.extraction_note(result.len(), result.source);
            Ok((formatter.format_questions(&result.records)?, note))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_domain::{Card, Question};

    fn json_formatter() -> Formatter {
        Formatter::new(OutputFormat::Json, false)
    }

    #[test]
    fn test_parse_messages_envelope() {
        let body = r#"{"content":[{"type":"text","text":"[{\"front\":\"Q\",\"back\":\"A\",\"deck\":\"Bio\"}]"}]}"#;
        let (records, note) = extract_and_format(KindArg::Cards, body, &json_formatter()).unwrap();

        let cards: Vec<Card> = serde_json::from_str(&records).unwrap();
        assert_eq!(cards, vec![Card::new("Q", "A", "Bio")]);
        assert!(note.contains("1 record(s) extracted"));
    }

    #[test]
    fn test_parse_prose_questions() {
        let body = "Topic: Ethics\n1. Is lying ever justified?\n2. What is a duty?";
        let (records, note) = extract_and_format(KindArg::Questions, body, &json_formatter()).unwrap();

        let questions: Vec<Question> = serde_json::from_str(&records).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].topic, "Ethics");
        assert!(note.contains("rebuilt from prose"));
    }

    #[test]
    fn test_parse_garbage_falls_back() {
        let (records, note) =
            extract_and_format(KindArg::Cards, "no structure here", &json_formatter()).unwrap();

        let cards: Vec<Card> = serde_json::from_str(&records).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].back, "no structure here");
        assert!(note.contains("placeholder"));
    }
}
