//! Export reports
//!
//! Cards are uploaded one request each, so a batch export can partially
//! succeed. The report keeps both outcomes in input order.

use crate::record::Card;

/// A card the export service accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedCard {
    /// Identifier assigned by the export service
    pub remote_id: String,

    /// Deck the card was filed under
    pub deck: String,
}

/// A card the export service rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    /// The card that failed
    pub card: Card,

    /// Reason for failure
    pub reason: String,
}

/// Outcome of exporting a batch of cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Cards created remotely
    pub created: Vec<ExportedCard>,

    /// Cards that could not be created
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    /// Total number of cards attempted
    pub fn attempted(&self) -> usize {
        self.created.len() + self.failures.len()
    }

    /// Whether every card was created
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = ExportReport {
            created: vec![ExportedCard {
                remote_id: "abc".to_string(),
                deck: "General".to_string(),
            }],
            failures: vec![ExportFailure {
                card: Card::in_default_deck("Q", "A"),
                reason: "HTTP 500".to_string(),
            }],
        };
        assert_eq!(report.attempted(), 2);
        assert!(!report.is_complete());
        assert!(ExportReport::default().is_complete());
    }
}
