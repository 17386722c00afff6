//! Cardsmith Mochi exporter
//!
//! Client for exporting generated flashcards to Mochi
//! (<https://mochi.cards>) over its REST API.
//!
//! # Example
//!
//! ```no_run
//! use cardsmith_domain::{Card, CardExporter};
//! use cardsmith_mochi::MochiClient;
//!
//! # async fn example() -> Result<(), cardsmith_mochi::MochiError> {
//! let client = MochiClient::new("mochi-api-key")?;
//! let cards = vec![Card::new("What is ATP?", "Energy currency", "Biology")];
//!
//! let report = client.export_cards(&cards).await?;
//! println!("Created {} cards", report.created.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod wire;

pub use client::{group_by_deck, MochiClient, DEFAULT_BASE_URL};
pub use error::MochiError;
pub use wire::{card_content, Deck};
