//! Command implementations.

pub mod config;
pub mod export;
pub mod generate;
pub mod parse;

pub use self::config::execute_config;
pub use self::export::execute_export;
pub use self::generate::execute_generate;
pub use self::parse::execute_parse;

use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read command input from an inline argument, a file, or stdin.
pub(crate) fn read_input(inline: Option<String>, file: Option<&Path>, stdin: bool) -> Result<String> {
    if let Some(text) = inline {
        Ok(text)
    } else if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(path) = file {
        Ok(fs::read_to_string(path)?)
    } else {
        Err(CliError::InvalidInput(
            "Must provide text, --file or --stdin".to_string(),
        ))
    }
}
