mod cli;
mod json;

pub use cli::print_cli_table;
pub use json::print_json;

use crate::model::DisplayDocument;
use anyhow::Result;

/// Output format for rendered documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// Display-surface JSON payload
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" | "embed" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use 'table' or 'json'", s)),
        }
    }
}

pub fn print_document(doc: &DisplayDocument, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_cli_table(doc),
        OutputFormat::Json => print_json(doc),
    }
}
