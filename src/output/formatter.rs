use anyhow::Result;
use clap::ValueEnum;

use crate::lookup::Lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Inspect,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Inspect => "inspect",
        }
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(lookup: &Lookup, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&lookup.value())?),
            OutputFormat::Inspect => Ok(match lookup.value() {
                Some(value) => value.to_string(),
                None => "nil".to_string(),
            }),
        }
    }
}
