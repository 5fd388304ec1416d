use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::document::{Document, DocumentFormat, LoadOptions};
use crate::lookup::{Key, Lookup};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "dig")]
#[command(about = "Dig - nested key lookup into JSON and YAML documents", long_about = None)]
pub struct Args {
    /// Key path to follow: `:sym` for symbols, `"text"` for strings,
    /// integers for indices (negative counts from the end), anything else
    /// is a string key
    #[arg(value_name = "KEY", required = true, allow_negative_numbers = true)]
    pub keys: Vec<String>,

    /// Document to read (reads stdin if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (detected from the file extension if not specified)
    #[arg(long, value_name = "FORMAT")]
    pub input_format: Option<DocumentFormat>,

    /// Output format (json, inspect)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Load mapping keys as symbols instead of strings
    #[arg(long)]
    pub symbolize_keys: bool,

    /// Fail when the key path leads nowhere
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                anyhow::bail!("Input file does not exist: {}", input.display());
            }
            if !input.is_file() {
                anyhow::bail!("Input is not a file: {}", input.display());
            }
        }
        Ok(())
    }

    pub fn key_path(&self) -> Vec<Key> {
        self.keys.iter().map(|k| Key::parse(k)).collect()
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            symbolize_keys: self.symbolize_keys,
        }
    }

    pub fn load_document(&self) -> crate::error::Result<Document> {
        let options = self.load_options();
        let document = match self.input {
            Some(ref path) => Document::load(path, self.input_format, &options)?,
            None => Document::from_reader(
                std::io::stdin().lock(),
                self.input_format.unwrap_or(DocumentFormat::Json),
                &options,
            )?,
        };
        Ok(document)
    }

    /// Loads the input document and digs the requested key path into it.
    pub fn run(&self) -> crate::error::Result<Lookup> {
        let document = self.load_document()?;
        let keys = self.key_path();
        tracing::debug!(source = document.source_name(), keys = %describe_path(&keys), "digging");
        Ok(document.dig(&keys)?)
    }
}

/// Renders a key path the way it would be passed to `dig`, e.g. `:foo, 0`.
pub fn describe_path(keys: &[Key]) -> String {
    keys.iter()
        .map(Key::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
