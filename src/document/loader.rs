use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use tracing::debug;

use super::convert::{from_json, from_yaml};
use crate::error::DocumentError;
use crate::lookup::{DigResult, Key, Value};

const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Load mapping keys as symbols rather than strings.
    pub symbolize_keys: bool,
}

pub fn detect_format(path: &Path) -> Option<DocumentFormat> {
    path.extension()?.to_str().and_then(|ext| match ext {
        "json" => Some(DocumentFormat::Json),
        "yaml" | "yml" => Some(DocumentFormat::Yaml),
        _ => None,
    })
}

#[derive(Debug, Clone)]
pub struct Document {
    root: Value,
    source_name: String,
}

impl Document {
    pub fn parse(
        text: &str,
        format: DocumentFormat,
        options: &LoadOptions,
        source_name: impl Into<String>,
    ) -> Result<Self, DocumentError> {
        let source_name = source_name.into();
        let root = match format {
            DocumentFormat::Json => serde_json::from_str::<serde_json::Value>(text)
                .map(|json| from_json(json, options))
                .map_err(|e| DocumentError::parse_error(&source_name, format.as_str(), e.to_string())),
            DocumentFormat::Yaml => serde_yaml::from_str::<serde_yaml::Value>(text)
                .map(|yaml| from_yaml(yaml, options))
                .map_err(|e| DocumentError::parse_error(&source_name, format.as_str(), e.to_string())),
        }?;

        debug!(source = %source_name, format = format.as_str(), "parsed document");

        Ok(Self {
            root,
            source_name,
        })
    }

    pub fn from_json_str(text: &str, options: &LoadOptions) -> Result<Self, DocumentError> {
        Self::parse(text, DocumentFormat::Json, options, "<string>")
    }

    pub fn from_yaml_str(text: &str, options: &LoadOptions) -> Result<Self, DocumentError> {
        Self::parse(text, DocumentFormat::Yaml, options, "<string>")
    }

    pub fn from_reader<R: Read>(
        mut reader: R,
        format: DocumentFormat,
        options: &LoadOptions,
    ) -> Result<Self, DocumentError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| DocumentError::read_error(STDIN_NAME, e))?;
        Self::parse(&text, format, options, STDIN_NAME)
    }

    /// Reads a document from disk. Without an explicit format it is
    /// detected from the extension, falling back to JSON.
    pub fn load(
        path: &Path,
        format: Option<DocumentFormat>,
        options: &LoadOptions,
    ) -> Result<Self, DocumentError> {
        if !path.is_file() {
            return Err(DocumentError::file_not_found(path));
        }

        let format = format
            .or_else(|| detect_format(path))
            .unwrap_or(DocumentFormat::Json);
        let source_name = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DocumentError::read_error(&source_name, e))?;

        Self::parse(&text, format, options, source_name)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn dig(&self, keys: &[Key]) -> DigResult {
        self.root.dig(keys)
    }
}
