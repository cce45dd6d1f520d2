use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const PDF_MIME: &str = "application/pdf";

/// A picked résumé. The bytes are never inspected here; the service does
/// the parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .context("Selected path has no file name")?
            .to_string_lossy()
            .to_string();

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self { file_name, bytes })
    }

    pub fn mime_type(&self) -> &'static str {
        PDF_MIME
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    pub matched_keywords: Vec<String>,
    pub suggested_keywords: Vec<String>,
}

/// Failure body returned by the service alongside 4xx/5xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceErrorBody {
    pub error: String,
}
