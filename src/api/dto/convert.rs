//! DTOs for the article conversion endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::export::ExportFormat;

/// Request to convert article content into one or more export formats.
///
/// Exactly one of `markdown` and `html` must be provided; the handler
/// rejects requests carrying both or neither.
#[derive(Debug, Deserialize, Validate)]
pub struct ConvertRequest {
    /// Markdown source, e.g. straight from the generation pipeline.
    pub markdown: Option<String>,

    /// Pre-rendered HTML source.
    pub html: Option<String>,

    /// Article title. Derived from the first heading when omitted.
    #[validate(length(max = 200, message = "title too long"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "at least one format required"))]
    pub formats: Vec<ExportFormat>,

    /// When present, Amazon links in the content are rewritten to
    /// affiliate form before export. Falls back to the configured default
    /// tag; omit both to skip rewriting.
    pub associate_tag: Option<String>,
}

/// One rendered artifact.
#[derive(Debug, Serialize)]
pub struct Artifact {
    pub format: ExportFormat,
    pub content: String,
}

/// Response carrying every requested artifact.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub title: String,
    pub artifacts: Vec<Artifact>,
}
