//! Blog configuration loading.
//!
//! The config is a single JSON document naming one shared template file and
//! an ordered list of articles:
//!
//! ```json
//! {
//!   "template": "template.html",
//!   "articles": [
//!     { "source": "posts/hello.md", "title": "Hello", "publishedAt": "2024-01-01" }
//!   ]
//! }
//! ```
//!
//! ## Lenient decoding
//!
//! Decoding is deliberately lenient, as a documented contract rather than a
//! deserialization accident: unknown JSON fields are ignored, and a missing
//! `template` or `articles` field falls back to an empty string / empty list.
//! A config with no articles is a valid no-op job. Malformed JSON or a field
//! of the wrong type is still an error.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::CompileError;

/// One Markdown source file plus display metadata, compiled into one HTML page.
///
/// `title` and `published_at` are free-form display strings; only `source`
/// must reference a readable file, and that is checked at render time, not
/// at load time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Path to the Markdown source file.
    pub source: String,
    /// Display title, bound to the template's `title` placeholder.
    pub title: String,
    /// Display date, bound to the template's `publishDate` placeholder.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

/// The top-level job description: one shared template plus ordered articles.
///
/// Constructed once per run by [`load`], read-only thereafter. Article order
/// is significant and preserved from the JSON array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Path to the template file shared by all articles.
    pub template: String,
    /// Articles to compile, in the order they should be processed.
    pub articles: Vec<Article>,
}

/// Load and deserialize the blog config from `path`.
///
/// An unreadable file maps to [`CompileError::Io`]; malformed JSON to
/// [`CompileError::ConfigInvalid`]. Either is fatal — no partial config is
/// ever produced.
pub fn load(path: &Path) -> Result<BlogConfig, CompileError> {
    let data = fs::read_to_string(path)?;
    let config: BlogConfig = serde_json::from_str(&data)?;
    Ok(config)
}
