//! Output file writing.
//!
//! Each rendered page lands next to its Markdown source: the source
//! extension is stripped and `.html` appended (`posts/hello.md` →
//! `posts/hello.html`). Existing files at that path are overwritten
//! without confirmation or backup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Article;
use crate::error::CompileError;

/// Derive the output path for a source file.
///
/// Replaces the extension with `.html`; a source with no extension gets
/// `.html` appended.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension("html")
}

/// Write the rendered page for `article` to its derived output path.
///
/// Any write failure (permissions, missing directory, disk full) maps to
/// [`CompileError::Io`] and aborts the run.
pub fn write(article: &Article, content: &str) -> Result<(), CompileError> {
    let path = output_path(Path::new(&article.source));
    fs::write(path, content)?;
    Ok(())
}
