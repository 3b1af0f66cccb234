//! Crate-wide error taxonomy.
//!
//! Every failure in the pipeline is fatal: the driver propagates the first
//! `Err` it sees and `main` maps it to a logged message and a non-zero exit.
//! There is no retry, no per-article isolation, and no rollback of output
//! files already written by earlier articles.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    /// Any read or write of an article source, template, config, or output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON or does not match the expected shape.
    #[error("invalid blog config: {0}")]
    ConfigInvalid(#[from] serde_json::Error),
    /// The template failed to parse or evaluate (missing file, unresolved binding).
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}
