//! # blogc
//!
//! A minimal static blog compiler. A JSON config names one template file
//! and an ordered list of Markdown articles; each article is converted to
//! HTML, substituted into the template, and written next to its source as
//! `<stem>.html`.
//!
//! # Architecture: One Sequential Pipeline
//!
//! ```text
//! load config  →  for each article, in order:
//!                     read source  →  Markdown → HTML  →  fill template  →  write <stem>.html
//! ```
//!
//! The pipeline is strictly sequential and fatal on first error: any
//! unreadable file, malformed config, or template failure aborts the whole
//! run. Output files written by earlier articles stay on disk — a run
//! either fully succeeds or stops where it failed, with no rollback.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Loads the JSON job description (`BlogConfig`, `Article`) |
//! | [`render`] | Markdown conversion and template evaluation per article |
//! | [`output`] | Output path derivation and file writing |
//! | [`compile`] | The driver: template parsed once, articles compiled in order |
//! | [`error`] | The `CompileError` taxonomy shared by all stages |
//!
//! # Design Decisions
//!
//! ## One Template, Parsed Once
//!
//! The template is a shared, read-only resource: parsed a single time at
//! the start of the run and passed by reference to every render. Templates
//! use [tera](https://keats.github.io/tera/) syntax with exactly three
//! recognized bindings: `{{ title }}`, `{{ articleContent }}`, and
//! `{{ publishDate }}`.
//!
//! ## Trusted-Author Content
//!
//! `articleContent` is inserted into the template as raw HTML, unescaped.
//! Article sources are assumed to be written by the blog's own author; see
//! [`render`] for the full contract. Do not feed this compiler untrusted
//! Markdown. The metadata bindings (`title`, `publishDate`) are
//! HTML-escaped before insertion.
//!
//! ## Lenient Config Decoding
//!
//! Unknown JSON fields are ignored and missing fields default to empty;
//! see [`config`]. This keeps old configs working as the format grows.

pub mod compile;
pub mod config;
pub mod error;
pub mod output;
pub mod render;

pub use config::{Article, BlogConfig};
pub use error::CompileError;
