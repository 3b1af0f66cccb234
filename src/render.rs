//! Per-article page rendering.
//!
//! Each article goes through the same three steps: read the Markdown source,
//! convert it to an HTML fragment with pulldown-cmark (default options, no
//! extensions), and evaluate the shared template against the article's
//! bindings. The template recognizes exactly three placeholders:
//!
//! - `{{ title }}` — the article's display title (plain string, HTML-escaped)
//! - `{{ articleContent }}` — the HTML fragment, inserted **unescaped**
//! - `{{ publishDate }}` — the article's publish date (plain string, HTML-escaped)
//!
//! ## Trust boundary
//!
//! The fragment is inserted into the template as raw HTML. Article sources
//! are assumed to come from a trusted author; if they ever carried
//! untrusted input this would be an XSS vector. This is deliberate and
//! applies to the fragment only: the two metadata bindings are escaped
//! before insertion, so markup in a title renders as literal text.

use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use tera::Tera;

use crate::config::Article;
use crate::error::CompileError;

/// Name under which the single template file is registered with tera.
const TEMPLATE_NAME: &str = "article";

/// The template file, parsed once per run and shared by every article.
///
/// Owned by the pipeline driver and passed by reference to each render call;
/// never cloned or re-parsed per article.
#[derive(Debug)]
pub struct CompiledTemplate {
    tera: Tera,
}

impl CompiledTemplate {
    /// Parse the template file at `path`.
    ///
    /// A missing file or a syntax error maps to [`CompileError::Template`]
    /// and is fatal before any article is processed.
    pub fn compile(path: &Path) -> Result<Self, CompileError> {
        let mut tera = Tera::default();
        tera.add_template_file(path, Some(TEMPLATE_NAME))?;
        // Escaping is per binding in `evaluate`: metadata is escaped there,
        // articleContent is raw HTML by contract.
        tera.autoescape_on(vec![]);
        Ok(Self { tera })
    }

    /// Evaluate the template against one article's bindings.
    ///
    /// `title` and `publishDate` are display strings and are HTML-escaped
    /// here; only `articleContent` is exempt from escaping.
    fn evaluate(&self, article: &Article, fragment: &str) -> Result<String, CompileError> {
        let mut context = tera::Context::new();
        context.insert("title", &tera::escape_html(&article.title));
        context.insert("articleContent", fragment);
        context.insert("publishDate", &tera::escape_html(&article.published_at));
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Convert Markdown to an HTML fragment using default pulldown-cmark options.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut fragment = String::new();
    md_html::push_html(&mut fragment, parser);
    fragment
}

/// Render one article into a complete HTML page.
///
/// Reads `article.source`, converts it to a fragment, and substitutes it
/// into `template` along with the article's metadata. An unreadable source
/// maps to [`CompileError::Io`], an evaluation failure to
/// [`CompileError::Template`]; either aborts the whole run.
pub fn render_article(
    article: &Article,
    template: &CompiledTemplate,
) -> Result<String, CompileError> {
    eprintln!("- loading article from {}", article.source);
    let markdown = fs::read_to_string(&article.source)?;
    let fragment = markdown_to_html(&markdown);
    template.evaluate(article, &fragment)
}
