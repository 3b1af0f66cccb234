//! The sequential compile pipeline.
//!
//! One run: parse the template once, then walk the config's articles in
//! order, rendering and writing each. Fatal on first error — the first
//! `Err` from any step aborts the remaining articles. Output files written
//! by earlier articles are left in place; there is no rollback.

use std::path::Path;

use crate::config::BlogConfig;
use crate::error::CompileError;
use crate::output;
use crate::render::{self, CompiledTemplate};

/// Compile every article in `config`, in order.
///
/// The template named by `config.template` is parsed once and shared by
/// reference across all renders; a template parse failure is fatal before
/// any article is touched.
pub fn compile(config: &BlogConfig) -> Result<(), CompileError> {
    let template = CompiledTemplate::compile(Path::new(&config.template))?;

    for article in &config.articles {
        let page = render::render_article(article, &template)?;
        output::write(article, &page)?;
    }

    Ok(())
}
