use blogc::{compile, config};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "blogc")]
#[command(about = "Minimal static blog compiler")]
#[command(long_about = "\
Minimal static blog compiler

Reads a JSON config naming a template file and an ordered list of Markdown
articles, converts each article to HTML, fills the template, and writes the
result next to the source (posts/hello.md → posts/hello.html).

Config format:

  {
    \"template\": \"template.html\",
    \"articles\": [
      { \"source\": \"posts/hello.md\", \"title\": \"Hello\", \"publishedAt\": \"2024-01-01\" }
    ]
  }

The template may use {{ title }}, {{ articleContent }} (raw HTML), and
{{ publishDate }}. The run aborts on the first error; output files from
already-compiled articles are left in place.")]
#[command(version)]
struct Cli {
    /// Path to the blog config JSON file
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // No argument is a deliberate soft-exit, not an error.
    let Some(config_path) = cli.config else {
        println!("usage: blogc <config-file>");
        return ExitCode::SUCCESS;
    };

    eprintln!("loading config file from {}", config_path.display());
    let result = config::load(&config_path).and_then(|config| compile::compile(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blogc: {err}");
            ExitCode::FAILURE
        }
    }
}
