//! End-to-end pipeline tests: JSON config on disk → compiled HTML pages.

use blogc::{CompileError, compile, config};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEMPLATE: &str = "<!DOCTYPE html>\n<html>\n<head><title>{{ title }}</title></head>\n<body>\n<h1>{{ title }}</h1>\n<time>{{ publishDate }}</time>\n{{ articleContent }}</body>\n</html>\n";

/// Write a template plus article sources and a config referencing them.
/// Returns the temp dir and the config path.
fn setup_blog(articles: &[(&str, &str, &str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();

    let entries: Vec<String> = articles
        .iter()
        .map(|(name, markdown, title, date)| {
            let source = dir.path().join(name);
            fs::write(&source, markdown).unwrap();
            format!(
                r#"{{ "source": {}, "title": "{title}", "publishedAt": "{date}" }}"#,
                serde_json::to_string(&source).unwrap()
            )
        })
        .collect();

    let config_json = format!(
        r#"{{ "template": {}, "articles": [{}] }}"#,
        serde_json::to_string(&dir.path().join("template.html")).unwrap(),
        entries.join(", ")
    );
    let config_path = dir.path().join("blog.json");
    fs::write(&config_path, config_json).unwrap();
    (dir, config_path)
}

fn run(config_path: &Path) -> Result<(), CompileError> {
    let config = config::load(config_path)?;
    compile::compile(&config)
}

#[test]
fn n_articles_produce_n_output_files() {
    let (dir, config_path) = setup_blog(&[
        ("one.md", "# One", "First", "2024-01-01"),
        ("two.md", "# Two", "Second", "2024-01-02"),
        ("three.md", "# Three", "Third", "2024-01-03"),
    ]);
    run(&config_path).unwrap();

    let html_files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .collect();
    // template.html plus one output per article
    assert_eq!(html_files.len(), 4);
    for name in ["one.html", "two.html", "three.html"] {
        assert!(dir.path().join(name).exists(), "{name} missing");
    }
}

#[test]
fn output_contains_title_date_and_rendered_markdown() {
    let (dir, config_path) = setup_blog(&[("a.md", "hi", "T", "2024-01-01")]);
    run(&config_path).unwrap();

    let page = fs::read_to_string(dir.path().join("a.html")).unwrap();
    assert!(page.contains("T"), "title missing: {page}");
    assert!(page.contains("2024-01-01"), "date missing: {page}");
    assert!(page.contains("<p>hi</p>"), "rendered markdown missing: {page}");
}

#[test]
fn markdown_heading_is_embedded_unescaped() {
    let (dir, config_path) = setup_blog(&[("a.md", "# Hello", "T", "2024-01-01")]);
    run(&config_path).unwrap();

    let page = fs::read_to_string(dir.path().join("a.html")).unwrap();
    assert!(page.contains("<h1>Hello</h1>"), "fragment escaped or missing: {page}");
    assert!(!page.contains("&lt;h1&gt;"), "fragment was HTML-escaped: {page}");
}

#[test]
fn two_runs_produce_byte_identical_output() {
    let (dir, config_path) = setup_blog(&[
        ("a.md", "# A\n\nbody *text*", "A", "2024-01-01"),
        ("b.md", "plain", "B", "2024-02-01"),
    ]);

    run(&config_path).unwrap();
    let first_a = fs::read(dir.path().join("a.html")).unwrap();
    let first_b = fs::read(dir.path().join("b.html")).unwrap();

    run(&config_path).unwrap();
    assert_eq!(fs::read(dir.path().join("a.html")).unwrap(), first_a);
    assert_eq!(fs::read(dir.path().join("b.html")).unwrap(), first_b);
}

#[test]
fn missing_config_file_fails_without_writing_anything() {
    let dir = TempDir::new().unwrap();
    let err = run(&dir.path().join("no-such.json")).unwrap_err();
    assert!(matches!(err, CompileError::Io(_)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failure_at_article_n_keeps_outputs_before_n() {
    let (dir, config_path) = setup_blog(&[
        ("a.md", "# A", "A", "2024-01-01"),
        ("b.md", "# B", "B", "2024-01-02"),
        ("c.md", "# C", "C", "2024-01-03"),
    ]);
    fs::remove_file(dir.path().join("b.md")).unwrap();

    let err = run(&config_path).unwrap_err();
    assert!(matches!(err, CompileError::Io(_)));
    assert!(dir.path().join("a.html").exists());
    assert!(!dir.path().join("b.html").exists());
    assert!(!dir.path().join("c.html").exists());
}

#[test]
fn sources_in_nested_directories_compile_in_place() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("posts")).unwrap();
    fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();
    let source = dir.path().join("posts/hello.md");
    fs::write(&source, "# Hello").unwrap();

    let config_json = format!(
        r#"{{ "template": {}, "articles": [ {{ "source": {}, "title": "Hello", "publishedAt": "2024-01-01" }} ] }}"#,
        serde_json::to_string(&dir.path().join("template.html")).unwrap(),
        serde_json::to_string(&source).unwrap()
    );
    let config_path = dir.path().join("blog.json");
    fs::write(&config_path, config_json).unwrap();

    run(&config_path).unwrap();
    assert!(dir.path().join("posts/hello.html").exists());
}
