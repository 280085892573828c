//! End-to-end build: fixture export → full site on disk.
//!
//! Exercises the same path as `stillfolio build` minus the CLI parsing:
//! load the export, render every page, and assert on the written HTML.

use std::path::Path;

use stillfolio::config::SiteConfig;
use stillfolio::content;
use stillfolio::generate::{self, PageKind};
use tempfile::TempDir;

fn fixture_export() -> content::ContentExport {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/export.json");
    content::load_export(&path).unwrap()
}

fn test_config() -> SiteConfig {
    let mut site = SiteConfig::default();
    site.site.title = "Mara Voss".to_string();
    site.site.tagline = "Weddings, portraits and landscapes".to_string();
    site.site.media_base_url = "https://cms.maravoss.test".to_string();
    site
}

fn build_site() -> (TempDir, generate::GenerateSummary) {
    let tmp = TempDir::new().unwrap();
    let export = fixture_export();
    let summary = generate::generate(&export, &test_config(), tmp.path()).unwrap();
    (tmp, summary)
}

fn read(tmp: &TempDir, rel: &str) -> String {
    std::fs::read_to_string(tmp.path().join(rel)).unwrap()
}

#[test]
fn builds_every_expected_page() {
    let (tmp, summary) = build_site();

    for file in [
        "index.html",
        "portfolio.html",
        "portfolio/weddings.html",
        "portfolio/landscapes.html",
        "portfolio/events.html",
        "projects.html",
        "post/autumn-ceremony.html",
        "post/2.html",
        "post/3.html",
        "post/4.html",
        "project/gallery-book.html",
        "tutorial/golden-hour-basics.html",
    ] {
        assert!(tmp.path().join(file).exists(), "missing {file}");
    }

    assert_eq!(summary.count(PageKind::Index), 1);
    // "All" page plus three category pages
    assert_eq!(summary.count(PageKind::Portfolio), 4);
    assert_eq!(summary.count(PageKind::Post), 4);
    // Listing page plus one detail page
    assert_eq!(summary.count(PageKind::Project), 2);
    assert_eq!(summary.count(PageKind::Tutorial), 1);
}

#[test]
fn index_has_hero_and_balanced_gallery() {
    let (tmp, _) = build_site();
    let index = read(&tmp, "index.html");

    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains("Mara Voss"));
    assert!(index.contains("Weddings, portraits and landscapes"));
    // Dedicated hero image, resolved against the media base URL
    assert!(index.contains("https://cms.maravoss.test/uploads/hero.jpg"));
    assert!(index.contains("balanced-grid"));
    // The most recently updated post is the full-width feature
    let feature = index.find("Autumn Ceremony").unwrap();
    let grid = index.find("Ridge Line").unwrap();
    assert!(feature < grid);
}

#[test]
fn index_embeds_config_colors() {
    let (tmp, _) = build_site();
    let index = read(&tmp, "index.html");
    assert!(index.contains("--color-bg: #ffffff"));
    assert!(index.contains("prefers-color-scheme: dark"));
    // No script tags anywhere in the output
    assert!(!index.contains("<script"));
}

#[test]
fn category_page_filters_and_links_tabs() {
    let (tmp, _) = build_site();
    let weddings = read(&tmp, "portfolio/weddings.html");

    assert!(weddings.contains("Autumn Ceremony"));
    assert!(!weddings.contains("Ridge Line"));
    // Tabs link back up to the other pages
    assert!(weddings.contains("../portfolio.html"));
    assert!(weddings.contains("../portfolio/landscapes.html"));
}

#[test]
fn post_page_renders_rich_text_and_skips_unknown_block() {
    let (tmp, _) = build_site();
    let post = read(&tmp, "post/autumn-ceremony.html");

    // Paragraph with styled inline runs
    assert!(post.contains("<strong>October</strong>"));
    // Link with nested italic child and safe anchor attributes
    assert!(post.contains(
        "<a href=\"https://example.com/venue\" target=\"_blank\" rel=\"noopener noreferrer\"><em>the venue</em></a>"
    ));
    // Quote after the unknown block still renders
    assert!(post.contains("<blockquote>f/8 and be there</blockquote>"));
    // The unknown "hologram" block left no trace
    assert!(!post.contains("hologram"));
    assert!(!post.contains("future block type"));
    // Image captions
    assert!(post.contains("Dusk, 2026"));
}

#[test]
fn tutorial_page_renders_body_blocks() {
    let (tmp, _) = build_site();
    let tutorial = read(&tmp, "tutorial/golden-hour-basics.html");

    assert!(tutorial.contains("<h2>Timing</h2>"));
    assert!(tutorial.contains("<ul><li>arrive early</li><li>stay late</li></ul>"));
    assert!(tutorial.contains("<pre><code>exiftool -DateTimeOriginal photo.jpg</code></pre>"));
    assert!(tutorial.contains("Beginner"));
    assert!(tutorial.contains("6 min"));
}

#[test]
fn project_page_renders_external_link() {
    let (tmp, _) = build_site();
    let project = read(&tmp, "project/gallery-book.html");

    assert!(project.contains("Gallery Book"));
    assert!(project.contains("A season of work in print."));
    assert!(project.contains("https://example.com/book"));
    assert!(project.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn empty_export_still_builds_index() {
    let tmp = TempDir::new().unwrap();
    let export = content::ContentExport::default();
    let summary = generate::generate(&export, &test_config(), tmp.path()).unwrap();

    assert!(tmp.path().join("index.html").exists());
    let index = read(&tmp, "index.html");
    assert!(index.contains("No posts yet"));
    assert_eq!(summary.count(PageKind::Post), 0);

    // The header links projects.html from every page, so it must exist
    // even with no projects in the export.
    assert!(index.contains("href=\"projects.html\""));
    assert!(tmp.path().join("projects.html").exists());
    let projects = read(&tmp, "projects.html");
    assert!(projects.contains("No projects yet"));
}
