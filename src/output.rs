//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity (title, category, page path), with counts as
//! secondary context. Each command has a `format_*` function that returns
//! `Vec<String>` for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.
//!
//! ## Check
//!
//! ```text
//! Posts: 3
//!     Weddings: 1
//!     Landscapes: 1
//!     (uncategorized): 1
//! Projects: 1
//! Tutorials: 1
//! Assets without dimensions: 1
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Portfolio → portfolio.html
//! Portfolio — Weddings → portfolio/weddings.html
//! ...
//! Generated 1 index, 3 portfolio, 3 post, 1 project, 1 tutorial pages
//! ```

use crate::content::ContentExport;
use crate::generate::{GenerateSummary, PageKind};

/// Format the `check` report for a loaded export.
pub fn format_check_output(export: &ContentExport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Posts: {}", export.posts.len()));
    // Per-category tallies in first-seen order, uncategorized last.
    let mut categories: Vec<(&str, usize)> = Vec::new();
    let mut uncategorized = 0usize;
    for post in &export.posts {
        match post.category.as_deref() {
            Some(category) => match categories.iter_mut().find(|(c, _)| *c == category) {
                Some((_, n)) => *n += 1,
                None => categories.push((category, 1)),
            },
            None => uncategorized += 1,
        }
    }
    for (category, n) in categories {
        lines.push(format!("    {}: {}", category, n));
    }
    if uncategorized > 0 {
        lines.push(format!("    (uncategorized): {}", uncategorized));
    }

    lines.push(format!("Projects: {}", export.projects.len()));
    lines.push(format!("Tutorials: {}", export.tutorials.len()));

    let unsized_assets = count_unsized_assets(export);
    if unsized_assets > 0 {
        lines.push(format!("Assets without dimensions: {}", unsized_assets));
    }

    lines
}

/// Assets whose width or height the CMS didn't record. These fall back to
/// the default aspect ratio in gallery layout, so the tally is worth
/// surfacing at check time.
fn count_unsized_assets(export: &ContentExport) -> usize {
    let post_assets = export.posts.iter().flat_map(|p| p.images.iter());
    let project_assets = export.projects.iter().flat_map(|p| p.images.iter());
    let covers = export.tutorials.iter().filter_map(|t| t.cover_image.as_ref());
    post_assets
        .chain(project_assets)
        .chain(covers)
        .filter(|a| a.width == 0 || a.height == 0)
        .count()
}

/// Format the `build` report: page → file lines plus a totals line.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &summary.pages {
        lines.push(format!("{} → {}", page.title, page.file));
    }
    lines.push(format!(
        "Generated {} index, {} portfolio, {} post, {} project, {} tutorial pages",
        summary.count(PageKind::Index),
        summary.count(PageKind::Portfolio),
        summary.count(PageKind::Post),
        summary.count(PageKind::Project),
        summary.count(PageKind::Tutorial),
    ));
    lines
}

pub fn print_check_output(export: &ContentExport) {
    for line in format_check_output(export) {
        println!("{}", line);
    }
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}
