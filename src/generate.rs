//! HTML site generation.
//!
//! Takes a loaded content export plus site config and renders the final
//! static site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): hero, height-balanced featured gallery,
//!   tutorials grid, call-to-action, footer
//! - **Portfolio pages** (`/portfolio.html`, `/portfolio/{category}.html`):
//!   square thumbnail grid, filterable by category via static tab links
//! - **Post pages** (`/post/{slug}.html`): full image set with captions and
//!   the rich-text description
//! - **Project pages** (`/projects.html`, `/project/{slug}.html`)
//! - **Tutorial pages** (`/tutorial/{slug}.html`): rich-text body with cover,
//!   read time and difficulty
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping — CMS
//! content is untrusted input and never lands in the page unescaped. The
//! stylesheet is embedded at compile time with color custom properties
//! injected from config; no JavaScript is emitted.
//!
//! Detail pages are independent of each other, so they render and write in
//! parallel with rayon.

use crate::blocks::render_blocks;
use crate::config::{self, SiteConfig};
use crate::content::{ContentExport, MediaAsset, Post, Project, Tutorial, resolve_media_url, slug_or_id};
use crate::layout::{self, LayoutError};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Portfolio categories, in tab display order. Posts may carry other
/// category strings; those appear under "All" but get no tab of their own.
pub const CATEGORIES: [&str; 4] = ["Weddings", "Portraits", "Landscapes", "Events"];

const CSS_STATIC: &str = include_str!("../static/style.css");

/// What kind of page a [`GeneratedPage`] record describes. Used by the CLI
/// output module to group the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Portfolio,
    Post,
    Project,
    Tutorial,
}

/// One page written to the output directory.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub kind: PageKind,
    pub title: String,
    pub file: String,
}

/// Everything the generate stage produced, for reporting.
#[derive(Debug)]
pub struct GenerateSummary {
    pub pages: Vec<GeneratedPage>,
}

impl GenerateSummary {
    pub fn count(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|p| p.kind == kind).count()
    }
}

/// Render the complete site into `output_dir`.
pub fn generate(
    export: &ContentExport,
    site: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let color_css = config::generate_color_css(&site.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;
    fs::create_dir_all(output_dir.join("portfolio"))?;
    fs::create_dir_all(output_dir.join("post"))?;
    fs::create_dir_all(output_dir.join("project"))?;
    fs::create_dir_all(output_dir.join("tutorial"))?;

    let mut pages = Vec::new();

    // Index page
    let index = render_index(export, site, &css)?;
    fs::write(output_dir.join("index.html"), index.into_string())?;
    pages.push(GeneratedPage {
        kind: PageKind::Index,
        title: "Home".to_string(),
        file: "index.html".to_string(),
    });

    // Portfolio: "All" plus one page per category that has posts
    let all = render_portfolio_page(&export.posts, None, site, &css);
    fs::write(output_dir.join("portfolio.html"), all.into_string())?;
    pages.push(GeneratedPage {
        kind: PageKind::Portfolio,
        title: "Portfolio".to_string(),
        file: "portfolio.html".to_string(),
    });
    for category in used_categories(&export.posts) {
        let page = render_portfolio_page(&export.posts, Some(category), site, &css);
        let file = format!("portfolio/{}.html", category_slug(category));
        fs::write(output_dir.join(&file), page.into_string())?;
        pages.push(GeneratedPage {
            kind: PageKind::Portfolio,
            title: format!("Portfolio — {}", category),
            file,
        });
    }

    // Projects listing. Always written: the header links it from every page.
    let listing = render_projects_page(&export.projects, site, &css);
    fs::write(output_dir.join("projects.html"), listing.into_string())?;
    pages.push(GeneratedPage {
        kind: PageKind::Project,
        title: "Projects".to_string(),
        file: "projects.html".to_string(),
    });

    // Detail pages are independent — render and write them in parallel.
    let post_pages: Result<Vec<GeneratedPage>, GenerateError> = export
        .posts
        .par_iter()
        .map(|post| {
            let file = format!("post/{}.html", slug_or_id(post.slug.as_deref(), post.id));
            let page = render_post_page(post, site, &css);
            fs::write(output_dir.join(&file), page.into_string())?;
            Ok(GeneratedPage {
                kind: PageKind::Post,
                title: post.title.clone(),
                file,
            })
        })
        .collect();
    pages.extend(post_pages?);

    let project_pages: Result<Vec<GeneratedPage>, GenerateError> = export
        .projects
        .par_iter()
        .map(|project| {
            let file = format!(
                "project/{}.html",
                slug_or_id(project.slug.as_deref(), project.id)
            );
            let page = render_project_page(project, site, &css);
            fs::write(output_dir.join(&file), page.into_string())?;
            Ok(GeneratedPage {
                kind: PageKind::Project,
                title: project.title.clone(),
                file,
            })
        })
        .collect();
    pages.extend(project_pages?);

    let tutorial_pages: Result<Vec<GeneratedPage>, GenerateError> = export
        .tutorials
        .par_iter()
        .map(|tutorial| {
            let file = format!(
                "tutorial/{}.html",
                slug_or_id(tutorial.slug.as_deref(), tutorial.id)
            );
            let page = render_tutorial_page(tutorial, site, &css);
            fs::write(output_dir.join(&file), page.into_string())?;
            Ok(GeneratedPage {
                kind: PageKind::Tutorial,
                title: tutorial.title.clone(),
                file,
            })
        })
        .collect();
    pages.extend(tutorial_pages?);

    Ok(GenerateSummary { pages })
}

/// Categories from [`CATEGORIES`] that at least one post uses, in tab order.
pub fn used_categories(posts: &[Post]) -> Vec<&'static str> {
    CATEGORIES
        .iter()
        .copied()
        .filter(|c| posts.iter().any(|p| p.category.as_deref() == Some(*c)))
        .collect()
}

fn category_slug(category: &str) -> String {
    category.to_lowercase().replace(' ', "-")
}

fn media_url(site: &SiteConfig, url: &str) -> String {
    resolve_media_url(&site.site.media_base_url, url)
}

fn asset_alt<'a>(asset: &'a MediaAsset, fallback: &'a str) -> &'a str {
    match asset.alternative_text.as_deref() {
        Some(alt) if !alt.is_empty() => alt,
        _ => fallback,
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the fixed site header with navigation.
///
/// `root` is the relative prefix back to the site root ("" for top-level
/// pages, "../" for pages in a subdirectory).
fn site_header(site: &SiteConfig, root: &str) -> Markup {
    html! {
        header.site-header {
            a.site-title href={ (root) "index.html" } { (site.site.title) }
            nav.site-nav {
                a href={ (root) "portfolio.html" } { "Portfolio" }
                a href={ (root) "index.html#tutorials" } { "Tutorials" }
                a href={ (root) "projects.html" } { "Projects" }
            }
        }
    }
}

fn site_footer(site: &SiteConfig) -> Markup {
    html! {
        footer.site-footer id="contact" {
            p { (site.site.title) }
            p.muted { "Built with stillfolio" }
        }
    }
}

/// Hero section: site title and tagline over the hero image, falling back to
/// the newest post's representative image when the CMS has no dedicated one.
fn hero(export: &ContentExport, site: &SiteConfig) -> Markup {
    let background = export
        .hero_image
        .as_deref()
        .or_else(|| {
            layout::latest_first(&export.posts)
                .first()
                .and_then(|p| p.images.first())
                .map(|img| img.url.as_str())
        })
        .map(|url| media_url(site, url));

    html! {
        section.hero {
            @if let Some(url) = background {
                img.hero-image src=(url) alt="";
            }
            div.hero-text {
                h1 { (site.site.title) }
                @if !site.site.tagline.is_empty() {
                    p.tagline { (site.site.tagline) }
                }
            }
        }
    }
}

/// A gallery card: image at native aspect ratio with title, location and
/// category below, linking to the post page.
fn gallery_card(post: &Post, site: &SiteConfig, root: &str) -> Markup {
    let thumb = post.images.first();
    let ratio = layout::aspect_ratio_or(post, site.layout.default_aspect_ratio);
    // Native-ratio box via the padding-bottom trick: height as % of width.
    let padding = format!("padding-bottom: {:.4}%;", 100.0 / ratio);
    let href = format!(
        "{}post/{}.html",
        root,
        slug_or_id(post.slug.as_deref(), post.id)
    );

    html! {
        div.gallery-card {
            a.gallery-frame href=(href) style=(padding) {
                @if let Some(img) = thumb {
                    img src=(media_url(site, &img.url)) alt=(asset_alt(img, &post.title)) loading="lazy";
                } @else {
                    span.placeholder { (post.title) }
                }
            }
            div.gallery-caption {
                div {
                    p.card-title { (post.title) }
                    @if let Some(location) = &post.location {
                        p.muted { (location) }
                    }
                }
                @if let Some(category) = &post.category {
                    p.muted.category { (category) }
                }
            }
        }
    }
}

/// Featured gallery: the most recently updated post full-width, the rest in
/// height-balanced columns.
fn featured_gallery(export: &ContentExport, site: &SiteConfig) -> Result<Markup, LayoutError> {
    let sorted = layout::latest_first(&export.posts);
    let Some((&feature, rest)) = sorted.split_first() else {
        return Ok(html! {
            section.empty-state {
                p.muted { "No posts yet. Add some in your CMS." }
            }
        });
    };

    let columns = layout::balance_columns_with(
        rest,
        site.layout.gallery_columns,
        site.layout.default_aspect_ratio,
    )?;

    Ok(html! {
        section.featured-gallery {
            div.feature {
                (gallery_card(feature, site, ""))
            }
            @if !rest.is_empty() {
                div.balanced-grid {
                    @for column in &columns {
                        div.gallery-column {
                            @for post in column.iter().copied() {
                                (gallery_card(post, site, ""))
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Tutorials grid section for the index page.
fn tutorials_grid(tutorials: &[Tutorial], site: &SiteConfig) -> Markup {
    html! {
        @if !tutorials.is_empty() {
            section.tutorials id="tutorials" {
                h2.section-label { "Tutorials" }
                div.tutorial-grid {
                    @for tutorial in tutorials {
                        (tutorial_card(tutorial, site))
                    }
                }
            }
        }
    }
}

fn tutorial_card(tutorial: &Tutorial, site: &SiteConfig) -> Markup {
    let href = format!(
        "tutorial/{}.html",
        slug_or_id(tutorial.slug.as_deref(), tutorial.id)
    );
    html! {
        article.tutorial-card {
            a href=(href) {
                @if let Some(cover) = &tutorial.cover_image {
                    div.tutorial-cover {
                        img src=(media_url(site, &cover.url)) alt=(asset_alt(cover, &tutorial.title)) loading="lazy";
                        @if let Some(difficulty) = &tutorial.difficulty {
                            span.badge { (difficulty) }
                        }
                    }
                }
                div.tutorial-body {
                    h3 { (tutorial.title) }
                    @if let Some(excerpt) = &tutorial.excerpt {
                        p.muted { (excerpt) }
                    }
                    @if let Some(read_time) = &tutorial.read_time {
                        p.muted.read-time { (read_time) }
                    }
                }
            }
        }
    }
}

fn call_to_action() -> Markup {
    html! {
        section.cta {
            h2 { "Ready to create something timeless?" }
            a.cta-button href="#contact" { "Book a Session" }
            a.cta-secondary href="portfolio.html" { "Explore Full Archive" }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index/home page.
fn render_index(
    export: &ContentExport,
    site: &SiteConfig,
    css: &str,
) -> Result<Markup, LayoutError> {
    let gallery = featured_gallery(export, site)?;
    let content = html! {
        (site_header(site, ""))
        (hero(export, site))
        main.index-page {
            (gallery)
            (tutorials_grid(&export.tutorials, site))
            (call_to_action())
        }
        (site_footer(site))
    };

    Ok(base_document(&site.site.title, css, content))
}

/// Renders a portfolio grid page, optionally filtered to one category.
///
/// The original single-page app filtered client-side; here each category is
/// its own page and the filter tabs are plain links between them.
fn render_portfolio_page(
    posts: &[Post],
    active: Option<&str>,
    site: &SiteConfig,
    css: &str,
) -> Markup {
    // Category pages live under portfolio/, the "All" page at the root.
    let root = if active.is_some() { "../" } else { "" };
    let filtered: Vec<&Post> = posts
        .iter()
        .filter(|p| active.is_none() || p.category.as_deref() == active)
        .collect();

    let tabs = html! {
        div.category-tabs {
            a class=[active.is_none().then_some("active")] href={ (root) "portfolio.html" } { "All" }
            @for category in used_categories(posts) {
                @let is_active = active == Some(category);
                a class=[is_active.then_some("active")]
                    href={ (root) "portfolio/" (category_slug(category)) ".html" } { (category) }
            }
        }
    };

    let content = html! {
        (site_header(site, root))
        main.portfolio-page {
            header.portfolio-header {
                h2.section-label { "Featured Portfolio" }
                (tabs)
            }
            @if filtered.is_empty() {
                p.empty-state.muted {
                    "No posts found for \u{201c}" (active.unwrap_or("All")) "\u{201d}."
                }
            } @else {
                div.square-grid {
                    @for post in filtered.iter().copied() {
                        (portfolio_cell(post, site, root))
                    }
                }
            }
        }
        (site_footer(site))
    };

    let title = match active {
        Some(category) => format!("{} — {}", category, site.site.title),
        None => format!("Portfolio — {}", site.site.title),
    };
    base_document(&title, css, content)
}

/// A square portfolio cell with the title/category overlay.
fn portfolio_cell(post: &Post, site: &SiteConfig, root: &str) -> Markup {
    let href = format!(
        "{}post/{}.html",
        root,
        slug_or_id(post.slug.as_deref(), post.id)
    );
    html! {
        a.portfolio-cell href=(href) {
            @if let Some(img) = post.images.first() {
                img src=(media_url(site, &img.url)) alt=(asset_alt(img, &post.title)) loading="lazy";
            } @else {
                span.placeholder { (post.title) }
            }
            div.cell-overlay {
                p.card-title { (post.title) }
                @if let Some(category) = &post.category {
                    p.muted { (category) }
                }
            }
        }
    }
}

/// Renders a post detail page: metadata, rich-text description, all images.
fn render_post_page(post: &Post, site: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(site, "../"))
        main.detail-page {
            header.detail-header {
                h1 { (post.title) }
                div.detail-meta {
                    @if let Some(location) = &post.location {
                        span.muted { (location) }
                    }
                    @if let Some(year) = &post.year {
                        span.muted { (year) }
                    }
                    @if let Some(category) = &post.category {
                        span.muted { (category) }
                    }
                }
            }
            @if let Some(description) = render_blocks(post.description.as_deref()) {
                (description)
            }
            div.image-stack {
                @for img in &post.images {
                    figure {
                        img src=(media_url(site, &img.url)) alt=(asset_alt(img, &post.title)) loading="lazy";
                        @if let Some(caption) = &img.caption {
                            figcaption.muted { (caption) }
                        }
                    }
                }
            }
        }
        (site_footer(site))
    };

    let title = format!("{} — {}", post.title, site.site.title);
    base_document(&title, css, content)
}

/// Renders the projects listing page.
fn render_projects_page(projects: &[Project], site: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(site, ""))
        main.portfolio-page {
            header.portfolio-header {
                h2.section-label { "Projects" }
            }
            @if projects.is_empty() {
                p.empty-state.muted { "No projects yet." }
            }
            div.square-grid {
                @for project in projects {
                    @let href = format!("project/{}.html", slug_or_id(project.slug.as_deref(), project.id));
                    a.portfolio-cell href=(href) {
                        @if let Some(img) = project.images.first() {
                            img src=(media_url(site, &img.url)) alt=(asset_alt(img, &project.title)) loading="lazy";
                        } @else {
                            span.placeholder { (project.title) }
                        }
                        div.cell-overlay {
                            p.card-title { (project.title) }
                            @if let Some(tags) = &project.tags {
                                p.muted { (tags) }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(site))
    };

    let title = format!("Projects — {}", site.site.title);
    base_document(&title, css, content)
}

/// Renders a project detail page.
fn render_project_page(project: &Project, site: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(site, "../"))
        main.detail-page {
            header.detail-header {
                h1 { (project.title) }
                @if let Some(tags) = &project.tags {
                    p.muted { (tags) }
                }
                @if let Some(url) = &project.url {
                    p {
                        a href=(url) target="_blank" rel="noopener noreferrer" { "Visit project" }
                    }
                }
            }
            @if let Some(description) = render_blocks(project.description.as_deref()) {
                (description)
            }
            div.image-stack {
                @for img in &project.images {
                    figure {
                        img src=(media_url(site, &img.url)) alt=(asset_alt(img, &project.title)) loading="lazy";
                        @if let Some(caption) = &img.caption {
                            figcaption.muted { (caption) }
                        }
                    }
                }
            }
        }
        (site_footer(site))
    };

    let title = format!("{} — {}", project.title, site.site.title);
    base_document(&title, css, content)
}

/// Renders a tutorial detail page with its rich-text body.
fn render_tutorial_page(tutorial: &Tutorial, site: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(site, "../"))
        main.detail-page {
            header.detail-header {
                h1 { (tutorial.title) }
                div.detail-meta {
                    @if let Some(difficulty) = &tutorial.difficulty {
                        span.badge { (difficulty) }
                    }
                    @if let Some(read_time) = &tutorial.read_time {
                        span.muted { (read_time) }
                    }
                }
            }
            @if let Some(cover) = &tutorial.cover_image {
                figure.tutorial-hero {
                    img src=(media_url(site, &cover.url)) alt=(asset_alt(cover, &tutorial.title));
                }
            }
            @if let Some(body) = render_blocks(tutorial.content.as_deref()) {
                (body)
            } @else if let Some(excerpt) = &tutorial.excerpt {
                p.muted { (excerpt) }
            }
        }
        (site_footer(site))
    };

    let title = format!("{} — {}", tutorial.title, site.site.title);
    base_document(&title, css, content)
}

// ============================================================================
// Tests
// ============================================================================
