//! # Stillfolio
//!
//! A static site generator for photography portfolios backed by a headless
//! CMS. The CMS is the data source: you dump its API responses to a JSON
//! content export, and stillfolio renders a complete static site from it —
//! no Node runtime, no client-side framework, no JavaScript in the output.
//!
//! # Architecture: Load → Render
//!
//! ```text
//! 1. Load      export.json  →  ContentExport   (posts, projects, tutorials)
//! 2. Render    export       →  dist/           (final HTML site)
//! ```
//!
//! Between the two sits a small pure core with the only non-trivial logic in
//! the crate:
//!
//! - [`layout`] — the greedy column balancer that keeps masonry-style gallery
//!   columns at roughly equal height without reordering posts.
//! - [`blocks`] — the recursive renderer that turns CMS rich-text block trees
//!   into markup.
//!
//! Both are pure functions over already-loaded data: no I/O, no state, safe
//! to call from any number of render passes at once. Everything around them
//! is presentational composition.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Content export loading and the shared data model |
//! | [`layout`] | Pure layout math: aspect ratios, balanced columns |
//! | [`blocks`] | Rich-text block tree → maud markup |
//! | [`generate`] | Renders the final HTML site with Maud |
//! | [`config`] | `config.toml` loading, validation, and CSS generation |
//! | [`output`] | CLI output formatting for check and build reports |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped — which
//! matters here, because every string in the page is CMS-authored content
//! from outside this binary's trust boundary.
//!
//! ## Tolerant Reader, Strict Owner
//!
//! The content export is read tolerantly: unknown rich-text node types
//! deserialize into an `Unknown` variant and render to nothing, because the
//! CMS schema evolves on its own schedule and a newer CMS must never break
//! an older generator. `config.toml` gets the opposite treatment — it is
//! written by the site owner, so unknown keys are an error (probably a typo).
//!
//! ## No Image Pipeline
//!
//! The CMS already hosts uploads and serves its own resized formats, so
//! stillfolio never touches pixels. It only needs dimensions, and only to
//! compute aspect ratios for the balanced gallery; assets with unknown
//! dimensions fall back to a configurable default ratio.

pub mod blocks;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
