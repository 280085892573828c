//! Content export loading and the shared data model.
//!
//! Stillfolio does not talk to the CMS directly. The content export is a JSON
//! document — the shape the headless CMS returns from its REST API, dumped to
//! disk by whatever fetch step the user runs (curl, a deploy hook, an export
//! script). This module deserializes that document into the types the rest of
//! the pipeline works with.
//!
//! ## Tolerance for evolving content
//!
//! The CMS schema evolves independently of this binary. Rich-text block and
//! inline nodes whose `type` tag is not recognized deserialize into an
//! `Unknown` variant instead of failing the whole load; the renderer skips
//! them. Unknown object keys are ignored everywhere except `config.toml`
//! (where typos should be caught).
//!
//! ## Media URLs
//!
//! The CMS serves uploads from its own host, so image URLs in the export are
//! usually root-relative (`/uploads/dawn.jpg`). [`resolve_media_url`] resolves
//! those against the configured media base URL; absolute URLs pass through.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single image resource as exported by the CMS media library.
///
/// `width`/`height` are pixel dimensions; 0 means the CMS didn't know them
/// (some upload paths skip probing). Layout code must treat 0 as "unknown"
/// and fall back to a default aspect ratio.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: u64,
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// A portfolio post: an ordered set of images plus display metadata.
///
/// The first image is the representative thumbnail used in grids.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<BlockNode>>,
    #[serde(default)]
    pub images: Vec<MediaAsset>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A client/personal project with a rich-text description and image set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<Vec<BlockNode>>,
    #[serde(default)]
    pub images: Vec<MediaAsset>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A written tutorial with a rich-text body.
///
/// Field names are capitalized in the export — this collection was modeled
/// by hand in the CMS admin rather than generated, and the casing stuck.
#[derive(Debug, Clone, Deserialize)]
pub struct Tutorial {
    pub id: u64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Excerpt", default)]
    pub excerpt: Option<String>,
    #[serde(rename = "ReadTime", default)]
    pub read_time: Option<String>,
    #[serde(rename = "CoverImage", default)]
    pub cover_image: Option<MediaAsset>,
    #[serde(rename = "Difficulty", default)]
    pub difficulty: Option<String>,
    #[serde(rename = "Content", default)]
    pub content: Option<Vec<BlockNode>>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// One node of a rich-text document tree.
///
/// Variants mirror the CMS blocks format. `Unknown` absorbs any block type
/// this binary doesn't know about yet; it renders to nothing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockNode {
    Paragraph {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    List {
        format: ListFormat,
        #[serde(default)]
        children: Vec<ListItem>,
    },
    Quote {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    Code {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    #[serde(other)]
    Unknown,
}

fn default_heading_level() -> u8 {
    1
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    Unordered,
}

/// One item of a [`BlockNode::List`]. The export tags these with
/// `"type": "list-item"`, which serde ignores as an unknown key.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListItem {
    #[serde(default)]
    pub children: Vec<InlineNode>,
}

/// Text or link content nested inside a block.
///
/// Style flags on `Text` are independent and combine freely. `Link` children
/// may be styled text but never further links — the CMS editor can't produce
/// nested anchors.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineNode {
    Text {
        #[serde(default)]
        text: String,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
        #[serde(default)]
        underline: bool,
        #[serde(default)]
        strikethrough: bool,
        #[serde(default)]
        code: bool,
    },
    Link {
        #[serde(default)]
        url: String,
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    #[serde(other)]
    Unknown,
}

impl InlineNode {
    /// Plain text with no style flags set.
    pub fn plain(text: impl Into<String>) -> Self {
        InlineNode::Text {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            code: false,
        }
    }
}

/// The top-level content export document.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentExport {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tutorials: Vec<Tutorial>,
    /// URL of the hero image shown on the landing page, if the CMS has one.
    #[serde(default)]
    pub hero_image: Option<String>,
}

/// Load and deserialize a content export from disk.
pub fn load_export(path: &Path) -> Result<ContentExport, ContentError> {
    let content = fs::read_to_string(path)?;
    let export: ContentExport = serde_json::from_str(&content)?;
    Ok(export)
}

/// Resolve a media URL from the export against the configured base URL.
///
/// Absolute URLs (`http…`, protocol-relative `//…`) pass through untouched.
pub fn resolve_media_url(base: &str, url: &str) -> String {
    if url.starts_with("http") || url.starts_with("//") {
        url.to_string()
    } else {
        format!("{}{}", base.trim_end_matches('/'), url)
    }
}

/// URL slug for a post/project/tutorial: explicit slug if present,
/// otherwise the numeric id.
pub fn slug_or_id(slug: Option<&str>, id: u64) -> String {
    match slug {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => id.to_string(),
    }
}
