//! Shared test utilities for the stillfolio test suite.
//!
//! Builders for content-export values so tests don't repeat the full struct
//! literals, plus a canned export JSON used by loading and CLI tests.

use crate::content::{ContentExport, MediaAsset, Post};

/// A post with no images — layout code must fall back to the default ratio.
pub fn post(id: u64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        slug: None,
        description: None,
        images: Vec::new(),
        category: None,
        featured: None,
        order: None,
        location: None,
        year: None,
        updated_at: None,
    }
}

/// A post with a single representative image of the given pixel dimensions.
pub fn post_with_image(id: u64, title: &str, width: u32, height: u32) -> Post {
    let mut p = post(id, title);
    p.images.push(MediaAsset {
        id: id * 100,
        url: format!("/uploads/{id}.jpg"),
        alternative_text: None,
        caption: None,
        width,
        height,
    });
    p
}

/// A square-image post tagged with a category.
pub fn post_in_category(id: u64, title: &str, category: &str) -> Post {
    let mut p = post_with_image(id, title, 800, 800);
    p.category = Some(category.to_string());
    p
}

/// An export containing only the given posts.
pub fn export_with_posts(posts: Vec<Post>) -> ContentExport {
    ContentExport {
        posts,
        projects: Vec::new(),
        tutorials: Vec::new(),
        hero_image: None,
    }
}

/// A small but representative export JSON, in the shape the CMS emits.
///
/// Covers: posts with categories and locations, a portrait image, an asset
/// with unknown dimensions, a rich-text description with an unknown block,
/// and a tutorial with capitalized field names.
pub fn sample_export_json() -> &'static str {
    r##"{
  "heroImage": "/uploads/hero.jpg",
  "posts": [
    {
      "id": 1,
      "title": "Autumn Ceremony",
      "slug": "autumn-ceremony",
      "category": "Weddings",
      "location": "Dolomites",
      "updatedAt": "2026-04-02T09:30:00.000Z",
      "description": [
        {"type": "paragraph", "children": [
          {"type": "text", "text": "An "},
          {"type": "text", "text": "October", "bold": true},
          {"type": "text", "text": " wedding above the tree line."}
        ]},
        {"type": "hologram", "payload": "future block type"},
        {"type": "quote", "children": [{"type": "text", "text": "f/8 and be there"}]}
      ],
      "images": [
        {"id": 11, "url": "/uploads/ceremony.jpg", "alternativeText": "Vows at dusk", "caption": "Dusk, 2026", "width": 1200, "height": 1600},
        {"id": 12, "url": "/uploads/rings.jpg", "alternativeText": null, "caption": null}
      ]
    },
    {
      "id": 2,
      "title": "Ridge Line",
      "category": "Landscapes",
      "updatedAt": "2026-03-10T17:00:00.000Z",
      "images": [
        {"id": 21, "url": "/uploads/ridge.jpg", "width": 2000, "height": 1000}
      ]
    },
    {
      "id": 3,
      "title": "Undated Study",
      "images": []
    }
  ],
  "projects": [
    {
      "id": 7,
      "title": "Gallery Book",
      "slug": "gallery-book",
      "tags": "print, editorial",
      "images": [{"id": 71, "url": "/uploads/book.jpg", "width": 1400, "height": 1400}]
    }
  ],
  "tutorials": [
    {
      "id": 9,
      "Title": "Golden Hour Basics",
      "Excerpt": "Chasing light before it goes.",
      "ReadTime": "6 min",
      "Difficulty": "Beginner",
      "slug": "golden-hour-basics",
      "Content": [
        {"type": "heading", "level": 2, "children": [{"type": "text", "text": "Timing"}]},
        {"type": "list", "format": "unordered", "children": [
          {"type": "list-item", "children": [{"type": "text", "text": "arrive early"}]},
          {"type": "list-item", "children": [{"type": "text", "text": "stay late"}]}
        ]}
      ]
    }
  ]
}"##
}
