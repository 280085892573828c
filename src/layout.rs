//! Pure layout calculations for gallery grids.
//!
//! Masonry-style galleries render posts at their native aspect ratio, so a
//! naive round-robin split produces columns of wildly different heights. The
//! balancer here assigns each post to whichever column is currently shortest,
//! which keeps column bottoms roughly level without reordering posts.
//!
//! All functions are pure and testable without any I/O.

use crate::content::Post;
use std::borrow::Borrow;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A zero column count is a caller bug, not bad content — fail fast.
    #[error("column count must be at least 1, got {0}")]
    InvalidColumnCount(usize),
}

/// Stock aspect ratio assumed when a post's representative image is missing
/// or has unknown dimensions. Square is a neutral guess for photography;
/// override via `layout.default_aspect_ratio` in `config.toml`.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Aspect ratio (width/height) of a post's first image, with a fallback for
/// missing assets or unknown dimensions.
pub fn aspect_ratio_or(post: &Post, fallback: f64) -> f64 {
    match post.images.first() {
        Some(img) if img.width > 0 && img.height > 0 => img.width as f64 / img.height as f64,
        _ => fallback,
    }
}

/// Aspect ratio of a post's first image, defaulting to square.
pub fn aspect_ratio(post: &Post) -> f64 {
    aspect_ratio_or(post, DEFAULT_ASPECT_RATIO)
}

/// Distribute posts into `column_count` columns, balancing total rendered
/// height.
///
/// Each post's height contribution is the reciprocal of its aspect ratio
/// (taller image = bigger value) at equal column width. Posts are assigned
/// greedily in input order to the currently-shortest column; ties go to the
/// lowest-index column, so equal-height posts alternate left, right, …
///
/// Every input post appears in exactly one column and relative order within
/// a column matches the input. Input order is the only sequencing signal —
/// sort before calling if a different order is wanted.
pub fn balance_columns<P: Borrow<Post>>(
    posts: &[P],
    column_count: usize,
) -> Result<Vec<Vec<&Post>>, LayoutError> {
    balance_columns_with(posts, column_count, DEFAULT_ASPECT_RATIO)
}

/// [`balance_columns`] with an explicit fallback aspect ratio for posts
/// whose dimensions are unknown.
pub fn balance_columns_with<P: Borrow<Post>>(
    posts: &[P],
    column_count: usize,
    fallback_ratio: f64,
) -> Result<Vec<Vec<&Post>>, LayoutError> {
    if column_count == 0 {
        return Err(LayoutError::InvalidColumnCount(column_count));
    }

    let mut columns: Vec<Vec<&Post>> = vec![Vec::new(); column_count];
    let mut heights = vec![0.0_f64; column_count];

    for post in posts {
        let post = post.borrow();
        let contribution = 1.0 / aspect_ratio_or(post, fallback_ratio);
        // Strict `<` keeps ties on the lowest-index column.
        let mut shortest = 0;
        for (i, h) in heights.iter().enumerate().skip(1) {
            if *h < heights[shortest] {
                shortest = i;
            }
        }
        columns[shortest].push(post);
        heights[shortest] += contribution;
    }

    Ok(columns)
}

/// Posts ordered by `updated_at` descending (latest first); posts without a
/// timestamp sort last, keeping their relative order.
///
/// Timestamps are the CMS's normalized UTC ISO-8601 strings, so a
/// lexicographic comparison orders them correctly.
pub fn latest_first(posts: &[Post]) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted
}
