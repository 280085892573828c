//! Rich-text block rendering.
//!
//! CMS-authored post descriptions and tutorial bodies arrive as trees of
//! typed block nodes (the CMS blocks format) rather than markdown. This
//! module converts those trees to [maud](https://maud.lambda.xyz/) markup:
//! recursive descent over [`BlockNode`]/[`InlineNode`], with auto-escaping
//! for free since everything goes through `html!` interpolation.
//!
//! Content evolves independently of this binary, so unrecognized node types
//! are skipped rather than treated as errors — a newer CMS must never break
//! an older generator.

use crate::content::{BlockNode, InlineNode, ListFormat};
use maud::{Markup, html};

/// Render a sequence of blocks, or `None` when there is nothing to show.
///
/// Callers treat `None` as "no rich content", not an error — the section is
/// simply omitted from the page. Unknown blocks render to nothing; their
/// siblings keep rendering in order.
pub fn render_blocks(blocks: Option<&[BlockNode]>) -> Option<Markup> {
    let blocks = blocks?;
    if blocks.is_empty() {
        return None;
    }
    Some(html! {
        div.rich-text {
            @for block in blocks {
                @if let Some(rendered) = render_block(block) {
                    (rendered)
                }
            }
        }
    })
}

/// Render a single block, or `None` for unrecognized block types.
pub fn render_block(block: &BlockNode) -> Option<Markup> {
    match block {
        BlockNode::Paragraph { children } => Some(html! {
            p { (render_inline_seq(children)) }
        }),
        BlockNode::Heading { level, children } => {
            Some(render_heading(*level, render_inline_seq(children)))
        }
        BlockNode::List { format, children } => {
            let items = html! {
                @for item in children {
                    li { (render_inline_seq(&item.children)) }
                }
            };
            Some(match format {
                ListFormat::Ordered => html! { ol { (items) } },
                ListFormat::Unordered => html! { ul { (items) } },
            })
        }
        BlockNode::Quote { children } => Some(html! {
            blockquote { (render_inline_seq(children)) }
        }),
        BlockNode::Code { children } => Some(html! {
            pre { code { (render_inline_seq(children)) } }
        }),
        BlockNode::Unknown => None,
    }
}

/// Heading with its level clamped to the valid h1–h6 range.
fn render_heading(level: u8, inner: Markup) -> Markup {
    match level.clamp(1, 6) {
        1 => html! { h1 { (inner) } },
        2 => html! { h2 { (inner) } },
        3 => html! { h3 { (inner) } },
        4 => html! { h4 { (inner) } },
        5 => html! { h5 { (inner) } },
        _ => html! { h6 { (inner) } },
    }
}

fn render_inline_seq(nodes: &[InlineNode]) -> Markup {
    html! {
        @for node in nodes {
            (render_inline(node))
        }
    }
}

/// Render one inline node.
///
/// Links open in a new tab with `rel="noopener noreferrer"` — CMS content
/// may link anywhere, so the opener must be severed.
///
/// Style wrappers apply in a fixed order, bold innermost through code
/// outermost, so the same flags always serialize to the same markup:
/// bold+code is `<code><strong>…</strong></code>`, never the reverse.
pub fn render_inline(node: &InlineNode) -> Markup {
    match node {
        InlineNode::Link { url, children } => html! {
            a href=(url) target="_blank" rel="noopener noreferrer" {
                @for child in children {
                    (render_inline(child))
                }
            }
        },
        InlineNode::Text {
            text,
            bold,
            italic,
            underline,
            strikethrough,
            code,
        } => {
            let mut rendered = html! { (text) };
            if *bold {
                rendered = html! { strong { (rendered) } };
            }
            if *italic {
                rendered = html! { em { (rendered) } };
            }
            if *underline {
                rendered = html! { u { (rendered) } };
            }
            if *strikethrough {
                rendered = html! { s { (rendered) } };
            }
            if *code {
                rendered = html! { code { (rendered) } };
            }
            rendered
        }
        InlineNode::Unknown => html! {},
    }
}
