//! Rich content block types.
//!
//! A rich content body is an ordered sequence of blocks, each either a
//! text run or an embedded asset reference. Resolution returns a new
//! sequence rather than mutating in place, keeping the projector pure.

use serde::{Deserialize, Serialize};

use crate::content::AssetResolver;

/// One unit of a structured document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A plain text run. Passes through projection unchanged.
    Text { text: String },

    /// An embedded image. `src` is a relative path at rest and must never
    /// leak into a response unresolved.
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

/// Resolve every embedded asset path in a block sequence.
///
/// Text blocks pass through unchanged; image blocks get their `src`
/// rewritten through the resolver (idempotently, see
/// [`AssetResolver::resolve`]).
pub fn resolve_blocks(blocks: &[ContentBlock], resolver: &AssetResolver) -> Vec<ContentBlock> {
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Text { .. } => block.clone(),
            ContentBlock::Image { src, alt, caption } => ContentBlock::Image {
                src: resolver.resolve(src),
                alt: alt.clone(),
                caption: caption.clone(),
            },
        })
        .collect()
}
