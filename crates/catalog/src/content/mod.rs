//! Rich content blocks and asset resolution.

pub mod assets;
pub mod blocks;

pub use assets::AssetResolver;
pub use blocks::{ContentBlock, resolve_blocks};
