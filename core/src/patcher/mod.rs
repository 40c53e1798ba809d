#![deny(missing_docs)]

//! # Text Patching
//!
//! Anchor-based rewrites of the player's `App.tsx`. Every pass works on raw
//! text: an anchor that is not found turns the pass into a no-op.
//!
//! - **spacing**: Whitespace around `-` and `/` inside `className` values.
//! - **blocks**: Restoring the state hooks, footer buttons and icon import.
//! - **append**: Marker-guarded insertion of the dev icon block.

pub(crate) mod common;

/// `className` spacing normalization.
pub mod spacing;

/// Span and anchor restorations.
pub mod blocks;

/// Marker-guarded insertion.
pub mod append;

/// Output of one pass: the rewritten content and how many regions it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    /// The content after the pass.
    pub content: String,
    /// Regions rewritten; zero means `content` equals the input.
    pub matches: usize,
}

impl Patched {
    /// A result for a pass that found nothing to rewrite.
    pub fn untouched(source: &str) -> Self {
        Patched {
            content: source.to_string(),
            matches: 0,
        }
    }
}

pub use append::append_dev_icons;
pub use blocks::{restore_footer_buttons, restore_icon_import, restore_state_declarations};
pub use spacing::normalize_class_spacing;
