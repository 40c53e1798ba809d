#![deny(missing_docs)]

//! # Fixfmt Core
//!
//! One-shot text repair for the Lorapok player's `App.tsx`: collapses broken
//! spacing in `className` values, restores the state hooks, footer buttons
//! and icon import, and keeps the unused icons referenced.

/// Shared error types.
pub mod error;

/// Anchors and replacement blocks.
pub mod payloads;

/// The individual rewrite passes.
pub mod patcher;

/// Pass ordering, reporting, loading and writing.
pub mod pipeline;

pub use error::{AppError, AppResult};
pub use patcher::{
    append_dev_icons, normalize_class_spacing, Patched, restore_footer_buttons, restore_icon_import,
    restore_state_declarations,
};
pub use payloads::{CONFIRMATION, DEFAULT_TARGET};
pub use pipeline::{
    load, repair_file, repair_source, run_passes, write, PatchReport, Rewrite, Step, StepOutcome,
    WriteMode, PIPELINE,
};
