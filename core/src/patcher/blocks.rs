use crate::patcher::common::{compiled, replace_literal_all, replace_pattern_all};
use crate::patcher::Patched;
use crate::payloads::{
    DEBUG_BUTTON_ANCHOR, FOOTER_BUTTONS, ICON_IMPORT, ICON_IMPORT_PATTERN, STATE_SECTION,
    STATE_SPAN_PATTERN,
};
use regex::Regex;
use std::sync::OnceLock;

fn state_span_re() -> &'static Regex {
    static STATE_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&STATE_RE, STATE_SPAN_PATTERN)
}

fn icon_import_re() -> &'static Regex {
    static IMPORT_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&IMPORT_RE, ICON_IMPORT_PATTERN)
}

/// Replaces the span from `const [isCastReady, setIsCastReady]` through the
/// nearest `setShowHelp(false)` with the five hook declarations.
///
/// Every such span is replaced. Without the anchors the source is returned as is.
pub fn restore_state_declarations(source: &str) -> String {
    patch_state(source).content
}

/// Puts the settings and equalizer buttons back in front of the debug toggle.
///
/// Each occurrence of the toggle opening is expanded. The payload ends with
/// that opening, so applying this twice adds the buttons twice.
pub fn restore_footer_buttons(source: &str) -> String {
    patch_footer(source).content
}

/// Rewrites a single-line `import { ... } from 'lucide-react'` to the full icon list.
///
/// An import broken over several lines does not match and is left alone.
pub fn restore_icon_import(source: &str) -> String {
    patch_icon_import(source).content
}

pub(crate) fn patch_state(source: &str) -> Patched {
    replace_pattern_all(source, state_span_re(), STATE_SECTION)
}

pub(crate) fn patch_footer(source: &str) -> Patched {
    replace_literal_all(source, DEBUG_BUTTON_ANCHOR, FOOTER_BUTTONS)
}

pub(crate) fn patch_icon_import(source: &str) -> Patched {
    replace_pattern_all(source, icon_import_re(), ICON_IMPORT)
}
