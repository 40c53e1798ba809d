use crate::patcher::common::replace_literal_all;
use crate::patcher::Patched;
use crate::payloads::{APP_FUNCTION_ANCHOR, DEV_ICONS_BLOCK, DEV_ICONS_MARKER};

/// Inserts the dev icon block in front of `function App() {`.
///
/// Skipped when the marker is already present, so repeated runs leave the
/// content as the first run produced it. Without the anchor nothing changes.
pub fn append_dev_icons(source: &str) -> String {
    patch_dev_icons(source).content
}

/// Same as [`append_dev_icons`], counting expanded anchors (zero once the marker is present).
pub(crate) fn patch_dev_icons(source: &str) -> Patched {
    if source.contains(DEV_ICONS_MARKER) {
        return Patched::untouched(source);
    }
    let patch = format!("{}\n{}", DEV_ICONS_BLOCK, APP_FUNCTION_ANCHOR);
    replace_literal_all(source, APP_FUNCTION_ANCHOR, &patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "function App() {\n  return null\n}\n";

    #[test]
    fn test_block_inserted_before_anchor() {
        let res = append_dev_icons(MINIMAL);
        assert_eq!(res, format!("{}\n{}", DEV_ICONS_BLOCK, MINIMAL));
        assert!(res.contains("\n\nfunction App() {\n  return null"));
    }

    #[test]
    fn test_second_run_is_identical() {
        let once = append_dev_icons(MINIMAL);
        let twice = append_dev_icons(&once);
        assert_eq!(once, twice);
        assert_eq!(patch_dev_icons(&once).matches, 0);
    }

    #[test]
    fn test_missing_anchor_leaves_content() {
        let code = "export default function Player() {}\n";
        assert_eq!(append_dev_icons(code), code);
        assert_eq!(patch_dev_icons(code).matches, 0);
    }

    #[test]
    fn test_marker_alone_blocks_insertion() {
        let code = "// ___DEV_ICONS___\nfunction App() {}\n";
        assert_eq!(append_dev_icons(code), code);
    }
}
