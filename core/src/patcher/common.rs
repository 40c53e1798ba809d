use crate::patcher::Patched;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Compiles a constant pattern once and hands out the shared instance.
pub(crate) fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid regex constant"))
}

/// Replaces every occurrence of `re` with `payload`, taken literally, in one scan.
///
/// `$` in the payload is never treated as a group reference.
pub(crate) fn replace_pattern_all(source: &str, re: &Regex, payload: &str) -> Patched {
    let mut matches = 0;
    let content = re
        .replace_all(source, |_: &Captures| {
            matches += 1;
            payload
        })
        .into_owned();
    Patched { content, matches }
}

/// Replaces every occurrence of the literal `anchor` with `payload`.
pub(crate) fn replace_literal_all(source: &str, anchor: &str, payload: &str) -> Patched {
    let matches = if anchor.is_empty() {
        0
    } else {
        source.matches(anchor).count()
    };
    if matches == 0 {
        return Patched::untouched(source);
    }
    Patched {
        content: source.replace(anchor, payload),
        matches,
    }
}
