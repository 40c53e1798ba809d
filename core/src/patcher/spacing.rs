use crate::patcher::common::compiled;
use crate::patcher::Patched;
use crate::payloads::CLASS_ATTRIBUTE_PATTERN;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn class_attribute_re() -> &'static Regex {
    static CLASS_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&CLASS_RE, CLASS_ATTRIBUTE_PATTERN)
}

fn hyphen_re() -> &'static Regex {
    static HYPHEN_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&HYPHEN_RE, r"\s*-\s*")
}

fn slash_re() -> &'static Regex {
    static SLASH_RE: OnceLock<Regex> = OnceLock::new();
    compiled(&SLASH_RE, r"\s*/\s*")
}

/// Collapses whitespace around `-` and `/` inside every `className=` value.
///
/// The value may be a `"`, `'` or backtick literal, or a braced literal such
/// as ``{`...`}``. When collapsing changed a value, the padding just inside
/// its delimiters is trimmed too, so `className=" flex - col "` becomes
/// `className="flex-col"`. Values without broken spacing keep their padding,
/// and text outside the matched values is returned untouched.
pub fn normalize_class_spacing(source: &str) -> String {
    patch_class_spacing(source).content
}

/// Same as [`normalize_class_spacing`], counting the `className=` values visited.
pub(crate) fn patch_class_spacing(source: &str) -> Patched {
    let mut matches = 0;
    let content = class_attribute_re()
        .replace_all(source, |caps: &Captures| {
            matches += 1;
            format!("className={}", normalize_value(&caps[1]))
        })
        .into_owned();
    Patched { content, matches }
}

fn normalize_value(value: &str) -> String {
    // Delimiters are ASCII, so these offsets are char boundaries.
    let width = if value.starts_with('{') { 2 } else { 1 };
    let (open, rest) = value.split_at(width);
    let (inner, close) = rest.split_at(rest.len() - width);

    let collapsed = hyphen_re().replace_all(inner, "-");
    let collapsed = slash_re().replace_all(&collapsed, "/");

    if collapsed == inner {
        return value.to_string();
    }
    format!("{}{}{}", open, collapsed.trim(), close)
}
