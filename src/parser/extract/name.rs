use std::sync::LazyLock;

use regex::Regex;

static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*").unwrap());
static ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i),\s*(Professor|Associate Professor|Assistant Professor|Head|Director|Coordinator|Pro-Rector|Lecturer|Manager|Warden).*$",
    )
    .unwrap()
});
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Za-z\s.\-]+?)(?:,|$)").unwrap());

/// Reduce a heading line like `Dr. A B, Professor (Head)` to the bare name.
///
/// Parenthesised text and a trailing `, <role> ...` clause are removed, then the
/// leading run of letters, spaces, periods and hyphens up to the first comma is
/// taken. Otherwise the text before the first comma is returned, trimmed.
pub fn clean_name(raw: &str) -> String {
    let text = PAREN_RE.replace_all(raw, "");
    let text = ROLE_RE.replace(&text, "");

    if let Some(caps) = NAME_RE.captures(text.trim()) {
        return caps[1].trim().to_string();
    }
    text.split(',').next().unwrap_or_default().trim().to_string()
}
