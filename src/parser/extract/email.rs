use std::sync::LazyLock;

use regex::Regex;

/// Domain appended to a bare username.
pub const DEFAULT_EMAIL_DOMAIN: &str = "pieas.edu.pk";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static FULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+").unwrap());
static USER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._-]+").unwrap());

/// Pull an address out of an `E-mail:` line.
///
/// Pages often render the domain as an image, leaving only the username as
/// text; a bare username is completed with [`DEFAULT_EMAIL_DOMAIN`].
pub fn extract_email(raw: &str) -> String {
    let text = TAG_RE.replace_all(raw, "");

    if let Some(m) = FULL_RE.find(&text) {
        return m.as_str().to_string();
    }
    match USER_RE.find(text.trim()) {
        Some(m) => format!("{}@{}", m.as_str(), DEFAULT_EMAIL_DOMAIN),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_address_inside_text() {
        assert_eq!(
            extract_email("Contact: jane.doe@pieas.edu.pk for info"),
            "jane.doe@pieas.edu.pk"
        );
    }

    #[test]
    fn first_full_match_wins() {
        assert_eq!(extract_email("a@x.org, b@y.org"), "a@x.org");
    }

    #[test]
    fn bare_username_gets_default_domain() {
        assert_eq!(extract_email("jsmith"), "jsmith@pieas.edu.pk");
    }

    #[test]
    fn tags_stripped_before_matching() {
        assert_eq!(
            extract_email("<img src=x> jsmith (at) pieas"),
            "jsmith@pieas.edu.pk"
        );
        assert_eq!(
            extract_email("<span>ali.khan</span><img src=\"at.png\">"),
            "ali.khan@pieas.edu.pk"
        );
    }

    #[test]
    fn nothing_usable() {
        assert_eq!(extract_email(""), "");
        assert_eq!(extract_email("<img src=x>"), "");
        assert_eq!(extract_email("  @ ()  "), "");
    }
}
