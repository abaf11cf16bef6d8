use std::sync::LazyLock;

use regex::Regex;

// A stray tag and everything after it.
static TRAILING_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*<.*?>\s*.*$").unwrap());

/// One faculty member as read from a single container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultyRecord {
    pub name: String,
    pub qualifications: Vec<String>,
    pub research_interests: String,
    pub email: String,
    pub profiles: Vec<String>,
    pub department: String,
}

impl FacultyRecord {
    pub fn new(department: &str) -> Self {
        FacultyRecord {
            department: department.to_string(),
            ..Default::default()
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    /// Append a profile URL unless it is already present.
    pub fn push_profile(&mut self, url: &str) {
        if !self.profiles.iter().any(|p| p == url) {
            self.profiles.push(url.to_string());
        }
    }

    pub fn append_research(&mut self, text: &str) {
        if self.research_interests.is_empty() {
            self.research_interests = text.to_string();
        } else {
            self.research_interests.push(' ');
            self.research_interests.push_str(text);
        }
    }

    /// Cut research interests at the first embedded tag.
    pub fn strip_research_markup(&mut self) {
        if self.research_interests.is_empty() {
            return;
        }
        let cleaned = TRAILING_TAG_RE.replace(&self.research_interests, "");
        self.research_interests = cleaned.trim().to_string();
    }
}
