use std::sync::LazyLock;

use regex::Regex;

use super::extract::{clean_name, extract_email, is_absolute_http};
use crate::record::FacultyRecord;

const QUALIFICATION_PREFIXES: &[&str] = &["PhD", "MS", "MSc", "BSc", "Postdoc"];
const LABEL_PREFIXES: &[&str] = &[RESEARCH_LABEL, EMAIL_LABEL, "Academic"];

const RESEARCH_LABEL: &str = "Research Interests:";
const EMAIL_LABEL: &str = "E-mail:";
const PROFILES_LABEL: &str = "Academic and Research Profile:";

static QUALIFICATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(PhD|MS|MSc|BSc|Postdoc)\b").unwrap());

/// Text nodes joined with newlines, split back into trimmed, non-empty lines.
pub fn flatten_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|l| l.replace('\r', "").trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Which multi-line field the classifier is currently filling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Research,
    Email,
    Profiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Name,
    Qualification,
    ResearchHeader,
    ResearchContinuation,
    EmailHeader,
    EmailContinuation,
    ProfilesHeader,
    ProfileUrl,
}

/// Evaluated top to bottom; the first rule that accepts a line consumes it.
pub const RULES: [Rule; 8] = [
    Rule::Name,
    Rule::Qualification,
    Rule::ResearchHeader,
    Rule::ResearchContinuation,
    Rule::EmailHeader,
    Rule::EmailContinuation,
    Rule::ProfilesHeader,
    Rule::ProfileUrl,
];

fn starts_with_ci(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn starts_with_any(line: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| line.starts_with(p))
}

/// Lines that can never be a name.
pub fn is_reserved(line: &str) -> bool {
    QUALIFICATION_PREFIXES.iter().any(|p| starts_with_ci(line, p))
        || starts_with_any(line, LABEL_PREFIXES)
}

pub fn is_qualification(line: &str) -> bool {
    QUALIFICATION_RE.is_match(line)
}

/// Single-pass state machine that assigns each line of one container to a
/// record field.
#[derive(Debug)]
pub struct LineClassifier {
    section: Section,
    record: FacultyRecord,
}

impl LineClassifier {
    pub fn new(department: &str) -> Self {
        LineClassifier {
            section: Section::None,
            record: FacultyRecord::new(department),
        }
    }

    #[cfg(test)]
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn seeking_name(&self) -> bool {
        self.record.name.is_empty()
    }

    /// Feed one line. Returns the rule that consumed it, or `None` if dropped.
    pub fn feed(&mut self, line: &str) -> Option<Rule> {
        let rule = RULES.into_iter().find(|r| self.accepts(*r, line))?;
        self.apply(rule, line);
        Some(rule)
    }

    fn accepts(&self, rule: Rule, line: &str) -> bool {
        match rule {
            Rule::Name => self.seeking_name() && !is_reserved(line),
            Rule::Qualification => is_qualification(line),
            Rule::ResearchHeader => line.starts_with(RESEARCH_LABEL),
            Rule::ResearchContinuation => {
                self.section == Section::Research
                    && !starts_with_any(line, &[EMAIL_LABEL, "Academic", "http"])
            }
            Rule::EmailHeader => line.starts_with(EMAIL_LABEL),
            Rule::EmailContinuation => {
                self.section == Section::Email
                    && !self.record.has_email()
                    && !starts_with_any(line, &["Academic", "http"])
            }
            Rule::ProfilesHeader => line.starts_with(PROFILES_LABEL),
            Rule::ProfileUrl => is_absolute_http(line),
        }
    }

    fn apply(&mut self, rule: Rule, line: &str) {
        match rule {
            Rule::Name => self.record.name = clean_name(line),
            Rule::Qualification => self.record.qualifications.push(line.to_string()),
            Rule::ResearchHeader => {
                self.section = Section::Research;
                let rest = line[RESEARCH_LABEL.len()..].trim();
                if !rest.is_empty() {
                    self.record.research_interests = rest.to_string();
                }
            }
            Rule::ResearchContinuation => self.record.append_research(line),
            Rule::EmailHeader => {
                self.section = Section::Email;
                let rest = line[EMAIL_LABEL.len()..].trim();
                if !rest.is_empty() {
                    self.record.email = extract_email(rest);
                }
            }
            Rule::EmailContinuation => self.record.email = extract_email(line),
            Rule::ProfilesHeader => self.section = Section::Profiles,
            Rule::ProfileUrl => {
                self.record.push_profile(line);
            }
        }
    }

    pub fn into_record(self) -> FacultyRecord {
        self.record
    }
}

/// Run the classifier over every line and return the partially built record.
pub fn classify_lines<S: AsRef<str>>(lines: &[S], department: &str) -> FacultyRecord {
    let mut classifier = LineClassifier::new(department);
    for line in lines {
        classifier.feed(line.as_ref());
    }
    classifier.into_record()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_entry() {
        let lines = [
            "Dr. A B",
            "PhD Electrical Engineering",
            "Research Interests: Power Systems",
            "robotics",
            "E-mail: ab",
            "Academic and Research Profile:",
            "http://example.com/ab",
        ];
        let r = classify_lines(&lines, "fa-dee");
        assert_eq!(r.name, "Dr. A B");
        assert_eq!(r.qualifications, vec!["PhD Electrical Engineering"]);
        assert_eq!(r.research_interests, "Power Systems robotics");
        assert_eq!(r.email, "ab@pieas.edu.pk");
        assert_eq!(r.profiles, vec!["http://example.com/ab"]);
        assert_eq!(r.department, "fa-dee");
    }

    #[test]
    fn rule_trace() {
        let mut c = LineClassifier::new("fa-dee");
        assert_eq!(c.feed("Dr. A B, Professor"), Some(Rule::Name));
        assert_eq!(c.feed("MSc Physics, QAU"), Some(Rule::Qualification));
        assert_eq!(c.feed("Some stray line"), None);
        assert_eq!(c.feed("Research Interests:"), Some(Rule::ResearchHeader));
        assert_eq!(c.section(), Section::Research);
        assert_eq!(c.feed("Plasma physics"), Some(Rule::ResearchContinuation));
        assert_eq!(c.feed("E-mail:"), Some(Rule::EmailHeader));
        assert_eq!(c.section(), Section::Email);
        assert_eq!(c.feed("<img> ab"), Some(Rule::EmailContinuation));
        assert_eq!(c.feed("cd"), None);
        assert_eq!(c.feed("Academic and Research Profile:"), Some(Rule::ProfilesHeader));
        assert_eq!(c.section(), Section::Profiles);
        assert_eq!(c.feed("https://scholar.google.com/ab"), Some(Rule::ProfileUrl));
        assert_eq!(c.feed("Google Scholar"), None);

        let r = c.into_record();
        assert_eq!(r.name, "Dr. A B");
        assert_eq!(r.research_interests, "Plasma physics");
        assert_eq!(r.email, "ab@pieas.edu.pk");
    }

    #[test]
    fn all_reserved_lines_yield_no_name() {
        let lines = [
            "PhD Computer Science",
            "Research Interests: Vision",
            "E-mail: xy",
            "Academic and Research Profile:",
        ];
        let r = classify_lines(&lines, "fa-dcis");
        assert!(r.name.is_empty());
        assert_eq!(r.qualifications.len(), 1);
    }

    #[test]
    fn qualifications_before_name_are_kept() {
        let lines = ["Postdoc, MIT", "Dr. C D", "BSc (Hons) Mathematics"];
        let r = classify_lines(&lines, "fa-dpam");
        assert_eq!(r.name, "Dr. C D");
        assert_eq!(r.qualifications, vec!["Postdoc, MIT", "BSc (Hons) Mathematics"]);
    }

    #[test]
    fn qualification_match_is_case_insensitive_and_word_bounded() {
        assert!(is_qualification("phd Nuclear Engineering"));
        assert!(is_qualification("MSc Physics"));
        assert!(is_qualification("MS (Nuclear)"));
        assert!(!is_qualification("MSCS something"));
        assert!(!is_qualification("Phdx"));
    }

    #[test]
    fn name_gate_uses_reserved_prefixes() {
        assert!(is_reserved("PhD Physics"));
        assert!(is_reserved("msc Chemistry"));
        assert!(is_reserved("Academic and Research Profile:"));
        assert!(is_reserved("E-mail: x"));
        assert!(!is_reserved("Dr. Ejaz Ahmed"));
        assert!(!is_reserved("e-mail: x"));
    }

    #[test]
    fn ms_title_is_reserved_like_ms_degree() {
        assert!(is_reserved("Ms. Jane Doe"));
        let r = classify_lines(&["Ms. Jane Doe", "Dr. Real Name"], "fa-dms");
        assert_eq!(r.name, "Dr. Real Name");
        assert_eq!(r.qualifications, vec!["Ms. Jane Doe"]);
    }

    #[test]
    fn second_name_like_line_is_not_a_name() {
        let lines = ["Dr. E F", "Head, Laser Lab"];
        let r = classify_lines(&lines, "fa-dpam");
        assert_eq!(r.name, "Dr. E F");
        assert!(r.qualifications.is_empty());
    }

    #[test]
    fn research_stops_at_url_and_email() {
        let lines = [
            "Dr. G H",
            "Research Interests: Control",
            "http://lab.example.com",
            "Estimation",
        ];
        let r = classify_lines(&lines, "fa-dee");
        assert_eq!(r.research_interests, "Control Estimation");
        assert_eq!(r.profiles, vec!["http://lab.example.com"]);
    }

    #[test]
    fn email_kept_once() {
        let lines = ["Dr. I J", "E-mail: ij@pieas.edu.pk", "other"];
        let r = classify_lines(&lines, "fa-dme");
        assert_eq!(r.email, "ij@pieas.edu.pk");
    }

    #[test]
    fn duplicate_profile_lines_collapse() {
        let lines = ["Dr. K L", "http://a.example", "https://b.example", "http://a.example"];
        let r = classify_lines(&lines, "fa-dme");
        assert_eq!(r.profiles, vec!["http://a.example", "https://b.example"]);
    }

    #[test]
    fn flatten_drops_blank_and_carriage_returns() {
        let lines = flatten_lines("\n  Dr. A B \r\n\n\t\nPhD X\r\n  ");
        assert_eq!(lines, vec!["Dr. A B", "PhD X"]);
    }
}
