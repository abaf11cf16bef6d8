pub mod containers;
pub mod extract;
pub mod lines;

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::record::FacultyRecord;
use containers::{content_table, joined_text, note_containers};
use extract::hyperlinks;
use lines::{classify_lines, flatten_lines};

/// What one page contributed.
#[derive(Debug, Default)]
pub struct PageOutcome {
    pub records: Vec<FacultyRecord>,
    pub containers: usize,
    pub skipped: usize,
    pub unnamed: usize,
}

/// Turn one content table into a record, or `None` if no name line was found.
pub fn normalize(table: ElementRef<'_>, department: &str) -> Option<FacultyRecord> {
    let lines = flatten_lines(&joined_text(table));
    let mut record = classify_lines(&lines, department);

    for href in hyperlinks(table) {
        record.push_profile(&href);
    }
    record.strip_research_markup();

    if record.name.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Parse a department page and normalize every faculty container on it.
/// Broken containers are logged and skipped.
pub fn process_page(html: &str, url: &str, department: &str) -> PageOutcome {
    let doc = Html::parse_document(html);
    let notes = note_containers(&doc);
    let mut outcome = PageOutcome {
        containers: notes.len(),
        ..Default::default()
    };

    for (idx, note) in notes.into_iter().enumerate() {
        let table = match content_table(note) {
            Ok(t) => t,
            Err(e) => {
                warn!(url, container = idx, "Skipping container: {}", e);
                outcome.skipped += 1;
                continue;
            }
        };
        match normalize(table, department) {
            Some(record) => outcome.records.push(record),
            None => {
                debug!(url, container = idx, "no name line, container discarded");
                outcome.unnamed += 1;
            }
        }
    }
    outcome
}
