use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::record::FacultyRecord;

pub const LIST_SEPARATOR: &str = "; ";
pub const HEADER: [&str; 6] = [
    "name",
    "qualifications",
    "research_interests",
    "email",
    "profiles",
    "department",
];

/// Flat CSV row; list fields are joined with [`LIST_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRow {
    pub name: String,
    pub qualifications: String,
    pub research_interests: String,
    pub email: String,
    pub profiles: String,
    pub department: String,
}

impl From<&FacultyRecord> for FacultyRow {
    fn from(r: &FacultyRecord) -> Self {
        FacultyRow {
            name: r.name.clone(),
            qualifications: r.qualifications.join(LIST_SEPARATOR),
            research_interests: r.research_interests.clone(),
            email: r.email.clone(),
            profiles: r.profiles.join(LIST_SEPARATOR),
            department: r.department.clone(),
        }
    }
}

pub fn to_rows(records: &[FacultyRecord]) -> Vec<FacultyRow> {
    records.iter().map(FacultyRow::from).collect()
}

/// Write header plus one line per record. The header is written even when
/// there are no records.
pub fn write_csv<W: Write>(records: &[FacultyRecord], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    writer.write_record(HEADER)?;
    for row in to_rows(records) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Overwrite `path` with the CSV export.
pub fn export(records: &[FacultyRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(records, file).with_context(|| format!("Failed to write {}", path.display()))
}

const NAME_W: usize = 28;
const QUALS_W: usize = 32;
const RESEARCH_W: usize = 32;
const EMAIL_W: usize = 28;
const PROFILES_W: usize = 32;
const DEPT_W: usize = 8;

/// Aligned text dump of the whole table for stdout.
pub fn format_table(records: &[FacultyRecord]) -> String {
    if records.is_empty() {
        return "No faculty records found.".to_string();
    }

    let header = format!(
        "{:>3} | {:<NAME_W$} | {:<QUALS_W$} | {:<RESEARCH_W$} | {:<EMAIL_W$} | {:<PROFILES_W$} | {:<DEPT_W$}",
        "#", HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4], HEADER[5]
    );
    let rule = "-".repeat(header.chars().count());

    let body = to_rows(records)
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{:>3} | {:<NAME_W$} | {:<QUALS_W$} | {:<RESEARCH_W$} | {:<EMAIL_W$} | {:<PROFILES_W$} | {:<DEPT_W$}",
                i,
                truncate(&r.name, NAME_W),
                truncate(&r.qualifications, QUALS_W),
                truncate(&r.research_interests, RESEARCH_W),
                truncate(&r.email, EMAIL_W),
                truncate(&r.profiles, PROFILES_W),
                truncate(&r.department, DEPT_W),
            )
        })
        .join("\n");

    format!(
        "{}\n{}\n{}\n\n[{} rows x {} columns]",
        header,
        rule,
        body,
        records.len(),
        HEADER.len()
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
