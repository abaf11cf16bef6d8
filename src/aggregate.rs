use std::collections::HashMap;

use tracing::debug;

use crate::record::FacultyRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    /// The existing entry had no email and the candidate did; the candidate
    /// replaced it wholesale.
    Replaced,
    KeptExisting,
}

/// Records across all pages, at most one per exact name, in first-seen order.
#[derive(Debug, Default)]
pub struct Aggregate {
    records: Vec<FacultyRecord>,
    index: HashMap<String, usize>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: FacultyRecord) -> MergeOutcome {
        match self.index.get(&candidate.name) {
            None => {
                self.index.insert(candidate.name.clone(), self.records.len());
                self.records.push(candidate);
                MergeOutcome::Inserted
            }
            Some(&pos) => {
                let outcome = if !self.records[pos].has_email() && candidate.has_email() {
                    MergeOutcome::Replaced
                } else {
                    MergeOutcome::KeptExisting
                };
                debug!(
                    name = candidate.name.as_str(),
                    existing = self.records[pos].department.as_str(),
                    candidate = candidate.department.as_str(),
                    ?outcome,
                    "duplicate name"
                );
                if outcome == MergeOutcome::Replaced {
                    self.records[pos] = candidate;
                }
                outcome
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[FacultyRecord] {
        &self.records
    }
}

pub fn merge(mut aggregate: Aggregate, candidate: FacultyRecord) -> Aggregate {
    aggregate.insert(candidate);
    aggregate
}
