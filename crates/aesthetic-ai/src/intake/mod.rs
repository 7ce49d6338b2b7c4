//! Record-store export adapter: reduces loosely-shaped subject rows to the
//! plain inputs the scoring core accepts. Type and shape violations surface
//! here, never inside scoring logic.

mod parser;

use crate::assessment::DetectedFindings;
use crate::quiz::AnswerSet;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// One subject's inputs, ready for the engines.
#[derive(Debug, Clone)]
pub struct SubjectRecord {
    pub subject_id: String,
    pub detected: DetectedFindings,
    pub interest_areas: BTreeSet<String>,
    pub answers: AnswerSet,
}

#[derive(Debug)]
pub enum SubjectImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Answer { subject: String, entry: String },
}

impl std::fmt::Display for SubjectImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectImportError::Io(err) => write!(f, "failed to read subject export: {}", err),
            SubjectImportError::Csv(err) => write!(f, "invalid subject CSV data: {}", err),
            SubjectImportError::Answer { subject, entry } => write!(
                f,
                "subject '{}' has a malformed quiz answer entry '{}': expected question=index",
                subject, entry
            ),
        }
    }
}

impl std::error::Error for SubjectImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubjectImportError::Io(err) => Some(err),
            SubjectImportError::Csv(err) => Some(err),
            SubjectImportError::Answer { .. } => None,
        }
    }
}

impl From<std::io::Error> for SubjectImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SubjectImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct SubjectImporter;

impl SubjectImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SubjectRecord>, SubjectImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SubjectRecord>, SubjectImportError> {
        parser::parse_rows(reader)
    }
}
