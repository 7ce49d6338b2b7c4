use super::{SubjectImportError, SubjectRecord};
use crate::assessment::DetectedFindings;
use crate::quiz::AnswerSet;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct SubjectRow {
    #[serde(rename = "Subject Id")]
    subject_id: String,
    #[serde(rename = "Detected Findings", default)]
    detected_findings: String,
    #[serde(rename = "Interest Areas", default)]
    interest_areas: String,
    #[serde(rename = "Quiz Answers", default)]
    quiz_answers: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<SubjectRecord>, SubjectImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<SubjectRow>() {
        let row = row?;
        let answers = parse_answers(&row.quiz_answers, &row.subject_id)?;

        records.push(SubjectRecord {
            detected: DetectedFindings::from_labels(split_list(&row.detected_findings)),
            interest_areas: split_interests(&row.interest_areas),
            answers,
            subject_id: row.subject_id,
        });
    }

    Ok(records)
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn split_interests(raw: &str) -> BTreeSet<String> {
    split_list(raw)
        .into_iter()
        .map(|part| part.to_lowercase())
        .collect()
}

/// Parses `question=index` pairs separated by `;`. A non-numeric index is a
/// boundary validation failure here; scoring never sees it.
fn parse_answers(raw: &str, subject: &str) -> Result<AnswerSet, SubjectImportError> {
    let mut answers = AnswerSet::new();

    for entry in raw.split(';').map(str::trim).filter(|part| !part.is_empty()) {
        let parsed = entry.split_once('=').and_then(|(question, index)| {
            let question = question.trim();
            let index = index.trim().parse::<usize>().ok()?;
            if question.is_empty() {
                return None;
            }
            Some((question.to_string(), index))
        });

        match parsed {
            Some((question, index)) => {
                answers.insert(question, index);
            }
            None => {
                return Err(SubjectImportError::Answer {
                    subject: subject.to_string(),
                    entry: entry.to_string(),
                })
            }
        }
    }

    Ok(answers)
}
