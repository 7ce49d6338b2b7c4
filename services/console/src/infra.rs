use aesthetic_ai::assessment::AssessmentCatalog;
use aesthetic_ai::config::AppConfig;
use aesthetic_ai::error::AppError;
use aesthetic_ai::intake::{SubjectImporter, SubjectRecord};
use aesthetic_ai::quiz::QuizCatalog;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// Resolves a catalog location: the CLI flag wins, then the configured env
/// path; neither present is a startup error, not a scoring one.
fn resolve_path(
    flag: Option<PathBuf>,
    configured: Option<&PathBuf>,
    what: &str,
    env_var: &str,
) -> Result<PathBuf, AppError> {
    flag.or_else(|| configured.cloned()).ok_or_else(|| {
        AppError::Io(Error::new(
            ErrorKind::NotFound,
            format!("no {what} given; pass --catalog or set {env_var}"),
        ))
    })
}

pub(crate) fn load_assessment_catalog(
    flag: Option<PathBuf>,
    config: &AppConfig,
) -> Result<AssessmentCatalog, AppError> {
    let path = resolve_path(
        flag,
        config.catalogs.assessment.as_ref(),
        "assessment catalog",
        "APP_ASSESSMENT_CATALOG",
    )?;
    Ok(AssessmentCatalog::from_path(path)?)
}

pub(crate) fn load_quiz_catalog(
    flag: Option<PathBuf>,
    config: &AppConfig,
) -> Result<QuizCatalog, AppError> {
    let path = resolve_path(
        flag,
        config.catalogs.quiz.as_ref(),
        "quiz catalog",
        "APP_QUIZ_CATALOG",
    )?;
    Ok(QuizCatalog::from_path(path)?)
}

pub(crate) fn load_subjects<P: AsRef<Path>>(path: P) -> Result<Vec<SubjectRecord>, AppError> {
    Ok(SubjectImporter::from_path(path)?)
}

/// Keeps every record, or only the named subject when a filter is given.
pub(crate) fn select_subjects(
    records: Vec<SubjectRecord>,
    subject: Option<&str>,
) -> Result<Vec<SubjectRecord>, AppError> {
    match subject {
        None => Ok(records),
        Some(wanted) => {
            let selected: Vec<SubjectRecord> = records
                .into_iter()
                .filter(|record| record.subject_id == wanted)
                .collect();
            if selected.is_empty() {
                Err(AppError::Io(Error::new(
                    ErrorKind::NotFound,
                    format!("subject '{wanted}' not present in the export"),
                )))
            } else {
                Ok(selected)
            }
        }
    }
}
